//! Documentation-comment filtering.
//!
//! A single-pass, line-oriented filter over description prose: code
//! examples and usage sections are suppressed, cross-reference markup is
//! rewritten to call style, and the surviving lines come back trimmed and
//! ready to embed as Go comments. The filter never fails; unrecognized
//! markup passes through untouched.

use std::sync::LazyLock;

use regex::Regex;

/// `[`method: Page.goto`]` / `[`property: Request.url`]` → `Page.goto()`.
static CROSS_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[`(?:method|property): ([^`]+)`\]").unwrap());

/// Inherited-interface boilerplate lines.
static EXTENDS_NOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^- extends: .*\n?").unwrap());

/// Fence tags that open a suppressed example block.
const EXAMPLE_TAGS: &[&str] = &[
    "js",
    "ts",
    "javascript",
    "python",
    "py",
    "java",
    "csharp",
    "bash",
    "sh",
];

const USAGE_MARKER: &str = "**Usage**";
const DETAILS_MARKER: &str = "**Details**";
const DEPRECATED_PREFIX: &str = "Deprecated: ";

/// Clean documentation prose into comment-ready lines.
pub fn filter_comment(prose: &str) -> Vec<String> {
    let prose = CROSS_REF.replace_all(prose, "$1()");
    let prose = EXTENDS_NOTE.replace_all(&prose, "");

    let mut out = Vec::new();
    let mut in_usage = false;
    let mut in_example = false;
    for line in prose.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(tag) = line.strip_prefix("```") {
            if in_example {
                in_example = false;
            } else if EXAMPLE_TAGS.contains(&tag.trim()) {
                in_example = true;
            }
            // Fence lines are never emitted.
            continue;
        }
        if line == USAGE_MARKER {
            in_usage = true;
            continue;
        }
        if line == DETAILS_MARKER || line.starts_with(DEPRECATED_PREFIX) {
            in_usage = false;
        }
        if !in_usage && !in_example {
            out.push(line.to_string());
        }
    }
    out
}

/// Render filtered prose as `// ` comment lines at the given indent.
/// Empty when nothing survives the filter.
pub fn render_comment(prose: &str, indent: &str) -> String {
    let mut out = String::new();
    for line in filter_comment(prose) {
        out.push_str(indent);
        out.push_str("// ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}
