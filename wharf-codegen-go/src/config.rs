//! Generation settings.
//!
//! The defaults carry the stock driver-binding lists; a TOML file can
//! override any subset of them.

use std::path::Path;

use eyre::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Go package clause for every emitted file.
    pub package: String,
    /// Language tag matched against `langs` restrictions and aliases.
    pub target: String,
    /// The handle reference type mapped to a nullable pointer.
    pub handle_type: String,
    /// `Class.method` pairs whose arguments are always spread into an
    /// options aggregate, even when declared as a single object.
    pub spread_methods: Vec<String>,
    /// Classes the coverage validator skips entirely.
    pub ignore_classes: Vec<String>,
    /// Class-name prefixes the coverage validator skips.
    pub ignore_prefixes: Vec<String>,
    /// Signatures intentionally absent from the signature table.
    pub allowed_missing: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            package: "playwright".to_string(),
            target: "go".to_string(),
            handle_type: "ElementHandle".to_string(),
            spread_methods: string_vec(&[
                "Page.addScriptTag",
                "Page.addStyleTag",
                "Frame.addScriptTag",
                "Frame.addStyleTag",
                "Page.emulateMedia",
            ]),
            ignore_classes: string_vec(&[
                "Android",
                "AndroidDevice",
                "AndroidInput",
                "AndroidWebView",
                "AndroidSocket",
                "Electron",
                "ElectronApplication",
                "Coverage",
                "Logger",
                "BrowserServer",
                "Accessibility",
                "TimeoutError",
                "Playwright",
                "RequestOptions",
                "WebSocketFrame",
                "FormData",
                "SnapshotAssertions",
                "GenericAssertions",
            ]),
            ignore_prefixes: string_vec(&["Chromium", "Firefox", "WebKit"]),
            allowed_missing: string_vec(&[
                "BrowserType.LaunchServer",
                "Download.CreateReadStream",
                "BrowserContext.SetHTTPCredentials",
                "Page.FrameByUrl",
            ]),
        }
    }
}

impl Config {
    /// Load settings from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read '{}'", path.display()))?;
        toml::from_str(&content)
            .wrap_err_with(|| format!("failed to parse '{}'", path.display()))
    }

    /// Whether the given method's arguments are always spread into an
    /// options aggregate.
    pub fn is_spread(&self, class: &str, method: &str) -> bool {
        self.spread_methods
            .iter()
            .any(|s| spread_matches(s, class, method))
    }

    /// Whether the coverage validator should look at the given class.
    pub fn should_validate(&self, class: &str) -> bool {
        !self.ignore_classes.iter().any(|c| c == class)
            && !self.ignore_prefixes.iter().any(|p| class.starts_with(p))
    }
}

fn spread_matches(entry: &str, class: &str, method: &str) -> bool {
    entry
        .split_once('.')
        .is_some_and(|(c, m)| c == class && m == method)
}

fn string_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
