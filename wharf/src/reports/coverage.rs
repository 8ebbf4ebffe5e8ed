//! Coverage report rendering.

use wharf_codegen_go::Coverage;

use super::output::{Output, Report};

/// Report data from a coverage pass.
#[derive(Debug)]
pub struct CoverageReport {
    pub coverage: Coverage,
}

impl Report for CoverageReport {
    fn render(&self, out: &mut dyn Output) {
        // Complete coverage is silent; the exit status says everything.
        if self.coverage.is_complete() {
            return;
        }
        out.section("Missing API interface functions");
        for signature in &self.coverage.missing {
            out.checklist_item(signature);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Captured {
        lines: Vec<String>,
    }

    impl Output for Captured {
        fn section(&mut self, name: &str) {
            self.lines.push(format!("{}:", name));
        }

        fn checklist_item(&mut self, text: &str) {
            self.lines.push(format!("- [ ] {}", text));
        }

        fn added_item(&mut self, text: &str) {
            self.lines.push(format!("  + {}", text));
        }

        fn key_value(&mut self, key: &str, value: &str) {
            self.lines.push(format!("{}: {}", key, value));
        }
    }

    #[test]
    fn test_complete_coverage_renders_nothing() {
        let report = CoverageReport {
            coverage: Coverage {
                missing: vec![],
                expected: 12,
            },
        };
        let mut out = Captured::default();
        report.render(&mut out);
        assert!(out.lines.is_empty());
    }

    #[test]
    fn test_missing_signatures_render_as_checklist() {
        let report = CoverageReport {
            coverage: Coverage {
                missing: vec!["Page.Goto".to_string(), "Frame.Click".to_string()],
                expected: 12,
            },
        };
        let mut out = Captured::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            [
                "Missing API interface functions:",
                "- [ ] Page.Goto",
                "- [ ] Frame.Click",
            ]
        );
    }
}
