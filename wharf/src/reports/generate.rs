//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a full generation pass.
#[derive(Debug)]
pub struct GenerateReport {
    /// Number of classes in the signature table.
    pub classes: usize,
    /// Paths written, in emission order.
    pub written: Vec<PathBuf>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Classes", &self.classes.to_string());
        out.section("Generated");
        for path in &self.written {
            out.added_item(&path.display().to_string());
        }
    }
}
