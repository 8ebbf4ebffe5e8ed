//! Artifact assembly.

use std::path::{Path, PathBuf};

use eyre::Result;
use wharf_api::{Api, SignatureTable};
use wharf_core::SourceFile;

use crate::config::Config;
use crate::{interfaces, must, structs};

pub const INTERFACES_FILE: &str = "generated-interfaces.go";
pub const STRUCTS_FILE: &str = "generated-structs.go";
pub const MUST_FILE: &str = "generated-must-methods.go";

/// Assembles the generated Go artifacts for one description/table pair.
pub struct Generator<'a> {
    config: &'a Config,
    api: &'a Api,
    table: &'a SignatureTable,
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a Config, api: &'a Api, table: &'a SignatureTable) -> Self {
        Self { config, api, table }
    }

    pub fn interfaces(&self) -> String {
        interfaces::generate_interfaces(self.config, self.api, self.table)
    }

    pub fn structs(&self) -> String {
        structs::generate_structs(self.config, self.api)
    }

    pub fn must(&self) -> String {
        must::generate_must(self.config, self.table)
    }

    /// All artifacts as files, in stable order.
    pub fn preview(&self) -> Vec<SourceFile> {
        vec![
            SourceFile::new(INTERFACES_FILE, self.interfaces()),
            SourceFile::new(STRUCTS_FILE, self.structs()),
            SourceFile::new(MUST_FILE, self.must()),
        ]
    }

    /// Write all artifacts under `output`; returns the written paths.
    pub fn write(&self, output: &Path) -> Result<Vec<PathBuf>> {
        self.preview()
            .iter()
            .map(|file| file.write_to(output))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_is_deterministic() {
        let config = Config::default();
        let api: Api = r#"[ { "name": "Page", "members": [
            { "kind": "method", "name": "goto", "args": [
                { "name": "timeout", "required": false, "type": { "name": "int" } }
            ] }
        ] } ]"#
            .parse()
            .unwrap();
        let table: SignatureTable =
            r#"{ "Page": { "Goto": ["url string", "Response, error"] } }"#.parse().unwrap();

        let generator = Generator::new(&config, &api, &table);
        let first: Vec<String> = generator
            .preview()
            .into_iter()
            .map(|f| f.content().to_string())
            .collect();
        let second: Vec<String> = generator
            .preview()
            .into_iter()
            .map(|f| f.content().to_string())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_write_creates_all_files() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = Config::default();
        let api: Api = "[]".parse().unwrap();
        let table: SignatureTable = "{}".parse().unwrap();

        let generator = Generator::new(&config, &api, &table);
        let written = generator.write(temp.path()).unwrap();

        assert_eq!(written.len(), 3);
        for path in &written {
            assert!(path.exists());
        }
        assert!(temp.path().join(INTERFACES_FILE).exists());
        assert!(temp.path().join(STRUCTS_FILE).exists());
        assert!(temp.path().join(MUST_FILE).exists());
    }
}
