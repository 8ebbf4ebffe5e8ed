use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use wharf_api::Api;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct DumpCommand {
    /// Path to the API description JSON, or '-' for stdin
    #[arg(long, default_value = "-")]
    pub api: PathBuf,

    /// Destination file
    #[arg(short, long, default_value = "api.json")]
    pub output: PathBuf,
}

impl DumpCommand {
    pub fn run(&self) -> Result<()> {
        let (content, filename) = self.read_input()?;

        // Parsing enforces the description invariants before anything is
        // written.
        let api = Api::from_str_with_filename(&content, &filename).unwrap_or_exit();

        let value: serde_json::Value =
            serde_json::from_str(&content).wrap_err("failed to re-read description")?;
        let pretty = format!("{}\n", serde_json::to_string_pretty(&value)?);
        wharf_core::write_file(&self.output, &pretty)?;

        println!(
            "Wrote {} ({} classes)",
            self.output.display(),
            api.classes.len()
        );
        Ok(())
    }

    fn read_input(&self) -> Result<(String, String)> {
        if self.api.as_os_str() == "-" {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .wrap_err("failed to read description from stdin")?;
            return Ok((content, "<stdin>".to_string()));
        }
        let content = std::fs::read_to_string(&self.api)
            .wrap_err_with(|| format!("failed to read '{}'", self.api.display()))?;
        Ok((content, self.api.display().to_string()))
    }
}
