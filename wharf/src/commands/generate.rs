use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use wharf_api::{Api, SignatureTable};
use wharf_codegen_go::Generator;

use super::{UnwrapOrExit, load_config};
use crate::reports::{GenerateReport, Report, TerminalOutput};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the API description JSON
    #[arg(long)]
    pub api: PathBuf,

    /// Path to the signature table JSON
    #[arg(long)]
    pub table: PathBuf,

    /// Optional generation config (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let config = load_config(&self.config)?;
        let api = Api::from_file(&self.api).unwrap_or_exit();
        let table = SignatureTable::from_file(&self.table).unwrap_or_exit();

        let generator = Generator::new(&config, &api, &table);
        let written = generator
            .write(&self.output)
            .wrap_err("failed to write generated files")?;

        let report = GenerateReport {
            classes: table.classes.len(),
            written,
        };
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
