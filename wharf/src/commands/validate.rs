use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use wharf_api::{Api, SignatureTable};
use wharf_codegen_go::validate;

use super::{UnwrapOrExit, load_config};
use crate::reports::{CoverageReport, Report, TerminalOutput};

#[derive(Args)]
pub struct ValidateCommand {
    /// Path to the API description JSON
    #[arg(long)]
    pub api: PathBuf,

    /// Path to the signature table JSON
    #[arg(long)]
    pub table: PathBuf,

    /// Optional generation config (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl ValidateCommand {
    pub fn run(&self) -> Result<()> {
        let config = load_config(&self.config)?;
        let api = Api::from_file(&self.api).unwrap_or_exit();
        let table = SignatureTable::from_file(&self.table).unwrap_or_exit();

        let coverage = validate(&config, &api, &table);
        let complete = coverage.is_complete();

        let report = CoverageReport { coverage };
        report.render(&mut TerminalOutput::new());

        if !complete {
            std::process::exit(1);
        }
        Ok(())
    }
}
