use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use wharf_api::SignatureTable;
use wharf_codegen_go::must::generate_must;

use super::{UnwrapOrExit, emit, load_config};

#[derive(Args)]
pub struct MustCommand {
    /// Path to the signature table JSON
    #[arg(long)]
    pub table: PathBuf,

    /// Optional generation config (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl MustCommand {
    pub fn run(&self) -> Result<()> {
        let config = load_config(&self.config)?;
        let table = SignatureTable::from_file(&self.table).unwrap_or_exit();

        emit(&generate_must(&config, &table), &self.output)
    }
}
