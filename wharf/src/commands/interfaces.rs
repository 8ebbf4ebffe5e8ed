use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use wharf_api::{Api, SignatureTable};
use wharf_codegen_go::interfaces::generate_interfaces;

use super::{UnwrapOrExit, emit, load_config};

#[derive(Args)]
pub struct InterfacesCommand {
    /// Path to the API description JSON
    #[arg(long)]
    pub api: PathBuf,

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

impl InterfacesCommand {
    pub fn run(&self) -> Result<()> {
        let config = load_config(&self.config)?;
        let api = Api::from_file(&self.api).unwrap_or_exit();
        let table = SignatureTable::from_file(&self.table).unwrap_or_exit();

        emit(&generate_interfaces(&config, &api, &table), &self.output)
    }
}
