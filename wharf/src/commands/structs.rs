use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use wharf_api::Api;
use wharf_codegen_go::structs::generate_structs;

use super::{UnwrapOrExit, emit, load_config};

#[derive(Args)]
pub struct StructsCommand {
    /// Path to the API description JSON
    #[arg(long)]
    pub api: PathBuf,

    /// Optional generation config (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl StructsCommand {
    pub fn run(&self) -> Result<()> {
        let config = load_config(&self.config)?;
        let api = Api::from_file(&self.api).unwrap_or_exit();

        emit(&generate_structs(&config, &api), &self.output)
    }
}
