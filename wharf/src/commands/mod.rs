mod completions;
mod dump;
mod generate;
mod interfaces;
mod must;
mod structs;
mod validate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use dump::DumpCommand;
use eyre::Result;
use generate::GenerateCommand;
use interfaces::InterfacesCommand;
use must::MustCommand;
use structs::StructsCommand;
use validate::ValidateCommand;
use wharf_codegen_go::Config;

/// Extension trait for exiting on load errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for wharf_api::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Load generation settings, falling back to the stock defaults.
pub(crate) fn load_config(path: &Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path),
        None => Ok(Config::default()),
    }
}

/// Print generated text, or write it when an output path is given.
pub(crate) fn emit(text: &str, output: &Option<PathBuf>) -> Result<()> {
    match output {
        Some(path) => wharf_core::write_file(path, text),
        None => {
            print!("{}", text);
            Ok(())
        }
    }
}

#[derive(Parser)]
#[command(name = "wharf")]
#[command(version)]
#[command(about = "Generate Go driver bindings from a machine-readable API description")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Interfaces(cmd) => cmd.run(),
            Commands::Structs(cmd) => cmd.run(),
            Commands::Must(cmd) => cmd.run(),
            Commands::Generate(cmd) => cmd.run(),
            Commands::Validate(cmd) => cmd.run(),
            Commands::Dump(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Emit interface declarations from the signature table
    Interfaces(InterfacesCommand),

    /// Emit options structs from the API description
    Structs(StructsCommand),

    /// Emit panic-on-error Must wrappers from the signature table
    Must(MustCommand),

    /// Write all generated files into a directory
    Generate(GenerateCommand),

    /// Check declared coverage against the API description
    Validate(ValidateCommand),

    /// Parse an API description and re-emit it pretty-printed
    Dump(DumpCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
