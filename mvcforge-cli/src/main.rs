//! mvcforge CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::NewCommand;
use mvcforge_cli_lib::{Database, ModuleSystem};

#[derive(Parser)]
#[command(name = "mvcforge")]
#[command(version)]
#[command(about = "Scaffold a Node.js MVC backend project", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold the MVC folder layout and starter files into an existing directory
    New {
        /// Target project directory (must already exist)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Module system for generated sources; prompted when omitted
        #[arg(long, value_enum)]
        module_system: Option<ModuleSystem>,

        /// Database backend; prompted when omitted
        #[arg(long, value_enum)]
        database: Option<Database>,

        /// Database connection URL; prompted when a database is chosen and this is omitted
        #[arg(long)]
        url: Option<String>,

        /// PostgreSQL host written to the environment file; only meaningful with
        /// --database postgres
        #[arg(long)]
        pg_host: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::New {
            path,
            module_system,
            database,
            url,
            pg_host,
        } => {
            let cmd = NewCommand::new(path, module_system, database, url, pg_host);
            cmd.execute()?;
        }
    }

    Ok(())
}
