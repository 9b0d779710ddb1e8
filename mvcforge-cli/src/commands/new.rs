//! Project scaffolding command
//!
//! Thin adapter between the terminal and the scaffolding engine: collects the
//! configuration from flags or interactive prompts, then hands off to
//! [`scaffold`]. Cancelling any prompt aborts the whole operation silently,
//! before any filesystem work begins.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};

use mvcforge_cli_lib::scaffold::{scaffold, ArtifactStatus, ScaffoldConfig, ScaffoldResult};
use mvcforge_cli_lib::{Database, ModuleSystem, ScaffoldError};

const MODULE_SYSTEMS: [(ModuleSystem, &str); 2] = [
    (ModuleSystem::CommonJs, "CommonJS"),
    (ModuleSystem::Esm, "ESM (type=\"module\")"),
];

const DATABASES: [(Database, &str); 4] = [
    (Database::None, "None"),
    (Database::MongoDb, "MongoDB"),
    (Database::MySql, "MySQL"),
    (Database::Postgres, "PostgreSQL"),
];

/// Scaffold an MVC backend into an existing project directory
pub struct NewCommand {
    path: PathBuf,
    module_system: Option<ModuleSystem>,
    database: Option<Database>,
    url: Option<String>,
    pg_host: Option<String>,
}

impl NewCommand {
    /// Create a new command instance from the parsed arguments.
    pub const fn new(
        path: PathBuf,
        module_system: Option<ModuleSystem>,
        database: Option<Database>,
        url: Option<String>,
        pg_host: Option<String>,
    ) -> Self {
        Self {
            path,
            module_system,
            database,
            url,
            pg_host,
        }
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        if !self.path.is_dir() {
            return Err(ScaffoldError::MissingRoot(self.path.clone()).into());
        }

        let config = match self.collect_config() {
            Ok(config) => config,
            Err(error) => {
                // A dismissed prompt aborts silently, with zero side effects.
                return if matches!(
                    error.downcast_ref::<ScaffoldError>(),
                    Some(ScaffoldError::InputCancelled)
                ) {
                    Ok(())
                } else {
                    Err(error)
                };
            }
        };

        println!(
            "{} {} {}",
            style("Scaffolding").green().bold(),
            style("MVC backend in:").bold(),
            style(self.path.display()).cyan().bold()
        );
        println!();

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner.set_message("Creating MVC structure...");

        let result = scaffold(&self.path, &config)?;

        spinner.finish_and_clear();

        Self::print_summary(&result);
        Self::print_success();

        Ok(())
    }

    /// Resolve each configuration input from its flag, or prompt for it.
    ///
    /// Prompt order matches artifact dependencies: module system, database,
    /// then the connection parameters the chosen database needs.
    fn collect_config(&self) -> Result<ScaffoldConfig> {
        let theme = ColorfulTheme::default();

        let module_system = match self.module_system {
            Some(module_system) => module_system,
            None => prompt_module_system(&theme)?,
        };

        let database = match self.database {
            Some(database) => database,
            None => prompt_database(&theme)?,
        };

        let connection_url = if database == Database::None {
            None
        } else if let Some(url) = &self.url {
            Some(url.clone())
        } else {
            Some(prompt_connection_url(&theme, database)?)
        };

        let pg_host = if database == Database::Postgres {
            match &self.pg_host {
                Some(host) => Some(host.clone()),
                None => prompt_pg_host(&theme)?,
            }
        } else {
            None
        };

        Ok(ScaffoldConfig {
            module_system,
            database,
            connection_url,
            pg_host,
        })
    }

    /// Print per-artifact outcomes.
    fn print_summary(result: &ScaffoldResult) {
        if !result.folders_created.is_empty() {
            println!(
                "  {} created {} folders",
                style("✓").green(),
                result.folders_created.len()
            );
        }
        for artifact in &result.artifacts {
            match artifact.status {
                ArtifactStatus::Created => {
                    println!(
                        "  {} {}",
                        style("✓").green(),
                        artifact.relative_path.display()
                    );
                }
                ArtifactStatus::Skipped => {
                    println!(
                        "  {} {} {}",
                        style("-").dim(),
                        artifact.relative_path.display(),
                        style("(already present)").dim()
                    );
                }
            }
        }
        println!();
    }

    /// Print success message with next steps
    fn print_success() {
        println!("{}", style("✓ MVC backend scaffolded!").green().bold());
        println!();
        println!("{}", style("Next steps:").bold());
        println!();
        println!("  {} Install dependencies:", style("1.").cyan());
        println!("     {} {}", style("$").dim(), style("npm install").cyan());
        println!();
        println!("  {} Start the development server:", style("2.").cyan());
        println!("     {} {}", style("$").dim(), style("npm run dev").cyan());
        println!();
        println!("  {} Open in browser:", style("3.").cyan());
        println!(
            "     {}",
            style("http://localhost:3000").cyan().underlined()
        );
        println!();
    }
}

/// Prompt for the module system; Esc cancels.
fn prompt_module_system(theme: &ColorfulTheme) -> Result<ModuleSystem> {
    let labels: Vec<&str> = MODULE_SYSTEMS.iter().map(|(_, label)| *label).collect();
    let selection = Select::with_theme(theme)
        .with_prompt("Select your Node.js module system")
        .items(&labels)
        .default(0)
        .interact_opt()
        .context("module system prompt failed")?;
    let index = selection.ok_or(ScaffoldError::InputCancelled)?;
    Ok(MODULE_SYSTEMS[index].0)
}

/// Prompt for the database backend; Esc cancels.
fn prompt_database(theme: &ColorfulTheme) -> Result<Database> {
    let labels: Vec<&str> = DATABASES.iter().map(|(_, label)| *label).collect();
    let selection = Select::with_theme(theme)
        .with_prompt("Select a database for your project")
        .items(&labels)
        .default(0)
        .interact_opt()
        .context("database prompt failed")?;
    let index = selection.ok_or(ScaffoldError::InputCancelled)?;
    Ok(DATABASES[index].0)
}

/// Prompt for the connection URL; an empty answer cancels.
fn prompt_connection_url(theme: &ColorfulTheme, database: Database) -> Result<String> {
    let input: String = Input::with_theme(theme)
        .with_prompt(format!("Enter your {} connection URL", database.label()))
        .allow_empty(true)
        .interact_text()
        .context("connection URL prompt failed")?;
    if input.trim().is_empty() {
        return Err(ScaffoldError::InputCancelled.into());
    }
    Ok(input)
}

/// Prompt for the auxiliary `PostgreSQL` host; an empty answer omits it.
fn prompt_pg_host(theme: &ColorfulTheme) -> Result<Option<String>> {
    let input: String = Input::with_theme(theme)
        .with_prompt("Enter your PostgreSQL host (leave empty to skip)")
        .allow_empty(true)
        .interact_text()
        .context("PostgreSQL host prompt failed")?;
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_tables_cover_every_choice() {
        let module_systems: Vec<_> = MODULE_SYSTEMS.iter().map(|(choice, _)| *choice).collect();
        assert_eq!(module_systems, [ModuleSystem::CommonJs, ModuleSystem::Esm]);

        let databases: Vec<_> = DATABASES.iter().map(|(choice, _)| *choice).collect();
        assert_eq!(
            databases,
            [
                Database::None,
                Database::MongoDb,
                Database::MySql,
                Database::Postgres
            ]
        );
    }

    #[test]
    fn prompt_labels_match_database_names() {
        for (database, label) in DATABASES {
            assert_eq!(database.label(), label);
        }
    }
}
