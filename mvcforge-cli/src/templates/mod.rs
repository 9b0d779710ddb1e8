//! Generated-source templates and their resolution table.
//!
//! Template bodies are compiled-in constants; which bodies apply is decided
//! by [`TemplateSet::resolve`] over the `(module system, database)` pair, and
//! variable content is injected through a handlebars context built in
//! [`ProjectTemplate::new`].

use handlebars::Handlebars;
use serde_json::json;

use crate::error::ScaffoldError;
use crate::scaffold::{FileArtifact, ScaffoldConfig};
use crate::{Database, ModuleSystem};

pub mod files;
pub use files::*;

/// Database-connector template and its destination.
#[derive(Debug, Clone, Copy)]
pub struct ConnectorTemplate {
    /// Destination relative to the project root.
    pub relative_path: &'static str,
    /// Template body.
    pub body: &'static str,
}

/// Static template selection for one `(module system, database)` pair.
#[derive(Debug, Clone, Copy)]
pub struct TemplateSet {
    /// Server entry destination relative to the project root.
    pub entry_file: &'static str,
    /// Server entry template body.
    pub server_entry: &'static str,
    /// Connector template; absent when no database was chosen.
    pub connector: Option<ConnectorTemplate>,
}

impl TemplateSet {
    /// Resolve the templates for the given module system and database.
    #[must_use]
    pub const fn resolve(module_system: ModuleSystem, database: Database) -> Self {
        let server_entry = match module_system {
            ModuleSystem::CommonJs => SERVER_ENTRY_CJS,
            ModuleSystem::Esm => SERVER_ENTRY_ESM,
        };

        let body = match (module_system, database) {
            (_, Database::None) => None,
            (ModuleSystem::CommonJs, Database::MongoDb) => Some(DB_MONGO_CJS),
            (ModuleSystem::CommonJs, Database::MySql) => Some(DB_MYSQL_CJS),
            (ModuleSystem::CommonJs, Database::Postgres) => Some(DB_POSTGRES_CJS),
            (ModuleSystem::Esm, Database::MongoDb) => Some(DB_MONGO_ESM),
            (ModuleSystem::Esm, Database::MySql) => Some(DB_MYSQL_ESM),
            (ModuleSystem::Esm, Database::Postgres) => Some(DB_POSTGRES_ESM),
        };

        let connector = match body {
            Some(body) => Some(ConnectorTemplate {
                relative_path: module_system.connector_file(),
                body,
            }),
            None => None,
        };

        Self {
            entry_file: module_system.entry_file(),
            server_entry,
            connector,
        }
    }
}

/// Renders the generated JavaScript sources for one configuration.
pub struct ProjectTemplate {
    set: TemplateSet,
    handlebars: Handlebars<'static>,
    context: serde_json::Value,
}

impl ProjectTemplate {
    /// Create a renderer for the given configuration.
    #[must_use]
    pub fn new(config: &ScaffoldConfig) -> Self {
        let mut handlebars = Handlebars::new();

        // Disable HTML escaping since we're generating code
        handlebars.register_escape_fn(handlebars::no_escape);

        let connector_import = if config.database == Database::None {
            String::new()
        } else {
            let specifier = config.module_system.connector_specifier();
            match config.module_system {
                ModuleSystem::CommonJs => format!("require('{specifier}');\n"),
                ModuleSystem::Esm => format!("import '{specifier}';\n"),
            }
        };

        let has_pg_host = config.pg_host.is_some();
        let context = json!({
            "connector_import": connector_import,
            "pg_host_read": if has_pg_host { "const host = process.env.PG_HOST;\n" } else { "" },
            "pg_client_args": if has_pg_host {
                "{ connectionString: url, host }"
            } else {
                "{ connectionString: url }"
            },
        });

        Self {
            set: TemplateSet::resolve(config.module_system, config.database),
            handlebars,
            context,
        }
    }

    /// Rendered server entry artifact.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in template fails to render.
    pub fn server_entry(&self) -> Result<FileArtifact, ScaffoldError> {
        let content = self.render(self.set.entry_file, self.set.server_entry)?;
        Ok(FileArtifact {
            relative_path: self.set.entry_file.into(),
            content,
        })
    }

    /// Rendered connector artifact; `None` when no database was chosen.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in template fails to render.
    pub fn connector(&self) -> Result<Option<FileArtifact>, ScaffoldError> {
        self.set
            .connector
            .map(|connector| {
                let content = self.render(connector.relative_path, connector.body)?;
                Ok(FileArtifact {
                    relative_path: connector.relative_path.into(),
                    content,
                })
            })
            .transpose()
    }

    fn render(&self, path: &str, body: &str) -> Result<String, ScaffoldError> {
        self.handlebars
            .render_template(body, &self.context)
            .map_err(|source| ScaffoldError::Template {
                path: path.to_string(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(
        module_system: ModuleSystem,
        database: Database,
        pg_host: Option<&str>,
    ) -> ScaffoldConfig {
        ScaffoldConfig {
            module_system,
            database,
            connection_url: Some("db://localhost".to_string()),
            pg_host: pg_host.map(str::to_string),
        }
    }

    #[test]
    fn resolve_picks_entry_file_per_module_system() {
        let cjs = TemplateSet::resolve(ModuleSystem::CommonJs, Database::MongoDb);
        assert_eq!(cjs.entry_file, "index.js");

        let esm = TemplateSet::resolve(ModuleSystem::Esm, Database::MongoDb);
        assert_eq!(esm.entry_file, "index.mjs");
    }

    #[test]
    fn resolve_omits_connector_without_database() {
        let set = TemplateSet::resolve(ModuleSystem::CommonJs, Database::None);
        assert!(set.connector.is_none());

        let set = TemplateSet::resolve(ModuleSystem::Esm, Database::None);
        assert!(set.connector.is_none());
    }

    #[test]
    fn resolve_places_connector_under_config() {
        let cjs = TemplateSet::resolve(ModuleSystem::CommonJs, Database::MySql);
        assert_eq!(cjs.connector.unwrap().relative_path, "config/db.js");

        let esm = TemplateSet::resolve(ModuleSystem::Esm, Database::Postgres);
        assert_eq!(esm.connector.unwrap().relative_path, "config/db.mjs");
    }

    #[test]
    fn server_entry_requires_connector_when_database_chosen() {
        let template = ProjectTemplate::new(&config(
            ModuleSystem::CommonJs,
            Database::MongoDb,
            None,
        ));
        let entry = template.server_entry().unwrap();
        assert!(entry.content.contains("require('./config/db');"));
    }

    #[test]
    fn server_entry_skips_connector_without_database() {
        let template =
            ProjectTemplate::new(&config(ModuleSystem::CommonJs, Database::None, None));
        let entry = template.server_entry().unwrap();
        assert!(!entry.content.contains("./config/db"));
        assert!(entry.content.contains("const express = require('express');"));
    }

    #[test]
    fn esm_entry_imports_connector_with_extension() {
        let template =
            ProjectTemplate::new(&config(ModuleSystem::Esm, Database::MySql, None));
        let entry = template.server_entry().unwrap();
        assert!(entry.content.contains("import './config/db.mjs';"));
        assert!(entry.content.contains("import express from 'express';"));
    }

    #[test]
    fn postgres_connector_reads_host_only_when_set() {
        let with_host = ProjectTemplate::new(&config(
            ModuleSystem::CommonJs,
            Database::Postgres,
            Some("db.internal"),
        ));
        let connector = with_host.connector().unwrap().unwrap();
        assert!(connector.content.contains("const host = process.env.PG_HOST;"));
        assert!(connector.content.contains("{ connectionString: url, host }"));

        let without_host = ProjectTemplate::new(&config(
            ModuleSystem::CommonJs,
            Database::Postgres,
            None,
        ));
        let connector = without_host.connector().unwrap().unwrap();
        assert!(!connector.content.contains("PG_HOST"));
        assert!(connector.content.contains("{ connectionString: url }"));
    }
}
