//! `package.json` synthesis.
//!
//! The manifest is built as structured data and serialized pretty-printed,
//! rather than assembled from strings.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::ScaffoldError;
use crate::scaffold::ScaffoldConfig;
use crate::ModuleSystem;

/// Dependencies every generated project carries.
const BASE_DEPENDENCIES: [(&str, &str); 2] = [("express", "^4.18.2"), ("dotenv", "^16.3.1")];

/// Development-only dependencies (auto-restart watcher).
const DEV_DEPENDENCIES: [(&str, &str); 1] = [("nodemon", "^3.0.1")];

/// Serialized form of the generated `package.json`.
#[derive(Debug, Serialize)]
pub struct PackageManifest {
    name: &'static str,
    version: &'static str,
    main: &'static str,
    scripts: Scripts,
    dependencies: BTreeMap<&'static str, &'static str>,
    #[serde(rename = "devDependencies")]
    dev_dependencies: BTreeMap<&'static str, &'static str>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    module_type: Option<&'static str>,
}

/// npm script entries.
#[derive(Debug, Serialize)]
struct Scripts {
    start: String,
    dev: String,
}

impl PackageManifest {
    /// Build the manifest for the given configuration.
    #[must_use]
    pub fn new(config: &ScaffoldConfig) -> Self {
        let entry = config.module_system.entry_file();

        let mut dependencies: BTreeMap<_, _> = BASE_DEPENDENCIES.into_iter().collect();
        if let Some((name, version)) = config.database.driver() {
            dependencies.insert(name, version);
        }

        // ESM needs the extra interpreter flag until specifier resolution
        // lands unflagged in the supported Node range.
        let scripts = match config.module_system {
            ModuleSystem::CommonJs => Scripts {
                start: format!("node {entry}"),
                dev: format!("nodemon {entry}"),
            },
            ModuleSystem::Esm => Scripts {
                start: format!("node --experimental-specifier-resolution=node {entry}"),
                dev: format!(
                    "nodemon --watch . --exec node --experimental-specifier-resolution=node {entry}"
                ),
            },
        };

        Self {
            name: "mvc-backend",
            version: "1.0.0",
            main: entry,
            scripts,
            dependencies,
            dev_dependencies: DEV_DEPENDENCIES.into_iter().collect(),
            module_type: matches!(config.module_system, ModuleSystem::Esm).then_some("module"),
        }
    }

    /// Pretty-printed JSON with a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, ScaffoldError> {
        let mut rendered = serde_json::to_string_pretty(self)?;
        rendered.push('\n');
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    fn config(module_system: ModuleSystem, database: Database) -> ScaffoldConfig {
        ScaffoldConfig {
            module_system,
            database,
            connection_url: Some("db://localhost".to_string()),
            pg_host: None,
        }
    }

    fn parsed(module_system: ModuleSystem, database: Database) -> serde_json::Value {
        let json = PackageManifest::new(&config(module_system, database))
            .to_json()
            .unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn commonjs_manifest_has_no_type_marker() {
        let manifest = parsed(ModuleSystem::CommonJs, Database::None);
        assert_eq!(manifest["name"], "mvc-backend");
        assert_eq!(manifest["version"], "1.0.0");
        assert_eq!(manifest["main"], "index.js");
        assert!(manifest.get("type").is_none());
    }

    #[test]
    fn esm_manifest_marks_package_as_module() {
        let manifest = parsed(ModuleSystem::Esm, Database::None);
        assert_eq!(manifest["main"], "index.mjs");
        assert_eq!(manifest["type"], "module");
    }

    #[test]
    fn scripts_follow_module_system() {
        let cjs = parsed(ModuleSystem::CommonJs, Database::None);
        assert_eq!(cjs["scripts"]["start"], "node index.js");
        assert_eq!(cjs["scripts"]["dev"], "nodemon index.js");

        let esm = parsed(ModuleSystem::Esm, Database::None);
        assert_eq!(
            esm["scripts"]["start"],
            "node --experimental-specifier-resolution=node index.mjs"
        );
        assert_eq!(
            esm["scripts"]["dev"],
            "nodemon --watch . --exec node --experimental-specifier-resolution=node index.mjs"
        );
    }

    #[test]
    fn dependencies_merge_exactly_one_driver() {
        let none = parsed(ModuleSystem::CommonJs, Database::None);
        let dependencies = none["dependencies"].as_object().unwrap();
        assert_eq!(dependencies.len(), 2);
        assert_eq!(dependencies["express"], "^4.18.2");
        assert_eq!(dependencies["dotenv"], "^16.3.1");

        let mongo = parsed(ModuleSystem::CommonJs, Database::MongoDb);
        let dependencies = mongo["dependencies"].as_object().unwrap();
        assert_eq!(dependencies.len(), 3);
        assert_eq!(dependencies["mongoose"], "^7.6.3");
        assert!(dependencies.get("mysql2").is_none());
        assert!(dependencies.get("pg").is_none());

        let postgres = parsed(ModuleSystem::CommonJs, Database::Postgres);
        assert_eq!(postgres["dependencies"]["pg"], "^8.11.3");
    }

    #[test]
    fn dev_dependencies_carry_watcher() {
        let manifest = parsed(ModuleSystem::CommonJs, Database::MySql);
        assert_eq!(manifest["devDependencies"]["nodemon"], "^3.0.1");
    }
}
