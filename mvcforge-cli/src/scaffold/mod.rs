//! Project scaffolding engine.
//!
//! [`scaffold`] is a pure function of the target directory and a
//! [`ScaffoldConfig`]: it derives every artifact deterministically, creates
//! the folder plan, and writes each file only if it does not already exist.
//! There is no state between invocations and nothing is ever overwritten or
//! deleted.

pub mod manifest;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ScaffoldError;
use crate::templates::ProjectTemplate;
use crate::{Database, ModuleSystem};

/// Directories ensured under the project root, in creation order.
///
/// `config` must precede file generation because the connector artifact lands
/// inside it.
pub const FOLDER_PLAN: [&str; 9] = [
    "controllers",
    "models",
    "views",
    "routes",
    "config",
    "middlewares",
    "public",
    "services",
    "utils",
];

/// Immutable scaffolding configuration.
///
/// Fully determines all generated content; built once per invocation from the
/// collected inputs.
#[derive(Debug, Clone)]
pub struct ScaffoldConfig {
    /// Module convention for generated sources.
    pub module_system: ModuleSystem,
    /// Database backend, or [`Database::None`] for no database.
    pub database: Database,
    /// Connection URL, expected whenever a database is chosen.
    pub connection_url: Option<String>,
    /// Auxiliary `PostgreSQL` host; omitting it drops the host key from the
    /// environment file and the host read from the connector.
    pub pg_host: Option<String>,
}

/// A single generated file with deterministic content.
#[derive(Debug)]
pub struct FileArtifact {
    /// Destination relative to the project root.
    pub relative_path: PathBuf,
    /// Full file content.
    pub content: String,
}

/// Outcome of one artifact write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactStatus {
    /// The file was absent and has been written.
    Created,
    /// The file already existed and was left untouched.
    Skipped,
}

/// Per-artifact outcome of a scaffold run.
#[derive(Debug)]
pub struct ArtifactOutcome {
    /// Path relative to the project root.
    pub relative_path: PathBuf,
    /// Whether the file was written or left untouched.
    pub status: ArtifactStatus,
}

/// Summary of one scaffold run.
#[derive(Debug, Default)]
pub struct ScaffoldResult {
    /// Folders that did not exist before this run, in creation order.
    pub folders_created: Vec<PathBuf>,
    /// Outcome for every artifact, in generation order.
    pub artifacts: Vec<ArtifactOutcome>,
}

impl ScaffoldResult {
    /// Artifacts written by this run.
    pub fn created(&self) -> impl Iterator<Item = &ArtifactOutcome> {
        self.artifacts
            .iter()
            .filter(|artifact| artifact.status == ArtifactStatus::Created)
    }

    /// Artifacts left untouched because they already existed.
    pub fn skipped(&self) -> impl Iterator<Item = &ArtifactOutcome> {
        self.artifacts
            .iter()
            .filter(|artifact| artifact.status == ArtifactStatus::Skipped)
    }
}

/// Scaffold the MVC layout and starter files into `root`.
///
/// Folder creation runs first, then each artifact is written with
/// skip-if-exists semantics. Steps already completed when an error surfaces
/// are left in place; every one of them is independently idempotent.
///
/// # Errors
///
/// Returns [`ScaffoldError::MissingRoot`] without touching the filesystem if
/// `root` is not an existing directory, and a filesystem error variant if a
/// create or write fails.
pub fn scaffold(root: &Path, config: &ScaffoldConfig) -> Result<ScaffoldResult, ScaffoldError> {
    if !root.is_dir() {
        return Err(ScaffoldError::MissingRoot(root.to_path_buf()));
    }

    // Render everything up front so a template failure leaves no trace.
    let artifacts = derive_artifacts(config)?;

    let mut result = ScaffoldResult::default();

    for name in FOLDER_PLAN {
        let dir = root.join(name);
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|source| ScaffoldError::CreateDir {
                path: dir.clone(),
                source,
            })?;
            result.folders_created.push(PathBuf::from(name));
        }
    }

    for artifact in artifacts {
        let target = root.join(&artifact.relative_path);
        let status = if target.exists() {
            ArtifactStatus::Skipped
        } else {
            fs::write(&target, artifact.content.as_bytes()).map_err(|source| {
                ScaffoldError::WriteFile {
                    path: target.clone(),
                    source,
                }
            })?;
            ArtifactStatus::Created
        };
        result.artifacts.push(ArtifactOutcome {
            relative_path: artifact.relative_path,
            status,
        });
    }

    Ok(result)
}

/// Derive all artifacts for the configuration, in generation order.
fn derive_artifacts(config: &ScaffoldConfig) -> Result<Vec<FileArtifact>, ScaffoldError> {
    let template = ProjectTemplate::new(config);

    let mut artifacts = vec![FileArtifact {
        relative_path: PathBuf::from(".env"),
        content: env_content(config),
    }];

    artifacts.push(template.server_entry()?);

    if let Some(connector) = template.connector()? {
        artifacts.push(connector);
    }

    artifacts.push(FileArtifact {
        relative_path: PathBuf::from("package.json"),
        content: manifest::PackageManifest::new(config).to_json()?,
    });

    Ok(artifacts)
}

/// Environment file content: the port assignment plus the key/value pairs for
/// the chosen database.
fn env_content(config: &ScaffoldConfig) -> String {
    let mut content = String::from("PORT=3000\n");
    let url = config.connection_url.as_deref().unwrap_or_default();

    match config.database {
        Database::None => {}
        Database::MongoDb => content.push_str(&format!("MONGO_URI={url}\n")),
        Database::MySql => content.push_str(&format!("MYSQL_URL={url}\n")),
        Database::Postgres => {
            content.push_str(&format!("PG_URL={url}\n"));
            if let Some(host) = &config.pg_host {
                content.push_str(&format!("PG_HOST={host}\n"));
            }
        }
    }

    content
}
