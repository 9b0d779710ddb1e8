//! mvcforge CLI library
//!
//! Scaffolds a Node.js MVC backend into an existing project directory:
//! a fixed folder layout plus a `.env` file, a server entry file, a
//! database-connector file, and a `package.json` manifest. Every write is
//! create-only, so re-running the scaffold never modifies existing files.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod error;
pub mod scaffold;
pub mod templates;

pub use error::ScaffoldError;
pub use scaffold::{scaffold, ArtifactStatus, ScaffoldConfig, ScaffoldResult};
pub use templates::TemplateSet;

/// Module convention used by the generated JavaScript sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ModuleSystem {
    /// `CommonJS` - dynamic `require` style (default)
    #[default]
    #[value(name = "commonjs")]
    CommonJs,
    /// ESM - declarative `import` style, marks the package with `"type": "module"`
    #[value(name = "esm")]
    Esm,
}

impl ModuleSystem {
    /// Server entry file name under the project root.
    #[must_use]
    pub const fn entry_file(self) -> &'static str {
        match self {
            Self::CommonJs => "index.js",
            Self::Esm => "index.mjs",
        }
    }

    /// Database-connector file name under the project root.
    #[must_use]
    pub const fn connector_file(self) -> &'static str {
        match self {
            Self::CommonJs => "config/db.js",
            Self::Esm => "config/db.mjs",
        }
    }

    /// Module specifier the server entry uses to pull in the connector.
    #[must_use]
    pub const fn connector_specifier(self) -> &'static str {
        match self {
            Self::CommonJs => "./config/db",
            Self::Esm => "./config/db.mjs",
        }
    }
}

/// Database backend wired into the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Database {
    /// No database - no connector file, no driver dependency (default)
    #[default]
    #[value(name = "none")]
    None,
    /// `MongoDB` via mongoose
    #[value(name = "mongodb")]
    MongoDb,
    /// `MySQL` via mysql2
    #[value(name = "mysql")]
    MySql,
    /// `PostgreSQL` via pg
    #[value(name = "postgres")]
    Postgres,
}

impl Database {
    /// Human-readable name, as shown in prompts and generated comments.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::MongoDb => "MongoDB",
            Self::MySql => "MySQL",
            Self::Postgres => "PostgreSQL",
        }
    }

    /// npm driver package and version added to the manifest, if any.
    #[must_use]
    pub const fn driver(self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::None => None,
            Self::MongoDb => Some(("mongoose", "^7.6.3")),
            Self::MySql => Some(("mysql2", "^3.9.7")),
            Self::Postgres => Some(("pg", "^8.11.3")),
        }
    }
}
