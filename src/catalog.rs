//! Program catalog loaded once at startup.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::types::Program;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Json(#[source] serde_json::Error),

    #[error("duplicate program id {id} in catalog")]
    DuplicateId { id: i64 },
}

/// Wrapped on-disk layout, `{ "total": n, "nano_degrees": [...] }`
#[derive(Deserialize)]
struct WrappedCatalog {
    nano_degrees: Vec<Program>,
}

/// The immutable collection of programs served by every tool call.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    programs: Vec<Program>,
}

impl Catalog {
    pub fn new(programs: Vec<Program>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(programs.len());
        for program in &programs {
            if !seen.insert(program.id) {
                return Err(CatalogError::DuplicateId { id: program.id });
            }
        }
        Ok(Self { programs })
    }

    /// Load and validate a catalog JSON file
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&content).map_err(|err| match err {
            CatalogError::Json(source) => CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        tracing::info!(
            "Loaded {} programs from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parse either a bare array of programs or the wrapped `nano_degrees` form
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let programs = if content.trim_start().starts_with('[') {
            serde_json::from_str::<Vec<Program>>(content)
        } else {
            serde_json::from_str::<WrappedCatalog>(content).map(|file| file.nano_degrees)
        }
        .map_err(CatalogError::Json)?;
        Self::new(programs)
    }

    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    pub fn find(&self, id: i64) -> Option<&Program> {
        self.programs.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}
