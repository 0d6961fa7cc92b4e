//! Shared, read-only state behind every tool call.
//!
//! The catalog and keyword index are loaded once and shared through `Arc`
//! by every MCP session and HTTP request. Calls never mutate them.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::enrollment::{self, EnrollmentOutcome};
use crate::search::{self, FilterCriteria, KeywordIndex, RankedProgram, RankingEngine};
use crate::types::Program;

/// Widget page served when no `widget.html_path` is configured
const BUILTIN_WIDGET_HTML: &str = include_str!("../assets/enrollment-app.html");

#[derive(Debug, Clone)]
pub struct ProgramService {
    catalog: Arc<Catalog>,
    keywords: Arc<KeywordIndex>,
    result_limit: usize,
    widget_html: Arc<str>,
}

impl ProgramService {
    pub fn new(catalog: Catalog, keywords: KeywordIndex, result_limit: usize) -> Self {
        Self {
            catalog: Arc::new(catalog),
            keywords: Arc::new(keywords),
            result_limit,
            widget_html: Arc::from(BUILTIN_WIDGET_HTML),
        }
    }

    /// Build the service from configuration, loading the catalog and widget from disk.
    pub fn from_config(config: &Config) -> Result<Self> {
        let catalog = Catalog::load(&config.catalog.path).with_context(|| {
            format!(
                "Failed to load program catalog. Set [catalog] path in {} or pass --catalog",
                crate::config::CONFIG_FILE_NAME
            )
        })?;
        if catalog.is_empty() {
            tracing::warn!("Catalog {} has no programs", config.catalog.path.display());
        }
        let keywords = KeywordIndex::with_extra(&config.search.keywords);
        tracing::debug!("Keyword index has {} terms", keywords.len());

        let mut service = Self::new(catalog, keywords, config.search.result_limit);
        if let Some(ref path) = config.widget.html_path {
            let html = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read widget HTML: {}", path.display()))?;
            service.widget_html = Arc::from(html);
        }
        Ok(service)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn result_limit(&self) -> usize {
        self.result_limit
    }

    pub fn widget_html(&self) -> &str {
        &self.widget_html
    }

    /// Programs for a free-text query, best first, capped at `limit`
    pub fn search(&self, query: &str, limit: usize) -> Vec<&Program> {
        let mut programs = RankingEngine::new(&self.keywords).search(self.catalog.programs(), query);
        programs.truncate(limit);
        programs
    }

    /// Like [`search`](Self::search) but keeps each program's score
    pub fn rank(&self, query: &str, limit: usize) -> Vec<RankedProgram<'_>> {
        let mut ranked = RankingEngine::new(&self.keywords).rank(self.catalog.programs(), query);
        ranked.truncate(limit);
        ranked
    }

    /// Programs matching `criteria` in catalog order, capped at `limit`
    pub fn list(&self, criteria: &FilterCriteria, limit: usize) -> Vec<&Program> {
        let mut programs = search::filter(self.catalog.programs(), criteria);
        programs.truncate(limit);
        programs
    }

    pub fn enroll(&self, program_id: i64) -> EnrollmentOutcome<'_> {
        enrollment::enroll(&self.catalog, program_id)
    }
}
