//! Report template loading and rendering.
//!
//! This module wraps the Jinja-syntax report template that the serialized
//! expense ledger is embedded into. The template sees the CSV text as the
//! `expense_records` variable.

use std::fs;
use std::path::Path;

use minijinja::{Environment, context};

use crate::error::{EngineError, EngineResult};

/// A parsed report template.
///
/// # Example
///
/// ```
/// use seisan_engine::template::ReportTemplate;
///
/// let template = ReportTemplate::from_source("report:\n{{ expense_records }}").unwrap();
/// let report = template.render("日付,出発\n").unwrap();
/// assert_eq!(report, "report:\n日付,出発\n");
/// ```
#[derive(Debug, Clone)]
pub struct ReportTemplate {
    source: String,
}

impl ReportTemplate {
    /// Loads and parses a template file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` when the file is missing and
    /// `TemplateParse` when the template source is invalid.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let source = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path.display().to_string(),
        })?;

        Self::from_source(source)
    }

    /// Parses a template from its source text.
    ///
    /// # Errors
    ///
    /// Returns `TemplateParse` when the template source is invalid.
    pub fn from_source(source: impl Into<String>) -> EngineResult<Self> {
        let source = source.into();

        // Parse eagerly so syntax errors surface at load time, not render time.
        let mut env = Environment::new();
        env.add_template("report", &source)
            .map_err(|e| EngineError::TemplateParse {
                message: e.to_string(),
            })?;

        Ok(Self { source })
    }

    /// Renders the template with the serialized ledger.
    ///
    /// The CSV text is exposed to the template as `expense_records`.
    ///
    /// # Errors
    ///
    /// Returns `TemplateRender` when rendering fails.
    pub fn render(&self, expense_records: &str) -> EngineResult<String> {
        let mut env = Environment::new();
        env.add_template("report", &self.source)
            .map_err(|e| EngineError::TemplateParse {
                message: e.to_string(),
            })?;

        let template = env
            .get_template("report")
            .map_err(|e| EngineError::TemplateRender {
                message: e.to_string(),
            })?;

        template
            .render(context! { expense_records => expense_records })
            .map_err(|e| EngineError::TemplateRender {
                message: e.to_string(),
            })
    }
}
