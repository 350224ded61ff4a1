//! Error types and handling
//!
//! This module contains the top-level error type for a generation run.

use thiserror::Error;

use crate::kpi::KpiError;
use crate::reference::ReferenceDataError;
use crate::types::config::{ConfigError, ConfigValidationError};

/// Errors that can occur while generating an event log
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ConfigurationError(String),

    /// Reference data is unusable
    #[error("Reference data error: {0}")]
    ReferenceDataError(#[from] ReferenceDataError),

    /// Case generation failed
    #[error("Case generation failed: {0}")]
    CaseGenerationError(String),

    /// KPI evaluation failed
    #[error("KPI evaluation failed: {0}")]
    KpiError(#[from] KpiError),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV encoding error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl From<ConfigValidationError> for GenerationError {
    fn from(error: ConfigValidationError) -> Self {
        GenerationError::ConfigurationError(error.to_string())
    }
}

impl From<ConfigError> for GenerationError {
    fn from(error: ConfigError) -> Self {
        GenerationError::ConfigurationError(error.to_string())
    }
}

impl GenerationError {
    /// Create a configuration error
    pub fn configuration_error(msg: impl Into<String>) -> Self {
        Self::ConfigurationError(msg.into())
    }

    /// Create a case generation error
    pub fn case_generation_error(msg: impl Into<String>) -> Self {
        Self::CaseGenerationError(msg.into())
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            GenerationError::ConfigurationError(_) => "Configuration",
            GenerationError::ReferenceDataError(_) => "Reference Data",
            GenerationError::CaseGenerationError(_) => "Case Generation",
            GenerationError::KpiError(_) => "KPI Evaluation",
            GenerationError::IoError(_) => "IO",
            GenerationError::CsvError(_) => "CSV",
            GenerationError::SerializationError(_) => "Serialization",
        }
    }
}

/// Result type for generation operations
pub type GenerationResult<T> = Result<T, GenerationError>;
