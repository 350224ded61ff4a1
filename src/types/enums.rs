//! Enumeration types for the event log generator
//!
//! This module contains the closed enumerations used throughout the generator:
//! sales regions and output formats.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sales region a company belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    /// European subsidiaries
    #[serde(rename = "Europe")]
    Europe,
    /// Asian and Oceanian subsidiaries
    #[serde(rename = "Asia-Pacific")]
    AsiaPacific,
    /// North, Central and South American subsidiaries
    #[serde(rename = "Americas")]
    Americas,
}

impl Region {
    /// Label written to the output datasets
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Europe => "Europe",
            Region::AsiaPacific => "Asia-Pacific",
            Region::Americas => "Americas",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "europe" | "emea" => Ok(Region::Europe),
            "asia-pacific" | "asiapacific" | "apac" => Ok(Region::AsiaPacific),
            "americas" | "america" => Ok(Region::Americas),
            _ => Err(format!("Unknown region: {}", s)),
        }
    }
}

/// Output format options for the generated datasets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Comma-separated values with a header row
    Csv,
    /// One JSON object per line
    JsonLines,
}

impl OutputFormat {
    /// Conventional file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::JsonLines => "jsonl",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::JsonLines => write!(f, "JSON Lines"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "jsonl" | "json-lines" | "jsonlines" | "ndjson" => Ok(OutputFormat::JsonLines),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}
