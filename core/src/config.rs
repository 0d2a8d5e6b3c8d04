//! Explorer configuration
//!
//! Every field has a default, so an empty JSON object is a valid config.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::legend::Palette;

/// Settings shared by classification and legend derivation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Colors assigned to active filters, cycling every ten
    pub palette: Palette,
}

impl ExplorerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExplorerError;
    use crate::legend::{Color, TABLEAU10};

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = ExplorerConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ExplorerConfig::default());
        assert_eq!(config.palette.color_for(0), TABLEAU10[0]);
    }

    #[test]
    fn test_custom_palette() {
        let json = r##"{"palette": ["#ff0000","#00ff00","#0000ff","#000000","#111111",
                                    "#222222","#333333","#444444","#555555","#666666"]}"##;
        let config = ExplorerConfig::from_json_str(json).unwrap();
        assert_eq!(config.palette.color_for(1), Color::rgb(0, 255, 0));
    }

    #[test]
    fn test_bad_color_is_reported() {
        let json = r##"{"palette": ["red","#00ff00","#0000ff","#000000","#111111",
                                    "#222222","#333333","#444444","#555555","#666666"]}"##;
        assert!(matches!(ExplorerConfig::from_json_str(json), Err(ExplorerError::Json(_))));
    }

    #[test]
    fn test_from_path_reports_missing_file() {
        let err = ExplorerConfig::from_path("/nonexistent/explorer/config.json").unwrap_err();
        assert!(matches!(err, ExplorerError::Io(_)));
    }
}
