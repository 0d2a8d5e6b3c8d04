//! Error taxonomy for the explorer core
//!
//! Two failure families matter to callers: toggles that name a key the
//! filter state does not know about, and datasets whose shape is
//! internally inconsistent. Everything else is transport (JSON, I/O).
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use thiserror::Error;

/// Top-level error type returned by every fallible core operation
#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("Invalid key: category {category:?} / keyword {keyword:?} is not part of the filter state")]
    InvalidKey { category: String, keyword: String },

    #[error("Data integrity error: {0}")]
    DataIntegrity(#[from] DataIntegrityError),

    #[error("Invalid color literal: {0:?}")]
    InvalidColor(String),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExplorerError {
    pub(crate) fn invalid_key(category: &str, keyword: &str) -> Self {
        Self::InvalidKey {
            category: category.to_owned(),
            keyword: keyword.to_owned(),
        }
    }
}

/// Inconsistencies between the entity list and the membership map
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataIntegrityError {
    #[error("coordinate list {axis} has {actual} entries, expected {expected}")]
    CoordinateLengthMismatch {
        axis: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("keyword {category}/{keyword} references position {position}, dataset has {len} entities")]
    PositionOutOfRange {
        category: String,
        keyword: String,
        position: usize,
        len: usize,
    },

    #[error("active filter {category}/{keyword} has no membership entry")]
    UnknownFilter { category: String, keyword: String },

    #[error("membership map does not match the loaded dataset's categories and keywords")]
    MembershipShapeMismatch,
}

pub type Result<T> = std::result::Result<T, ExplorerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrity_errors_convert() {
        let err: ExplorerError = DataIntegrityError::MembershipShapeMismatch.into();
        assert!(matches!(
            err,
            ExplorerError::DataIntegrity(DataIntegrityError::MembershipShapeMismatch)
        ));
    }

    #[test]
    fn test_invalid_key_message_names_both_keys() {
        let err = ExplorerError::invalid_key("Ligand", "Zinc");
        let message = err.to_string();
        assert!(message.contains("Ligand"));
        assert!(message.contains("Zinc"));
    }
}
