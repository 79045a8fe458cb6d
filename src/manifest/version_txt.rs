//! version.txt extractor
//!
//! The whole file content, stripped of leading and trailing whitespace,
//! is the version.

use crate::error::ExtractError;
use crate::manifest::{ManifestFormat, VersionExtractor};

const FILE_NAME: &str = "version.txt";

/// Extractor for plain-text version files
pub struct VersionTxtExtractor;

impl VersionExtractor for VersionTxtExtractor {
    fn extract(&self, content: &str) -> Result<String, ExtractError> {
        let version = content.trim();
        if version.is_empty() {
            return Err(ExtractError::missing_version(FILE_NAME));
        }
        Ok(version.to_string())
    }

    fn format(&self) -> ManifestFormat {
        ManifestFormat::PlainText
    }
}
