//! package.json version extractor for Node.js projects

use crate::error::ExtractError;
use crate::manifest::{ManifestFormat, VersionExtractor};
use serde_json::Value;

const FILE_NAME: &str = "package.json";

/// Extractor for package.json files
pub struct PackageJsonExtractor;

impl VersionExtractor for PackageJsonExtractor {
    fn extract(&self, content: &str) -> Result<String, ExtractError> {
        let json: Value = serde_json::from_str(content)
            .map_err(|e| ExtractError::json_parse_error(FILE_NAME, e.to_string()))?;

        json.get("version")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| ExtractError::missing_version(FILE_NAME))
    }

    fn format(&self) -> ManifestFormat {
        ManifestFormat::NodePackage
    }
}
