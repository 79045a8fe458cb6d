//! Manifest format dispatch and version extraction
//!
//! The manifest format is chosen exactly once per extraction, purely from
//! the file's base name. Matching is exact and case-sensitive against the
//! closed set {pom.xml, package.json, version.txt}; anything else is
//! unsupported. An extraction yields exactly one version string or an
//! error, never a partial result.

mod package_json;
mod pom_xml;
mod version_txt;

pub use package_json::PackageJsonExtractor;
pub use pom_xml::PomXmlExtractor;
pub use version_txt::VersionTxtExtractor;

use crate::error::ExtractError;
use std::path::Path;

/// Supported manifest formats, keyed by exact file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    /// Maven project file (pom.xml)
    MavenPom,
    /// Node.js package file (package.json)
    NodePackage,
    /// Plain text version file (version.txt)
    PlainText,
}

impl ManifestFormat {
    /// All supported formats
    pub fn all() -> &'static [ManifestFormat] {
        &[
            ManifestFormat::MavenPom,
            ManifestFormat::NodePackage,
            ManifestFormat::PlainText,
        ]
    }

    /// The exact file name this format matches
    pub fn file_name(&self) -> &'static str {
        match self {
            ManifestFormat::MavenPom => "pom.xml",
            ManifestFormat::NodePackage => "package.json",
            ManifestFormat::PlainText => "version.txt",
        }
    }

    /// Match a base file name against the supported set
    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|f| f.file_name() == name)
    }
}

/// Trait for extracting a project version from manifest content
pub trait VersionExtractor {
    /// Extract the version string from the manifest content
    fn extract(&self, content: &str) -> Result<String, ExtractError>;

    /// Returns the format this extractor handles
    fn format(&self) -> ManifestFormat;
}

/// Get a version extractor for the specified format
pub fn get_extractor(format: ManifestFormat) -> Box<dyn VersionExtractor> {
    match format {
        ManifestFormat::MavenPom => Box::new(PomXmlExtractor),
        ManifestFormat::NodePackage => Box::new(PackageJsonExtractor),
        ManifestFormat::PlainText => Box::new(VersionTxtExtractor),
    }
}

/// Extract a version from manifest content, dispatching on the base name
/// of `file_name`
pub fn extract_version(content: &str, file_name: &str) -> Result<String, ExtractError> {
    let base_name = Path::new(file_name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(file_name);

    let format = ManifestFormat::from_file_name(base_name)
        .ok_or_else(|| ExtractError::unsupported(base_name))?;

    get_extractor(format).extract(content)
}
