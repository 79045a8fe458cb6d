//! pom.xml version extractor for Maven projects
//!
//! Reads the `<version>` element that is a direct child of the root
//! `<project>` element. Versions nested deeper (e.g. `<parent><version>`
//! or dependency versions) are never considered. The scanner is a
//! depth-tracking pass over the element tags, which is all a pom needs:
//! the project version is always plain element text.

use crate::error::ExtractError;
use crate::manifest::{ManifestFormat, VersionExtractor};
use regex::Regex;
use std::sync::LazyLock;

const FILE_NAME: &str = "pom.xml";

// Opening, closing or self-closing element tag with optional attributes
static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(/?)([A-Za-z_][A-Za-z0-9_.:\-]*)([^>]*?)(/?)>").unwrap());

// Constructs the scanner must skip before tag scanning
static COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
static PROLOG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<\?.*?\?>").unwrap());
static DOCTYPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<!DOCTYPE[^>]*>").unwrap());
static CDATA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!\[CDATA\[.*?\]\]>").unwrap());

/// Extractor for pom.xml files
pub struct PomXmlExtractor;

impl VersionExtractor for PomXmlExtractor {
    fn extract(&self, content: &str) -> Result<String, ExtractError> {
        let cleaned = strip_non_elements(content);

        // Depth 0 is outside the root; the project version lives at depth 1.
        let mut depth = 0usize;
        let mut root_is_project = false;
        let mut saw_root = false;
        let mut version_text_start: Option<usize> = None;

        for caps in TAG.captures_iter(&cleaned) {
            let whole = caps.get(0).expect("capture 0 always present");
            let is_closing = !caps[1].is_empty();
            let name = caps.get(2).expect("tag name capture").as_str();
            let is_self_closing = !caps[4].is_empty();

            if let Some(start) = version_text_start {
                if is_closing && name == "version" {
                    let text = cleaned[start..whole.start()].trim();
                    if text.is_empty() {
                        return Err(ExtractError::missing_version(FILE_NAME));
                    }
                    return Ok(text.to_string());
                }
                return Err(ExtractError::xml_parse_error(
                    FILE_NAME,
                    "unexpected markup inside <version> element",
                ));
            }

            if is_closing {
                if depth == 0 {
                    return Err(ExtractError::xml_parse_error(
                        FILE_NAME,
                        format!("unexpected closing tag </{}>", name),
                    ));
                }
                depth -= 1;
            } else if is_self_closing {
                if depth == 0 {
                    saw_root = true;
                    root_is_project = name == "project";
                }
            } else {
                if depth == 0 {
                    saw_root = true;
                    root_is_project = name == "project";
                } else if depth == 1 && root_is_project && name == "version" {
                    version_text_start = Some(whole.end());
                }
                depth += 1;
            }
        }

        if !saw_root {
            return Err(ExtractError::xml_parse_error(
                FILE_NAME,
                "no root element found",
            ));
        }
        if depth != 0 {
            return Err(ExtractError::xml_parse_error(
                FILE_NAME,
                "unclosed element at end of document",
            ));
        }
        if version_text_start.is_some() {
            return Err(ExtractError::xml_parse_error(
                FILE_NAME,
                "unterminated <version> element",
            ));
        }

        // Well-formed document with no project-level version
        Err(ExtractError::missing_version(FILE_NAME))
    }

    fn format(&self) -> ManifestFormat {
        ManifestFormat::MavenPom
    }
}

/// Remove comments, the XML prolog, doctype and CDATA sections so the
/// tag scanner only ever sees element markup
fn strip_non_elements(content: &str) -> String {
    let without_comments = COMMENT.replace_all(content, "");
    let without_prolog = PROLOG.replace_all(&without_comments, "");
    let without_doctype = DOCTYPE.replace_all(&without_prolog, "");
    CDATA.replace_all(&without_doctype, "").into_owned()
}
