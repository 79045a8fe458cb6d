//! Semantic-version difference classification
//!
//! Classifies the change from an old version to a new version. The diff is
//! `None` whenever the new version is not strictly greater than the old
//! one, which is the no-upgrade signal the checker gates on.

use semver::Version;

/// Kind of semantic-version bump from old to new
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemverBump {
    /// Major version increased (breaking)
    Major,
    /// Minor version increased (features)
    Minor,
    /// Patch version increased (fixes)
    Patch,
    /// Only the prerelease component changed
    Prerelease,
}

impl SemverBump {
    /// Plain label for display
    pub fn label(&self) -> &'static str {
        match self {
            SemverBump::Major => "major",
            SemverBump::Minor => "minor",
            SemverBump::Patch => "patch",
            SemverBump::Prerelease => "prerelease",
        }
    }
}

/// Parse a version string leniently, normalizing partial versions.
///
/// Strips a leading 'v' and pads "1" and "1.2" to full triples, so the
/// loose version strings found in manifests still compare.
pub fn parse_lenient(version: &str) -> Option<Version> {
    let version = version.trim();
    let version = version.strip_prefix('v').unwrap_or(version);

    // Count the numeric core parts before any prerelease/build suffix
    let core_len = version
        .split(['-', '+'])
        .next()
        .map(|core| core.split('.').count())
        .unwrap_or(0);

    let normalized = match core_len {
        1 => {
            let (core, rest) = split_core(version);
            format!("{}.0.0{}", core, rest)
        }
        2 => {
            let (core, rest) = split_core(version);
            format!("{}.0{}", core, rest)
        }
        _ => version.to_string(),
    };

    Version::parse(&normalized).ok()
}

/// Split a version into its numeric core and the trailing
/// prerelease/build suffix (including the separator)
fn split_core(version: &str) -> (&str, &str) {
    match version.find(['-', '+']) {
        Some(idx) => (&version[..idx], &version[idx..]),
        None => (version, ""),
    }
}

/// Classify the bump from `old` to `new`.
///
/// Returns `None` when the versions are equal or `new` is not strictly
/// greater than `old`.
pub fn diff(old: &Version, new: &Version) -> Option<SemverBump> {
    if new <= old {
        return None;
    }

    if new.major != old.major {
        Some(SemverBump::Major)
    } else if new.minor != old.minor {
        Some(SemverBump::Minor)
    } else if new.patch != old.patch {
        Some(SemverBump::Patch)
    } else {
        Some(SemverBump::Prerelease)
    }
}
