//! Package coordinates: the (group, artifact, version) identity of an artifact.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Result, SetupError};

/// Identity of a package artifact plus the file it was inferred from.
///
/// `source_file` is not part of the identity; two coordinates with the same
/// triple compare equal regardless of where they came from.
#[derive(Debug, Clone, Serialize)]
pub struct Coordinate {
    pub group: String,
    pub artifact_id: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_file: Option<PathBuf>,
}

impl Coordinate {
    pub fn new(
        group: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            source_file: None,
        }
    }

    /// Attach the originating file.
    pub fn with_source_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_file = Some(path.into());
        self
    }

    pub fn source_file(&self) -> Option<&Path> {
        self.source_file.as_deref()
    }

    /// Parse a single `group:artifact:version` triple.
    pub fn parse_triple(text: &str) -> Result<Self> {
        let parts: Vec<&str> = text.split(':').collect();
        match parts.as_slice() {
            [group, artifact, version]
                if !group.is_empty() && !artifact.is_empty() && !version.is_empty() =>
            {
                Ok(Self::new(*group, *artifact, *version))
            }
            _ => Err(SetupError::configuration(format!(
                "Invalid dependency coordinate '{}'. Expected group:artifact:version",
                text
            ))),
        }
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.group == other.group
            && self.artifact_id == other.artifact_id
            && self.version == other.version
    }
}

impl Eq for Coordinate {}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact_id, self.version)
    }
}

/// Parse the seed dependency list: whitespace-separated `group:artifact:version` triples.
///
/// An empty list means the required seed was not supplied.
pub fn parse_seed(text: &str) -> Result<Vec<Coordinate>> {
    let seeds = text
        .split_whitespace()
        .map(Coordinate::parse_triple)
        .collect::<Result<Vec<_>>>()?;

    if seeds.is_empty() {
        return Err(SetupError::configuration(
            "Missing required parameter: -d|--dependencies.",
        ));
    }

    Ok(seeds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_triple_accepts_three_parts() {
        let coord = Coordinate::parse_triple("org.slf4j:slf4j-api:1.7.36").unwrap();
        assert_eq!(coord.group, "org.slf4j");
        assert_eq!(coord.artifact_id, "slf4j-api");
        assert_eq!(coord.version, "1.7.36");
        assert!(coord.source_file().is_none());
    }

    #[test]
    fn parse_triple_rejects_wrong_arity() {
        assert!(Coordinate::parse_triple("org.slf4j:slf4j-api").is_err());
        assert!(Coordinate::parse_triple("a:b:c:d").is_err());
        assert!(Coordinate::parse_triple("a::c").is_err());
    }

    #[test]
    fn parse_seed_keeps_order() {
        let seeds = parse_seed("  org.slf4j:slf4j-api:1.7.36\n commons-io:commons-io:2.11.0 ").unwrap();
        assert_eq!(
            seeds,
            vec![
                Coordinate::new("org.slf4j", "slf4j-api", "1.7.36"),
                Coordinate::new("commons-io", "commons-io", "2.11.0"),
            ]
        );
    }

    #[test]
    fn parse_seed_empty_is_configuration_error() {
        let err = parse_seed("   ").unwrap_err();
        assert!(matches!(err, SetupError::Configuration(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn equality_ignores_source_file() {
        let a = Coordinate::new("g", "a", "1").with_source_file("/tmp/a.jar");
        let b = Coordinate::new("g", "a", "1");
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "g:a:1");
    }
}
