//! Coordinate inference from vendor archive file names.
//!
//! Vendor archives follow `<dotted.library.name>[_<version>.v<suffix>][.<ext>]`.
//! The heuristics below are deliberately literal: downstream builds already
//! depend on the exact artifact ids they produce, including the fallback
//! chain for short library names.
//!
//! | File name                                                   | Coordinate                                   |
//! |-------------------------------------------------------------|----------------------------------------------|
//! | `com.ibm.team.repository.client_4.0.500.v20211001-1234.jar` | `com.ibm.team:repository-client:4.0.500`     |
//! | `org.eclipse.core.runtime.jar`                              | `org.eclipse.core:runtime:1.0.0`             |
//! | `org.eclipse.osgi_3.10.jar`                                 | `org.eclipse.osgi:eclipse:1.0.0`             |

use std::path::Path;

use crate::coordinate::Coordinate;

/// Version used when the file name does not carry one.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Separates the version from the build qualifier in the version segment.
pub const VERSION_MARKER: &str = ".v";

/// Archive extensions stripped before inference.
pub const ARCHIVE_EXTENSIONS: [&str; 5] = ["jar", "zip", "war", "ear", "rar"];

/// Number of leading library-name segments that form the group.
const GROUP_SEGMENTS: usize = 3;

/// Infer a coordinate from a bare file name. Never fails.
pub fn resolve_file_name(file_name: &str) -> Coordinate {
    let stem = strip_archive_extension(file_name);

    let mut parts = stem.split('_');
    let library = parts.next().unwrap_or_default();
    let version = parts
        .next()
        .map(extract_version)
        .unwrap_or_else(|| DEFAULT_VERSION.to_string());

    let segments: Vec<&str> = library.split('.').collect();
    let group = segments
        .iter()
        .take(GROUP_SEGMENTS)
        .copied()
        .collect::<Vec<_>>()
        .join(".");
    let artifact_id = extract_artifact_id(&segments);

    if artifact_id == group {
        tracing::warn!(
            file = file_name,
            "library name is too short to separate group from artifact id"
        );
    }

    Coordinate::new(group, artifact_id, version)
}

/// Infer a coordinate for a file on disk, recording the path as its source.
pub fn resolve_path(path: &Path) -> Coordinate {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let coordinate = resolve_file_name(&file_name).with_source_file(path);
    tracing::debug!(file = %path.display(), %coordinate, "resolved coordinate");
    coordinate
}

fn strip_archive_extension(file_name: &str) -> &str {
    match file_name.rsplit_once('.') {
        Some((stem, ext))
            if !stem.is_empty()
                && ARCHIVE_EXTENSIONS
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known)) =>
        {
            stem
        }
        _ => file_name,
    }
}

fn extract_version(segment: &str) -> String {
    let pieces: Vec<&str> = segment.split(VERSION_MARKER).collect();
    if pieces.len() >= 2 {
        pieces[0].to_string()
    } else {
        DEFAULT_VERSION.to_string()
    }
}

fn extract_artifact_id(segments: &[&str]) -> String {
    let joined = segments
        .get(GROUP_SEGMENTS..)
        .unwrap_or_default()
        .join("-");
    if !joined.is_empty() {
        return joined;
    }

    // Fallback order must stay as is: second-to-last for 3+ segments, else last.
    // An empty pick walks back to the nearest non-empty segment.
    let pick = if segments.len() >= GROUP_SEGMENTS {
        segments.len() - 2
    } else {
        segments.len().saturating_sub(1)
    };
    segments
        .get(..=pick)
        .unwrap_or_default()
        .iter()
        .rev()
        .find(|segment| !segment.is_empty())
        .map(|segment| segment.to_string())
        .unwrap_or_else(|| segments.join("."))
}
