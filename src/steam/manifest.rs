use std::{
    fs::{read_dir, read_to_string},
    io,
    path::{Path, PathBuf},
};

use tracing::{debug, trace};

use super::PLATFORM;
use crate::{
    error::ManifestError,
    parsers::{parse_last_double_quoted_value, parse_manifest_file_name},
};

/// Fields scraped from a single app manifest (`appmanifest_*.acf`) file
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ManifestRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub install_dir: Option<String>,
}

#[derive(Debug, Clone, Copy)]
enum ManifestKey {
    AppId,
    Name,
    InstallDir,
}

impl ManifestKey {
    /// Checked in this order, so a line is only ever assigned to the first key it contains
    const ALL: [ManifestKey; 3] = [ManifestKey::AppId, ManifestKey::Name, ManifestKey::InstallDir];

    fn name(self) -> &'static str {
        match self {
            ManifestKey::AppId => "appid",
            ManifestKey::Name => "name",
            ManifestKey::InstallDir => "installDir",
        }
    }

    /// Key token including its quotes, matched case-sensitively
    fn token(self) -> &'static str {
        match self {
            ManifestKey::AppId => "\"appid\"",
            ManifestKey::Name => "\"name\"",
            ManifestKey::InstallDir => "\"installDir\"",
        }
    }

    fn find_in_line(line: &str) -> Option<ManifestKey> {
        ManifestKey::ALL
            .into_iter()
            .find(|key| line.contains(key.token()))
    }
}

/// Scans app manifest contents line by line. Later occurrences of a key overwrite earlier ones.
#[tracing::instrument(level = "trace", skip(file_content))]
pub fn parse_manifest_content(file_content: &str) -> Result<ManifestRecord, ManifestError> {
    file_content
        .lines()
        .try_fold(ManifestRecord::default(), |mut record, line| -> Result<_, ManifestError> {
            let Some(key) = ManifestKey::find_in_line(line) else {
                return Ok(record);
            };

            let (_, value) =
                parse_last_double_quoted_value(line).map_err(|_| ManifestError::Malformed {
                    key: key.name(),
                    line: line.trim().to_owned(),
                })?;
            let value = Some(value.to_owned());

            match key {
                ManifestKey::AppId => record.id = value,
                ManifestKey::Name => record.name = value,
                ManifestKey::InstallDir => record.install_dir = value,
            }

            Ok(record)
        })
}

/// Reads and scans the app manifest file at the given path
#[tracing::instrument(level = "trace")]
pub fn parse_manifest(path_app_manifest: &Path) -> Result<ManifestRecord, ManifestError> {
    let file_content = read_to_string(path_app_manifest)?;
    parse_manifest_content(&file_content)
}

/// Find and return paths of the app manifest files in the given library directory
#[tracing::instrument(level = "trace")]
pub fn get_manifest_paths(path_library: &Path) -> Result<Vec<PathBuf>, io::Error> {
    Ok(read_dir(path_library)?
        .flatten()
        .filter_map(|entry| {
            let filename_os_str = entry.file_name();

            let Some(filename) = filename_os_str.to_str() else {
                debug!("{PLATFORM} - Could not convert OS string to str: {filename_os_str:?}");
                return None;
            };

            if parse_manifest_file_name(filename).is_err() {
                trace!(
                    "{PLATFORM} - File skipped as it did not match the pattern of a manifest file: {filename}"
                );
                return None;
            };

            Some(entry.path())
        })
        .collect())
}
