use std::path::{Path, PathBuf};

use tracing::{debug, trace, warn};
use walkdir::WalkDir;

use super::{
    PLATFORM, SteamLocator, get_cover_url, get_library_dir, get_manifest_paths, parse_manifest,
};
use crate::{
    data::GameRecord,
    macros::logs::{debug_path, warn_no_games},
    steam::ManifestRecord,
    utils::paths::{path_to_string, some_if_dir},
};

// STEAM LIBRARY ------------------------------------------------------------------------
/// The `steamapps` directory of a Steam install, holding app manifests and installed games
#[derive(Debug)]
pub struct SteamLibrary {
    path_library: PathBuf,
}

impl SteamLibrary {
    pub fn new(path_steam_dir: &Path) -> Self {
        let path_library = get_library_dir(path_steam_dir);
        debug_path!("Steam library directory", path_library);

        SteamLibrary { path_library }
    }

    pub fn path_library(&self) -> &Path {
        &self.path_library
    }

    fn path_common(&self) -> PathBuf {
        self.path_library.join("common")
    }

    /// Returns a new GameRecord from the given path to a steam app manifest file
    /// (`appmanifest_*.acf`), if the manifest names a game whose install directory exists
    #[tracing::instrument(level = "trace")]
    fn get_game(&self, path_app_manifest: &Path) -> Option<GameRecord> {
        let ManifestRecord {
            id,
            name,
            install_dir,
        } = parse_manifest(path_app_manifest)
            .map_err(|e| {
                debug!("{PLATFORM} - Skipping unreadable app manifest at {path_app_manifest:?}: {e}");
            })
            .ok()?;

        let (Some(id), Some(title)) = (id, name) else {
            trace!("{PLATFORM} - App manifest is missing an id or name: {path_app_manifest:?}");
            return None;
        };

        let Some(path_game_dir) =
            some_if_dir(self.path_common().join(install_dir.unwrap_or_default()))
        else {
            trace!("{PLATFORM} - Skipped '{title}' as its install directory does not exist");
            return None;
        };

        trace!("{PLATFORM} - Game directory found for '{title}': {path_game_dir:?}");

        Some(GameRecord {
            cover: Some(get_cover_url(&id)),
            id,
            title,
            path: path_to_string(path_game_dir),
            platform: PLATFORM,
        })
    }

    /// Games described by app manifests in this library
    #[tracing::instrument(level = "trace")]
    pub fn get_manifest_games(&self) -> Vec<GameRecord> {
        if !self.path_library.is_dir() {
            return Vec::new();
        }

        let manifest_paths = match get_manifest_paths(&self.path_library) {
            Ok(paths) => paths,
            Err(e) => {
                warn!(
                    "{PLATFORM} - Could not list app manifests in {:?}: {e}",
                    self.path_library
                );
                return Vec::new();
            }
        };

        if manifest_paths.is_empty() {
            debug!(
                "{PLATFORM} - No app manifest files found for steam library: {:?}",
                self.path_library
            );
        };

        manifest_paths
            .iter()
            .filter_map(|path| self.get_game(path))
            .collect()
    }

    /// Every immediate subdirectory of `common`, named after itself
    #[tracing::instrument(level = "trace")]
    pub fn get_install_dir_games(&self) -> Vec<GameRecord> {
        WalkDir::new(self.path_common())
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|res| {
                let dir_entry = res
                    .map_err(|e| debug!("{PLATFORM} - Could not read directory entry: {e}"))
                    .ok()?;

                // Follows links, like the install directory check for manifests
                if !dir_entry.path().is_dir() {
                    return None;
                }

                let Some(dir_name) = dir_entry.file_name().to_str() else {
                    debug!(
                        "{PLATFORM} - Could not convert OS string to str: {:?}",
                        dir_entry.file_name()
                    );
                    return None;
                };

                Some(GameRecord {
                    id: dir_name.to_owned(),
                    title: dir_name.to_owned(),
                    path: path_to_string(dir_entry.path()),
                    platform: PLATFORM,
                    cover: None,
                })
            })
            .collect()
    }

    /// Games from app manifests, or from the `common` directory listing if manifests yielded
    /// nothing at all
    #[tracing::instrument(level = "trace")]
    pub fn get_all_games(&self) -> Vec<GameRecord> {
        let games = self.get_manifest_games();
        if !games.is_empty() {
            return games;
        }

        let path_common = self.path_common();
        if !path_common.is_dir() {
            warn_no_games!();
            return games;
        }

        debug!("{PLATFORM} - No games from app manifests, listing {path_common:?} instead");

        let games = self.get_install_dir_games();
        if games.is_empty() {
            warn_no_games!();
        }

        games
    }
}

// STEAM CATALOG ------------------------------------------------------------------------
/// Builds the list of installed Steam games from scratch on every call
#[derive(Debug, Default)]
pub struct SteamCatalog {
    locator: SteamLocator,
}

impl SteamCatalog {
    pub fn new(locator: SteamLocator) -> Self {
        SteamCatalog { locator }
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub fn list_games(&self) -> Vec<GameRecord> {
        let path_steam_dir = self.locator.locate_platform_root();
        let games = SteamLibrary::new(&path_steam_dir).get_all_games();

        debug!("{PLATFORM} - {} games listed", games.len());

        games
    }
}
