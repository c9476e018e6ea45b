mod catalog;
mod locator;
mod manifest;

use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

pub use catalog::{SteamCatalog, SteamLibrary};
pub use locator::{ConfigStore, SteamLocator, SystemConfigStore};
pub use manifest::{ManifestRecord, get_manifest_paths, parse_manifest, parse_manifest_content};

use crate::data::SupportedPlatforms;

const PLATFORM: SupportedPlatforms = SupportedPlatforms::Steam;

/// URI understood by the Steam client's registered `steam://` handler
pub fn get_steam_run_uri(app_id: impl Display) -> String {
    format!("steam://run/{app_id}")
}

fn get_cover_url(app_id: impl Display) -> String {
    format!(
        "https://shared.akamai.steamstatic.com/store_item_assets/steam/apps/{app_id}/library_600x900.jpg"
    )
}

fn get_library_dir(path_steam_dir: &Path) -> PathBuf {
    path_steam_dir.join("steamapps")
}
