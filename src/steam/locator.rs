use std::{
    fmt::Debug,
    path::{Path, PathBuf},
};

use cfg_if::cfg_if;
use tracing::debug;

use super::PLATFORM;
use crate::macros::logs::{debug_fallback_path, debug_path};

/// Source of OS-level configuration values, such as the Windows registry
pub trait ConfigStore: Send + Sync + Debug {
    /// Returns the value stored under `vendor_key`, or `None` if it is missing or unreadable
    fn read_config_key(&self, vendor_key: &str, value_name: &str) -> Option<String>;
}

cfg_if! {
    if #[cfg(windows)] {
        const STEAM_VENDOR_KEY: &str = r"Software\Valve\Steam";
        const STEAM_PATH_VALUE: &str = "SteamPath";

        /// Reads values from `HKEY_CURRENT_USER`
        #[derive(Debug, Default)]
        pub struct SystemConfigStore;

        impl ConfigStore for SystemConfigStore {
            fn read_config_key(&self, vendor_key: &str, value_name: &str) -> Option<String> {
                use winreg::{RegKey, enums::HKEY_CURRENT_USER};

                RegKey::predef(HKEY_CURRENT_USER)
                    .open_subkey(vendor_key)
                    .and_then(|key| key.get_value::<String, _>(value_name))
                    .map_err(|e| {
                        debug!("{PLATFORM} - Could not read registry value {vendor_key}\\{value_name}: {e}");
                    })
                    .ok()
            }
        }

        fn get_default_steam_dir() -> PathBuf {
            PathBuf::from(r"C:\Program Files (x86)\Steam")
        }
    } else {
        const STEAM_VENDOR_KEY: &str = ".steam";
        const STEAM_PATH_VALUE: &str = "root";

        /// Resolves the links Steam keeps under the home directory (e.g. `~/.steam/root`)
        #[derive(Debug, Default)]
        pub struct SystemConfigStore;

        impl ConfigStore for SystemConfigStore {
            fn read_config_key(&self, vendor_key: &str, value_name: &str) -> Option<String> {
                let path_link = dirs::home_dir()?.join(vendor_key).join(value_name);

                path_link
                    .canonicalize()
                    .map_err(|e| {
                        debug!("{PLATFORM} - Could not resolve {path_link:?}: {e}");
                    })
                    .ok()
                    .and_then(|path| path.to_str().map(String::from))
            }
        }

        fn get_default_steam_dir() -> PathBuf {
            dirs::data_dir()
                .or_else(|| dirs::home_dir().map(|home| home.join(".local/share")))
                .unwrap_or_else(|| PathBuf::from(".local/share"))
                .join("Steam")
        }
    }
}

/// Resolves the Steam install directory
#[derive(Debug)]
pub struct SteamLocator {
    store: Box<dyn ConfigStore>,
    path_override: Option<PathBuf>,
}

impl SteamLocator {
    pub fn new(store: impl ConfigStore + 'static) -> Self {
        SteamLocator {
            store: Box::new(store),
            path_override: None,
        }
    }

    /// Always use the given directory, skipping any lookup
    pub fn with_override(mut self, path_steam_dir: impl AsRef<Path>) -> Self {
        self.path_override = Some(path_steam_dir.as_ref().to_path_buf());
        self
    }

    /// Returns the Steam install directory. The path is not guaranteed to exist.
    #[tracing::instrument(level = "trace")]
    pub fn locate_platform_root(&self) -> PathBuf {
        if let Some(path_steam_dir) = &self.path_override {
            debug_path!("configured Steam directory", path_steam_dir);
            return path_steam_dir.clone();
        }

        match self
            .store
            .read_config_key(STEAM_VENDOR_KEY, STEAM_PATH_VALUE)
            .filter(|value| !value.trim().is_empty())
        {
            Some(value) => {
                let path_steam_dir = PathBuf::from(value);
                debug_path!("Steam directory from configuration", path_steam_dir);
                path_steam_dir
            }
            None => {
                let path_steam_dir = get_default_steam_dir();
                debug_fallback_path!(path_steam_dir);
                path_steam_dir
            }
        }
    }
}

impl Default for SteamLocator {
    fn default() -> Self {
        SteamLocator::new(SystemConfigStore)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::test_utils::FixedConfigStore;

    #[test_case(Some("/opt/steam"), PathBuf::from("/opt/steam"); "configured")]
    #[test_case(None, get_default_steam_dir(); "missing key")]
    #[test_case(Some("  "), get_default_steam_dir(); "blank value")]
    fn test_locate_platform_root(value: Option<&str>, expected: PathBuf) {
        let locator = SteamLocator::new(FixedConfigStore::new(value));

        assert_eq!(locator.locate_platform_root(), expected);
    }

    #[test]
    fn test_override_skips_lookup() {
        let locator =
            SteamLocator::new(FixedConfigStore::new(Some("/opt/steam"))).with_override("/mnt/steam");

        assert_eq!(locator.locate_platform_root(), PathBuf::from("/mnt/steam"));
    }

    #[test]
    fn test_lookup_uses_steam_key() {
        let store = FixedConfigStore::new(Some("/opt/steam"));
        let requested = store.requested.clone();

        SteamLocator::new(store).locate_platform_root();

        assert_eq!(
            *requested.lock().unwrap(),
            vec![(STEAM_VENDOR_KEY.to_string(), STEAM_PATH_VALUE.to_string())]
        );
    }

    #[cfg(windows)]
    #[test]
    fn test_default_steam_dir_windows() {
        assert_eq!(
            get_default_steam_dir(),
            PathBuf::from(r"C:\Program Files (x86)\Steam")
        );
    }

    #[cfg(not(windows))]
    #[test]
    fn test_default_steam_dir_ends_with_steam() {
        assert!(get_default_steam_dir().ends_with("Steam"));
    }
}
