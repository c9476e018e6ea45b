//! Mock file systems and capability stand-ins shared by unit tests.

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use tempfile::TempDir;

use crate::{
    health::{MemorySample, MetricsSource},
    launch::UriOpener,
    steam::ConfigStore,
};

/// Steam app manifest contents laid out like a Steam client manifest, keyed with `installDir`
pub fn manifest_content(app_id: &str, name: &str, install_dir: &str) -> String {
    format!(
        "\"AppState\"\n{{\n\t\"appid\"\t\t\"{app_id}\"\n\t\"universe\"\t\t\"1\"\n\t\"LauncherPath\"\t\t\"C:\\\\Program Files (x86)\\\\Steam\\\\steam.exe\"\n\t\"name\"\t\t\"{name}\"\n\t\"StateFlags\"\t\t\"4\"\n\t\"installDir\"\t\t\"{install_dir}\"\n\t\"UserConfig\"\n\t{{\n\t\t\"language\"\t\t\"english\"\n\t}}\n}}\n"
    )
}

/// A throwaway Steam install directory with an empty `steamapps` library
pub struct MockSteamDir {
    dir: TempDir,
}

impl MockSteamDir {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("steamapps")).unwrap();

        MockSteamDir { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn path_library(&self) -> PathBuf {
        self.path().join("steamapps")
    }

    pub fn path_common(&self) -> PathBuf {
        self.path_library().join("common")
    }

    pub fn with_manifest(self, file_name: &str, content: &str) -> Self {
        fs::write(self.path_library().join(file_name), content).unwrap();
        self
    }

    pub fn with_game_dir(self, dir_name: &str) -> Self {
        fs::create_dir_all(self.path_common().join(dir_name)).unwrap();
        self
    }

    pub fn with_common_file(self, file_name: &str) -> Self {
        fs::create_dir_all(self.path_common()).unwrap();
        fs::write(self.path_common().join(file_name), "").unwrap();
        self
    }
}

/// Config store returning a fixed value and recording every lookup
#[derive(Debug, Default)]
pub struct FixedConfigStore {
    value: Option<String>,
    pub requested: Arc<Mutex<Vec<(String, String)>>>,
}

impl FixedConfigStore {
    pub fn new(value: Option<&str>) -> Self {
        FixedConfigStore {
            value: value.map(String::from),
            requested: Arc::default(),
        }
    }
}

impl ConfigStore for FixedConfigStore {
    fn read_config_key(&self, vendor_key: &str, value_name: &str) -> Option<String> {
        self.requested
            .lock()
            .unwrap()
            .push((vendor_key.to_owned(), value_name.to_owned()));
        self.value.clone()
    }
}

/// Metrics source replaying fixed readings
#[derive(Debug, Clone, Copy)]
pub struct FixedMetrics {
    pub cpu: f32,
    pub memory: MemorySample,
}

impl MetricsSource for FixedMetrics {
    fn sample_cpu(&mut self) -> f32 {
        self.cpu
    }

    fn sample_memory(&mut self) -> MemorySample {
        self.memory
    }
}

/// URI opener which records URIs and optionally fails with the given error kind and message
#[derive(Debug, Default)]
pub struct RecordingOpener {
    failure: Option<(io::ErrorKind, String)>,
    pub opened: Arc<Mutex<Vec<String>>>,
}

impl RecordingOpener {
    pub fn failing(kind: io::ErrorKind, message: &str) -> Self {
        RecordingOpener {
            failure: Some((kind, message.to_owned())),
            opened: Arc::default(),
        }
    }
}

impl UriOpener for RecordingOpener {
    fn open_uri(&self, uri: &str) -> io::Result<()> {
        self.opened.lock().unwrap().push(uri.to_owned());

        match &self.failure {
            Some((kind, message)) => Err(io::Error::new(*kind, message.clone())),
            None => Ok(()),
        }
    }
}
