use std::path::PathBuf;

/// Returns an Option containing the given `PathBuf`, if the `PathBuf` points to an actual directory
pub fn some_if_dir(path: PathBuf) -> Option<PathBuf> {
    path.is_dir().then_some(path)
}

/// Lossy conversion used when a path has to be handed to a client as plain text
pub fn path_to_string(path: impl Into<PathBuf>) -> String {
    path.into().to_string_lossy().into_owned()
}
