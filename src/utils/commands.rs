use std::process::{Command, Stdio};

/// Returns a std::process::Command from a given command str and it's arguments, with all standard
/// streams detached
pub fn get_launch_command<'a>(command: &str, args: impl IntoIterator<Item = &'a str>) -> Command {
    let mut command = Command::new(command);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    command
}

/// Returns the command which hands a URI to the OS default handler for its scheme. No shell is
/// involved, so the URI is never interpreted as a command line.
pub fn get_open_uri_command(uri: &str) -> Command {
    // Same path as ShellExecute, without going through `cmd.exe`
    #[cfg(windows)]
    let command = get_launch_command("rundll32", ["url.dll,FileProtocolHandler", uri]);

    #[cfg(target_os = "macos")]
    let command = get_launch_command("open", [uri]);

    #[cfg(not(any(windows, target_os = "macos")))]
    let command = get_launch_command("xdg-open", [uri]);

    command
}
