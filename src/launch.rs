//! Launching games through the platform's URI handler.

use std::{fmt::Debug, io, thread};

use tracing::{debug, error, info};

use crate::{data::LaunchOutcome, steam::get_steam_run_uri, utils::commands::get_open_uri_command};

/// Hands URIs to whatever application is registered for their scheme
pub trait UriOpener: Send + Sync + Debug {
    fn open_uri(&self, uri: &str) -> io::Result<()>;
}

/// [`UriOpener`] using the OS default handler. Returns once the handler process has been
/// spawned, without waiting for it to finish.
#[derive(Debug, Default)]
pub struct SystemUriOpener;

impl UriOpener for SystemUriOpener {
    fn open_uri(&self, uri: &str) -> io::Result<()> {
        let mut child = get_open_uri_command(uri).spawn()?;

        // Reap the handler process once it exits
        thread::spawn(move || match child.wait() {
            Ok(status) => debug!("URI handler exited with {status}"),
            Err(e) => debug!("Could not wait on URI handler: {e}"),
        });

        Ok(())
    }
}

/// Starts Steam games by id
#[derive(Debug)]
pub struct Launcher {
    opener: Box<dyn UriOpener>,
}

impl Launcher {
    pub fn new(opener: impl UriOpener + 'static) -> Self {
        Launcher {
            opener: Box::new(opener),
        }
    }

    /// Asks Steam to run the given game. The id is passed through as-is.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn launch(&self, game_id: &str) -> LaunchOutcome {
        let uri = get_steam_run_uri(game_id);

        match self.opener.open_uri(&uri) {
            Ok(()) => {
                info!("Launching {uri}");
                LaunchOutcome::Launching {
                    game_id: game_id.to_owned(),
                }
            }
            Err(e) => {
                error!("Could not open {uri}: {e}");

                let mut message = e.to_string();
                if message.is_empty() {
                    message = format!("Could not open {uri}");
                }

                LaunchOutcome::Error { message }
            }
        }
    }
}

impl Default for Launcher {
    fn default() -> Self {
        Launcher::new(SystemUriOpener)
    }
}
