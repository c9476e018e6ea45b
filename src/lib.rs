//! A small HTTP service, meant to run next to a desktop games UI, which reports on the machine it
//! runs on and the Steam games installed there.
//!
//! # Description
//!
//! The service binds to `127.0.0.1` only and answers short-lived requests. Nothing is cached or
//! persisted: every request looks at the live registry, file system and OS counters again.
//!
//! # Endpoints
//!
//! - `GET /health` - current CPU and memory utilization (`gpu` is always 0)
//! - `GET /games` - installed Steam games, found through the app manifests in the library folder
//! - `POST /play/{game_id}` - asks Steam to run a game through the `steam://` URI handler
//!
//! # Usage
//!
//! ```no_run
//! use game_helper::{config::Config, server::{Service, serve}};
//!
//! # async fn run() -> Result<(), game_helper::error::ServerError> {
//! serve(Service::new(Config::default())).await
//! # }
//! ```
//!
//! The individual pieces can also be used directly:
//!
//! ```no_run
//! use game_helper::{health::HealthReporter, steam::SteamCatalog};
//!
//! let games = SteamCatalog::default().list_games();
//! let health = HealthReporter::default().sample_health();
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod health;
pub mod launch;
mod macros;
mod parsers;
pub mod server;
pub mod steam;
mod utils;

#[cfg(test)]
mod test_utils;
