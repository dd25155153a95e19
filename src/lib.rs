pub use api::Lookup;
pub use client::VeboClient;
pub use config::Config;
pub use error::{PlaylistError, Result};
pub use model::*;
pub use pipeline::{run, run_at, target_date, RunSummary};
pub use playlist::{format_entry, generate_playlist, write_playlist, Playlist};

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod playlist;

#[cfg(test)]
pub(crate) mod test_server;
