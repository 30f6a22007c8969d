//! Fetch a user's complete game history from a lichess-style server and
//! stream it, one JSON record per line, to an output sink.

pub mod config;
pub mod download;
pub mod error;
pub mod estimate;
pub mod lines;
