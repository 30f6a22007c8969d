use log::debug;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::Config;
use crate::download::DownloadRequest;
use crate::error::FetchError;

/// Subset of the profile answered by `{server}/user/{user}`.
#[derive(Debug, Deserialize)]
struct UserProfile {
    count: GameCount,
}

#[derive(Debug, Deserialize)]
struct GameCount {
    all: u64,
}

/// Ask the server how many games the user has played in total.
pub fn estimate_games(client: &Client, config: &Config, user: &str) -> Result<u64, FetchError> {
    let url = config.user_url(user);
    debug!("estimating game count via {url}");
    let body = client.get(&url).send()?.error_for_status()?.text()?;
    let profile: UserProfile = serde_json::from_str(&body)?;
    Ok(profile.count.all)
}

/// Number of games the progress display should expect. An explicit `max`
/// wins and skips the estimation round-trip entirely.
pub fn expected_games(
    client: &Client,
    config: &Config,
    request: &DownloadRequest,
) -> Result<u64, FetchError> {
    match request.max {
        Some(max) => Ok(u64::from(max)),
        None => estimate_games(client, config, request.user),
    }
}
