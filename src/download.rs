use std::io::Write;

use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use reqwest::blocking::Client;
use reqwest::header;

use crate::config::Config;
use crate::error::FetchError;
use crate::lines::NdjsonLines;

/// Parameters of one export run, fixed at construction.
#[derive(Debug, Clone, Copy)]
pub struct DownloadRequest<'a> {
    pub user: &'a str,
    pub token: Option<&'a str>,
    pub max: Option<u32>,
}

/// Fetch every game of `request.user` and append them to `sink`, one JSON
/// record per line, byte-identical to what the server sent.
///
/// `estimate` only sizes the progress bar; the server decides how many
/// lines actually arrive. Returns the number of lines written. When the
/// stream fails midway the sink keeps the lines received so far.
pub fn download_games<W: Write>(
    client: &Client,
    config: &Config,
    request: &DownloadRequest,
    estimate: u64,
    sink: &mut W,
) -> Result<u64, FetchError> {
    let url = config.games_url(request.user);

    let mut query: Vec<(&str, String)> = vec![
        ("pgnInJson", "true".to_owned()),
        ("clocks", "true".to_owned()),
        ("opening", "true".to_owned()),
    ];
    if let Some(max) = request.max {
        query.push(("max", max.to_string()));
    }

    let mut get = client
        .get(&url)
        .query(&query)
        .header(header::ACCEPT, "application/x-ndjson");
    if let Some(token) = request.token {
        get = get.bearer_auth(token);
    }

    debug!("streaming games from {url}");
    let response = get.send()?.error_for_status()?;

    let bar = game_bar(estimate);
    let mut written = 0u64;
    for line in NdjsonLines::new(response) {
        let line = line?;
        bar.inc(1);
        sink.write_all(line.as_bytes())?;
        sink.write_all(b"\n")?;
        written += 1;
    }
    sink.flush()?;
    bar.finish();

    Ok(written)
}

fn game_bar(total: u64) -> ProgressBar {
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} games ({per_sec})")
            .unwrap()
            .progress_chars("█▓░"),
    );
    bar
}
