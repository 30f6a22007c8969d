use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;
use reqwest::blocking::Client;

use lichess_export::config::{Config, DEFAULT_SERVER_URI};
use lichess_export::download::{download_games, DownloadRequest};
use lichess_export::estimate::expected_games;

/// Download all games for a lichess user.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Opts {
    /// The user name to download games for.
    user: String,

    /// An OAuth2 token (speeds up downloads).
    #[arg(long, env = "LICHESS_API_TOKEN")]
    token: Option<String>,

    /// Where to put the data; standard output when omitted.
    #[arg(long)]
    outfile: Option<PathBuf>,

    /// Max number of games to download.
    #[arg(long)]
    max: Option<u32>,

    /// Base URI of the server API.
    #[arg(long, default_value = DEFAULT_SERVER_URI)]
    server: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let opts = Opts::parse();

    let config = Config::new(opts.server.as_str());
    let client = Client::new();
    let request = DownloadRequest {
        user: &opts.user,
        token: opts.token.as_deref(),
        max: opts.max,
    };

    let estimate = expected_games(&client, &config, &request)
        .with_context(|| format!("could not determine the game count for {}", opts.user))?;
    info!("found {estimate} games, beginning download...");

    let mut sink = open_sink(opts.outfile.as_deref())?;
    let written = download_games(&client, &config, &request, estimate, &mut sink)
        .with_context(|| format!("download for {} failed", opts.user))?;
    info!("wrote {written} games");

    Ok(())
}

fn open_sink(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    })
}
