/// Base URI of the public lichess API.
pub const DEFAULT_SERVER_URI: &str = "https://lichess.org/api";

/// Server endpoints used by both the estimator and the downloader.
#[derive(Debug, Clone)]
pub struct Config {
    pub server_uri: String,
}

impl Config {
    pub fn new(server_uri: impl Into<String>) -> Self {
        let mut server_uri = server_uri.into();
        while server_uri.ends_with('/') {
            server_uri.pop();
        }
        Self { server_uri }
    }

    pub fn user_url(&self, user: &str) -> String {
        format!("{}/user/{}", self.server_uri, user)
    }

    pub fn games_url(&self, user: &str) -> String {
        format!("{}/games/user/{}", self.server_uri, user)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URI)
    }
}
