use crate::series::ColorScheme;
use std::{env, path::PathBuf, time::Duration};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    /// Where searches fetch fares from. `None` means this server's own `/api/fares`.
    pub fares_url: Option<String>,
    pub colors: ColorScheme,
    pub fares_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            data_path: PathBuf::from("data/fares.json"),
            fares_url: None,
            colors: ColorScheme::default(),
            fares_timeout: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(defaults.port);

        let data_path = env::var("FARES_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_path);

        let fares_url = env::var("FARES_BACKEND_URL")
            .ok()
            .filter(|value| !value.trim().is_empty());

        let colors = match env::var("COLOR_SCHEME") {
            Ok(name) => ColorScheme::from_name(&name).unwrap_or_else(|| {
                warn!("unknown COLOR_SCHEME {name:?}, using random colors");
                ColorScheme::Random
            }),
            Err(_) => defaults.colors,
        };

        let fares_timeout = env::var("FARES_TIMEOUT_SECS")
            .ok()
            .and_then(|value| parse_timeout(&value));

        Self {
            port,
            data_path,
            fares_url,
            colors,
            fares_timeout,
        }
    }

    pub fn fares_endpoint(&self) -> String {
        self.fares_url
            .clone()
            .unwrap_or_else(|| format!("http://127.0.0.1:{}/api/fares", self.port))
    }
}

/// Seconds, where `0` or garbage means no timeout.
fn parse_timeout(value: &str) -> Option<Duration> {
    match value.trim().parse::<u64>() {
        Ok(0) => {
            warn!("FARES_TIMEOUT_SECS=0 disables the fare timeout");
            None
        }
        Ok(secs) => Some(Duration::from_secs(secs)),
        Err(_) => {
            warn!("ignoring invalid FARES_TIMEOUT_SECS {value:?}");
            None
        }
    }
}
