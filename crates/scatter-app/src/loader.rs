//! Dataset loader: fetches the CSV once and hands it to the dispatcher

use futures::future::{self, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use scatter_core::{Dataset, DatasetError};
use scatter_state::AppState;
use wasm_bindgen_futures::spawn_local;

/// Default location of the per-state survey CSV, relative to the page
pub const DEFAULT_DATA_URL: &str = "assets/data/data.csv";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Request(#[from] gloo_net::Error),

    #[error("server answered HTTP {0}")]
    Status(u16),

    #[error("no response after {0} ms")]
    Timeout(u32),

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Loader configuration
#[derive(Debug, Clone, PartialEq)]
pub struct LoaderConfig {
    pub url: String,
    /// Fetch timeout in milliseconds (0 = wait forever)
    pub timeout_ms: u32,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATA_URL.to_string(),
            timeout_ms: 15_000,
        }
    }
}

impl LoaderConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn timeout(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

pub struct DatasetLoader {
    config: LoaderConfig,
    state: AppState,
}

impl DatasetLoader {
    pub fn with_config(state: AppState, config: LoaderConfig) -> Self {
        Self { config, state }
    }

    /// Start loading (spawns async task)
    pub fn start(self) {
        spawn_local(async move {
            self.run().await;
        });
    }

    async fn run(self) {
        tracing::info!("Loading dataset from {}", self.config.url);

        let loaded = match self.fetch().await {
            Ok(dataset) => self.state.load_dataset(dataset).map_err(|err| err.to_string()),
            Err(err) => Err(err.to_string()),
        };

        if let Err(msg) = loaded {
            self.state.fail(format!("Could not load {}: {}", self.config.url, msg));
        }
    }

    async fn fetch(&self) -> Result<Dataset, LoadError> {
        let body = if self.config.timeout_ms == 0 {
            fetch_text(&self.config.url).await?
        } else {
            let request = Box::pin(fetch_text(&self.config.url));
            let timeout = TimeoutFuture::new(self.config.timeout_ms);
            match future::select(request, timeout).await {
                Either::Left((body, _)) => body?,
                Either::Right(_) => return Err(LoadError::Timeout(self.config.timeout_ms)),
            }
        };

        Ok(Dataset::from_csv_str(&body)?)
    }
}

async fn fetch_text(url: &str) -> Result<String, LoadError> {
    let response = Request::get(url).send().await?;
    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }
    Ok(response.text().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_config() {
        let config = LoaderConfig::default();
        assert_eq!(config.url, DEFAULT_DATA_URL);

        let config = LoaderConfig::new("/data/acs.csv").timeout(0);
        assert_eq!(config.url, "/data/acs.csv");
        assert_eq!(config.timeout_ms, 0);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(LoadError::Status(404).to_string(), "server answered HTTP 404");
        let err = LoadError::from(DatasetError::Empty);
        assert_eq!(err.to_string(), DatasetError::Empty.to_string());
    }
}
