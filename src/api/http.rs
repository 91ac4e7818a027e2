use crate::api::AbsenceSource;
use crate::errors::{AppError, AppResult};
use crate::models::{AbsenceRecord, Conflict};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Blocking client for the absences API.
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: &str, timeout_secs: u64) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("absview/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let url = self.url(path);
        log::debug!("GET {url}");

        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("GET {url} -> {status}");
            return Err(AppError::HttpStatus {
                status: status.as_u16(),
                url,
            });
        }

        Ok(response.json()?)
    }
}

impl AbsenceSource for HttpSource {
    fn fetch_absences(&self) -> AppResult<Vec<AbsenceRecord>> {
        self.get_json("absences")
    }

    fn fetch_conflict(&self, absence_id: i64) -> AppResult<Conflict> {
        self.get_json(&format!("conflict/{absence_id}"))
    }
}
