//! HTTP retrieval of the permit dataset.
//!
//! The dataset lives at a fixed path under a configurable base URL. A load
//! always runs to completion: no request timeout and no retries.

use fffinder_core::{AppConfig, FacilityRecord};
use reqwest::{Client, Url};

use crate::error::LoadError;
use crate::normalize::parse_dataset;

/// Path of the dataset relative to the base URL.
pub const DATASET_PATH: &str = "Mobile_Food_Facility_Permit.csv";

/// Fetches and normalizes the permit dataset.
///
/// Use [`FacilityLoader::new`] with application config, or
/// [`FacilityLoader::with_base_url`] to point at a mock server in tests.
pub struct FacilityLoader {
    client: Client,
    dataset_url: Url,
}

impl FacilityLoader {
    /// Creates a loader from the configured base URL and user agent.
    ///
    /// # Errors
    ///
    /// See [`FacilityLoader::with_base_url`].
    pub fn new(config: &AppConfig) -> Result<Self, LoadError> {
        Self::with_base_url(&config.data_base_url, &config.user_agent)
    }

    /// Creates a loader that fetches [`DATASET_PATH`] beneath `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::InvalidBaseUrl`] if `base_url` does not parse, or
    /// [`LoadError::Network`] if the `reqwest::Client` cannot be constructed.
    pub fn with_base_url(base_url: &str, user_agent: &str) -> Result<Self, LoadError> {
        let client = Client::builder().user_agent(user_agent).build()?;
        let dataset_url = dataset_url(base_url)?;
        Ok(Self {
            client,
            dataset_url,
        })
    }

    #[must_use]
    pub fn dataset_url(&self) -> &Url {
        &self.dataset_url
    }

    /// Retrieves the dataset and returns one record per non-blank data row,
    /// in file order. Each call performs a full reload.
    ///
    /// Failures are logged here and then returned unchanged.
    ///
    /// # Errors
    ///
    /// - [`LoadError::Network`] if the server cannot be reached or the body
    ///   cannot be read.
    /// - [`LoadError::Http`] on a non-success status.
    /// - [`LoadError::Parse`] if the body is not readable as CSV.
    pub async fn load(&self) -> Result<Vec<FacilityRecord>, LoadError> {
        let result = self.fetch_and_parse().await;
        match &result {
            Ok(records) => tracing::info!(
                url = %self.dataset_url,
                records = records.len(),
                "loaded facility dataset"
            ),
            Err(error) => tracing::error!(
                url = %self.dataset_url,
                %error,
                "error loading facility dataset"
            ),
        }
        result
    }

    async fn fetch_and_parse(&self) -> Result<Vec<FacilityRecord>, LoadError> {
        let text = self.fetch_csv().await?;
        parse_dataset(&text)
    }

    async fn fetch_csv(&self) -> Result<String, LoadError> {
        let response = self.client.get(self.dataset_url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            let status_text = status
                .canonical_reason()
                .map_or_else(|| status.as_str().to_owned(), str::to_owned);
            return Err(LoadError::Http {
                status: status.as_u16(),
                status_text,
            });
        }

        Ok(response.text().await?)
    }
}

/// Joins [`DATASET_PATH`] onto `base_url`, treating the base as a directory
/// whether or not it ends with a slash.
fn dataset_url(base_url: &str) -> Result<Url, LoadError> {
    let invalid = |reason: String| LoadError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        reason,
    };

    let normalised = format!("{}/", base_url.trim_end_matches('/'));
    let base = Url::parse(&normalised).map_err(|e| invalid(e.to_string()))?;
    if base.cannot_be_a_base() {
        return Err(invalid("URL cannot be used as a base".to_owned()));
    }
    base.join(DATASET_PATH).map_err(|e| invalid(e.to_string()))
}
