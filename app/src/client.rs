//! HTTP client for the lessons API.
//!
//! Every call is a fresh GET against the origin: the root document is
//! fetched to discover collection URLs, then the collection itself is
//! fetched and normalized. Any transport failure, non-success status or
//! undecodable body surfaces as [`AppError::RemoteUnavailable`].

use std::sync::Arc;

use reqwest::{Client, Response, header::CACHE_CONTROL};
use serde::de::DeserializeOwned;
use shared_utils::ListResponse;
use tracing::{debug, error};

use crate::components::error_template::AppError;
use crate::config::ApiConfig;
use crate::types::{ApiIndex, Category, Item};

const ROOT_UNAVAILABLE: &str = "Unable to reach API root.";
const CATEGORIES_UNAVAILABLE: &str = "Unable to load categories.";
const CATEGORY_UNAVAILABLE: &str = "Unable to load category.";
const ITEMS_UNAVAILABLE: &str = "Unable to load items.";

#[derive(Debug, Clone)]
pub struct LetsLearnClient {
    http: Client,
    config: Arc<ApiConfig>,
}

impl LetsLearnClient {
    /// Builds a client for the API described by `config`.
    ///
    /// # Errors
    ///
    /// Fails when the underlying TLS backend cannot be initialised.
    pub fn new(config: ApiConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .user_agent(concat!("lets-learn/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches the root document advertising collection URLs.
    pub async fn index(&self) -> Result<ApiIndex, AppError> {
        let url = self.config.api_root.as_str();
        let response = self.get(url, ROOT_UNAVAILABLE).await?;

        response.json::<ApiIndex>().await.map_err(|err| {
            error!(?err, url, "API root returned a malformed document");
            AppError::RemoteUnavailable(ROOT_UNAVAILABLE.to_owned())
        })
    }

    /// All categories, in upstream order.
    pub async fn categories(&self) -> Result<Vec<Category>, AppError> {
        let index = self.index().await?;
        let url = index.categories_url(&self.config.api_root);
        self.collection(&url, CATEGORIES_UNAVAILABLE).await
    }

    /// The category with `id`, or `None` when the API does not list it.
    pub async fn category(&self, id: i64) -> Result<Option<Category>, AppError> {
        let index = self.index().await?;
        let url = index.categories_url(&self.config.api_root);
        let categories: Vec<Category> = self.collection(&url, CATEGORY_UNAVAILABLE).await?;

        Ok(categories.into_iter().find(|category| category.id == id))
    }

    /// Every item of every category, in upstream order.
    pub async fn items(&self) -> Result<Vec<Item>, AppError> {
        let index = self.index().await?;
        let url = index.items_url(&self.config.api_root);
        self.collection(&url, ITEMS_UNAVAILABLE).await
    }

    async fn collection<T>(&self, url: &str, failure: &'static str) -> Result<Vec<T>, AppError>
    where
        T: DeserializeOwned,
    {
        let response = self.get(url, failure).await?;

        let list = response.json::<ListResponse>().await.map_err(|err| {
            error!(?err, url, "Collection response was not valid JSON");
            AppError::RemoteUnavailable(failure.to_owned())
        })?;

        Ok(list.into_vec())
    }

    async fn get(&self, url: &str, failure: &'static str) -> Result<Response, AppError> {
        debug!(url, "Fetching from lessons API");

        let response = self
            .http
            .get(url)
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(|err| {
                error!(?err, url, "Lessons API request failed");
                AppError::RemoteUnavailable(failure.to_owned())
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(%status, url, "Lessons API answered with an error status");
            return Err(AppError::RemoteUnavailable(failure.to_owned()));
        }

        Ok(response)
    }
}
