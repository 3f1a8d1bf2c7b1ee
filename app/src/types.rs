use serde::{Deserialize, Serialize};

#[cfg(feature = "ssr")]
use axum::extract::FromRef;
#[cfg(feature = "ssr")]
use leptos::config::LeptosOptions;

#[cfg(feature = "ssr")]
use crate::client::LetsLearnClient;

#[cfg(feature = "ssr")]
#[derive(FromRef, Debug, Clone)]
pub struct AppState {
    pub client: LetsLearnClient,
    pub leptos_options: std::sync::Arc<LeptosOptions>,
}

#[cfg(feature = "ssr")]
impl FromRef<AppState> for LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.as_ref().clone()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: i64,
    pub category: i64,
    pub name: String,
    #[serde(default)]
    pub content_name: Option<String>,
    #[serde(default)]
    pub object_image: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
    #[serde(default)]
    pub order: Option<i64>,
}

impl Item {
    /// The name shown to learners: `content_name` when set, `name` otherwise.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.content_name.as_deref().unwrap_or(&self.name)
    }
}

/// Root document of the lessons API, advertising collection URLs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiIndex {
    #[serde(default)]
    pub categories: Option<String>,
    #[serde(default)]
    pub items: Option<String>,
    #[serde(default)]
    pub learningitems: Option<String>,
}

impl ApiIndex {
    /// Advertised categories URL, or `categories/` under `api_root`.
    #[must_use]
    pub fn categories_url(&self, api_root: &str) -> String {
        self.categories
            .clone()
            .unwrap_or_else(|| format!("{api_root}categories/"))
    }

    /// Advertised `items` URL, then `learningitems`, then `items/` under `api_root`.
    #[must_use]
    pub fn items_url(&self, api_root: &str) -> String {
        self.items
            .clone()
            .or_else(|| self.learningitems.clone())
            .unwrap_or_else(|| format!("{api_root}items/"))
    }
}

/// Everything the reader needs for one category, with media URLs already
/// resolved for the requesting host.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryPage {
    pub category_id: i64,
    pub category: Option<Category>,
    /// Items of this category only, in lesson order.
    pub items: Vec<Item>,
}
