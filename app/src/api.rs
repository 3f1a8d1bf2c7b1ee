//! This module provides the server functions the pages use to load their data
//! from the lessons API.
//!
//! Both run on the server only: they discover collection URLs through the
//! API root, fetch the collections uncached, and rewrite loopback-anchored
//! media URLs to the hostname the current request arrived on.

#![allow(deprecated)]

use leptos::prelude::{ServerFnError, server};
use leptos::server_fn::codec::GetUrl;

use crate::types::{Category, CategoryPage};

#[cfg(feature = "ssr")]
use crate::components::error_template::AppError;
#[cfg(feature = "ssr")]
use crate::config::ApiConfig;
#[cfg(feature = "ssr")]
use leptos::server_fn::error::NoCustomError;

/// Hostname media URLs should point at for the request being served.
#[cfg(feature = "ssr")]
fn viewer_hostname(config: &ApiConfig) -> String {
    use leptos::prelude::use_context;

    let headers = use_context::<http::request::Parts>()
        .map(|parts| parts.headers)
        .unwrap_or_default();
    shared_utils::request_hostname(&headers, &config.backend_host)
}

#[cfg(feature = "ssr")]
fn server_error(error: AppError) -> ServerFnError {
    ServerFnError::<NoCustomError>::ServerError(error.to_string())
}

/// Fetches every category, with cover images resolved for the viewer.
///
/// # Returns
///
/// The categories in upstream order, or a `ServerFnError` carrying the
/// "unable to load" message when the API cannot be reached.
#[server(prefix = "/api", endpoint = "categories", input = GetUrl)]
pub async fn select_categories() -> Result<Vec<Category>, ServerFnError> {
    use crate::types::AppState;
    use leptos::prelude::expect_context;
    use shared_utils::resolve_media_url;

    let AppState { client, .. } = expect_context::<AppState>();
    let config = client.config();
    let hostname = viewer_hostname(config);

    let categories = client.categories().await.map_err(server_error)?;
    tracing::debug!(count = categories.len(), %hostname, "Loaded categories");

    Ok(categories
        .into_iter()
        .map(|mut category| {
            category.image =
                resolve_media_url(category.image.as_deref(), &hostname, config.backend_port);
            category
        })
        .collect())
}

/// Fetches the category record and its items for the reader.
///
/// The category record and the full item list are requested concurrently;
/// if either fails the whole call fails. Items are narrowed to
/// `category_id` and put in lesson order.
#[server(prefix = "/api", endpoint = "category_page", input = GetUrl)]
pub async fn select_category_page(category_id: i64) -> Result<CategoryPage, ServerFnError> {
    use crate::reader::category_items;
    use crate::types::AppState;
    use leptos::prelude::expect_context;
    use shared_utils::resolve_media_url;

    let AppState { client, .. } = expect_context::<AppState>();
    let config = client.config();
    let hostname = viewer_hostname(config);

    let (category, items) = tokio::try_join!(client.category(category_id), client.items())
        .map_err(server_error)?;

    let resolve = |url: Option<&str>| resolve_media_url(url, &hostname, config.backend_port);
    let category = category.map(|mut category| {
        category.image = resolve(category.image.as_deref());
        category
    });
    let items = category_items(items, category_id)
        .into_iter()
        .map(|mut item| {
            item.object_image = resolve(item.object_image.as_deref());
            item
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        category_id,
        found = category.is_some(),
        items = items.len(),
        "Loaded category page"
    );

    Ok(CategoryPage {
        category_id,
        category,
        items,
    })
}
