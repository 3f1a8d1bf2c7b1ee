//! This module defines the `error_template` component, the last-resort boundary
//! shown when a page cannot be rendered.
//!
//! It includes the `AppError` enum shared by the pages and the lessons API
//! client, and a component that logs the failure, sets the HTTP status on the
//! server and offers a manual "Try again" action.

use http::status::StatusCode;
use leptos::{
    ev,
    html::{button, div, h1, p},
    logging,
    prelude::*,
    server_fn::error::NoCustomError,
};
use leptos_router::components::{A, AProps};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::icons;

#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
    /// The lessons API could not be reached, answered with an error status,
    /// or returned a document that could not be decoded.
    #[error("{0}")]
    RemoteUnavailable(String),
    #[error("Invalid category id: {0:?}")]
    InvalidRoute(String),
}

impl AppError {
    /// Returns the HTTP status code associated with the error.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::RemoteUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::InvalidRoute(_) => StatusCode::BAD_REQUEST,
        }
    }
}

#[allow(deprecated)]
impl From<ServerFnError> for AppError {
    fn from(error: ServerFnError) -> Self {
        match error {
            ServerFnError::<NoCustomError>::ServerError(message) => Self::RemoteUnavailable(message),
            other => Self::RemoteUnavailable(other.to_string()),
        }
    }
}

/// Renders the error panel for the errors caught by a boundary.
///
/// `outside_errors` is used for route-level failures raised before any
/// boundary exists (unknown paths); `errors` comes from an `ErrorBoundary`.
/// When `retry` is provided a "Try again" button re-runs the failed fetch.
pub fn component(
    outside_errors: Option<Errors>,
    errors: Option<ArcRwSignal<Errors>>,
    retry: Option<Callback<()>>,
) -> impl IntoView {
    let errors = match (outside_errors, errors) {
        (Some(outside), _) => ArcRwSignal::new(outside),
        (None, Some(errors)) => errors,
        (None, None) => ArcRwSignal::new(Errors::default()),
    };
    // Retrieve errors from the signal without subscribing to changes.
    let errors: Vec<AppError> = errors
        .get_untracked()
        .into_iter()
        .filter_map(|(_k, v)| v.downcast_ref::<AppError>().cloned())
        .collect();

    for error in &errors {
        logging::error!("Page render failed: {error}");
    }

    let headline = errors
        .into_iter()
        .next()
        .unwrap_or_else(|| AppError::RemoteUnavailable("Unexpected render failure".to_owned()));

    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let Some(response) = use_context::<ResponseOptions>() {
            response.set_status(headline.status_code());
        }
    }

    let (title, detail) = match headline {
        AppError::NotFound => ("Page not found", "There is nothing at this address."),
        AppError::RemoteUnavailable(_) | AppError::InvalidRoute(_) => (
            "Unable to load lessons",
            "The API could not be reached. Confirm the lessons backend is running and try again.",
        ),
    };
    let status = format!("{}| {headline}", headline.status_code());

    div()
        .class("flex flex-col items-center justify-center py-24 mx-auto w-full max-w-2xl")
        .child(
            div()
                .class("p-8 space-y-4 w-full rounded-2xl border shadow-sm border-slate-200/70 bg-white/90 dark:border-zinc-800/70 dark:bg-zinc-950/70")
                .child((
                    h1().class("text-2xl font-semibold tracking-tight").child(title),
                    p().class("text-xs tracking-widest uppercase text-slate-500 dark:text-zinc-400").child(status),
                    p().class("text-sm text-slate-600 dark:text-zinc-300").child(detail),
                    div().class("flex flex-wrap gap-3 items-center").child((
                        retry.map(|retry| {
                            button()
                                .class("py-2 px-4 text-sm font-semibold text-white rounded-full bg-slate-900 dark:bg-zinc-50 dark:text-zinc-900")
                                .on(ev::click, move |_| retry.run(()))
                                .child("Try again")
                        }),
                        div().class("flex gap-1 items-center text-sm duration-200 hover:text-sky-500").child(
                            A(AProps::builder()
                                .href("/")
                                .children(ToChildren::to_children(move || {
                                    vec![icons::previous().into_any(), "Back to categories".into_any()]
                                }))
                                .build()),
                        ),
                    )),
                )),
        )
}
