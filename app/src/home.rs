//! This module defines the `home` component, the category listing that serves
//! as the application's homepage.
//!
//! It fetches every category from the lessons API and shows them as a card
//! grid linking to the reader. While loading it shows a skeleton; when the API
//! is down the error panel offers a retry.

use leptos::{
    html::{a, div, h2, img, p, span},
    prelude::*,
};
use leptos_meta::Title;

use crate::{
    api::select_categories,
    components::{
        error_template::{self, AppError},
        header, loader, notice,
    },
    types::Category,
};

const CARD: &str = "flex flex-col gap-4 p-5 rounded-2xl border shadow-sm transition-all duration-300 border-slate-200/70 bg-white/90 hover:-translate-y-1 hover:shadow-md dark:border-zinc-800/70 dark:bg-zinc-950/70";
const PILL: &str = "py-2 px-4 text-sm font-medium rounded-full border border-slate-200 dark:border-zinc-800";

/// Renders the category listing.
///
/// The `categories` resource runs once per visit; the retry callback handed to
/// the error panel re-runs it without a full page reload.
pub fn component() -> impl IntoView {
    let categories = Resource::new(
        || (),
        |()| async move { select_categories().await.map_err(AppError::from) },
    );
    let retry = Callback::new(move |()| categories.refetch());

    view! {
        <Title text="Lets Learn"/>
        <Suspense fallback=loader::listing>
            <ErrorBoundary fallback={move |errors: ArcRwSignal<Errors>| {
                error_template::component(None, Some(errors), Some(retry))
            }}>
                {move || Suspend::new(async move { categories.await.map(listing) })}
            </ErrorBoundary>
        </Suspense>
    }
}

fn listing(categories: Vec<Category>) -> impl IntoView {
    let count = categories.len();
    let actions = (
        a().href("/").class(PILL).child("Refresh"),
        span().class(PILL).child(format!("Categories: {count}")),
    );

    let body = if categories.is_empty() {
        notice::component(
            "No categories found",
            "Add categories in the API to populate this homepage.",
        )
        .into_any()
    } else {
        categories.into_iter().map(card).collect_view().into_any()
    };

    div().class("flex flex-col gap-10").child((
        header::component(
            "Lets Learn",
            Some("API Connected".to_owned()),
            "Pick a category to start learning".to_owned(),
            "Choose a topic to explore its lessons. Each category opens a reader with big, clear cards.",
            actions,
        ),
        div().class("grid gap-6 sm:grid-cols-2 lg:grid-cols-3").child(body),
    ))
}

fn card(category: Category) -> impl IntoView {
    let href = format!("/category/{}", category.id);
    let cover = category.image.filter(|src| !src.is_empty()).map(|src| {
        div()
            .class("overflow-hidden rounded-xl aspect-[4/3] bg-slate-100 dark:bg-zinc-900")
            .child(img().src(src).alt(category.name.clone()).class("object-cover w-full h-full"))
    });

    div().class(CARD).child((
        cover,
        div().class("space-y-1").child((
            h2().class("text-xl font-semibold").child(category.name),
            p().class("text-sm text-slate-600 dark:text-zinc-300").child("Explore lessons inside this category."),
        )),
        a().href(href)
            .class("self-start py-2 px-4 text-sm font-semibold text-white rounded-full bg-slate-900 dark:bg-zinc-50 dark:text-zinc-900")
            .child("Open category"),
    ))
}
