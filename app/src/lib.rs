// Core application modules and components
use crate::components::error_template;
use chrono::{Datelike as _, Utc};
use leptos::{
    html::{body, footer, head, html, meta, p},
    prelude::*,
};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, Title, TitleProps, provide_meta_context};
use leptos_router::{
    ParamSegment, SsrMode, StaticSegment,
    components::{FlatRoutes, Route, Router},
};

pub mod api;
mod category;
#[cfg(feature = "ssr")]
pub mod client;
mod components;
#[cfg(feature = "ssr")]
pub mod config;
mod home;
pub mod reader;
pub mod types;

pub use components::error_template::AppError;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let html_comp = html().lang("en").child((
        head().child((
            meta().charset("utf-8"),
            meta()
                .name("viewport")
                .content("width=device-width, initial-scale=1"),
            HydrationScripts(HydrationScriptsProps::builder().options(options).build()),
            MetaTags(),
            Stylesheet(
                StylesheetProps::builder()
                    .id("leptos")
                    .href("/pkg/lets-learn.css")
                    .build(),
            ),
            Title(TitleProps::builder().text("Lets Learn").build()),
        )),
        body()
            .class("min-h-screen bg-slate-50 text-slate-900 dark:bg-zinc-950 dark:text-zinc-50")
            .child(self::component),
    ));

    view! {
        <!DOCTYPE html>
        {html_comp}
    }
}

#[must_use]
pub fn component() -> impl IntoView {
    view! {
        <Router>
            <div class="flex flex-col min-h-screen font-sans">
                <main class="container flex flex-col flex-1 gap-8 px-4 pt-12 pb-16 mx-auto max-w-6xl">
                    <FlatRoutes fallback=|| {
                        let mut outside_errors = Errors::default();
                        outside_errors.insert_with_default_key(error_template::AppError::NotFound);
                        error_template::component(Some(outside_errors), None, None)
                    }>
                        <Route path=StaticSegment("") view=home::component ssr=SsrMode::Async/>
                        <Route path=(StaticSegment("category"), ParamSegment("id")) view=category::component ssr=SsrMode::Async/>
                    </FlatRoutes>
                </main>
                {footer_component()}
            </div>
        </Router>
    }
}

fn footer_component() -> impl IntoView {
    footer()
        .class("py-6 text-center border-t border-slate-200/70 dark:border-zinc-800/70")
        .child(
            p().class("text-sm text-slate-500 dark:text-zinc-400")
                .child(format!("Lets Learn \u{a9} {}", Utc::now().year())),
        )
}
