//! This module defines the skeleton layouts shown while a page's data fetch
//! is outstanding.
//!
//! They mirror the shape of the listing and reader pages so the content does
//! not jump once it arrives, and carry no logic of their own.

use leptos::{html::div, prelude::*};

fn bar(size: &'static str) -> impl IntoView {
    div().class(format!("rounded-md animate-pulse bg-slate-200 dark:bg-zinc-800 {size}"))
}

fn card(body: impl IntoView + 'static) -> impl IntoView {
    div()
        .class("p-6 space-y-4 rounded-2xl border border-slate-200/70 dark:border-zinc-800/70")
        .child(body)
}

fn heading(widths: [&'static str; 3]) -> impl IntoView {
    div().class("space-y-4").child((
        bar(widths[0]),
        bar(widths[1]),
        bar(widths[2]),
    ))
}

/// Placeholder for the category listing.
pub fn listing() -> impl IntoView {
    div().class("flex flex-col gap-10").child((
        heading(["h-6 w-32", "h-10 w-3/5", "h-4 w-2/3"]),
        div().class("grid gap-6 md:grid-cols-2").child(
            (0..4)
                .map(|_| {
                    card((
                        div().class("space-y-3").child((bar("h-6 w-2/3"), bar("h-4 w-full"))),
                        div().class("space-y-2").child((bar("h-4 w-1/2"), bar("h-4 w-1/3"))),
                    ))
                })
                .collect_view(),
        ),
    ))
}

/// Placeholder for the category reader.
pub fn reader() -> impl IntoView {
    div().class("flex flex-col gap-10").child((
        heading(["h-6 w-40", "h-10 w-2/3", "h-4 w-1/2"]),
        div().class("grid gap-6 lg:grid-cols-[2fr_1fr]").child((
            card((
                div().class("space-y-3").child((bar("h-6 w-48"), bar("h-4 w-2/3"))),
                bar("h-64 w-full"),
                div().class("flex gap-3").child((bar("h-10 w-28"), bar("h-10 w-24"))),
            )),
            card((
                div().class("space-y-3").child((bar("h-5 w-32"), bar("h-4 w-2/3"))),
                div()
                    .class("space-y-2")
                    .child((0..4).map(|_| bar("h-9 w-full")).collect_view()),
            )),
        )),
    ))
}
