use leptos::{
    html::{div, h2, p},
    prelude::*,
};

/// Card shown in place of content when the API has nothing to list yet.
pub fn component(title: &'static str, description: &'static str) -> impl IntoView {
    div()
        .class("p-6 space-y-2 rounded-2xl border shadow-sm md:col-span-2 border-slate-200/70 bg-white/80 dark:border-zinc-800/70 dark:bg-zinc-950/70")
        .child((
            h2().class("text-lg font-semibold").child(title),
            p().class("text-sm text-slate-600 dark:text-zinc-300").child(description),
        ))
}
