use leptos::{
    html::{div, h1, header, p, span},
    prelude::*,
};

const BADGE: &str = "py-1 px-3 text-sm font-medium text-white rounded-full bg-slate-900 dark:bg-zinc-50 dark:text-zinc-900";
const TAG: &str = "py-1 px-3 text-sm font-medium rounded-full bg-slate-100 text-slate-700 dark:bg-zinc-800 dark:text-zinc-200";

/// Page heading: a badge row, the title with a short description, and an
/// action area on the right.
pub fn component(
    badge: &'static str,
    tag: Option<String>,
    title: String,
    description: &'static str,
    actions: impl IntoView + 'static,
) -> impl IntoView {
    header().class("flex flex-col gap-6").child((
        div().class("flex flex-wrap gap-3 items-center").child((
            span().class(BADGE).child(badge),
            tag.map(|tag| span().class(TAG).child(tag)),
        )),
        div()
            .class("flex flex-col gap-4 md:flex-row md:items-end md:justify-between")
            .child((
                div().class("space-y-3").child((
                    h1().class("text-3xl font-semibold tracking-tight sm:text-4xl").child(title),
                    p().class("max-w-2xl text-base text-slate-600 dark:text-zinc-300").child(description),
                )),
                div().class("flex flex-wrap gap-3 items-center").child(actions),
            )),
    ))
}
