//! This module defines the `category` component, the per-category item reader.
//!
//! The route segment names the category and the `item` query parameter the
//! current lesson. The reader shows the lesson as a large card with its image
//! (or a colour swatch when there is none), previous and next links, and a
//! sidebar that jumps to any item of the category.

use leptos::{
    html::{a, aside, button, div, h2, img, p, section, span},
    prelude::*,
};
use leptos_meta::{Title, TitleProps};
use leptos_router::hooks::{use_params_map, use_query_map};

use crate::{
    api::select_category_page,
    components::{
        error_template::{self, AppError},
        header, icons, loader, notice,
    },
    reader::{ItemVisual, Navigation, item_href, item_visual, parse_category_id, parse_item_id},
    types::{CategoryPage, Item},
};

const PANEL: &str = "p-6 rounded-3xl border shadow-sm border-slate-200/70 bg-white/90 dark:border-zinc-800/70 dark:bg-zinc-950/70";
const PILL: &str = "py-2 px-4 text-sm font-medium rounded-full border border-slate-200 dark:border-zinc-800";
const STEP: &str = "flex gap-2 items-center py-3 px-5 text-base font-semibold rounded-full";
const STEP_ENABLED: &str = "text-white bg-slate-900 hover:bg-slate-700 dark:bg-zinc-50 dark:text-zinc-900";
const STEP_DISABLED: &str = "cursor-not-allowed text-slate-400 bg-slate-100 dark:bg-zinc-900 dark:text-zinc-600";
const LINK_ACTIVE: &str = "font-semibold text-white bg-slate-900 dark:bg-zinc-50 dark:text-zinc-900";
const LINK_IDLE: &str = "hover:bg-slate-100 dark:hover:bg-zinc-900";

/// Renders the reader for `/category/{id}`.
///
/// The page resource is keyed on the parsed category id and requested item,
/// so following a previous, next or sidebar link refetches through the
/// router. A malformed category id fails the resource with
/// [`AppError::InvalidRoute`] without contacting the API.
pub fn component() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();

    let category_id = move || params.with(|params| parse_category_id(params.get_str("id")));
    let requested_item = move || query.with(|query| parse_item_id(query.get_str("item")));

    let page = Resource::new(
        move || (category_id(), requested_item()),
        |(category_id, _)| async move {
            match category_id {
                Ok(id) => select_category_page(id).await.map_err(AppError::from),
                Err(error) => Err(error),
            }
        },
    );
    let retry = Callback::new(move |()| page.refetch());

    view! {
        <Suspense fallback=loader::reader>
            <ErrorBoundary fallback={move |errors: ArcRwSignal<Errors>| {
                error_template::component(None, Some(errors), Some(retry))
            }}>
                {move || {
                    let requested = requested_item();
                    Suspend::new(async move { page.await.map(|page| reader_view(page, requested)) })
                }}
            </ErrorBoundary>
        </Suspense>
    }
}

fn reader_view(page: CategoryPage, requested: Option<i64>) -> impl IntoView {
    let CategoryPage {
        category_id,
        category,
        items,
    } = page;
    let category_name = category.map(|category| category.name);
    let title = category_name
        .clone()
        .unwrap_or_else(|| "Learning category".to_owned());
    let count = items.len();

    let actions = (
        a().href("/")
            .class(format!("flex gap-2 items-center {PILL}"))
            .child((icons::previous(), "Back to categories")),
        span().class(PILL).child(format!("Items: {count}")),
    );

    let body = match Navigation::new(&items, requested) {
        None => notice::component(
            "No items yet",
            "Create items for this category in the API to start learning.",
        )
        .into_any(),
        Some(navigation) => {
            let sidebar = sidebar(category_id, &items, navigation.index);
            div()
                .class("grid gap-6 lg:grid-cols-[2fr_1fr]")
                .child((lesson(category_id, category_name.clone(), navigation), sidebar))
                .into_any()
        }
    };

    div().class("flex flex-col gap-10").child((
        Title(TitleProps::builder().text(title.clone()).build()),
        header::component(
            "Category",
            category_name,
            title,
            "Move through the lessons one card at a time, or jump straight to any item.",
            actions,
        ),
        body,
    ))
}

fn lesson(category_id: i64, category_name: Option<String>, navigation: Navigation) -> impl IntoView {
    let Navigation {
        current,
        previous,
        next,
        ..
    } = navigation;
    let display_name = current.display_name().to_owned();
    let lesson_badge = current
        .order
        .map(|order| span().class(PILL).child(format!("Lesson {}", order + 1)));

    let visual = match item_visual(&current) {
        ItemVisual::Image(src) => div()
            .class("flex overflow-hidden justify-center items-center rounded-2xl aspect-video bg-slate-100 dark:bg-zinc-900")
            .child(img().src(src).alt(display_name.clone()).class("object-contain w-full h-full"))
            .into_any(),
        ItemVisual::Color(color) => div()
            .class("flex flex-col gap-2 justify-center items-center rounded-2xl border aspect-video border-slate-200/70 dark:border-zinc-800/70")
            .style(format!("background-color: {color}22"))
            .child((
                div().class("rounded-full shadow-inner size-24").style(format!("background-color: {color}")),
                p().class("text-sm font-medium tracking-widest uppercase text-slate-600 dark:text-zinc-300").child("Color card"),
                p().class("font-mono text-lg font-semibold").child(color),
            ))
            .into_any(),
    };

    section().class(format!("flex flex-col gap-6 {PANEL}")).child((
        div().class("flex flex-wrap gap-2 items-center").child((
            span().class(PILL).child(category_name.unwrap_or_else(|| "Category".to_owned())),
            lesson_badge,
        )),
        div().class("space-y-1").child((
            h2().class("text-4xl font-bold tracking-tight sm:text-5xl").child(current.name.clone()),
            p().class("text-base text-slate-600 dark:text-zinc-300").child("Big, clear learning cards made for kids."),
        )),
        visual,
        div().class("grid gap-4 sm:grid-cols-2").child((
            tile("Name", current.name),
            tile("Content name", display_name),
        )),
        div().class("flex flex-wrap gap-3 justify-between items-center").child((
            step(category_id, previous.map(|item| item.id), Direction::Previous),
            step(category_id, next.map(|item| item.id), Direction::Next),
        )),
    ))
}

fn tile(label: &'static str, value: String) -> impl IntoView {
    div().class("p-4 rounded-2xl bg-slate-50 dark:bg-zinc-900").child((
        p().class("text-xs tracking-widest uppercase text-slate-500 dark:text-zinc-400").child(label),
        p().class("text-2xl font-semibold").child(value),
    ))
}

#[derive(Clone, Copy)]
enum Direction {
    Previous,
    Next,
}

/// A previous/next link, or a disabled button at either end of the list.
fn step(category_id: i64, target: Option<i64>, direction: Direction) -> AnyView {
    let (label, icon) = match direction {
        Direction::Previous => ("Previous", icons::previous().into_any()),
        Direction::Next => ("Next", icons::next().into_any()),
    };
    let content = match direction {
        Direction::Previous => (icon, label.into_any()),
        Direction::Next => (label.into_any(), icon),
    };

    match target {
        Some(item_id) => a()
            .href(item_href(category_id, item_id))
            .class(format!("{STEP} {STEP_ENABLED}"))
            .child(content)
            .into_any(),
        None => button()
            .disabled(true)
            .class(format!("{STEP} {STEP_DISABLED}"))
            .child(content)
            .into_any(),
    }
}

/// Numbered links to every item; `current` is highlighted.
fn sidebar(category_id: i64, items: &[Item], current: usize) -> AnyView {
    let links = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let active = index == current;
            let tone = if active { LINK_ACTIVE } else { LINK_IDLE };
            a().href(item_href(category_id, item.id))
                .class(format!("block py-2 px-3 text-sm rounded-xl transition-colors duration-200 {tone}"))
                .attr("aria-current", active.then_some("page"))
                .child(format!("{}. {}", index + 1, item.display_name()))
        })
        .collect_view();

    aside().class(format!("flex flex-col gap-4 {PANEL}")).child((
        div().class("space-y-1").child((
            h2().class("text-lg font-semibold").child("All items"),
            p().class("text-sm text-slate-600 dark:text-zinc-300").child("Jump to any item in this category."),
        )),
        div().class("flex flex-col gap-1").child(links),
    ))
    .into_any()
}
