use icondata::{BsArrowLeft, BsArrowRight, Icon};
use leptos::{prelude::*, svg::svg};

fn icon(data: Icon) -> impl IntoView {
    svg()
        .attr("viewBox", data.view_box)
        .attr("fill", "currentColor")
        .attr("aria-hidden", "true")
        .class("size-4")
        .inner_html(data.data)
}

pub fn previous() -> impl IntoView {
    icon(BsArrowLeft)
}

pub fn next() -> impl IntoView {
    icon(BsArrowRight)
}
