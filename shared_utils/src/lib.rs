//! Framework-free helpers shared by the server and the hydrated frontend.
//!
//! Everything here is a pure function of its inputs so it can be unit tested
//! without a Leptos runtime or a running lessons API.

mod color;
mod hostname;
mod list;
mod media;

pub use color::derive_color;
pub use hostname::request_hostname;
pub use list::ListResponse;
pub use media::resolve_media_url;
