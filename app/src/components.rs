//! This module serves as a container for the reusable UI components shared by
//! the listing and reader pages.
//!
//! Each sub-module defines a specific UI element or template, such as the
//! error boundary panel, the page header, icons, loading skeletons or the
//! empty-state notice.

pub mod error_template;
pub mod header;
pub mod icons;
pub mod loader;
pub mod notice;
