//! HTTP Handlers

mod api;
mod views;

pub use api::proxy_api;
pub use views::{not_found, render_view};
