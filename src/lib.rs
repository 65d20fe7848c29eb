//! # localconvert-web
//!
//! Leptos + WASM front-end for the LocalConvert video-conversion service:
//! landing page, account flows (login, signup, email verification, password
//! reset) and Stripe-backed subscriptions reached through the REST API.
//!
//! Validation, session lifecycle, verification and billing rules are plain
//! Rust driven through the `Backend` and `SessionStore` traits, so they are
//! tested natively without a browser. Browser-only calls live behind the
//! `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod forms;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod test_support;

/// Browser entry point: installs logging and mounts the application.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    let config = config::AppConfig::load();
    let _ = console_log::init_with_level(config.log_level);
    log::info!("mounting localconvert-web api_base_url={}", config.api_base_url);
    leptos::mount::mount_to_body(app::App);
}
