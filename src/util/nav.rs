//! Navigation targets.
//!
//! Flows return a `Destination`; pages decide when to act on it. Internal
//! routes go through the router, external URLs (Stripe checkout) replace the
//! whole page.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use leptos_router::NavigateOptions;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Destination {
    Home,
    Login,
    Pricing,
    Subscriptions,
    /// Full-page navigation to another origin.
    External(String),
}

impl Destination {
    /// In-app route, or `None` for external targets.
    pub fn route(&self) -> Option<&str> {
        match self {
            Self::Home => Some("/"),
            Self::Login => Some("/login"),
            Self::Pricing => Some("/pricing"),
            Self::Subscriptions => Some("/subscriptions"),
            Self::External(_) => None,
        }
    }
}

/// Acts on `destination` with the router's `navigate` for in-app routes.
pub fn go<F>(navigate: &F, destination: &Destination)
where
    F: Fn(&str, NavigateOptions),
{
    match destination.route() {
        Some(route) => navigate(route, NavigateOptions::default()),
        None => {
            if let Destination::External(url) = destination {
                redirect_external(url);
            }
        }
    }
}

/// Replaces the current document; the app resumes only on return navigation.
pub fn redirect_external(url: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(url).is_err() {
                log::warn!("failed to navigate to external url");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
    }
}

/// Non-empty, trimmed query value.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}
