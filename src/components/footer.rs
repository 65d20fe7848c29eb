//! Site footer.

use leptos::prelude::*;

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <span class="site-footer__brand">
                "Local" <span class="site-footer__brand-accent">"Convert"</span>
            </span>
            <nav class="site-footer__nav">
                <a href="/">"Home"</a>
                <a href="/pricing">"Pricing"</a>
                <a href="#">"Privacy"</a>
                <a href="#">"Terms"</a>
                <a href="#">"Contact"</a>
            </nav>
            <p class="site-footer__copyright">
                {format!("© {} LocalConvert. All rights reserved.", current_year())}
            </p>
        </footer>
    }
}

fn current_year() -> u32 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::new_0().get_full_year()
    }
    #[cfg(not(feature = "csr"))]
    {
        2026
    }
}
