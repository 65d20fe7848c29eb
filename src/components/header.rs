//! Site header: brand, primary navigation and the user menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered on every route. Reads `RwSignal<AuthState>` from context and owns
//! the sign-out action.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::User;
use crate::state::auth::{AuthState, logout};
use crate::state::session::BrowserSessionStore;
use crate::util::nav::go;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <header class="site-header">
            <a href="/" class="site-header__brand">
                "Local" <span class="site-header__brand-accent">"Convert"</span>
            </a>
            <nav class="site-header__nav">
                <a href="/">"Home"</a>
                <a href="/pricing">"Pricing"</a>
                <a href="/subscriptions">"Subscriptions"</a>
                <Show
                    when=move || auth.with(|a| a.user().is_some())
                    fallback=|| view! { <a href="/login" class="btn btn--primary">"Sign In"</a> }
                >
                    <UserMenu/>
                </Show>
            </nav>
        </header>
    }
}

/// Avatar button with a dropdown holding the email and "Sign out".
#[component]
fn UserMenu() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let menu_open = RwSignal::new(false);

    let on_sign_out = move |_| {
        menu_open.set(false);
        let destination = logout(&BrowserSessionStore);
        auth.set(AuthState::default());
        go(&navigate, &destination);
    };

    let field = move |pick: fn(&User) -> String| {
        move || auth.with(|a| a.user().map(pick).unwrap_or_default())
    };

    view! {
        <div class="user-menu">
            <button
                class="user-menu__trigger"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                <span class="user-menu__avatar">{field(User::initial)}</span>
                <span class="user-menu__name">{field(User::display_name)}</span>
            </button>
            <Show when=move || menu_open.get()>
                <button
                    class="user-menu__backdrop"
                    aria-label="Close menu"
                    on:click=move |_| menu_open.set(false)
                ></button>
                <div class="user-menu__dropdown">
                    <p class="user-menu__email">{field(|u| u.email.clone())}</p>
                    <button class="user-menu__sign-out" on:click=on_sign_out.clone()>
                        "Sign out"
                    </button>
                </div>
            </Show>
        </div>
    }
}
