//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Builds the shared services once per tab: the HTTP backend, the auth
//! signal seeded synchronously from `localStorage`, and the tab-scoped
//! registries for single-use tokens and checkout sessions.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::SiteFooter, header::SiteHeader};
use crate::config::AppConfig;
use crate::net::api::HttpBackend;
use crate::pages::{
    checkout_success::CheckoutSuccessPage, forgot_password::ForgotPasswordPage, home::HomePage,
    login::LoginPage, not_found::NotFoundPage, pricing::PricingPage,
    reset_password::ResetPasswordPage, signup::SignupPage, subscriptions::SubscriptionsPage,
    verify_email::VerifyEmailPage,
};
use crate::state::auth::{AuthState, refresh_profile};
use crate::state::session::{BrowserSessionStore, SessionStore};
use crate::util::once::OnceRegistry;

/// "At most once per tab" ledgers shared through context.
#[derive(Clone, Debug, Default)]
pub struct TabRegistries {
    /// Email verification tokens already submitted.
    pub verified_tokens: OnceRegistry,
    /// Checkout session ids already reconciled.
    pub reconciled_sessions: OnceRegistry,
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let backend = HttpBackend::from_config(&AppConfig::load());
    let auth = RwSignal::new(AuthState::from_session(BrowserSessionStore.load()));

    provide_context(backend.clone());
    provide_context(auth);
    provide_context(TabRegistries::default());

    if let Some(token) = auth.with_untracked(|a| a.token().map(str::to_owned)) {
        leptos::task::spawn_local(async move {
            let session = refresh_profile(&backend, &BrowserSessionStore, &token).await;
            // A logout or new login during the refresh wins.
            auth.update(|state| {
                if state.token() == Some(token.as_str()) {
                    *state = AuthState::signed_in(session);
                }
            });
        });
    }

    view! {
        <Title text="LocalConvert"/>

        <Router>
            <SiteHeader/>
            <main class="site-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                    <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>
                    <Route path=StaticSegment("verify-email") view=VerifyEmailPage/>
                    <Route path=StaticSegment("pricing") view=PricingPage/>
                    <Route path=StaticSegment("subscriptions") view=SubscriptionsPage/>
                    <Route
                        path=(StaticSegment("subscriptions"), StaticSegment("success"))
                        view=CheckoutSuccessPage
                    />
                </Routes>
            </main>
            <SiteFooter/>
        </Router>
    }
}
