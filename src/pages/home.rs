//! Landing page: hero, tool grid and sign-in call to action.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// A converter tool advertised on the landing page.
struct Tool {
    action: &'static str,
    title: &'static str,
    blurb: &'static str,
}

const TOOLS: &[Tool] = &[
    Tool { action: "trim", title: "Trim", blurb: "Cut video" },
    Tool { action: "crop", title: "Crop", blurb: "Resize video" },
    Tool { action: "merge", title: "Merge", blurb: "Combine videos" },
    Tool { action: "speed", title: "Speed", blurb: "Change pace" },
    Tool { action: "rotate", title: "Rotate", blurb: "Flip video" },
    Tool { action: "compress", title: "Compress", blurb: "Reduce size" },
];

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let signed_out = move || auth.with(|a| a.user().is_none());

    view! {
        <section class="hero">
            <h1 class="hero__title">
                "Convert Videos " <span class="hero__accent">"Locally"</span>
                <br/>
                "with Privacy"
            </h1>
            <p class="hero__lead">
                "Fast, secure video conversion powered by WebAssembly. Your files never leave your device."
            </p>
        </section>

        <section class="tools">
            <h2>"Powerful Video Tools"</h2>
            <p>"All the tools you need to edit your videos, right in your browser"</p>
            <div class="tools__grid">
                {TOOLS
                    .iter()
                    .map(|tool| {
                        // The editor is a separate app; skip client-side routing.
                        view! {
                            <a class="tool-card" rel="external" href=format!("/tool?action={}", tool.action)>
                                <h3>{tool.title}</h3>
                                <p>{tool.blurb}</p>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="cta">
            <h2>"Ready to get started?"</h2>
            <p>"Join thousands of users who trust LocalConvert for their video editing needs"</p>
            <Show when=signed_out>
                <a href="/login" class="btn btn--primary btn--large">"Sign In Now"</a>
            </Show>
        </section>
    }
}
