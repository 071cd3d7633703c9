//! Landing Page
//!
//! Public front door; the call-to-action adapts to session state.

use leptos::*;
use leptos_router::*;

use crate::state::global::GlobalState;

/// Landing page component
#[component]
pub fn Home() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🩺"</div>
            <h1 class="text-4xl font-bold mb-3">"Your health, in one place"</h1>
            <p class="text-gray-400 max-w-xl mb-8">
                "Track vitals, stay on top of medications, and share a secure "
                "read-only view with your doctor whenever you choose."
            </p>

            {move || {
                if state.user.get().is_some() {
                    view! {
                        <A
                            href="/dashboard"
                            class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                        >
                            "Go to Dashboard"
                        </A>
                    }.into_view()
                } else {
                    view! {
                        <A
                            href="/auth"
                            class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                        >
                            "Get Started"
                        </A>
                    }.into_view()
                }
            }}
        </div>
    }
}
