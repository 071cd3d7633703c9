//! App Root Component
//!
//! Routing, global providers, and the one-time session resolution every
//! page waits on.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{AuthPage, Dashboard, DoctorAccess, Home, LogVitals, Medications, Settings};
use crate::state::global::{provide_global_state, GlobalState};
use crate::state::session::{resolve_session, Protected};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    // Resolve the stored session once; every page reacts to the result
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    resolve_session(state);

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/auth" view=AuthPage />
                        <Route path="/dashboard" view=|| view! {
                            <Protected><Dashboard /></Protected>
                        } />
                        <Route path="/medications" view=|| view! {
                            <Protected><Medications /></Protected>
                        } />
                        <Route path="/vitals/log" view=|| view! {
                            <Protected><LogVitals /></Protected>
                        } />
                        <Route path="/doctor-access" view=|| view! {
                            <Protected><DoctorAccess /></Protected>
                        } />
                        <Route path="/settings" view=|| view! {
                            <Protected><Settings /></Protected>
                        } />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Back Home"
            </A>
        </div>
    }
}
