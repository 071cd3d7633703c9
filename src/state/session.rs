//! Session Guard
//!
//! One reusable gate for every page that needs a signed-in user: the
//! stored session is resolved once on app mount, and `Protected` renders
//! its children only after that resolution finds a user, redirecting to
//! the auth page otherwise.

use leptos::*;

use crate::api::auth;
use crate::components::Loading;
use crate::state::global::GlobalState;

/// Resolve the stored session into global state. Runs once on app mount;
/// pages react to `state.user` afterwards.
pub fn resolve_session(state: GlobalState) {
    spawn_local(async move {
        match auth::current_session().await {
            Ok(Some(session)) => state.user.set(Some(session.user)),
            Ok(None) => state.user.set(None),
            Err(e) => {
                web_sys::console::error_1(&format!("Session check failed: {}", e).into());
                state.show_error(&e);
                state.user.set(None);
            }
        }
        state.session_checked.set(true);
    });
}

/// Navigate to an app route with a full document load.
pub fn redirect_to(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
}

/// Wrapper for protected routes: children render only with a session;
/// without one the browser is sent to the auth page before any protected
/// UI appears.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        {move || {
            if !state.session_checked.get() {
                view! { <Loading /> }.into_view()
            } else if state.user.get().is_some() {
                children().into_view()
            } else {
                redirect_to("/auth");
                view! { <Loading /> }.into_view()
            }
        }}
    }
}
