//! Auth Page
//!
//! Login / signup form sharing one set of inputs; a toggle swaps every
//! mode-dependent label and clears any visible error. An existing session
//! skips the form entirely.

use leptos::*;

use crate::api::auth;
use crate::state::global::GlobalState;
use crate::state::session::redirect_to;

/// Form mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Signup => "Create Account",
        }
    }

    pub fn toggle_text(self) -> &'static str {
        match self {
            AuthMode::Login => "Don't have an account?",
            AuthMode::Signup => "Already have an account?",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Sign Up",
            AuthMode::Signup => "Login",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            AuthMode::Login => "Login to manage your health",
            AuthMode::Signup => "Create an account to start tracking",
        }
    }
}

/// Auth page component
#[component]
pub fn AuthPage() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Already signed in: straight to the dashboard, skip the form
    let state_for_redirect = state.clone();
    create_effect(move |_| {
        if state_for_redirect.session_checked.get() && state_for_redirect.user.get().is_some() {
            redirect_to("/dashboard");
        }
    });

    let (mode, set_mode) = create_signal(AuthMode::Login);
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (alert, set_alert) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let toggle_mode = move |_| {
        set_mode.update(|m| *m = m.toggled());
        // Clear errors when switching
        set_alert.set(None);
    };

    let state_for_submit = state;
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let m = mode.get();
        let email_value = email.get();
        let password_value = password.get();

        set_alert.set(None);
        set_submitting.set(true);

        let state = state_for_submit.clone();
        spawn_local(async move {
            match m {
                AuthMode::Signup => match auth::sign_up(&email_value, &password_value).await {
                    Ok(()) => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.alert_with_message(
                                "Registration successful! Please check your email to verify \
                                 your account before logging in.",
                            );
                        }
                        // Switch back to login mode
                        set_mode.set(AuthMode::Login);
                    }
                    Err(e) => set_alert.set(Some(e)),
                },
                AuthMode::Login => match auth::sign_in(&email_value, &password_value).await {
                    Ok(session) => {
                        state.user.set(Some(session.user));
                        redirect_to("/dashboard");
                    }
                    Err(e) => set_alert.set(Some(e)),
                },
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-md mx-auto mt-12 bg-gray-800 rounded-xl p-8">
            <h1 class="text-2xl font-bold text-center">"VitalTrack"</h1>
            <p class="text-gray-400 text-center mt-1 mb-6">
                {move || mode.get().subtitle()}
            </p>

            // Dismissable inline alert
            {move || alert.get().map(|msg| view! {
                <div class="flex items-start justify-between bg-red-900/40 border border-red-700
                            text-red-300 rounded-lg px-4 py-3 mb-4 text-sm">
                    <span>{msg}</span>
                    <button
                        on:click=move |_| set_alert.set(None)
                        class="ml-3 text-red-400 hover:text-red-200"
                    >
                        "✕"
                    </button>
                </div>
            })}

            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                    <input
                        type="email"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                    <input
                        type="password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           disabled:cursor-not-allowed rounded-lg py-3 font-semibold transition-colors"
                >
                    {move || if submitting.get() {
                        "Processing...".to_string()
                    } else {
                        mode.get().submit_label().to_string()
                    }}
                </button>
            </form>

            <div class="text-center text-sm text-gray-400 mt-6">
                <span>{move || mode.get().toggle_text()}</span>
                <button
                    on:click=toggle_mode
                    class="ml-2 text-primary-400 hover:text-primary-300 font-medium"
                >
                    {move || mode.get().toggle_label()}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_labels() {
        let original = AuthMode::Login;
        let toggled_twice = original.toggled().toggled();

        assert_eq!(toggled_twice, original);
        assert_eq!(toggled_twice.submit_label(), original.submit_label());
        assert_eq!(toggled_twice.toggle_text(), original.toggle_text());
        assert_eq!(toggled_twice.toggle_label(), original.toggle_label());
        assert_eq!(toggled_twice.subtitle(), original.subtitle());
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(AuthMode::Login.submit_label(), "Login");
        assert_eq!(AuthMode::Login.toggle_label(), "Sign Up");
        assert_eq!(AuthMode::Signup.submit_label(), "Create Account");
        assert_eq!(AuthMode::Signup.toggle_label(), "Login");
    }
}
