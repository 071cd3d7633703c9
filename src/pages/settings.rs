//! Settings Page
//!
//! Profile and password updates against the auth service, plus the
//! connection settings for the hosted backend.

use leptos::*;

use crate::api::{self, auth};
use crate::models::User;
use crate::state::global::GlobalState;

/// Minimum accepted password length, checked before any network call
const MIN_PASSWORD_LEN: usize = 6;

pub fn password_too_short(password: &str) -> bool {
    password.chars().count() < MIN_PASSWORD_LEN
}

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        {move || state.user.get().map(|user| view! {
            <div class="space-y-8">
                // Header
                <div>
                    <h1 class="text-3xl font-bold">"Settings"</h1>
                    <p class="text-gray-400 mt-1">"Your account and connection preferences"</p>
                </div>

                <ProfileSettings user=user />
                <PasswordSettings />
                <ConnectionSettings />
            </div>
        })}
    }
}

/// Profile section: read-only email, editable display name
#[component]
fn ProfileSettings(user: User) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let email = user.email.clone();
    let (full_name, set_full_name) = create_signal(
        user.user_metadata.full_name.clone().unwrap_or_default(),
    );
    let (saving, set_saving) = create_signal(false);

    let state_for_save = state;
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let name = full_name.get();
        set_saving.set(true);

        let state = state_for_save.clone();
        spawn_local(async move {
            match auth::update_profile(&name).await {
                Ok(updated) => {
                    // Nav picks the new name up immediately
                    state.user.set(Some(updated));
                    state.show_success("Profile updated successfully!");
                }
                Err(e) => state.show_error(&format!("Error updating profile: {}", e)),
            }
            set_saving.set(false);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Profile"</h2>

            <form on:submit=on_submit class="space-y-4 max-w-md">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                    <input
                        type="email"
                        readonly=true
                        prop:value=email
                        class="w-full bg-gray-700/50 text-gray-400 rounded-lg px-4 py-3
                               border border-gray-600 cursor-not-allowed"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Display Name"</label>
                    <input
                        type="text"
                        placeholder="How you'd like to be addressed"
                        prop:value=move || full_name.get()
                        on:input=move |ev| set_full_name.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <button
                    type="submit"
                    disabled=move || saving.get()
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || if saving.get() { "Saving..." } else { "Save Profile" }}
                </button>
            </form>
        </section>
    }
}

/// Password section with local length validation
#[component]
fn PasswordSettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (password, set_password) = create_signal(String::new());
    let (local_error, set_local_error) = create_signal(None::<String>);
    let (saving, set_saving) = create_signal(false);

    let state_for_save = state;
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let new_password = password.get();
        if password_too_short(&new_password) {
            set_local_error.set(Some("Password must be at least 6 characters.".to_string()));
            return;
        }

        set_local_error.set(None);
        set_saving.set(true);

        let state = state_for_save.clone();
        spawn_local(async move {
            match auth::update_password(&new_password).await {
                Ok(()) => {
                    state.show_success("Password changed successfully!");
                    set_password.set(String::new());
                }
                Err(e) => state.show_error(&format!("Error updating password: {}", e)),
            }
            set_saving.set(false);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Password"</h2>

            <form on:submit=on_submit class="space-y-4 max-w-md">
                {move || local_error.get().map(|msg| view! {
                    <div class="bg-red-900/40 border border-red-700 text-red-300
                                rounded-lg px-4 py-3 text-sm">
                        {msg}
                    </div>
                })}

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"New Password"</label>
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <button
                    type="submit"
                    disabled=move || saving.get()
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || if saving.get() { "Updating..." } else { "Change Password" }}
                </button>
            </form>
        </section>
    }
}

/// Connection settings for the hosted backend
#[component]
fn ConnectionSettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (service_url, set_service_url) = create_signal(api::get_service_url());
    let (service_key, set_service_key) = create_signal(api::get_service_key());

    let state_for_save = state;
    let save = move |_| {
        api::set_service_url(&service_url.get());
        api::set_service_key(&service_key.get());
        state_for_save.show_success("Connection settings saved");
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Connection"</h2>

            <div class="space-y-4 max-w-md">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Service URL"</label>
                    <input
                        type="text"
                        prop:value=move || service_url.get()
                        on:input=move |ev| set_service_url.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Publishable API Key"</label>
                    <input
                        type="text"
                        prop:value=move || service_key.get()
                        on:input=move |ev| set_service_key.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <button
                    on:click=save
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700
                           rounded-lg font-medium transition-colors"
                >
                    "Save"
                </button>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_length_check() {
        assert!(password_too_short(""));
        assert!(password_too_short("12345"));
        assert!(!password_too_short("123456"));
        assert!(!password_too_short("a much longer passphrase"));
    }
}
