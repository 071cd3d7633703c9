//! Doctor Access Page
//!
//! Revocable share links: generate a coded link for a doctor, copy it, and
//! revoke it when the visit is over. Codes come from the CSPRNG-backed
//! generator in `token`.

use leptos::*;
use wasm_bindgen_futures::JsFuture;

use crate::api::rest;
use crate::components::{ListController, ListView};
use crate::models::{DoctorAccess as AccessRow, NewDoctorAccess, User};
use crate::state::global::GlobalState;
use crate::token;

/// Doctor access page component
#[component]
pub fn DoctorAccess() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        {move || state.user.get().map(|user| view! { <DoctorAccessContent user=user /> })}
    }
}

#[component]
fn DoctorAccessContent(user: User) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let user_id = user.id.clone();

    let codes = ListController::new({
        let user_id = user_id.clone();
        move || {
            let user_id = user_id.clone();
            async move {
                rest::select::<AccessRow>(
                    rest::DOCTOR_ACCESS,
                    &[
                        ("select", "*".to_string()),
                        ("user_id", format!("eq.{}", user_id)),
                        ("order", "created_at.desc".to_string()),
                    ],
                )
                .await
            }
        }
    });
    codes.refresh();

    let (label, set_label) = create_signal(String::new());
    let (generating, set_generating) = create_signal(false);

    let codes_for_generate = codes.clone();
    let user_id_for_generate = user_id;
    let on_generate = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let codes = codes_for_generate.clone();
        let user_id = user_id_for_generate.clone();

        let trimmed = label.get().trim().to_string();
        let doctor_name = if trimmed.is_empty() {
            "Shared Link".to_string()
        } else {
            trimmed
        };

        set_generating.set(true);
        spawn_local(async move {
            let access_code = match token::generate_access_code() {
                Ok(code) => code,
                Err(e) => {
                    if let Some(window) = web_sys::window() {
                        let _ =
                            window.alert_with_message(&format!("Error generating link: {}", e));
                    }
                    set_generating.set(false);
                    return;
                }
            };

            let row = NewDoctorAccess {
                user_id,
                access_code,
                doctor_name,
            };

            match rest::insert(rest::DOCTOR_ACCESS, &row).await {
                Ok(()) => {
                    set_label.set(String::new());
                    codes.refresh();
                }
                Err(e) => {
                    if let Some(window) = web_sys::window() {
                        let _ =
                            window.alert_with_message(&format!("Error generating link: {}", e));
                    }
                }
            }
            set_generating.set(false);
        });
    };

    let codes_for_revoke = codes.clone();
    let revoke = move |id: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(
                    "Are you sure? The doctor using this link will immediately lose access.",
                )
                .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let codes = codes_for_revoke.clone();
        spawn_local(async move {
            match rest::delete_by_id(rest::DOCTOR_ACCESS, &id).await {
                Ok(()) => codes.refresh(),
                Err(e) => {
                    if let Some(window) = web_sys::window() {
                        let _ =
                            window.alert_with_message(&format!("Error revoking access: {}", e));
                    }
                }
            }
        });
    };

    let state_for_copy = state;
    let copy_link = move |url: String| {
        let state = state_for_copy.clone();
        spawn_local(async move {
            let copied = match web_sys::window() {
                Some(window) => {
                    let clipboard = window.navigator().clipboard();
                    JsFuture::from(clipboard.write_text(&url)).await.is_ok()
                }
                None => false,
            };

            if copied {
                state.show_success("Link copied to clipboard!");
            } else if let Some(window) = web_sys::window() {
                // Clipboard unavailable: let the user copy by hand
                let _ = window.prompt_with_message_and_default("Copy this link:", &url);
            }
        });
    };

    let row = move |item: AccessRow| {
        let revoke = revoke.clone();
        let copy_link = copy_link.clone();

        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        let url = item.share_url(&origin);
        let created = item.created_at.format("%b %e, %Y").to_string();
        let item_id = item.id.clone();

        view! {
            <div class="flex items-center justify-between bg-gray-800 rounded-lg p-4
                        border border-gray-700 flex-wrap gap-3">
                <div>
                    <h4 class="font-medium">{item.label().to_string()}</h4>
                    <span class="text-gray-400 text-sm">"Created on " {created}</span>
                </div>

                <div class="flex items-center gap-3 flex-wrap">
                    <div class="flex items-center space-x-2 bg-gray-700 rounded-lg px-3 py-2">
                        <span class="font-mono text-sm text-gray-300">{item.masked_code()}</span>
                        <button
                            title="Copy full link"
                            on:click=move |_| copy_link(url.clone())
                            class="text-gray-400 hover:text-white"
                        >
                            "Copy"
                        </button>
                    </div>

                    <button
                        on:click=move |_| revoke(item_id.clone())
                        class="px-3 py-2 text-red-400 hover:text-red-300"
                    >
                        "Revoke"
                    </button>
                </div>
            </div>
        }
    };

    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Doctor Access"</h1>
                <p class="text-gray-400 mt-1">
                    "Share a read-only view of your records with a coded link"
                </p>
            </div>

            // Generate form
            <form on:submit=on_generate class="bg-gray-800 rounded-xl p-6 flex items-end gap-3 flex-wrap">
                <div class="flex-1 min-w-[200px]">
                    <label class="block text-sm text-gray-400 mb-2">"Label (optional)"</label>
                    <input
                        type="text"
                        placeholder="e.g., Dr. Chen - Cardiology"
                        prop:value=move || label.get()
                        on:input=move |ev| set_label.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <button
                    type="submit"
                    disabled=move || generating.get()
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || if generating.get() { "Generating..." } else { "Generate Link" }}
                </button>
            </form>

            // Active links
            <div class="space-y-3">
                <ListView
                    controller=codes.clone()
                    empty_title="No active share links"
                    empty_hint="Generate one to give a doctor temporary access"
                    row=row
                />
            </div>
        </div>
    }
}
