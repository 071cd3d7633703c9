//! Navigation Component
//!
//! Header bar reflecting session state: guest buttons when signed out, page
//! links plus the profile dropdown when signed in. The dropdown closes on
//! any click outside its trigger or menu.

use leptos::*;
use leptos_router::*;
use wasm_bindgen::JsCast;

use crate::api::auth;
use crate::models::User;
use crate::state::global::GlobalState;
use crate::state::session::redirect_to;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🩺"</span>
                        <span class="text-xl font-bold text-white">"VitalTrack"</span>
                    </A>

                    // Guest and profile blocks are mutually exclusive
                    {move || {
                        match state.user.get() {
                            Some(user) => view! { <ProfileSection user=user /> }.into_view(),
                            None => view! { <GuestButtons /> }.into_view(),
                        }
                    }}
                </div>
            </div>
        </nav>
    }
}

/// Links shown when nobody is signed in
#[component]
fn GuestButtons() -> impl IntoView {
    view! {
        <div class="flex items-center space-x-3">
            <A
                href="/auth"
                class="px-4 py-2 rounded-lg text-gray-300 hover:text-white transition-colors"
            >
                "Login"
            </A>
            <A
                href="/auth"
                class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Get Started"
            </A>
        </div>
    }
}

/// Page links and the profile dropdown for a signed-in user
#[component]
fn ProfileSection(user: User) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (open, set_open) = create_signal(false);
    let trigger_ref = create_node_ref::<html::Button>();
    let menu_ref = create_node_ref::<html::Div>();

    let avatar = user.avatar_url();
    let display_name = user.display_name().to_string();
    let email = user.email.clone();

    // Close the dropdown on any click that lands outside it
    let _outside_click = window_event_listener(ev::click, move |ev: web_sys::MouseEvent| {
        if !open.get_untracked() {
            return;
        }
        let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        let inside_trigger = trigger_ref
            .get_untracked()
            .map(|el| el.contains(target.as_ref()))
            .unwrap_or(false);
        let inside_menu = menu_ref
            .get_untracked()
            .map(|el| el.contains(target.as_ref()))
            .unwrap_or(false);
        if !inside_trigger && !inside_menu {
            set_open.set(false);
        }
    });

    let state_for_logout = state;
    let logout = move |_| {
        let state = state_for_logout.clone();
        spawn_local(async move {
            match auth::sign_out().await {
                Ok(()) => {
                    state.user.set(None);
                    redirect_to("/");
                }
                Err(e) => state.show_error(&e),
            }
        });
    };

    view! {
        <div class="flex items-center space-x-1">
            <NavLink href="/dashboard" label="Dashboard" />
            <NavLink href="/medications" label="Medications" />
            <NavLink href="/vitals/log" label="Log Vitals" />
            <NavLink href="/doctor-access" label="Doctor Access" />

            <div class="relative ml-3">
                <button
                    node_ref=trigger_ref
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        set_open.update(|o| *o = !*o);
                    }
                    class="flex items-center space-x-2 pl-3"
                >
                    <img src=avatar alt="avatar" class="w-8 h-8 rounded-full" />
                    <span class="text-sm text-gray-300">{display_name}</span>
                </button>

                {move || {
                    let logout = logout.clone();
                    let email = email.clone();
                    open.get().then(move || view! {
                        <div
                            node_ref=menu_ref
                            class="absolute right-0 mt-2 w-48 bg-gray-800 border border-gray-700
                                   rounded-lg shadow-lg py-1 z-40"
                        >
                            <div class="px-4 py-2 border-b border-gray-700">
                                <p class="text-sm text-gray-400 truncate">{email}</p>
                            </div>
                            <A
                                href="/settings"
                                class="block px-4 py-2 text-sm text-gray-300 hover:bg-gray-700"
                            >
                                "Settings"
                            </A>
                            <button
                                on:click=logout
                                class="w-full text-left px-4 py-2 text-sm text-gray-300 hover:bg-gray-700"
                            >
                                "Logout"
                            </button>
                        </div>
                    })
                }}
            </div>
        </div>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
