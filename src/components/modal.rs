//! Modal Component
//!
//! Shared overlay dialog used by the add/edit forms. Dismissable via the
//! close button or a click on the background overlay; clicks inside the
//! panel stay inside.

use leptos::*;

/// Modal dialog with a title bar and close affordances
#[component]
pub fn Modal(
    #[prop(into)] title: MaybeSignal<String>,
    on_close: impl Fn() + 'static + Clone,
    children: Children,
) -> impl IntoView {
    let on_close_overlay = on_close.clone();
    let on_close_x = on_close;

    view! {
        <div
            class="fixed inset-0 bg-black/50 flex items-center justify-center z-50"
            on:click=move |_| on_close_overlay()
        >
            <div
                class="bg-gray-800 rounded-xl p-6 w-full max-w-md mx-4"
                on:click=move |ev: web_sys::MouseEvent| ev.stop_propagation()
            >
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-xl font-semibold">{move || title.get()}</h2>
                    <button
                        on:click=move |_| on_close_x()
                        class="text-gray-400 hover:text-white"
                    >
                        "✕"
                    </button>
                </div>

                {children()}
            </div>
        </div>
    }
}
