//! Medications Page
//!
//! Medication list with a single modal form serving both create and update.
//! Deletes ask for confirmation; every successful mutation refetches the
//! whole list.

use leptos::*;

use crate::api::rest;
use crate::components::{ListController, ListView, Modal};
use crate::models::{Medication, MedicationChanges, NewMedication, User};
use crate::state::global::GlobalState;

/// Medications page component
#[component]
pub fn Medications() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        {move || state.user.get().map(|user| view! { <MedicationsContent user=user /> })}
    }
}

#[component]
fn MedicationsContent(user: User) -> impl IntoView {
    let user_id = user.id.clone();

    let meds = ListController::new({
        let user_id = user_id.clone();
        move || {
            let user_id = user_id.clone();
            async move {
                rest::select::<Medication>(
                    rest::MEDICATIONS,
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
    meds.refresh();

    // Some(record) puts the modal in edit mode; None is a fresh add
    let (editing, set_editing) = create_signal(None::<Medication>);
    let (show_modal, set_show_modal) = create_signal(false);

    let open_add = move |_| {
        set_editing.set(None);
        set_show_modal.set(true);
    };

    let open_edit = move |med: Medication| {
        set_editing.set(Some(med));
        set_show_modal.set(true);
    };

    let meds_for_delete = meds.clone();
    let delete_med = move |id: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Are you sure you want to remove this medication?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let meds = meds_for_delete.clone();
        spawn_local(async move {
            match rest::delete_by_id(rest::MEDICATIONS, &id).await {
                Ok(()) => meds.refresh(),
                Err(e) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(&format!("Error deleting: {}", e));
                    }
                }
            }
        });
    };

    let row = move |med: Medication| {
        let delete_med = delete_med.clone();
        let med_for_edit = med.clone();
        let med_id = med.id.clone();

        view! {
            <li class="flex items-center justify-between bg-gray-800 rounded-lg p-4
                       border border-gray-700 hover:border-gray-600 transition-colors">
                <div class="flex items-center space-x-3">
                    <span class="text-2xl">"💊"</span>
                    <div>
                        <span class="block font-medium">{med.name.clone()}</span>
                        <span class="text-gray-400 text-sm">
                            {med.dosage.clone()} " • " {med.frequency.clone()}
                        </span>
                    </div>
                </div>
                <div class="flex items-center space-x-2">
                    <button
                        title="Edit"
                        on:click=move |_| open_edit(med_for_edit.clone())
                        class="px-3 py-2 text-primary-400 hover:text-primary-300"
                    >
                        "Edit"
                    </button>
                    <button
                        title="Delete"
                        on:click=move |_| delete_med(med_id.clone())
                        class="px-3 py-2 text-red-400 hover:text-red-300"
                    >
                        "Delete"
                    </button>
                </div>
            </li>
        }
    };

    let meds_for_saved = meds.clone();
    let user_id_for_modal = user_id;

    view! {
        <div class="space-y-8">
            // Header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Medications"</h1>
                    <p class="text-gray-400 mt-1">"Everything you're currently taking"</p>
                </div>

                <button
                    on:click=open_add
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "+ Add Medication"
                </button>
            </div>

            // Add / edit modal
            {move || {
                let meds = meds_for_saved.clone();
                let user_id = user_id_for_modal.clone();
                show_modal.get().then(move || view! {
                    <MedicationModal
                        user_id=user_id
                        editing=editing.get()
                        on_close=move || set_show_modal.set(false)
                        on_saved=move || {
                            set_show_modal.set(false);
                            meds.refresh();
                        }
                    />
                })
            }}

            // List
            <ul class="space-y-3">
                <ListView
                    controller=meds.clone()
                    empty_title="No medications yet"
                    empty_hint="Add your first medication to start tracking"
                    row=row
                />
            </ul>
        </div>
    }
}

/// One form for create and update; the presence of the editing record's id
/// selects update-by-id over insert.
#[component]
fn MedicationModal(
    user_id: String,
    editing: Option<Medication>,
    on_close: impl Fn() + 'static + Clone,
    on_saved: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let editing_id = editing.as_ref().map(|m| m.id.clone());
    let is_edit = editing_id.is_some();

    let (name, set_name) =
        create_signal(editing.as_ref().map(|m| m.name.clone()).unwrap_or_default());
    let (dosage, set_dosage) =
        create_signal(editing.as_ref().map(|m| m.dosage.clone()).unwrap_or_default());
    let (frequency, set_frequency) =
        create_signal(editing.as_ref().map(|m| m.frequency.clone()).unwrap_or_default());
    let (submitting, set_submitting) = create_signal(false);

    let title = if is_edit { "Edit Medication" } else { "Add Medication" };
    let submit_label = if is_edit { "Update Medicine" } else { "Add Medicine" };
    let busy_label = if is_edit { "Updating..." } else { "Adding..." };

    let on_close_for_modal = on_close.clone();
    let on_close_for_cancel = on_close;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let n = name.get();
        let d = dosage.get();
        let f = frequency.get();

        set_submitting.set(true);

        let editing_id = editing_id.clone();
        let user_id = user_id.clone();
        let on_saved = on_saved.clone();
        spawn_local(async move {
            let result = match editing_id {
                Some(id) => {
                    rest::update_by_id(
                        rest::MEDICATIONS,
                        &id,
                        &MedicationChanges {
                            name: n,
                            dosage: d,
                            frequency: f,
                        },
                    )
                    .await
                }
                None => {
                    rest::insert(
                        rest::MEDICATIONS,
                        &NewMedication {
                            user_id,
                            name: n,
                            dosage: d,
                            frequency: f,
                        },
                    )
                    .await
                }
            };

            match result {
                Ok(()) => on_saved(),
                Err(e) => {
                    // Modal stays open so the input isn't lost
                    if let Some(window) = web_sys::window() {
                        let _ = window
                            .alert_with_message(&format!("Error saving medication: {}", e));
                    }
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <Modal title=title.to_string() on_close=on_close_for_modal>
            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Name"</label>
                    <input
                        type="text"
                        required=true
                        placeholder="e.g., Metformin"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Dosage"</label>
                    <input
                        type="text"
                        required=true
                        placeholder="e.g., 500mg"
                        prop:value=move || dosage.get()
                        on:input=move |ev| set_dosage.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Frequency"</label>
                    <input
                        type="text"
                        required=true
                        placeholder="e.g., Twice daily"
                        prop:value=move || frequency.get()
                        on:input=move |ev| set_frequency.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div class="flex space-x-3 pt-4">
                    <button
                        type="button"
                        on:click=move |_| on_close_for_cancel()
                        class="flex-1 px-4 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                    >
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="flex-1 px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if submitting.get() { busy_label } else { submit_label }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
