//! Dashboard Page
//!
//! Today's medication overview (pending count plus mark-as-taken) and the
//! vitals trend chart.

use std::collections::HashSet;

use chrono::{DateTime, TimeZone, Utc};
use leptos::*;
use leptos_router::*;

use crate::api::rest;
use crate::components::TrendChart;
use crate::models::{Medication, MedicationLog, NewMedicationLog, User};
use crate::state::global::GlobalState;

/// Rows shown in the today list regardless of how many medications exist
const DASHBOARD_MED_LIMIT: usize = 4;

/// Start of the current day in UTC; today's logs are everything at or
/// after this instant.
pub fn start_of_day_utc(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive()
        .and_hms_opt(0, 0, 0)
        .map(|midnight| Utc.from_utc_datetime(&midnight))
        .unwrap_or(now)
}

/// Distinct medication ids appearing in today's logs. A medication logged
/// twice still counts once.
pub fn distinct_taken_ids(logs: &[MedicationLog]) -> HashSet<String> {
    logs.iter().map(|log| log.medication_id.clone()).collect()
}

/// Medications not yet logged today, floored at zero.
pub fn pending_count(total: usize, taken: usize) -> usize {
    total.saturating_sub(taken)
}

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        {move || state.user.get().map(|user| view! { <DashboardContent user=user /> })}
    }
}

#[component]
fn DashboardContent(user: User) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let user_id = user.id.clone();
    let email = user.email.clone();
    let avatar = user.avatar_url();

    let (meds, set_meds) = create_signal(Vec::<Medication>::new());
    let (taken, set_taken) = create_signal(HashSet::<String>::new());
    let (inflight, set_inflight) = create_signal(HashSet::<String>::new());
    let (loading, set_loading) = create_signal(true);

    // Two independent reads, combined client-side
    let user_id_for_effect = user_id.clone();
    create_effect(move |_| {
        let user_id = user_id_for_effect.clone();
        spawn_local(async move {
            set_loading.set(true);

            match rest::select::<Medication>(
                rest::MEDICATIONS,
                &[
                    ("select", "*".to_string()),
                    ("user_id", format!("eq.{}", user_id)),
                    ("order", "created_at.desc".to_string()),
                ],
            )
            .await
            {
                Ok(rows) => set_meds.set(rows),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch medications: {}", e).into(),
                    );
                }
            }

            let since = start_of_day_utc(Utc::now());
            match rest::select::<MedicationLog>(
                rest::MEDICATION_LOGS,
                &[
                    ("select", "*".to_string()),
                    ("user_id", format!("eq.{}", user_id)),
                    ("taken_at", format!("gte.{}", since.to_rfc3339())),
                ],
            )
            .await
            {
                Ok(logs) => set_taken.set(distinct_taken_ids(&logs)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch today's logs: {}", e).into());
                }
            }

            set_loading.set(false);
        });
    });

    let pending = create_memo(move |_| pending_count(meds.get().len(), taken.get().len()));

    // Insert one log entry, then decrement the displayed count locally;
    // this is the one mutation that skips the refetch
    let state_for_taken = state;
    let user_id_for_taken = user_id;
    let mark_taken = move |med_id: String| {
        let state = state_for_taken.clone();
        let user_id = user_id_for_taken.clone();

        set_inflight.update(|s| {
            s.insert(med_id.clone());
        });

        spawn_local(async move {
            let entry = NewMedicationLog {
                user_id,
                medication_id: med_id.clone(),
                status: "taken".to_string(),
                taken_at: Utc::now(),
            };

            match rest::insert(rest::MEDICATION_LOGS, &entry).await {
                Ok(()) => {
                    set_taken.update(|s| {
                        s.insert(med_id.clone());
                    });
                }
                Err(e) => state.show_error(&format!("Could not mark as taken: {}", e)),
            }

            set_inflight.update(|s| {
                s.remove(&med_id);
            });
        });
    };

    view! {
        <div class="space-y-8">
            // Page header with identity
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Dashboard"</h1>
                    <p class="text-gray-400 mt-1">"Welcome back, " {email}</p>
                </div>
                <img src=avatar alt="avatar" class="w-10 h-10 rounded-full" />
            </div>

            // Summary row
            <section class="grid grid-cols-2 md:grid-cols-3 gap-4">
                <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
                    <span class="text-gray-400 text-sm">"Medications pending today"</span>
                    <div class="text-3xl font-bold mt-2">{move || pending.get()}</div>
                </div>
                <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
                    <span class="text-gray-400 text-sm">"Medications tracked"</span>
                    <div class="text-3xl font-bold mt-2">{move || meds.get().len()}</div>
                </div>
                <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 flex flex-col justify-between">
                    <span class="text-gray-400 text-sm">"Quick entry"</span>
                    <A
                        href="/vitals/log"
                        class="mt-2 text-primary-400 hover:text-primary-300 font-medium"
                    >
                        "Log today's vitals →"
                    </A>
                </div>
            </section>

            // Today's medications
            <section class="bg-gray-800 rounded-xl p-6">
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-xl font-semibold">"Today's Medications"</h2>
                    <A href="/medications" class="text-sm text-primary-400 hover:text-primary-300">
                        "Manage"
                    </A>
                </div>

                {move || {
                    if loading.get() {
                        return view! {
                            <div class="h-24 flex items-center justify-center">
                                <div class="loading-spinner w-8 h-8" />
                            </div>
                        }.into_view();
                    }

                    let rows: Vec<Medication> =
                        meds.get().into_iter().take(DASHBOARD_MED_LIMIT).collect();

                    if rows.is_empty() {
                        view! {
                            <p class="text-gray-400 text-sm">
                                "No medications yet. Add one from the Medications page."
                            </p>
                        }.into_view()
                    } else {
                        let mark_taken = mark_taken.clone();
                        rows.into_iter().map(|med| {
                            let mark_taken = mark_taken.clone();
                            let med_id = med.id.clone();
                            let done = {
                                let med_id = med_id.clone();
                                move || taken.get().contains(&med_id)
                            };
                            let busy = {
                                let med_id = med_id.clone();
                                move || inflight.get().contains(&med_id)
                            };
                            let done_for_class = done.clone();
                            let done_for_checked = done.clone();

                            view! {
                                <div class="flex items-center justify-between py-3 border-b border-gray-700 last:border-0">
                                    <div>
                                        <span class=move || {
                                            if done_for_class() {
                                                "line-through text-gray-500"
                                            } else {
                                                "text-gray-200"
                                            }
                                        }>
                                            {med.name.clone()}
                                        </span>
                                        <span class="text-gray-400 text-sm ml-2">
                                            {med.dosage.clone()} " • " {med.frequency.clone()}
                                        </span>
                                    </div>
                                    <input
                                        type="checkbox"
                                        prop:checked=done_for_checked
                                        disabled=move || done() || busy()
                                        on:change=move |_| mark_taken(med_id.clone())
                                        class="w-5 h-5 accent-primary-600"
                                    />
                                </div>
                            }
                        }).collect_view()
                    }
                }}
            </section>

            // Trend chart
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Your Trends"</h2>
                <TrendChart />
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn log(medication_id: &str) -> MedicationLog {
        MedicationLog {
            id: "l1".to_string(),
            user_id: "u1".to_string(),
            medication_id: medication_id.to_string(),
            status: "taken".to_string(),
            taken_at: Utc::now(),
        }
    }

    #[test]
    fn test_start_of_day_utc() {
        let afternoon = Utc.from_utc_datetime(
            &NaiveDate::from_ymd_opt(2026, 8, 6)
                .unwrap()
                .and_hms_opt(15, 30, 45)
                .unwrap(),
        );
        let midnight = start_of_day_utc(afternoon);
        assert_eq!(midnight.to_rfc3339(), "2026-08-06T00:00:00+00:00");
    }

    #[test]
    fn test_distinct_taken_ids_dedups() {
        let logs = vec![log("a"), log("b"), log("a")];
        let ids = distinct_taken_ids(&logs);
        assert_eq!(ids.len(), 2);
        assert!(ids.contains("a"));
        assert!(ids.contains("b"));
    }

    #[test]
    fn test_pending_count() {
        // 5 medications, 2 distinct logged today
        assert_eq!(pending_count(5, 2), 3);
        // Floors at zero when logs reference since-deleted medications
        assert_eq!(pending_count(2, 5), 0);
        assert_eq!(pending_count(0, 0), 0);
    }
}
