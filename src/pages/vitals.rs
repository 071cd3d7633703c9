//! Log Vitals Page
//!
//! Sparse vitals entry: every metric is optional, but at least one of the
//! four primary metrics must be present before anything goes over the wire.
//! A successful save navigates back to the dashboard after a short delay.

use chrono::Utc;
use leptos::*;

use crate::api::{auth, rest};
use crate::models::{NewHealthLog, User};
use crate::state::global::GlobalState;
use crate::state::session::redirect_to;

/// Parse an optional numeric field; blank and non-numeric input is None.
pub fn parse_metric(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

#[derive(Clone, Copy)]
enum AlertKind {
    Success,
    Error,
}

/// Log vitals page component
#[component]
pub fn LogVitals() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        {move || state.user.get().map(|user| view! { <VitalsForm user=user /> })}
    }
}

#[component]
fn VitalsForm(user: User) -> impl IntoView {
    let user_id = user.id.clone();

    let (systolic, set_systolic) = create_signal(String::new());
    let (diastolic, set_diastolic) = create_signal(String::new());
    let (heart_rate, set_heart_rate) = create_signal(String::new());
    let (glucose, set_glucose) = create_signal(String::new());
    let (weight, set_weight) = create_signal(String::new());
    let (glucose_context, set_glucose_context) = create_signal("fasting".to_string());
    let (notes, set_notes) = create_signal(String::new());

    let (alert, set_alert) = create_signal(None::<(String, AlertKind)>);
    let (submitting, set_submitting) = create_signal(false);

    let today = Utc::now().format("%A, %B %e, %Y").to_string();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let entry = NewHealthLog {
            user_id: user_id.clone(),
            systolic_bp: parse_metric(&systolic.get()),
            diastolic_bp: parse_metric(&diastolic.get()),
            heart_rate: parse_metric(&heart_rate.get()),
            glucose: parse_metric(&glucose.get()),
            weight: parse_metric(&weight.get()),
            glucose_context: glucose_context.get(),
            notes: notes.get(),
            logged_at: Utc::now(),
        };

        // Local validation first: nothing goes over the wire without at
        // least one primary metric
        if !entry.has_primary_metric() {
            set_alert.set(Some((
                "Please enter at least one health metric (BP, Heart Rate, Glucose, or Weight)."
                    .to_string(),
                AlertKind::Error,
            )));
            return;
        }

        set_alert.set(None);
        set_submitting.set(true);

        spawn_local(async move {
            // Re-verify the session before writing
            match auth::current_session().await {
                Ok(Some(_)) => {}
                _ => {
                    redirect_to("/auth");
                    return;
                }
            }

            match rest::insert(rest::HEALTH_LOGS, &entry).await {
                Ok(()) => {
                    set_alert.set(Some((
                        "Vitals logged successfully! Redirecting...".to_string(),
                        AlertKind::Success,
                    )));
                    gloo_timers::callback::Timeout::new(1500, move || {
                        redirect_to("/dashboard");
                    })
                    .forget();
                }
                Err(e) => {
                    set_alert.set(Some((format!("Error saving data: {}", e), AlertKind::Error)));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="max-w-2xl mx-auto space-y-8">
            // Header with the current date
            <div>
                <h1 class="text-3xl font-bold">"Log Vitals"</h1>
                <p class="text-gray-400 mt-1">{today}</p>
            </div>

            // Inline alert
            {move || alert.get().map(|(msg, kind)| {
                let classes = match kind {
                    AlertKind::Success => "bg-green-900/40 border-green-700 text-green-300",
                    AlertKind::Error => "bg-red-900/40 border-red-700 text-red-300",
                };
                view! {
                    <div class=format!("border rounded-lg px-4 py-3 text-sm {}", classes)>
                        {msg}
                    </div>
                }
            })}

            <form on:submit=on_submit class="bg-gray-800 rounded-xl p-6 space-y-6">
                // Blood pressure
                <div class="grid grid-cols-2 gap-4">
                    <MetricInput
                        label="Systolic BP (mmHg)"
                        placeholder="120"
                        value=systolic
                        set_value=set_systolic
                    />
                    <MetricInput
                        label="Diastolic BP (mmHg)"
                        placeholder="80"
                        value=diastolic
                        set_value=set_diastolic
                    />
                </div>

                <div class="grid grid-cols-2 gap-4">
                    <MetricInput
                        label="Heart Rate (bpm)"
                        placeholder="72"
                        value=heart_rate
                        set_value=set_heart_rate
                    />
                    <MetricInput
                        label="Weight (kg)"
                        placeholder="70.5"
                        value=weight
                        set_value=set_weight
                    />
                </div>

                <div class="grid grid-cols-2 gap-4">
                    <MetricInput
                        label="Glucose (mg/dL)"
                        placeholder="95"
                        value=glucose
                        set_value=set_glucose
                    />
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Glucose Context"</label>
                        <select
                            on:change=move |ev| set_glucose_context.set(event_target_value(&ev))
                            prop:value=move || glucose_context.get()
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        >
                            <option value="fasting">"Fasting"</option>
                            <option value="post_meal">"After a meal"</option>
                            <option value="random">"Random"</option>
                        </select>
                    </div>
                </div>

                // Notes
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Notes (optional)"</label>
                    <textarea
                        rows=3
                        placeholder="Anything worth remembering about this reading"
                        prop:value=move || notes.get()
                        on:input=move |ev| set_notes.set(event_target_value(&ev))
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
                    {move || if submitting.get() { "Saving..." } else { "Save Vitals" }}
                </button>
            </form>
        </div>
    }
}

#[component]
fn MetricInput(
    label: &'static str,
    placeholder: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <input
                type="number"
                step="any"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_metric() {
        assert_eq!(parse_metric(""), None);
        assert_eq!(parse_metric("   "), None);
        assert_eq!(parse_metric("120"), Some(120.0));
        assert_eq!(parse_metric("70.5"), Some(70.5));
        assert_eq!(parse_metric("abc"), None);
    }

    #[test]
    fn test_empty_entry_fails_validation() {
        let entry = NewHealthLog {
            user_id: "u".to_string(),
            systolic_bp: parse_metric(""),
            diastolic_bp: parse_metric(""),
            heart_rate: parse_metric(""),
            glucose: parse_metric(""),
            weight: parse_metric(""),
            glucose_context: "fasting".to_string(),
            notes: String::new(),
            logged_at: Utc::now(),
        };
        assert!(!entry.has_primary_metric());
    }

    #[test]
    fn test_single_metric_passes_validation() {
        for field in ["systolic", "heart_rate", "glucose", "weight"] {
            let entry = NewHealthLog {
                user_id: "u".to_string(),
                systolic_bp: (field == "systolic").then_some(120.0),
                diastolic_bp: None,
                heart_rate: (field == "heart_rate").then_some(72.0),
                glucose: (field == "glucose").then_some(95.0),
                weight: (field == "weight").then_some(70.0),
                glucose_context: "fasting".to_string(),
                notes: String::new(),
                logged_at: Utc::now(),
            };
            assert!(entry.has_primary_metric(), "{} should pass", field);
        }
    }
}
