//! Trend Chart Component
//!
//! Dashboard line chart drawn on an HTML5 canvas: systolic blood pressure
//! as a solid line, glucose dashed. Renders from two demonstration presets
//! (7-day / 30-day) selected by a dropdown; it is not yet wired to logged
//! vitals history.

use leptos::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const SYSTOLIC_COLOR: &str = "#3b82f6";
const GLUCOSE_COLOR: &str = "#f59e0b";

/// One selectable window of demonstration data
pub struct TrendPreset {
    pub key: &'static str,
    pub label: &'static str,
    pub labels: &'static [&'static str],
    pub systolic: &'static [f64],
    pub glucose: &'static [f64],
}

/// Demonstration datasets backing the chart
pub const TREND_PRESETS: [TrendPreset; 2] = [
    TrendPreset {
        key: "7",
        label: "Last 7 days",
        labels: &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        systolic: &[120.0, 118.0, 122.0, 121.0, 119.0, 125.0, 120.0],
        glucose: &[95.0, 92.0, 98.0, 94.0, 96.0, 100.0, 95.0],
    },
    TrendPreset {
        key: "30",
        label: "Last 30 days",
        labels: &["Wk 1", "Wk 2", "Wk 3", "Wk 4"],
        systolic: &[118.0, 122.0, 119.0, 121.0],
        glucose: &[94.0, 98.0, 95.0, 96.0],
    },
];

/// Trend chart with its range dropdown and legend
#[component]
pub fn TrendChart() -> impl IntoView {
    let (preset, set_preset) = create_signal(0usize);
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the selected range changes
    create_effect(move |_| {
        let idx = preset.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &TREND_PRESETS[idx]);
        }
    });

    view! {
        <div class="relative">
            <div class="flex items-center justify-between mb-4">
                // Legend
                <div class="flex flex-wrap gap-4">
                    <LegendEntry color=SYSTOLIC_COLOR label="Systolic BP" />
                    <LegendEntry color=GLUCOSE_COLOR label="Glucose" />
                </div>

                // Range selector
                <select
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        let idx = TREND_PRESETS
                            .iter()
                            .position(|p| p.key == value)
                            .unwrap_or(0);
                        set_preset.set(idx);
                    }
                    class="bg-gray-700 rounded-lg px-3 py-2 text-sm
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                >
                    {TREND_PRESETS.iter().map(|p| view! {
                        <option value=p.key>{p.label}</option>
                    }).collect_view()}
                </select>
            </div>

            <canvas
                node_ref=canvas_ref
                width="800"
                height="400"
                class="w-full h-64 md:h-96 rounded-lg"
            />
        </div>
    }
}

#[component]
fn LegendEntry(
    color: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-2">
            <div
                class="w-3 h-3 rounded-full"
                style=format!("background-color: {}", color)
            />
            <span class="text-sm text-gray-300">{label}</span>
        </div>
    }
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, preset: &TrendPreset) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    // Global min/max across both series for the y-axis
    let mut global_min = f64::INFINITY;
    let mut global_max = f64::NEG_INFINITY;
    for value in preset.systolic.iter().chain(preset.glucose.iter()) {
        global_min = global_min.min(*value);
        global_max = global_max.max(*value);
    }

    // Add padding to y range
    let y_range = global_max - global_min;
    let y_padding = if y_range > 0.0 { y_range * 0.1 } else { 1.0 };
    global_min -= y_padding;
    global_max += y_padding;

    // Draw grid lines
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);

    // Horizontal grid lines (5 lines)
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        // Y-axis labels
        let value = global_max - (i as f64 / 5.0) * (global_max - global_min);
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    // Series: systolic solid, glucose dashed
    draw_series(&ctx, preset.systolic, SYSTOLIC_COLOR, false,
                margin_left, margin_top, chart_width, chart_height,
                global_min, global_max);
    draw_series(&ctx, preset.glucose, GLUCOSE_COLOR, true,
                margin_left, margin_top, chart_width, chart_height,
                global_min, global_max);

    // X-axis labels
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("12px sans-serif");
    let n = preset.labels.len();
    for (i, label) in preset.labels.iter().enumerate() {
        let x = x_position(i, n, margin_left, chart_width);
        let _ = ctx.fill_text(label, x - 12.0, height - 10.0);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_series(
    ctx: &CanvasRenderingContext2d,
    values: &[f64],
    color: &str,
    dashed: bool,
    margin_left: f64,
    margin_top: f64,
    chart_width: f64,
    chart_height: f64,
    global_min: f64,
    global_max: f64,
) {
    if values.is_empty() {
        return;
    }

    let dash = js_sys::Array::new();
    if dashed {
        dash.push(&JsValue::from_f64(5.0));
        dash.push(&JsValue::from_f64(5.0));
    }
    let _ = ctx.set_line_dash(&dash);

    ctx.set_stroke_style(&color.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();

    let n = values.len();
    for (i, value) in values.iter().enumerate() {
        let x = x_position(i, n, margin_left, chart_width);

        // Canvas y grows downward
        let y = margin_top + ((global_max - value) / (global_max - global_min)) * chart_height;

        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }

    ctx.stroke();

    // Restore solid strokes before drawing the points
    let _ = ctx.set_line_dash(&js_sys::Array::new());

    ctx.set_fill_style(&color.into());
    for (i, value) in values.iter().enumerate() {
        let x = x_position(i, n, margin_left, chart_width);
        let y = margin_top + ((global_max - value) / (global_max - global_min)) * chart_height;

        ctx.begin_path();
        let _ = ctx.arc(x, y, 3.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }
}

/// Evenly spaced categorical x position
fn x_position(index: usize, count: usize, margin_left: f64, chart_width: f64) -> f64 {
    if count < 2 {
        return margin_left + chart_width / 2.0;
    }
    margin_left + (index as f64 / (count - 1) as f64) * chart_width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_consistent() {
        for preset in &TREND_PRESETS {
            assert_eq!(preset.labels.len(), preset.systolic.len());
            assert_eq!(preset.labels.len(), preset.glucose.len());
            assert!(!preset.labels.is_empty());
        }
    }

    #[test]
    fn test_x_positions_span_chart() {
        let first = x_position(0, 7, 60.0, 700.0);
        let last = x_position(6, 7, 60.0, 700.0);
        assert_eq!(first, 60.0);
        assert_eq!(last, 760.0);
    }
}
