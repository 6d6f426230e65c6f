//! Helpers to convert prediction payloads into egui-facing view structs.

use egui::Color32;

use crate::api::PredictionResult;
use crate::waste_info::{WasteInfo, get_waste_info};

/// Everything the result card renders for one prediction.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultView {
    /// Descriptor of the predicted category, or the fallback.
    pub info: &'static WasteInfo,
    pub confidence_label: String,
    /// Per-category rows, highest probability first.
    pub rows: Vec<PredictionRowView>,
    pub latency_label: String,
}

/// One labeled probability bar.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionRowView {
    /// Category key exactly as the service reported it.
    pub key: String,
    /// Display name of the category, or of the fallback for unknown keys.
    pub name: &'static str,
    pub icon: &'static str,
    pub percent_label: String,
    /// Bar fill in `0.0..=1.0`.
    pub fraction: f32,
    pub color: Color32,
    /// True for the row matching the predicted category.
    pub is_top: bool,
}

/// Build the result card model for a prediction.
pub fn result_view(prediction: &PredictionResult) -> ResultView {
    let top = prediction.predicted_class.trim().to_lowercase();
    let rows = sorted_predictions(prediction)
        .into_iter()
        .map(|(key, probability)| {
            let info = get_waste_info(key);
            PredictionRowView {
                key: key.to_string(),
                name: info.name,
                icon: info.icon,
                percent_label: percent_label(probability),
                fraction: bar_fraction(probability),
                color: info.color,
                is_top: key.trim().to_lowercase() == top,
            }
        })
        .collect();
    ResultView {
        info: get_waste_info(&prediction.predicted_class),
        confidence_label: confidence_label(prediction.confidence_percent),
        rows,
        latency_label: latency_label(prediction.latency_ms),
    }
}

/// Category probabilities sorted descending; equal values keep key order.
pub fn sorted_predictions(prediction: &PredictionResult) -> Vec<(&str, f64)> {
    let mut rows: Vec<(&str, f64)> = prediction
        .all_predictions
        .iter()
        .map(|(key, value)| (key.as_str(), *value))
        .collect();
    rows.sort_by(|a, b| b.1.total_cmp(&a.1));
    rows
}

/// Confidence badge text, e.g. `93.456` -> `"93.5%"`.
pub fn confidence_label(confidence_percent: f64) -> String {
    format!("{}%", fixed(confidence_percent, 1))
}

/// Row text for a probability in `0..=1`, e.g. `0.7` -> `"70.0%"`.
pub fn percent_label(probability: f64) -> String {
    format!("{}%", fixed(probability * 100.0, 1))
}

/// Footer text, e.g. `128.7` -> `"Processed in 129ms"`.
pub fn latency_label(latency_ms: f64) -> String {
    format!("Processed in {}ms", fixed(latency_ms, 0))
}

fn bar_fraction(probability: f64) -> f32 {
    if probability.is_finite() {
        probability.clamp(0.0, 1.0) as f32
    } else {
        0.0
    }
}

/// Fixed-point text for `value`, rounding exact halves away from zero.
///
/// `{:.N}` already rounds the exact binary value; it only differs on values
/// sitting exactly on a half, which it sends to even.
fn fixed(value: f64, decimals: u32) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let value = if value == 0.0 { 0.0 } else { value };
    let digits = decimals as usize;
    if is_exact_half(value, decimals) {
        let scale = 10f64.powi(decimals as i32);
        // Exact halves scale without error, so `round` sees the true tie.
        let rounded = (value * scale).round() / scale;
        return format!("{rounded:.digits$}");
    }
    format!("{value:.digits$}")
}

/// True when `value * 10^decimals` is exactly an integer plus one half.
fn is_exact_half(value: f64, decimals: u32) -> bool {
    let bits = value.abs().to_bits();
    let biased_exponent = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased_exponent == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased_exponent - 1075)
    };
    // value = mantissa * 2^exponent; integers are never halves.
    if exponent >= 0 || decimals > 19 {
        return false;
    }
    let shift = exponent.unsigned_abs();
    let doubled = u128::from(mantissa) * 10u128.pow(decimals) * 2;
    doubled != 0 && doubled.trailing_zeros() == shift
}
