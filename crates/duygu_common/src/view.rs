//! Display rules derived from form state
//!
//! Renderers (TUI, one-shot CLI) only read `FormView`; they never inspect
//! the controller directly.

use crate::prediction::Prediction;

/// Scores strictly above this get positive styling
pub const POSITIVE_THRESHOLD: f64 = 0.5;

pub const PLACEHOLDER: &str = "Enter your sentence...";
pub const SUBMIT_LABEL: &str = "Analyze";
pub const LOADING_LABEL: &str = "Loading...";
pub const CLEAR_LABEL: &str = "Clear";
pub const SUGGESTIONS_HINT: &str = "You may try these examples";

/// Binary tone styling. Computed from the score only, never from the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
}

impl Tone {
    /// No neutral band: 0.5 itself is negative
    pub fn from_score(score: f64) -> Self {
        if score > POSITIVE_THRESHOLD {
            Tone::Positive
        } else {
            Tone::Negative
        }
    }

    pub fn is_positive(self) -> bool {
        self == Tone::Positive
    }
}

/// Result panel contents
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    /// Score with exactly three decimals
    pub score_text: String,
    /// Service label, uppercased
    pub label_text: String,
    pub tone: Tone,
}

impl ResultView {
    pub fn from_prediction(prediction: &Prediction) -> Self {
        Self {
            score_text: format_score(prediction.score),
            label_text: prediction.label.to_uppercase(),
            tone: Tone::from_score(prediction.score),
        }
    }
}

/// Three decimals, exact midpoints rounded away from zero.
///
/// `{:.3}` rounds exact midpoints to even. Only odd multiples of 1/16 sit
/// exactly halfway between two three-decimal values.
pub fn format_score(score: f64) -> String {
    let sixteenths = score * 16.0;
    let is_midpoint = sixteenths.fract() == 0.0 && sixteenths.rem_euclid(2.0) == 1.0;

    if is_midpoint {
        let rounded = (score.abs() * 1000.0).ceil().copysign(score) / 1000.0;
        format!("{:.3}", rounded)
    } else {
        format!("{:.3}", score)
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FormView<'a> {
    pub input: &'a str,
    /// Shown instead of the input while it is empty
    pub placeholder: Option<&'static str>,
    pub suggestions: &'static [&'static str],
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    pub loading: bool,
    pub result: Option<ResultView>,
}
