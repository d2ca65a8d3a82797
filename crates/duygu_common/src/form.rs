//! Sentiment form controller
//!
//! Owns the input text, the submission state and the last successful
//! prediction. All mutation goes through the `on_*` handlers and
//! `begin_submit`/`resolve`, which the TUI event loop calls one at a time.
//!
//! State machine: `Idle --begin_submit--> Loading --resolve--> Idle`.
//! `resolve` always returns to Idle, whatever the outcome and however many
//! requests were started. There is no request cancellation: a response that
//! arrives after `on_clear` still becomes the displayed result.

use crate::error::PredictionError;
use crate::prediction::{Prediction, PredictionService};
use crate::view::{FormView, ResultView, LOADING_LABEL, PLACEHOLDER, SUBMIT_LABEL};

/// Example sentences offered as one-click shortcuts
pub const SUGGESTIONS: &[&str] = &["Mehsulu chox beyendim", "Servis seviyyesi chox ashagidir"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Loading,
}

/// A request the caller must send, then report back through `resolve`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmit {
    pub sentence: String,
}

/// What a sequential `submit` did
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Input was blank, no request was sent
    Skipped,
    /// Result replaced with the new prediction
    Updated,
    /// Request failed, result left as it was
    Failed(PredictionError),
}

#[derive(Debug, Clone)]
pub struct SentimentForm {
    input: String,
    is_empty: bool,
    state: SubmissionState,
    result: Option<Prediction>,
}

impl SentimentForm {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            is_empty: true,
            state: SubmissionState::Idle,
            result: None,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_empty(&self) -> bool {
        self.is_empty
    }

    pub fn submission_state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == SubmissionState::Loading
    }

    /// Last successful prediction, whether or not it is currently displayed
    pub fn result(&self) -> Option<&Prediction> {
        self.result.as_ref()
    }

    /// Result is hidden while a request is pending
    pub fn displayed_result(&self) -> Option<&Prediction> {
        match self.state {
            SubmissionState::Idle => self.result.as_ref(),
            SubmissionState::Loading => None,
        }
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        !self.is_empty && self.state == SubmissionState::Idle
    }

    pub fn on_input_change(&mut self, new_text: impl Into<String>) {
        self.input = new_text.into();
        self.is_empty = self.input.trim().is_empty();
    }

    /// Replace the input with a suggestion. The previous result stays visible.
    pub fn on_suggestion_click(&mut self, suggestion: &str) {
        self.input = suggestion.to_string();
        self.is_empty = false;
    }

    /// Click the suggestion at `index`; false when out of range
    pub fn on_suggestion_index(&mut self, index: usize) -> bool {
        match SUGGESTIONS.get(index) {
            Some(suggestion) => {
                self.on_suggestion_click(suggestion);
                true
            }
            None => false,
        }
    }

    /// Reset input and result. A pending request keeps running.
    pub fn on_clear(&mut self) {
        self.input.clear();
        self.result = None;
        self.is_empty = true;
    }

    /// First half of a submit: guard, then enter Loading.
    ///
    /// The guard re-checks the trimmed input instead of trusting the cached
    /// flag. It does not look at the submission state.
    pub fn begin_submit(&mut self) -> Option<PendingSubmit> {
        if self.input.trim().is_empty() {
            tracing::debug!("Submit ignored: input is blank");
            return None;
        }

        self.state = SubmissionState::Loading;
        tracing::debug!("Submitting {} chars", self.input.chars().count());

        Some(PendingSubmit {
            sentence: self.input.clone(),
        })
    }

    /// Second half of a submit: apply the outcome and return to Idle.
    /// Failures are logged and otherwise swallowed.
    pub fn resolve(&mut self, outcome: Result<Prediction, PredictionError>) {
        match outcome {
            Ok(prediction) => {
                tracing::info!(
                    score = prediction.score,
                    label = %prediction.label,
                    "Prediction received"
                );
                self.result = Some(prediction);
            }
            Err(e) => {
                tracing::warn!("Error fetching sentiment score: {}", e);
            }
        }

        self.state = SubmissionState::Idle;
    }

    /// Submit and wait for the outcome in place
    pub async fn submit(&mut self, service: &dyn PredictionService) -> SubmitOutcome {
        let Some(pending) = self.begin_submit() else {
            return SubmitOutcome::Skipped;
        };

        let outcome = service.predict(&pending.sentence).await;
        let report = match &outcome {
            Ok(_) => SubmitOutcome::Updated,
            Err(e) => SubmitOutcome::Failed(e.clone()),
        };

        self.resolve(outcome);
        report
    }

    pub fn view(&self) -> FormView<'_> {
        FormView {
            input: &self.input,
            placeholder: self.input.is_empty().then_some(PLACEHOLDER),
            suggestions: SUGGESTIONS,
            submit_enabled: self.can_submit(),
            submit_label: if self.is_loading() {
                LOADING_LABEL
            } else {
                SUBMIT_LABEL
            },
            loading: self.is_loading(),
            result: self.displayed_result().map(ResultView::from_prediction),
        }
    }
}

impl Default for SentimentForm {
    fn default() -> Self {
        Self::new()
    }
}
