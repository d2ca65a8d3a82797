//! End-to-end form scenarios: key presses in, rendered state out
//!
//! Requests go through the same background task + channel path the TUI
//! uses, with a fake prediction service on the other end.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use duygu_common::{
    FakePredictionService, Prediction, PredictionError, PredictionService, SubmissionState, Tone,
};
use duyguctl::tui::{apply_message, handle_key, spawn_prediction, FormMessage, FormTuiState, UiAction};
use std::sync::Arc;
use tokio::sync::mpsc;

struct Harness {
    state: FormTuiState,
    fake: Arc<FakePredictionService>,
    tx: mpsc::Sender<FormMessage>,
    rx: mpsc::Receiver<FormMessage>,
}

impl Harness {
    fn new(fake: FakePredictionService) -> Self {
        let (tx, rx) = mpsc::channel(8);
        Self {
            state: FormTuiState::new("http://127.0.0.1:8000/predict"),
            fake: Arc::new(fake),
            tx,
            rx,
        }
    }

    /// Press a key; a submit is sent in the background and awaited
    async fn press(&mut self, code: KeyCode) -> UiAction {
        let action = handle_key(&mut self.state, KeyEvent::new(code, KeyModifiers::NONE));
        if let UiAction::Submit(pending) = &action {
            let service: Arc<dyn PredictionService> = self.fake.clone();
            spawn_prediction(service, pending.clone(), self.tx.clone())
                .await
                .unwrap();
            let message = self.rx.recv().await.unwrap();
            apply_message(&mut self.state, message);
        }
        action
    }

    async fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.press(KeyCode::Char(c)).await;
        }
    }
}

#[tokio::test]
async fn test_positive_suggestion_round_trip() {
    let mut h = Harness::new(FakePredictionService::always_ok(Prediction::new(0.873, "positive")));

    h.press(KeyCode::F(1)).await;
    assert_eq!(h.state.form.input(), "Mehsulu chox beyendim");

    let action = h.press(KeyCode::Enter).await;
    assert!(matches!(action, UiAction::Submit(_)));
    assert_eq!(h.fake.requests(), vec!["Mehsulu chox beyendim".to_string()]);

    let result = h.state.form.view().result.expect("result shown");
    assert_eq!(result.score_text, "0.873");
    assert_eq!(result.label_text, "POSITIVE");
    assert_eq!(result.tone, Tone::Positive);
}

#[tokio::test]
async fn test_negative_typed_sentence_round_trip() {
    let mut h = Harness::new(FakePredictionService::always_ok(Prediction::new(0.212, "negative")));

    h.type_text("Servis seviyyesi chox ashagidir").await;
    h.press(KeyCode::Enter).await;

    let result = h.state.form.view().result.expect("result shown");
    assert_eq!(result.score_text, "0.212");
    assert_eq!(result.label_text, "NEGATIVE");
    assert_eq!(result.tone, Tone::Negative);
}

#[tokio::test]
async fn test_clear_before_submit_never_calls_service() {
    let mut h = Harness::new(FakePredictionService::always_ok(Prediction::new(0.9, "positive")));

    h.type_text("Bu gun hava gozeldir").await;
    h.state.clear();
    h.press(KeyCode::Enter).await;

    assert_eq!(h.fake.call_count(), 0);
    assert_eq!(h.state.form.input(), "");
    assert!(h.state.form.is_empty());
    assert!(h.state.form.result().is_none());
    assert_eq!(h.state.form.submission_state(), SubmissionState::Idle);
}

#[tokio::test]
async fn test_whitespace_never_calls_service() {
    let mut h = Harness::new(FakePredictionService::always_ok(Prediction::new(0.9, "positive")));

    h.type_text("   ").await;
    let action = h.press(KeyCode::Enter).await;

    assert_eq!(action, UiAction::None);
    assert_eq!(h.fake.call_count(), 0);
}

#[tokio::test]
async fn test_network_failure_keeps_previous_result() {
    let mut h = Harness::new(FakePredictionService::new(vec![
        Ok(Prediction::new(0.873, "positive")),
        Err(PredictionError::Transport("connection reset".into())),
    ]));

    h.press(KeyCode::F(1)).await;
    h.press(KeyCode::Enter).await;

    h.press(KeyCode::F(2)).await;
    h.press(KeyCode::Enter).await;

    assert_eq!(h.fake.call_count(), 2);
    assert_eq!(h.state.form.submission_state(), SubmissionState::Idle);
    assert_eq!(h.state.form.result(), Some(&Prediction::new(0.873, "positive")));
}

#[tokio::test]
async fn test_suggestion_after_result_keeps_result_visible() {
    let mut h = Harness::new(FakePredictionService::always_ok(Prediction::new(0.873, "positive")));

    h.press(KeyCode::F(1)).await;
    h.press(KeyCode::Enter).await;
    h.press(KeyCode::F(2)).await;

    assert_eq!(h.state.form.input(), "Servis seviyyesi chox ashagidir");
    assert_eq!(h.state.form.view().result.unwrap().score_text, "0.873");
}

#[tokio::test]
async fn test_stale_response_lands_after_clear() {
    let fake: Arc<dyn PredictionService> =
        Arc::new(FakePredictionService::always_ok(Prediction::new(0.64, "positive")));
    let (tx, mut rx) = mpsc::channel(8);
    let mut state = FormTuiState::new("http://127.0.0.1:8000/predict");

    state.click_suggestion(0);
    let action = handle_key(&mut state, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    let UiAction::Submit(pending) = action else {
        panic!("expected a submit, got {:?}", action);
    };
    let handle = spawn_prediction(fake, pending, tx);

    // Clear while the request is in flight
    state.clear();
    assert!(state.form.is_loading());

    handle.await.unwrap();
    apply_message(&mut state, rx.recv().await.unwrap());

    assert_eq!(state.form.input(), "");
    assert_eq!(state.form.view().result.unwrap().score_text, "0.640");
}
