//! Event Loop - TUI entry point and message handling
//!
//! Predictions run in spawned tasks and come back as `FormMessage`s on an
//! mpsc channel, so typing, clearing and clicking keep working while a
//! request is pending.

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        Event, KeyEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use duygu_common::{PendingSubmit, Prediction, PredictionError, PredictionService};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::input::{handle_key, handle_mouse, handle_paste, UiAction};
use super::layout::compute_layout;
use super::render::draw_ui;
use super::state::FormTuiState;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Messages from background tasks
#[derive(Debug)]
pub enum FormMessage {
    PredictionResolved(Result<Prediction, PredictionError>),
}

/// Apply a background message to the state
pub fn apply_message(state: &mut FormTuiState, message: FormMessage) {
    match message {
        FormMessage::PredictionResolved(outcome) => state.form.resolve(outcome),
    }
}

/// Send one prediction request in the background
pub fn spawn_prediction(
    service: Arc<dyn PredictionService>,
    pending: PendingSubmit,
    tx: mpsc::Sender<FormMessage>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let outcome = service.predict(&pending.sentence).await;
        if tx.send(FormMessage::PredictionResolved(outcome)).await.is_err() {
            debug!("TUI closed before the prediction resolved");
        }
    })
}

/// Run the TUI
pub async fn run(service: Arc<dyn PredictionService>, endpoint: String) -> Result<()> {
    enable_raw_mode().map_err(|e| {
        anyhow::anyhow!(
            "Failed to enable raw mode: {}. Ensure you're running in a real terminal (TTY).",
            e
        )
    })?;

    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    ).map_err(|e| {
        let _ = disable_raw_mode();
        anyhow::anyhow!("Failed to initialize terminal: {}", e)
    })?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    info!("TUI started against {}", endpoint);
    let mut state = FormTuiState::new(endpoint);
    let (tx, mut rx) = mpsc::channel(32);

    let result = run_event_loop(&mut terminal, &mut state, service, tx, &mut rx).await;

    // Always attempt cleanup
    let cleanup_result = restore_terminal(&mut terminal);
    info!("TUI stopped");

    result.and(cleanup_result)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut FormTuiState,
    service: Arc<dyn PredictionService>,
    tx: mpsc::Sender<FormMessage>,
    rx: &mut mpsc::Receiver<FormMessage>,
) -> Result<()> {
    loop {
        while let Ok(message) = rx.try_recv() {
            apply_message(state, message);
        }

        state.tick();
        terminal.draw(|f| draw_ui(f, state))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        let action = match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
            Event::Mouse(mouse) => {
                let layout = compute_layout(terminal.size()?);
                handle_mouse(state, mouse, &layout)
            }
            Event::Paste(text) => handle_paste(state, &text),
            _ => UiAction::None,
        };

        match action {
            UiAction::None => {}
            UiAction::Quit => break,
            UiAction::Submit(pending) => {
                spawn_prediction(service.clone(), pending, tx.clone());
            }
        }
    }

    Ok(())
}
