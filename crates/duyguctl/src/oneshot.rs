//! One-shot commands - run the form controller without the TUI

use crate::errors::{exit_code_for, EXIT_SUCCESS, EXIT_USAGE};
use anyhow::Result;
use duygu_common::{
    PredictionService, ResultView, SentimentForm, SubmitOutcome, Tone, SUGGESTIONS,
};
use owo_colors::OwoColorize;
use std::io::Write;

/// How `analyze` prints its result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Result panel, optionally colored
    Text { color: bool },
    /// The prediction as returned by the service
    Json,
}

/// Feed `sentence` through the form and print the result.
/// Returns the process exit code.
pub async fn analyze<W: Write, E: Write>(
    service: &dyn PredictionService,
    sentence: &str,
    format: OutputFormat,
    out: &mut W,
    err: &mut E,
) -> Result<i32> {
    let mut form = SentimentForm::new();
    form.on_input_change(sentence);

    if !form.can_submit() {
        writeln!(err, "Nothing to analyze: the sentence is empty")?;
        return Ok(EXIT_USAGE);
    }

    match form.submit(service).await {
        SubmitOutcome::Updated => {}
        SubmitOutcome::Skipped => return Ok(EXIT_USAGE),
        SubmitOutcome::Failed(e) => {
            writeln!(err, "No result: {}", e)?;
            return Ok(exit_code_for(&e));
        }
    }

    match format {
        OutputFormat::Json => {
            if let Some(prediction) = form.result() {
                writeln!(out, "{}", serde_json::to_string_pretty(prediction)?)?;
            }
        }
        OutputFormat::Text { color } => {
            if let Some(view) = form.view().result {
                write_result(out, &view, color)?;
            }
        }
    }

    Ok(EXIT_SUCCESS)
}

/// Print the result panel
pub fn write_result<W: Write>(out: &mut W, view: &ResultView, color: bool) -> std::io::Result<()> {
    writeln!(out, "Sentiment Score: {}", view.score_text)?;

    let label = if !color {
        view.label_text.clone()
    } else {
        match view.tone {
            Tone::Positive => view.label_text.green().bold().to_string(),
            Tone::Negative => view.label_text.red().bold().to_string(),
        }
    };
    writeln!(out, "Tone: {}", label)
}

/// List the example sentences, numbered from 1
pub fn write_suggestions<W: Write>(out: &mut W) -> std::io::Result<()> {
    for (i, suggestion) in SUGGESTIONS.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, suggestion)?;
    }
    Ok(())
}
