//! Duygu Common - shared library for the Azerbaijani sentiment form
//!
//! Holds everything that does not touch the terminal:
//! - config: user configuration (endpoint, logging)
//! - error: typed errors for the prediction client and config loader
//! - prediction: prediction service trait, HTTP client and fake client
//! - form: the sentiment form controller and its state machine
//! - view: display rules derived from form state (score format, tone)

pub mod config;
pub mod error;
pub mod form;
pub mod prediction;
pub mod view;

pub use config::{DuyguConfig, LoggingConfig, ServiceConfig, DEFAULT_ENDPOINT};
pub use error::{ConfigError, PredictionError};
pub use form::{PendingSubmit, SentimentForm, SubmissionState, SubmitOutcome, SUGGESTIONS};
pub use prediction::{FakePredictionService, HttpPredictionService, Prediction, PredictionService};
pub use view::{FormView, ResultView, Tone, POSITIVE_THRESHOLD};
