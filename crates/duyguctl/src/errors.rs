//! Exit codes for duyguctl

use duygu_common::PredictionError;

/// Exit code for success
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for general errors
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code when the sentence to analyze is blank
pub const EXIT_USAGE: i32 = 64;

/// Exit code when the service answered with an error status or a bad body
pub const EXIT_INVALID_RESPONSE: i32 = 65;

/// Exit code when the service is unreachable
pub const EXIT_SERVICE_UNAVAILABLE: i32 = 70;

/// Map a failed prediction to its exit code
pub fn exit_code_for(error: &PredictionError) -> i32 {
    match error {
        PredictionError::Transport(_) => EXIT_SERVICE_UNAVAILABLE,
        PredictionError::Status { .. } | PredictionError::InvalidBody(_) => EXIT_INVALID_RESPONSE,
        PredictionError::InvalidEndpoint { .. } => EXIT_GENERAL_ERROR,
    }
}
