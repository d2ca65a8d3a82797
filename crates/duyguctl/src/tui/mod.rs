//! TUI Module
//!
//! - event_loop: entry point, background predictions, message handling
//! - input: keyboard and mouse handling
//! - layout: form geometry and hit-testing
//! - render: drawing
//! - state: form controller plus cursor, focus and spinner

mod event_loop;
mod input;
mod layout;
mod render;
mod state;

pub use event_loop::{apply_message, run, spawn_prediction, FormMessage};
pub use input::{activate, handle_key, handle_mouse, handle_paste, UiAction};
pub use layout::{compute_layout, FormLayout};
pub use render::{draw_ui, tone_color, NEGATIVE_COLOR, POSITIVE_COLOR, TITLE};
pub use state::{Focus, FormTuiState};
