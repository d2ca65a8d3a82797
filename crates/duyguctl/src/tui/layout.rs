//! Layout - form geometry and mouse hit-testing
//!
//! The form is a centered column. Rows top to bottom: header (title and
//! credit), input box, examples hint, suggestion buttons, Analyze/Clear,
//! result panel, status bar pinned to the bottom.

use super::state::Focus;
use duygu_common::view::{CLEAR_LABEL, LOADING_LABEL};
use duygu_common::SUGGESTIONS;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

const MAX_FORM_WIDTH: u16 = 76;
const HEADER_HEIGHT: u16 = 2;
const INPUT_HEIGHT: u16 = 5;
const BUTTON_HEIGHT: u16 = 3;
const RESULT_HEIGHT: u16 = 4;
const BUTTON_GAP: u16 = 2;

/// Button width: label plus borders and one space of padding each side
fn button_width(label: &str) -> u16 {
    label.chars().count() as u16 + 4
}

/// Analyze is sized for its widest state ("Loading... ⠋")
fn analyze_width() -> u16 {
    button_width(LOADING_LABEL) + 2
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormLayout {
    pub header: Rect,
    pub input: Rect,
    pub hint: Rect,
    pub suggestions: Vec<Rect>,
    pub analyze: Rect,
    pub clear: Rect,
    pub result: Rect,
    pub status_bar: Rect,
}

impl FormLayout {
    /// Which control sits under the given cell
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Focus> {
        let inside = |r: &Rect| {
            column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
        };

        if inside(&self.input) {
            return Some(Focus::Input);
        }
        if let Some(i) = self.suggestions.iter().position(|r| inside(r)) {
            return Some(Focus::Suggestion(i));
        }
        if inside(&self.analyze) {
            return Some(Focus::Analyze);
        }
        if inside(&self.clear) {
            return Some(Focus::Clear);
        }
        None
    }
}

/// Lay out `widths` centered in `row`, `BUTTON_GAP` apart.
/// Falls back to equal shares when they do not fit.
fn center_row(row: Rect, widths: &[u16]) -> Vec<Rect> {
    let n = widths.len() as u16;
    if n == 0 {
        return Vec::new();
    }

    let total: u16 = widths.iter().sum::<u16>() + BUTTON_GAP * (n - 1);
    if total <= row.width {
        let mut x = row.x + (row.width - total) / 2;
        widths
            .iter()
            .map(|w| {
                let rect = Rect::new(x, row.y, *w, row.height);
                x += w + BUTTON_GAP;
                rect
            })
            .collect()
    } else {
        let share = row.width / n;
        (0..n)
            .map(|i| Rect::new(row.x + i * share, row.y, share, row.height))
            .collect()
    }
}

pub fn compute_layout(area: Rect) -> FormLayout {
    let width = area.width.min(MAX_FORM_WIDTH);
    let body_height = area.height.saturating_sub(1);
    let column = Rect::new(area.x + (area.width - width) / 2, area.y, width, body_height);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(RESULT_HEIGHT),
            Constraint::Min(0),
        ])
        .split(column);

    let suggestion_widths: Vec<u16> = SUGGESTIONS.iter().map(|s| button_width(s)).collect();
    let buttons = center_row(rows[5], &[analyze_width(), button_width(CLEAR_LABEL)]);

    FormLayout {
        header: rows[0],
        input: rows[2],
        hint: rows[3],
        suggestions: center_row(rows[4], &suggestion_widths),
        analyze: buttons[0],
        clear: buttons[1],
        result: rows[6],
        status_bar: Rect::new(area.x, area.y + body_height, area.width, area.height.min(1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlaps(a: &Rect, b: &Rect) -> bool {
        a.intersects(*b)
    }

    #[test]
    fn test_standard_terminal() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.header.height, 2);
        assert_eq!(layout.input.height, 5);
        assert_eq!(layout.suggestions.len(), 2);
        assert_eq!(layout.status_bar.y, 23);
        assert_eq!(layout.status_bar.width, 80);
        assert!(layout.input.width <= MAX_FORM_WIDTH);
    }

    #[test]
    fn test_controls_do_not_overlap() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24));
        let mut controls = vec![layout.input, layout.analyze, layout.clear, layout.result];
        controls.extend(layout.suggestions.iter().copied());

        for (i, a) in controls.iter().enumerate() {
            for b in controls.iter().skip(i + 1) {
                assert!(!overlaps(a, b), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_suggestions_fit_labels() {
        let layout = compute_layout(Rect::new(0, 0, 100, 30));
        for (rect, label) in layout.suggestions.iter().zip(SUGGESTIONS) {
            assert!(rect.width >= label.chars().count() as u16 + 2);
        }
    }

    #[test]
    fn test_narrow_terminal_splits_suggestions() {
        let layout = compute_layout(Rect::new(0, 0, 40, 24));
        assert_eq!(layout.suggestions[0].width, 20);
        assert_eq!(layout.suggestions[1].x, 20);
    }

    #[test]
    fn test_hit_test() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24));

        let s1 = layout.suggestions[1];
        assert_eq!(layout.hit_test(s1.x + 1, s1.y + 1), Some(Focus::Suggestion(1)));
        assert_eq!(
            layout.hit_test(layout.analyze.x, layout.analyze.y),
            Some(Focus::Analyze)
        );
        assert_eq!(
            layout.hit_test(layout.clear.x + layout.clear.width - 1, layout.clear.y),
            Some(Focus::Clear)
        );
        assert_eq!(layout.hit_test(layout.input.x + 2, layout.input.y + 2), Some(Focus::Input));
        assert_eq!(layout.hit_test(0, layout.status_bar.y), None);
    }
}
