//! Rendering - draws the form from `FormTuiState`

use super::layout::{compute_layout, FormLayout};
use super::state::{Focus, FormTuiState};
use duygu_common::view::{CLEAR_LABEL, SUGGESTIONS_HINT};
use duygu_common::{ResultView, Tone};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const TITLE: &str = "Sentiment Analysis in Azerbaijani Language";
pub const CREDIT: &str = "Made by Kamal Ahmadov | github.com/Kamal578/SentimentAnalysis";

pub const POSITIVE_COLOR: Color = Color::Rgb(22, 163, 74);
pub const NEGATIVE_COLOR: Color = Color::Rgb(220, 38, 38);
const TITLE_COLOR: Color = Color::Rgb(37, 99, 235);
const FOCUS_COLOR: Color = Color::Yellow;
const MUTED_COLOR: Color = Color::Rgb(120, 120, 120);
const ANALYZE_BG: Color = Color::Rgb(59, 130, 246);
const CLEAR_BG: Color = Color::Rgb(239, 68, 68);

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Positive => POSITIVE_COLOR,
        Tone::Negative => NEGATIVE_COLOR,
    }
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default().fg(MUTED_COLOR)
    }
}

pub fn draw_ui(f: &mut Frame, state: &FormTuiState) {
    let layout = compute_layout(f.size());

    draw_header(f, layout.header);
    draw_input(f, layout.input, state);
    draw_hint(f, layout.hint);
    draw_suggestions(f, &layout, state);
    draw_buttons(f, &layout, state);

    if let Some(result) = state.form.view().result {
        draw_result(f, layout.result, &result);
    }

    draw_status_bar(f, layout.status_bar, state);
}

fn draw_header(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default().fg(TITLE_COLOR).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(CREDIT, Style::default().fg(MUTED_COLOR))),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_input(f: &mut Frame, area: Rect, state: &FormTuiState) {
    let focused = state.focus == Focus::Input;
    let view = state.form.view();
    let cursor_style = Style::default().add_modifier(Modifier::REVERSED);
    // Inside the borders
    let width = area.width.saturating_sub(2);
    let height = area.height.saturating_sub(2);

    let (lines, scroll) = match view.placeholder {
        Some(placeholder) => {
            let mut spans = Vec::new();
            if focused {
                spans.push(Span::styled(" ", cursor_style));
            }
            spans.push(Span::styled(placeholder, Style::default().fg(MUTED_COLOR)));
            (vec![Line::from(spans)], 0)
        }
        None => {
            let cursor_row = usize::from(state.cursor_row(width));
            let cursor_col = state.cursor_pos % usize::from(width.max(1));

            let lines: Vec<Line> = state
                .input_rows(width)
                .into_iter()
                .enumerate()
                .map(|(row, text)| {
                    if !focused || row != cursor_row {
                        return Line::from(text);
                    }
                    let chars: Vec<char> = text.chars().collect();
                    let before: String = chars.iter().take(cursor_col).collect();
                    let under = chars.get(cursor_col).copied().unwrap_or(' ');
                    let after: String = chars.iter().skip(cursor_col + 1).collect();
                    Line::from(vec![
                        Span::raw(before),
                        Span::styled(under.to_string(), cursor_style),
                        Span::raw(after),
                    ])
                })
                .collect();
            (lines, state.input_scroll(width, height))
        }
    };

    let input = Paragraph::new(lines).scroll((scroll, 0)).block(
        Block::default()
            .title(" Sentence ")
            .borders(Borders::ALL)
            .border_style(border_style(focused)),
    );

    f.render_widget(input, area);
}

fn draw_hint(f: &mut Frame, area: Rect) {
    let hint = Paragraph::new(Span::styled(SUGGESTIONS_HINT, Style::default().fg(MUTED_COLOR)))
        .alignment(Alignment::Center);
    f.render_widget(hint, area);
}

fn draw_suggestions(f: &mut Frame, layout: &FormLayout, state: &FormTuiState) {
    let suggestions = state.form.view().suggestions;

    for (i, (area, text)) in layout.suggestions.iter().zip(suggestions).enumerate() {
        let focused = state.focus == Focus::Suggestion(i);
        let mut text_style = Style::default().fg(Color::Rgb(220, 220, 220)).add_modifier(Modifier::BOLD);
        if focused {
            text_style = text_style.fg(FOCUS_COLOR);
        }

        let button = Paragraph::new(Span::styled(*text, text_style))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(format!(" F{} ", i + 1))
                    .borders(Borders::ALL)
                    .border_style(border_style(focused)),
            );
        f.render_widget(button, *area);
    }
}

fn draw_buttons(f: &mut Frame, layout: &FormLayout, state: &FormTuiState) {
    let view = state.form.view();

    let label = if view.loading {
        format!("{} {}", view.submit_label, state.spinner())
    } else {
        view.submit_label.to_string()
    };
    // Disabled is dimmed
    let analyze_style = if view.submit_enabled {
        Style::default()
            .fg(Color::White)
            .bg(ANALYZE_BG)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED_COLOR).add_modifier(Modifier::DIM)
    };
    let analyze = Paragraph::new(Span::styled(label, analyze_style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(state.focus == Focus::Analyze)),
        );
    f.render_widget(analyze, layout.analyze);

    let clear_style = Style::default()
        .fg(Color::White)
        .bg(CLEAR_BG)
        .add_modifier(Modifier::BOLD);
    let clear = Paragraph::new(Span::styled(CLEAR_LABEL, clear_style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(state.focus == Focus::Clear)),
        );
    f.render_widget(clear, layout.clear);
}

fn draw_result(f: &mut Frame, area: Rect, result: &ResultView) {
    let label_style = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(vec![
            Span::styled("Sentiment Score: ", label_style),
            Span::styled(result.score_text.clone(), Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![
            Span::styled("Tone: ", label_style),
            Span::styled(
                result.label_text.clone(),
                Style::default()
                    .fg(tone_color(result.tone))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Result ").borders(Borders::ALL));
    f.render_widget(panel, area);
}

fn draw_status_bar(f: &mut Frame, area: Rect, state: &FormTuiState) {
    let text = format!(
        " Tab move | Enter select | F1/F2 examples | ^L clear | ^U erase | Esc quit | {}",
        state.endpoint
    );
    let status = Paragraph::new(Span::styled(text, Style::default().fg(Color::Rgb(180, 180, 180))))
        .style(Style::default().bg(Color::Rgb(20, 20, 20)));
    f.render_widget(status, area);
}
