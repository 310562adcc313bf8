//! Stateless render functions for the replay view and status bar.
//!
//! Nothing here inspects algorithm internals: every function draws exactly
//! what one [`Frame`] carries.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame as TuiFrame,
};

use crate::snapshot::{ArraySnapshot, Frame, MstSnapshot, VisitSnapshot};
use crate::ui::theme::DEFAULT_THEME;

/// Render the frame under the replay cursor.
pub fn render_frame(f: &mut TuiFrame, area: Rect, title: &str, frame: Option<&Frame>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(Style::default().fg(DEFAULT_THEME.comment));

    let lines = match frame {
        Some(Frame::Array(snapshot)) => array_lines(snapshot),
        Some(Frame::Visit(snapshot)) => visit_lines(snapshot),
        Some(Frame::Mst(snapshot)) => mst_lines(snapshot),
        Some(Frame::Highlight { values, current }) => highlight_lines(values, *current),
        Some(Frame::Message(text)) => vec![Line::from(Span::styled(
            text.clone(),
            Style::default().fg(DEFAULT_THEME.fg),
        ))],
        None => vec![Line::from(Span::styled(
            "No steps recorded.",
            Style::default().fg(DEFAULT_THEME.comment),
        ))],
    };

    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// One row per element: value, then a bar proportional to it. Moving
/// elements get the highlight color.
fn array_lines(snapshot: &ArraySnapshot) -> Vec<Line<'static>> {
    let max = snapshot
        .elements
        .iter()
        .map(|e| e.value)
        .max()
        .unwrap_or(1)
        .max(1);

    snapshot
        .elements
        .iter()
        .map(|element| {
            let color = if element.is_moving {
                DEFAULT_THEME.highlight
            } else {
                DEFAULT_THEME.bar
            };
            // Scale the bar to at most 40 cells.
            let width = ((element.value.max(0) * 40) / max) as usize;
            Line::from(vec![
                Span::styled(
                    format!("{:>6} ", element.value),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
                Span::styled("█".repeat(width.max(1)), Style::default().fg(color)),
            ])
        })
        .collect()
}

fn visit_lines(snapshot: &VisitSnapshot) -> Vec<Line<'static>> {
    let mut spans = vec![Span::styled(
        "visited: ",
        Style::default().fg(DEFAULT_THEME.comment),
    )];
    for (i, id) in snapshot.visited.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                " → ",
                Style::default().fg(DEFAULT_THEME.comment),
            ));
        }
        let style = if i + 1 == snapshot.visited.len() {
            Style::default()
                .fg(DEFAULT_THEME.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.success)
        };
        spans.push(Span::styled(id.clone(), style));
    }
    vec![Line::from(spans)]
}

fn mst_lines(snapshot: &MstSnapshot) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = snapshot
        .edges
        .iter()
        .map(|edge| {
            Line::from(Span::styled(
                format!("{} — {}  (weight {})", edge.source, edge.target, edge.weight),
                Style::default().fg(DEFAULT_THEME.success),
            ))
        })
        .collect();
    lines.push(Line::from(Span::styled(
        format!("total weight: {}", snapshot.total_weight()),
        Style::default().fg(DEFAULT_THEME.comment),
    )));
    lines
}

fn highlight_lines(values: &[i64], current: usize) -> Vec<Line<'static>> {
    let mut spans = Vec::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                "  ",
                Style::default().fg(DEFAULT_THEME.comment),
            ));
        }
        let style = if i == current {
            Style::default()
                .fg(Color::Black)
                .bg(DEFAULT_THEME.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };
        spans.push(Span::styled(format!(" {} ", value), style));
    }
    vec![Line::from(spans)]
}

/// Render the status bar: step counter, message, and keybinds.
pub fn render_status_bar(
    f: &mut TuiFrame,
    area: Rect,
    message: &str,
    position: usize,
    total: usize,
    is_playing: bool,
) {
    let step_text = if total == 0 {
        " Step 0/0 ".to_string()
    } else {
        format!(" Step {}/{} ", position + 1, total)
    };

    let left = vec![
        Span::styled(
            step_text,
            Style::default()
                .bg(if is_playing {
                    DEFAULT_THEME.success
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.fg),
        ),
        Span::styled(
            " | ←/→ step | space play | backspace start | enter end | q quit ",
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.comment),
        ),
    ];

    let paragraph = Paragraph::new(Line::from(left))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}
