use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

use super::app::{MessageType, StatusMessage};
use super::layout::{AppLayout, centered, shifted};
use crate::models::Item;
use crate::session::{Direction, SessionPhase, SessionResult};
use crate::share::ShareTarget;

const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const SURFACE: Color = Color::Rgb(24, 24, 27);
const EMERALD: Color = Color::Rgb(16, 185, 129);
const RED: Color = Color::Rgb(239, 68, 68);

/// A card to draw, displaced from its resting position
pub struct CardView<'a> {
    pub item: &'a Item,
    pub offset_cols: i32,
    /// Direction and 0..=1 drag progress used to tint the border
    pub tint: Option<(Direction, f32)>,
}

/// Everything the renderer needs for one frame
pub struct RenderState<'a> {
    pub title: &'a str,
    pub welcome_text: &'a str,
    pub phase: SessionPhase,
    /// 1-based index of the front card
    pub position: usize,
    pub total: usize,
    pub front: Option<CardView<'a>>,
    pub next: Option<&'a Item>,
    pub exiting: Option<CardView<'a>>,
    /// Live drag intent, shown while feedback is visible
    pub feedback: Option<Direction>,
    /// Last committed direction
    pub vote: Option<Direction>,
    pub results: Option<SessionResult>,
    /// Results sliding out after a restart, with 0..=1 progress
    pub closing: Option<(SessionResult, f32)>,
    pub status_message: Option<&'a StatusMessage>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, layout.header_area, state);
    match state.phase {
        SessionPhase::NotStarted => render_welcome(frame, layout.main_area, state),
        SessionPhase::InProgress => {
            render_deck(frame, &layout, state);
            render_feedback(frame, layout.feedback_area, state.feedback.or(state.vote));
        }
        SessionPhase::Finished => {
            if let Some(result) = &state.results {
                render_results(frame, layout.main_area, result);
            }
        }
    }
    if let Some((result, progress)) = &state.closing {
        render_closing_results(frame, layout.main_area, result, *progress);
    }
    render_status_bar(frame, layout.status_area, state);
}

fn render_header(frame: &mut Frame, area: Rect, state: &RenderState) {
    let title_style = Style::default().fg(EMERALD).add_modifier(Modifier::BOLD);
    let mut spans = vec![Span::styled(format!(" {} ", state.title), title_style)];
    if state.phase == SessionPhase::InProgress && state.position > 0 {
        spans.push(Span::styled(
            format!("card {}/{}", state.position, state.total),
            Style::default().fg(MUTED),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_welcome(frame: &mut Frame, area: Rect, state: &RenderState) {
    let panel = centered(area, 60, 12);
    let text = Text::from(vec![
        Line::from(Span::styled(
            format!("Welcome to {}", state.title),
            Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::raw(state.welcome_text)),
        Line::from(""),
        Line::from(Span::styled("Press Enter to start", Style::default().fg(EMERALD))),
    ]);

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(panel_block(""));
    frame.render_widget(paragraph, panel);
}

fn render_deck(frame: &mut Frame, layout: &AppLayout, state: &RenderState) {
    if state.front.is_none() && state.exiting.is_none() {
        let empty = Paragraph::new("No cards left to review.")
            .alignment(Alignment::Center)
            .block(panel_block(""));
        frame.render_widget(empty, layout.card_area);
        return;
    }

    // Preview card sits slightly lower and narrower, and never moves
    if let Some(next) = state.next {
        let card = layout.card_area;
        let preview = Rect::new(
            card.x + 2u16.min(card.width / 4),
            card.y + 1u16.min(card.height / 4),
            card.width.saturating_sub(4u16.min(card.width / 2)),
            card.height.saturating_sub(1u16.min(card.height / 4)),
        );
        render_card(frame, preview, next, MUTED, MUTED);
    }

    if let Some(front) = &state.front {
        render_card_view(frame, layout, front);
    }
    if let Some(exiting) = &state.exiting {
        render_card_view(frame, layout, exiting);
    }
}

fn render_card_view(frame: &mut Frame, layout: &AppLayout, view: &CardView) {
    let Some(area) = shifted(layout.card_area, view.offset_cols, layout.main_area) else {
        return;
    };
    let border = match view.tint {
        Some((direction, progress)) => tint(direction, progress),
        None => BRIGHT,
    };
    render_card(frame, area, view.item, border, BRIGHT);
}

fn render_card(frame: &mut Frame, area: Rect, item: &Item, border: Color, text_color: Color) {
    let text = Text::from(vec![
        Line::from(Span::styled(
            format!("#{}", item.id),
            Style::default().fg(EMERALD).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(item.text.as_str(), Style::default().fg(text_color))),
    ]);

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border))
                .style(Style::default().bg(SURFACE)),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

fn render_feedback(frame: &mut Frame, area: Rect, direction: Option<Direction>) {
    let Some(direction) = direction.filter(|d| !d.is_none()) else {
        return;
    };
    let color = if direction == Direction::Right { EMERALD } else { RED };
    let line = Line::from(Span::styled(
        direction.label(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn results_text(result: &SessionResult) -> Text<'static> {
    let mut lines = vec![
        Line::from(Span::styled(
            result.title(),
            Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    if let Some(description) = result.description() {
        lines.push(Line::from(description.to_string()));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled("Share your result", Style::default().fg(MUTED))));
    let buttons: Vec<Span> = ShareTarget::ALL
        .iter()
        .map(|target| {
            Span::styled(
                format!(" [{}] {} ", share_key(*target), target.label()),
                Style::default().fg(EMERALD),
            )
        })
        .collect();
    lines.push(Line::from(buttons));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("[r] Restart quiz", Style::default().fg(EMERALD))));
    Text::from(lines)
}

fn render_results(frame: &mut Frame, area: Rect, result: &SessionResult) {
    let panel = centered(area, 64, 14);
    let paragraph = Paragraph::new(results_text(result))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(panel_block(" Results "));
    frame.render_widget(paragraph, panel);
}

/// Results panel sliding up out of view
fn render_closing_results(frame: &mut Frame, area: Rect, result: &SessionResult, progress: f32) {
    let visible = ((1.0 - progress.clamp(0.0, 1.0)) * area.height as f32).round() as u16;
    if visible == 0 {
        return;
    }
    let panel = Rect::new(area.x, area.y, area.width, visible.min(area.height));
    frame.render_widget(Clear, panel);
    let paragraph = Paragraph::new(results_text(result))
        .alignment(Alignment::Center)
        .block(panel_block(" Results "));
    frame.render_widget(paragraph, panel);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let (status_text, style) = if let Some(msg) = state.status_message {
        let fg = match msg.message_type {
            MessageType::Success => EMERALD,
            MessageType::Error => RED,
        };
        (format!(" {} ", msg.text), Style::default().fg(fg).bg(SURFACE))
    } else {
        let hints = match state.phase {
            SessionPhase::NotStarted => "Enter: start | q: quit",
            SessionPhase::InProgress => {
                "←/→ or drag: swipe | y/n: yes/no | Enter: release | Esc: recenter | r: restart | q: quit"
            }
            SessionPhase::Finished => "x/i/f/s: share | r: restart | q: quit",
        };
        (format!(" {} ", hints), Style::default().fg(BRIGHT).bg(SURFACE))
    };

    frame.render_widget(Paragraph::new(status_text).style(style), area);
}

fn panel_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(MUTED))
        .title(title)
}

/// Key bound to each share target
pub fn share_key(target: ShareTarget) -> char {
    match target {
        ShareTarget::X => 'x',
        ShareTarget::LinkedIn => 'i',
        ShareTarget::Facebook => 'f',
        ShareTarget::Native => 's',
    }
}

/// Border color blending from muted toward green (right) or red (left)
fn tint(direction: Direction, progress: f32) -> Color {
    let target = match direction {
        Direction::Right => (16, 185, 129),
        Direction::Left => (239, 68, 68),
        Direction::None => return BRIGHT,
    };
    let from = (113.0, 113.0, 122.0);
    let t = progress.clamp(0.0, 1.0);
    let mix = |a: f32, b: u8| (a + (b as f32 - a) * t).round() as u8;
    Color::Rgb(mix(from.0, target.0), mix(from.1, target.1), mix(from.2, target.2))
}
