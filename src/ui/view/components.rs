//! Shared view components
//!
//! Dialog chrome and the bead/rod glyph spans

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear},
};

use crate::ui::state::BeadSlot;

/// One bead glyph plus its trailing gap cell.
const BEAD_GLYPH: &str = "████ ";
/// Bare rod segment of the same width.
const ROD_GLYPH: &str = " │   ";

/// [component] dialog base frame; returns the inner area
pub fn render_dialog_framework(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// [component] one bead at its position in a grid row
pub fn bead_span(slot: BeadSlot, selected: bool) -> Span<'static> {
    let color = match slot {
        BeadSlot::Heaven => Color::Cyan,
        BeadSlot::Earth(_) => Color::Gray,
    };
    let style = if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };
    Span::styled(BEAD_GLYPH, style)
}

/// [component] empty rod segment
pub fn rod_span() -> Span<'static> {
    Span::styled(ROD_GLYPH, Style::default().fg(Color::DarkGray))
}
