//! View layer
//!
//! The main render entry and the widgets it composes

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::state::{App, AppMode, BeadSlot};
use crate::format::format_total;
use crate::models::{PlaceValueMode, ROD_COUNT, Rod};
use components::{bead_span, render_dialog_framework, rod_span};
use layouts::{BAR_ROW, BeadGrid, DIGIT_ROW, GRID_HEIGHT, GRID_WIDTH, centered_rect};

/// Render the UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // total readout
            Constraint::Min(GRID_HEIGHT + 2), // bead frame
            Constraint::Length(3),            // help + status
        ])
        .split(frame.area());

    render_total(frame, app, chunks[0]);
    render_beads(frame, app, chunks[1]);
    render_help(frame, app, chunks[2]);

    // Overlays
    match &app.mode {
        AppMode::Help => render_help_dialog(frame),
        AppMode::ConfirmClear => render_confirm_dialog(frame),
        AppMode::Normal => {}
    }
}

fn render_total(frame: &mut Frame, app: &App, area: Rect) {
    let total = Paragraph::new(format_total(app.abacus.total(), app.abacus.mode()))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().title("soroban").borders(Borders::ALL));
    frame.render_widget(total, area);
}

fn render_beads(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(mode_label(app.abacus.mode()))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Remember where the grid landed for mouse hit-testing.
    app.grid = BeadGrid::fit(inner);
    let grid = match app.grid {
        Some(grid) => grid,
        None => {
            let hint = Paragraph::new("terminal too small")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Red));
            frame.render_widget(hint, inner);
            return;
        }
    };

    let mut lines = Vec::with_capacity(GRID_HEIGHT as usize);
    for row in 0..GRID_HEIGHT {
        let spans: Vec<Span> = (0..ROD_COUNT)
            .map(|rod| rod_segment(app, rod, row))
            .collect();
        lines.push(Line::from(spans));
    }

    let target = Rect::new(grid.x, grid.y, GRID_WIDTH, GRID_HEIGHT);
    frame.render_widget(Paragraph::new(lines), target);
}

/// One rod's five-cell segment of a grid row.
fn rod_segment(app: &App, rod: usize, row: u16) -> Span<'static> {
    let unit_rod = app.abacus.mode().unit_rod();
    let state = app.abacus.rod(rod);

    if row == BAR_ROW {
        // The bar carries a dot over the units rod.
        let text = if rod == unit_rod { "─●───" } else { "─────" };
        return Span::styled(text, Style::default().fg(Color::DarkGray));
    }
    if row == DIGIT_ROW {
        let style = if rod == unit_rod {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        return Span::styled(format!(" {}   ", state.digit()), style);
    }

    match slot_at(state, row) {
        Some(slot) => {
            let selected = app.mode == AppMode::Normal
                && app.cursor.rod == rod
                && app.cursor.slot == slot;
            bead_span(slot, selected)
        }
        None => rod_span(),
    }
}

/// Bead occupying `row` on this rod, if any.
fn slot_at(rod: &Rod, row: u16) -> Option<BeadSlot> {
    if BeadGrid::bead_row(BeadSlot::Heaven, rod.heaven) == row {
        return Some(BeadSlot::Heaven);
    }
    for (bead, &active) in rod.earth.iter().enumerate() {
        let slot = BeadSlot::Earth(bead);
        if BeadGrid::bead_row(slot, active) == row {
            return Some(slot);
        }
    }
    None
}

fn mode_label(mode: PlaceValueMode) -> &'static str {
    match mode {
        PlaceValueMode::RightmostUnits => " units: rightmost rod ",
        PlaceValueMode::CenterUnits => " units: center rod (decimals) ",
    }
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match &app.mode {
        AppMode::Normal => {
            "[←↓↑→/hjkl] select  [Space] toggle  [d] decimals  [c] clear  [?] help  [q] quit"
        }
        AppMode::Help => "[Esc] close",
        AppMode::ConfirmClear => "[y] confirm  [n] cancel",
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

fn render_help_dialog(frame: &mut Frame) {
    let area = centered_rect(60, 60, frame.area());
    let inner = render_dialog_framework(frame, area, "keys");

    let text = [
        "←/h →/l      select rod",
        "↑/k ↓/j      select bead",
        "Space/Enter  toggle the selected bead",
        "click        toggle the bead under the pointer",
        "d            toggle decimal mode (moves the units rod)",
        "c            clear every bead",
        "?            this overlay",
        "q            quit",
        "",
        "Earth beads cascade: activating one carries every bead",
        "between it and the bar along, releasing one drops every",
        "bead below it.",
    ]
    .join("\n");

    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: false }), inner);
}

fn render_confirm_dialog(frame: &mut Frame) {
    let area = centered_rect(44, 20, frame.area());
    frame.render_widget(Clear, area);

    let dialog = Paragraph::new("Clear every bead on the frame?\n\n[y] confirm  [n] cancel")
        .style(Style::default().fg(Color::Red))
        .block(Block::default().title("confirm").borders(Borders::ALL));

    frame.render_widget(dialog, area);
}
