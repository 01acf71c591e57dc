//! Fixed neon-on-charcoal palette shared by the components.

use ratatui::style::{Color, Modifier, Style};

pub const BACKGROUND: Color = Color::Rgb(43, 43, 43);
pub const MAGENTA: Color = Color::Rgb(252, 26, 203);
pub const CYAN: Color = Color::Rgb(79, 241, 255);
pub const RED: Color = Color::Rgb(255, 0, 0);
pub const SELECTION: Color = Color::Rgb(64, 64, 64);

pub fn base() -> Style {
    Style::default().bg(BACKGROUND).fg(Color::White)
}

pub fn title() -> Style {
    Style::default().fg(MAGENTA).add_modifier(Modifier::BOLD)
}

pub fn accent() -> Style {
    Style::default().fg(CYAN)
}

pub fn accent_dim() -> Style {
    Style::default().fg(CYAN).add_modifier(Modifier::DIM)
}

pub fn button() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}

pub fn placeholder() -> Style {
    Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC)
}

pub fn item_text() -> Style {
    Style::default().fg(Color::White)
}

pub fn completed_text() -> Style {
    Style::default().fg(Color::Gray).add_modifier(Modifier::DIM)
}

pub fn remove() -> Style {
    Style::default().fg(RED).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(Color::DarkGray)
}
