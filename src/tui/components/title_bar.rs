//! # TitleBar Component
//!
//! Top line of the screen: the list title plus a completion count.
//!
//! Stateless: every field is a prop handed in by the parent each frame.
//!
//! 1. **Items present**: `"Todo List  2/5 done"`
//! 2. **Empty list**: `"Todo List"`

use crate::tui::component::Component;
use crate::tui::theme;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Configured list title
    pub title: String,
    pub total: usize,
    pub completed: usize,
}

impl TitleBar {
    pub fn new(title: String, total: usize, completed: usize) -> Self {
        Self {
            title,
            total,
            completed,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(self.title.clone(), theme::title())];
        if self.total > 0 {
            spans.push(Span::styled(
                format!("  {}/{} done", self.completed, self.total),
                theme::muted(),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
