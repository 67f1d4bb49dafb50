//! Single-line widgets: the path header, the status line and pane separators.

use crate::app::keymap::{HELP_LINE, SEARCH_HELP_LINE};
use crate::app::{Mode, NavState};
use crate::config::Theme;
use crate::core::sanitize_to_exact_width;
use crate::utils::shorten_home_path;

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use std::path::Path;

/// Draws the current directory, home shortened to `~`.
pub fn draw_header(frame: &mut Frame, area: Rect, path: &Path, theme: &Theme) {
    let text = sanitize_to_exact_width(&shorten_home_path(path), area.width as usize);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text, theme.path_style()))),
        area,
    );
}

/// The status line text and its style for the current state.
///
/// Search mode shows the query; default mode shows the last listing error, if any, or the
/// key help.
pub fn status_line(nav: &NavState, theme: &Theme) -> (String, Style) {
    match nav.mode() {
        Mode::Search => (
            format!("/{}  {}", nav.query(), SEARCH_HELP_LINE),
            theme.status_style(),
        ),
        Mode::Default => match nav.last_error() {
            Some(err) => (err.to_string(), theme.error_style()),
            None => (position_hint(nav) + HELP_LINE, theme.status_style()),
        },
    }
}

fn position_hint(nav: &NavState) -> String {
    match nav.entries().len() {
        0 => String::new(),
        len => format!("{}/{len} ", nav.selected_idx() + 1),
    }
}

pub fn draw_status(frame: &mut Frame, area: Rect, nav: &NavState, theme: &Theme) {
    let (text, style) = status_line(nav, theme);
    let text = sanitize_to_exact_width(&text, area.width as usize);
    frame.render_widget(Paragraph::new(Line::from(Span::styled(text, style))), area);
}

/// Draws a vertical separator along the left edge of `area`.
pub fn draw_separator(frame: &mut Frame, area: Rect, style: Style) {
    frame.render_widget(
        Block::default().borders(Borders::LEFT).border_style(style),
        area,
    );
}
