//! UI pane drawing module for pathsurfer.
//!
//! Draws one [Pane] as a list: directory coloring, the selected row, the trailing directory
//! marker and the runes matched by the search query.
//!
//! Used internally by ui::render

use crate::app::Pane;
use crate::core::{Entry, ListErrorKind};

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};
use unicode_width::UnicodeWidthChar;

/// Styles used for rendering items in a pane
pub struct PaneStyles {
    pub item: Style,
    pub dir: Style,
    pub selection: Style,
    pub matched: Style,
    pub notice: Style,
}

impl PaneStyles {
    pub fn get_style(&self, is_dir: bool, is_selected: bool) -> Style {
        let mut style = if is_dir { self.dir } else { self.item };

        if is_selected {
            if let Some(bg) = self.selection.bg
                && bg != Color::Reset
            {
                style = style.bg(bg);
            }

            if let Some(fg) = self.selection.fg
                && fg != Color::Reset
                && !is_dir
            {
                style = style.fg(fg);
            }
        }
        style
    }
}

/// Context data for pane rendering functions
pub struct PaneContext<'a> {
    pub area: Rect,
    pub styles: &'a PaneStyles,
    pub show_marker: bool,
    /// Placeholder shown when the pane has no entries and no listing error.
    pub empty_text: &'a str,
}

/// Draws `pane` into `context.area`.
///
/// `highlights` returns the matched rune positions of the entry at a row, if any.
pub fn draw_pane<'m, F>(frame: &mut Frame, context: PaneContext, pane: &Pane, highlights: F)
where
    F: Fn(usize) -> Option<&'m [usize]>,
{
    if pane.entries().is_empty() {
        let text = match pane.error().map(|e| e.kind()) {
            Some(ListErrorKind::PermissionDenied) => "[Permission denied]",
            Some(ListErrorKind::NotFound) => "[Not found]",
            Some(ListErrorKind::Other) => "[Unreadable]",
            None => context.empty_text,
        };
        let style = if pane.error().is_some() {
            context.styles.notice
        } else {
            context.styles.item
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(text, style))),
            context.area,
        );
        return;
    }

    let width = context.area.width as usize;
    let items: Vec<ListItem> = pane
        .entries()
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let is_selected = pane.selected_idx() == Some(idx);
            let style = context.styles.get_style(entry.is_dir(), is_selected);
            let line = entry_line(
                entry,
                highlights(idx).unwrap_or(&[]),
                width,
                style,
                style.patch(context.styles.matched),
                context.show_marker,
            );
            ListItem::new(line).style(style)
        })
        .collect();

    let mut state = ListState::default()
        .with_offset(pane.scroll_offset())
        .with_selected(pane.selected_idx());

    frame.render_stateful_widget(
        List::new(items).highlight_style(Style::default()),
        context.area,
        &mut state,
    );
}

/// Builds one row: the entry name cut to `width` columns, matched runes in `matched`.
///
/// `positions` index the runes of the name. Control characters are dropped from the output
/// but still count as positions.
pub fn entry_line(
    entry: &Entry,
    positions: &[usize],
    width: usize,
    style: Style,
    matched: Style,
    show_marker: bool,
) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut run = String::new();
    let mut run_matched = false;
    let mut used = 0;
    let mut next = positions.iter().peekable();

    for (idx, ch) in entry.name().chars().enumerate() {
        let is_match = next.next_if_eq(&&idx).is_some();
        if ch.is_control() {
            continue;
        }

        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;

        if is_match != run_matched && !run.is_empty() {
            spans.push(styled_run(std::mem::take(&mut run), run_matched, style, matched));
        }
        run_matched = is_match;
        run.push(ch);
    }
    if !run.is_empty() {
        spans.push(styled_run(run, run_matched, style, matched));
    }

    if show_marker && entry.is_dir() && used < width {
        spans.push(Span::styled("/", style));
    }
    Line::from(spans)
}

fn styled_run(text: String, is_match: bool, style: Style, matched: Style) -> Span<'static> {
    Span::styled(text, if is_match { matched } else { style })
}
