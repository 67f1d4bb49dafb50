//! UI renderer implementation.
//!
//! Contains the top-level `render` entry point used by the terminal loop and the
//! layout helpers that split the screen into parent/main/preview chunks.
//!
//! Rendering reads state and config and produces widgets. The only state it writes is the
//! visible height of the current pane, so scrolling follows the real terminal size.

use crate::app::AppState;
use crate::config::Display;
use crate::core::DirLister;
use crate::ui::panes::{self, PaneContext, PaneStyles};
use crate::ui::widgets;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
};

/// Renders the whole screen: header, panes and status line.
pub fn render<L: DirLister>(frame: &mut Frame, app: &mut AppState<L>) {
    let [header, body, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let height = body.height as usize;
    app.set_visible_height(height);

    let views = app.panes(height);
    let nav = app.nav();
    let cfg = app.config();
    let display_cfg = cfg.display();
    let theme_cfg = cfg.theme();

    widgets::draw_header(frame, header, nav.current_dir(), theme_cfg);

    let styles = PaneStyles {
        item: Style::default(),
        dir: theme_cfg.directory_style(),
        selection: theme_cfg.selection_style(),
        matched: theme_cfg.matched_style(),
        notice: theme_cfg.error_style(),
    };
    let context = |area: Rect, empty_text| PaneContext {
        area,
        styles: &styles,
        show_marker: display_cfg.dir_marker(),
        empty_text,
    };

    let chunks = layout_chunks(body, display_cfg);
    let show_separators = display_cfg.separators();
    let mut pane_idx = 0;

    // PARENT PANE
    if display_cfg.parent() && pane_idx < chunks.len() {
        if let Some(parent) = &views.parent {
            panes::draw_pane(frame, context(chunks[pane_idx], ""), parent, |_| None);
        }
        pane_idx += 1;
        if show_separators && pane_idx < chunks.len() {
            widgets::draw_separator(frame, chunks[pane_idx], theme_cfg.separator_style());
            pane_idx += 1;
        }
    }

    // MAIN PANE
    if pane_idx < chunks.len() {
        let empty_text = if nav.query().is_empty() {
            "[Empty]"
        } else {
            "[No matches]"
        };
        panes::draw_pane(
            frame,
            context(chunks[pane_idx], empty_text),
            &views.current,
            |idx| nav.match_at(idx).map(|m| m.positions()),
        );
        pane_idx += 1;
        if show_separators && display_cfg.preview() && pane_idx < chunks.len() {
            widgets::draw_separator(frame, chunks[pane_idx], theme_cfg.separator_style());
            pane_idx += 1;
        }
    }

    // PREVIEW PANE
    if display_cfg.preview()
        && pane_idx < chunks.len()
        && let Some(preview) = &views.preview
    {
        panes::draw_pane(frame, context(chunks[pane_idx], "[Empty]"), preview, |_| None);
    }

    widgets::draw_status(frame, status, nav, theme_cfg);
}

/// Returns the rectangular areas for all active panes, given the display configuration.
///
/// Panes are interleaved with one-column separator chunks when separators are enabled.
/// Ratios of enabled panes are normalized, so they need not add up to 100.
pub fn layout_chunks(size: Rect, cfg: &Display) -> Vec<Rect> {
    let mut constraints = Vec::new();

    let enabled = [
        (cfg.parent_ratio() as u32, cfg.parent()),
        (cfg.main_ratio() as u32, true),
        (cfg.preview_ratio() as u32, cfg.preview()),
    ];

    let total: u32 = enabled
        .iter()
        .filter(|e| e.1)
        .map(|e| e.0)
        .sum::<u32>()
        .max(1);

    let mut sum_pct: u16 = 0;
    let pane_count = enabled.iter().filter(|e| e.1).count();
    let mut pane_added = 0;

    for &(val, enabled) in &enabled {
        if enabled {
            pane_added += 1;
            let pct = if pane_added == pane_count {
                100u16.saturating_sub(sum_pct)
            } else {
                let pct = ((val as f32 / total as f32) * 100.0).round() as u16;
                sum_pct += pct;
                pct
            };
            constraints.push(Constraint::Percentage(pct));
            if cfg.separators() && pane_added < pane_count {
                constraints.push(Constraint::Length(1));
            }
        }
    }

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(size)
        .to_vec()
}
