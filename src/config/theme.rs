//! Theme configuration for pathsurfer.
//!
//! Colors are read from the `[theme]` table as names ("green", "darkgray") or hex codes
//! ("#RRGGBB" / "#RGB"). Unknown values fall back to the terminal default.

use crate::utils::parse_color;

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Theme {
    #[serde(deserialize_with = "deserialize_color_field")]
    directory: Color,
    #[serde(deserialize_with = "deserialize_color_field")]
    selection_fg: Color,
    #[serde(deserialize_with = "deserialize_color_field")]
    selection_bg: Color,
    #[serde(deserialize_with = "deserialize_color_field")]
    path: Color,
    #[serde(deserialize_with = "deserialize_color_field")]
    status: Color,
    #[serde(deserialize_with = "deserialize_color_field")]
    matched: Color,
    #[serde(deserialize_with = "deserialize_color_field")]
    error: Color,
    #[serde(deserialize_with = "deserialize_color_field")]
    separator: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            directory: Color::Green,
            selection_fg: Color::White,
            selection_bg: Color::DarkGray,
            path: Color::Blue,
            status: Color::Yellow,
            matched: Color::Yellow,
            error: Color::Red,
            separator: Color::Indexed(238),
        }
    }
}

impl Theme {
    pub fn directory_style(&self) -> Style {
        Style::default()
            .fg(self.directory)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selection_style(&self) -> Style {
        Style::default().fg(self.selection_fg).bg(self.selection_bg)
    }

    pub fn path_style(&self) -> Style {
        Style::default().fg(self.path).add_modifier(Modifier::BOLD)
    }

    pub fn status_style(&self) -> Style {
        Style::default().fg(self.status)
    }

    /// Matched query runes are underlined as well, so they stay visible on the selected row.
    pub fn matched_style(&self) -> Style {
        Style::default()
            .fg(self.matched)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn separator_style(&self) -> Style {
        Style::default().fg(self.separator)
    }
}

fn deserialize_color_field<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(parse_color(&s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_parse_from_names_and_hex() -> Result<(), toml::de::Error> {
        let theme: Theme = toml::from_str(
            r##"
            directory = "cyan"
            selection_bg = "#102030"
            matched = "#f0a"
            error = "no-such-color"
            "##,
        )?;
        assert_eq!(theme.directory, Color::Cyan);
        assert_eq!(theme.selection_bg, Color::Rgb(0x10, 0x20, 0x30));
        assert_eq!(theme.matched, Color::Rgb(0xff, 0x00, 0xaa));
        assert_eq!(theme.error, Color::Reset);
        assert_eq!(theme.path, Color::Blue);
        Ok(())
    }

    #[test]
    fn selection_style_combines_fg_and_bg() {
        let theme = Theme::default();
        let style = theme.selection_style();
        assert_eq!(style.fg, Some(Color::White));
        assert_eq!(style.bg, Some(Color::DarkGray));
    }
}
