//! Theme colors for the viewer.
//! Reads kitty.conf-style overrides from ~/.config/folio/theme.conf

use ratatui::style::Color;
use std::collections::HashMap;
use std::fs;

/// Theme colors for the UI
#[derive(Debug, Clone)]
pub struct Theme {
    pub accent: Color,        // Active nav entry, focused borders
    pub heading: Color,       // Section headings
    pub text: Color,          // Primary text
    pub text_dim: Color,      // Dimmed / not-yet-revealed text
    pub badge: Color,         // Technology badges
    pub link: Color,          // Project links
    pub bar: Color,           // Skill bar fill
    pub bg_selected: Color,   // Selected card background
    pub inactive: Color,      // Inactive borders and separators
}

impl Default for Theme {
    fn default() -> Self {
        // Catppuccin-inspired fallback palette
        Self {
            accent: Color::Rgb(250, 179, 135),
            heading: Color::Rgb(243, 139, 168),
            text: Color::Rgb(205, 214, 244),
            text_dim: Color::Rgb(108, 112, 134),
            badge: Color::Rgb(166, 218, 149),
            link: Color::Rgb(137, 180, 250),
            bar: Color::Rgb(250, 179, 135),
            bg_selected: Color::Rgb(69, 71, 90),
            inactive: Color::Rgb(88, 91, 112),
        }
    }
}

impl Theme {
    /// Load the user theme, falling back to the built-in palette.
    pub fn load() -> Self {
        if let Some(theme) = Self::load_user_theme() {
            return theme;
        }
        Self::default()
    }

    fn load_user_theme() -> Option<Self> {
        let theme_path = dirs::config_dir()?.join("folio/theme.conf");
        let content = fs::read_to_string(&theme_path).ok()?;
        let colors = Self::parse_theme_conf(&content);

        if colors.is_empty() {
            return None;
        }

        let defaults = Self::default();
        let pick = |key: &str, fallback: Color| colors.get(key).copied().unwrap_or(fallback);

        Some(Self {
            accent: pick("accent", defaults.accent),
            heading: pick("heading", defaults.heading),
            text: pick("foreground", defaults.text),
            text_dim: pick("dim", defaults.text_dim),
            badge: pick("badge", defaults.badge),
            link: pick("link", defaults.link),
            bar: pick("bar", colors.get("accent").copied().unwrap_or(defaults.bar)),
            bg_selected: pick("selection_background", defaults.bg_selected),
            inactive: pick("inactive", defaults.inactive),
        })
    }

    /// Parse `key #hexcolor` lines, skipping comments and blanks.
    fn parse_theme_conf(content: &str) -> HashMap<String, Color> {
        let mut colors = HashMap::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.splitn(2, char::is_whitespace).collect();
            if parts.len() == 2 {
                if let Some(color) = Self::parse_hex_color(parts[1].trim()) {
                    colors.insert(parts[0].trim().to_string(), color);
                }
            }
        }

        colors
    }

    /// Parse a hex color string (#RRGGBB or #RGB)
    fn parse_hex_color(s: &str) -> Option<Color> {
        let s = s.trim().trim_start_matches('#');

        if s.len() == 6 {
            let r = u8::from_str_radix(&s[0..2], 16).ok()?;
            let g = u8::from_str_radix(&s[2..4], 16).ok()?;
            let b = u8::from_str_radix(&s[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        } else if s.len() == 3 {
            let r = u8::from_str_radix(&s[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&s[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&s[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(
            Theme::parse_hex_color("#ffc107"),
            Some(Color::Rgb(255, 193, 7))
        );
    }

    #[test]
    fn parses_three_digit_hex() {
        assert_eq!(Theme::parse_hex_color("#fff"), Some(Color::Rgb(255, 255, 255)));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(Theme::parse_hex_color("#12345"), None);
        assert_eq!(Theme::parse_hex_color("not-a-color"), None);
    }

    #[test]
    fn conf_lines_override_defaults() {
        let colors = Theme::parse_theme_conf("# comment\naccent #ff0000\n\nlink #00ff00\n");
        assert_eq!(colors.get("accent"), Some(&Color::Rgb(255, 0, 0)));
        assert_eq!(colors.get("link"), Some(&Color::Rgb(0, 255, 0)));
        assert_eq!(colors.len(), 2);
    }
}
