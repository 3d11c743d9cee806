//! Board colors, configurable through the `theme` section of the settings file.

use crate::services::ThemeSettings;
use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct BoardTheme {
    pub title_fg: Color,
    pub border: Color,
    pub focus_border: Color,
    pub tile_fg: Color,
    pub tile_bg: Color,
    pub clicked_fg: Color,
    pub clicked_bg: Color,
    pub button_fg: Color,
    pub button_bg: Color,
    pub cursor_fg: Color,
}

impl Default for BoardTheme {
    fn default() -> Self {
        Self {
            title_fg: Color::Indexed(6), // Cyan
            border: Color::Indexed(8),   // DarkGray
            focus_border: Color::Indexed(6),
            tile_fg: Color::Indexed(15),
            tile_bg: Color::Reset,
            clicked_fg: Color::Rgb(0x4C, 0x1D, 0x95),
            clicked_bg: Color::Rgb(0xDD, 0xD6, 0xFE),
            button_fg: Color::Indexed(0),
            button_bg: Color::Indexed(7),
            cursor_fg: Color::Indexed(3),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSupport {
    TrueColor,
    Ansi256,
    Ansi16,
}

pub fn detect_color_support() -> ColorSupport {
    if let Ok(value) = std::env::var("CHIPLIST_COLOR_SUPPORT") {
        match value.trim().to_ascii_lowercase().as_str() {
            "truecolor" | "24bit" => return ColorSupport::TrueColor,
            "256" | "ansi256" => return ColorSupport::Ansi256,
            "16" | "ansi16" => return ColorSupport::Ansi16,
            _ => {}
        }
    }

    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        return ColorSupport::TrueColor;
    }
    let term = std::env::var("TERM").unwrap_or_default().to_ascii_lowercase();
    if term.contains("256color") {
        return ColorSupport::Ansi256;
    }
    ColorSupport::Ansi16
}

impl BoardTheme {
    pub fn apply_settings(&mut self, settings: &ThemeSettings) {
        let slots: [(&Option<String>, &mut Color); 10] = [
            (&settings.title_fg, &mut self.title_fg),
            (&settings.border, &mut self.border),
            (&settings.focus_border, &mut self.focus_border),
            (&settings.tile_fg, &mut self.tile_fg),
            (&settings.tile_bg, &mut self.tile_bg),
            (&settings.clicked_fg, &mut self.clicked_fg),
            (&settings.clicked_bg, &mut self.clicked_bg),
            (&settings.button_fg, &mut self.button_fg),
            (&settings.button_bg, &mut self.button_bg),
            (&settings.cursor_fg, &mut self.cursor_fg),
        ];
        for (value, slot) in slots {
            let Some(value) = value else {
                continue;
            };
            match parse_color(value) {
                Some(color) => *slot = color,
                None => tracing::warn!(value = %value, "unknown theme color"),
            }
        }
    }

    pub fn adapt_to(&mut self, support: ColorSupport) {
        for color in [
            &mut self.title_fg,
            &mut self.border,
            &mut self.focus_border,
            &mut self.tile_fg,
            &mut self.tile_bg,
            &mut self.clicked_fg,
            &mut self.clicked_bg,
            &mut self.button_fg,
            &mut self.button_bg,
            &mut self.cursor_fg,
        ] {
            *color = downgrade(*color, support);
        }
    }
}

pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }

    let index = match v.to_ascii_lowercase().as_str() {
        "reset" | "default" => return Some(Color::Reset),
        "black" => 0,
        "red" => 1,
        "green" => 2,
        "yellow" => 3,
        "blue" => 4,
        "magenta" => 5,
        "cyan" => 6,
        "gray" | "grey" => 7,
        "dark_gray" | "dark_grey" => 8,
        "light_red" => 9,
        "light_green" => 10,
        "light_yellow" => 11,
        "light_blue" => 12,
        "light_magenta" => 13,
        "light_cyan" => 14,
        "white" => 15,
        _ => return None,
    };
    Some(Color::Indexed(index))
}

fn downgrade(color: Color, support: ColorSupport) -> Color {
    let Color::Rgb(r, g, b) = color else {
        return color;
    };
    match support {
        ColorSupport::TrueColor => color,
        ColorSupport::Ansi256 => Color::Indexed(rgb_to_cube(r, g, b)),
        ColorSupport::Ansi16 => Color::Indexed(rgb_to_basic(r, g, b)),
    }
}

/// Nearest entry of the 6x6x6 color cube (indices 16..=231).
fn rgb_to_cube(r: u8, g: u8, b: u8) -> u8 {
    fn level(c: u8) -> u8 {
        match c {
            0..=47 => 0,
            48..=114 => 1,
            _ => (c - 35) / 40,
        }
    }
    16 + 36 * level(r) + 6 * level(g) + level(b)
}

/// Maps to one of the 16 basic colors by thresholding each channel.
fn rgb_to_basic(r: u8, g: u8, b: u8) -> u8 {
    let max = r.max(g).max(b);
    let bright = max > 191;
    let on = |c: u8| c > max / 2 && c > 63;
    let mut index = u8::from(on(r)) | (u8::from(on(g)) << 1) | (u8::from(on(b)) << 2);
    if index == 0 && max > 63 {
        index = 7;
    }
    if bright {
        index += 8;
    }
    index
}

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
