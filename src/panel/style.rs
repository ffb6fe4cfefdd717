//! Colors and widget styling for the panel.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Parse a `#RRGGBB` color string.
pub fn parse_hex(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let value = u32::from_str_radix(digits, 16).ok()?;
    Some(Color::from_rgb8(
        (value >> 16) as u8,
        (value >> 8) as u8,
        value as u8,
    ))
}

/// The configured panel color, or the stock brown when unparseable.
pub fn panel_color(configured: &str) -> Color {
    parse_hex(configured).unwrap_or_else(|| {
        tracing::warn!(color = configured, "unparseable panel color; using default");
        Color::from_rgb8(0x4B, 0x2E, 0x2A)
    })
}

fn list_color() -> Color {
    Color::from_rgb8(0x5A, 0x3A, 0x35)
}

pub fn panel_background(color: Color) -> iced::theme::Container {
    iced::theme::Container::Custom(Box::new(Fill(color)))
}

pub fn list_background() -> iced::theme::Container {
    iced::theme::Container::Custom(Box::new(Fill(list_color())))
}

pub fn launch_button() -> iced::theme::Button {
    iced::theme::Button::Custom(Box::new(LaunchButton))
}

pub fn remove_button() -> iced::theme::Button {
    iced::theme::Button::Custom(Box::new(RemoveButton))
}

pub fn menu_button() -> iced::theme::Button {
    iced::theme::Button::Custom(Box::new(MenuButton))
}

/// Flat single-color container fill.
struct Fill(Color);

impl container::StyleSheet for Fill {
    type Style = Theme;

    fn appearance(&self, _theme: &Theme) -> container::Appearance {
        container::Appearance {
            background: Some(Background::Color(self.0)),
            ..Default::default()
        }
    }
}

/// Shortcut row: flat, lightens under the cursor. The hover feedback is
/// purely cosmetic.
struct LaunchButton;

impl button::StyleSheet for LaunchButton {
    type Style = Theme;

    fn active(&self, _theme: &Theme) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(Color::from_rgb8(0x6C, 0x4A, 0x42))),
            text_color: Color::WHITE,
            border: Border::with_radius(2.0),
            ..Default::default()
        }
    }

    fn hovered(&self, theme: &Theme) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(Color::from_rgb8(0x7A, 0x55, 0x4D))),
            ..self.active(theme)
        }
    }
}

/// The `x` glyph that removes a row.
struct RemoveButton;

impl button::StyleSheet for RemoveButton {
    type Style = Theme;

    fn active(&self, _theme: &Theme) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(Color::from_rgb8(0xAA, 0x00, 0x00))),
            text_color: Color::WHITE,
            border: Border::with_radius(2.0),
            ..Default::default()
        }
    }

    fn hovered(&self, theme: &Theme) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(Color::from_rgb8(0xCC, 0x00, 0x00))),
            ..self.active(theme)
        }
    }
}

/// Context menu entry.
struct MenuButton;

impl button::StyleSheet for MenuButton {
    type Style = Theme;

    fn active(&self, _theme: &Theme) -> button::Appearance {
        button::Appearance {
            background: None,
            text_color: Color::WHITE,
            border: Border::with_radius(2.0),
            ..Default::default()
        }
    }

    fn hovered(&self, theme: &Theme) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(Color::from_rgb8(0x6C, 0x4A, 0x42))),
            ..self.active(theme)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_hex_colors() {
        let color = parse_hex("#4B2E2A").expect("valid color");
        assert!((color.r - 0x4B as f32 / 255.0).abs() < f32::EPSILON);
        assert!((color.g - 0x2E as f32 / 255.0).abs() < f32::EPSILON);
        assert!((color.b - 0x2A as f32 / 255.0).abs() < f32::EPSILON);
    }

    #[test]
    fn rejects_malformed_hex_colors() {
        assert!(parse_hex("4B2E2A").is_none());
        assert!(parse_hex("#4B2E").is_none());
        assert!(parse_hex("#GGGGGG").is_none());
        assert!(parse_hex("").is_none());
    }

    #[test]
    fn unparseable_config_color_falls_back_to_the_default() {
        let fallback = panel_color("not-a-color");
        assert_eq!(fallback, Color::from_rgb8(0x4B, 0x2E, 0x2A));
    }
}
