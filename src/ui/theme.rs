use fltk::{enums::Color, prelude::*};

use super::main_window::MainWidgets;
use crate::app::settings::Theme;

/// Colors for one theme preset. The five palettes follow the Bootswatch
/// presets the themes are named after.
pub struct Palette {
    pub window: Color,
    pub surface: Color,
    pub text: Color,
    pub accent: Color,
    pub accent_text: Color,
}

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Litera => Palette {
            window: Color::from_rgb(248, 249, 250),
            surface: Color::White,
            text: Color::from_rgb(52, 58, 64),
            accent: Color::from_rgb(69, 130, 236),
            accent_text: Color::White,
        },
        Theme::Darkly => Palette {
            window: Color::from_rgb(34, 34, 34),
            surface: Color::from_rgb(48, 48, 48),
            text: Color::from_rgb(220, 220, 220),
            accent: Color::from_rgb(55, 90, 127),
            accent_text: Color::White,
        },
        Theme::Cyborg => Palette {
            window: Color::from_rgb(6, 6, 6),
            surface: Color::from_rgb(40, 40, 40),
            text: Color::from_rgb(200, 200, 200),
            accent: Color::from_rgb(42, 159, 214),
            accent_text: Color::White,
        },
        Theme::Flatly => Palette {
            window: Color::from_rgb(236, 240, 241),
            surface: Color::White,
            text: Color::from_rgb(33, 37, 41),
            accent: Color::from_rgb(44, 62, 80),
            accent_text: Color::White,
        },
        Theme::Journal => Palette {
            window: Color::from_rgb(250, 250, 250),
            surface: Color::White,
            text: Color::from_rgb(34, 34, 34),
            accent: Color::from_rgb(235, 104, 100),
            accent_text: Color::White,
        },
    }
}

/// Recolor every themed widget in one pass and redraw the window.
pub fn apply_theme(widgets: &mut MainWidgets, theme: Theme) {
    let p = palette(theme);

    widgets.wind.set_color(p.window);
    widgets.wind.set_label_color(p.text);

    widgets.menu.set_color(p.window);
    widgets.menu.set_text_color(p.text);
    widgets.menu.set_selection_color(p.accent);

    for label in &mut widgets.labels {
        label.set_label_color(p.text);
    }
    widgets.last_file_frame.set_label_color(p.text);

    for button in &mut widgets.buttons {
        button.set_color(p.accent);
        button.set_label_color(p.accent_text);
    }

    widgets.text_input.set_color(p.surface);
    widgets.text_input.set_text_color(p.text);
    widgets.hex_input.set_color(p.surface);
    widgets.hex_input.set_text_color(p.text);

    widgets.hex_output.set_color(p.surface);
    widgets.hex_output.set_text_color(p.text);

    widgets.theme_choice.set_color(p.surface);
    widgets.theme_choice.set_text_color(p.text);
    widgets.theme_choice.set_selection_color(p.accent);

    widgets.wind.redraw();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_palettes_have_dark_windows() {
        for theme in Theme::all() {
            let p = palette(*theme);
            let (r, g, b) = p.window.to_rgb();
            let brightness = (r as u32 + g as u32 + b as u32) / 3;
            if theme.is_dark() {
                assert!(brightness < 80, "{} should be dark", theme.name());
            } else {
                assert!(brightness > 170, "{} should be light", theme.name());
            }
        }
    }
}
