//! Theme system for consistent UI styling.

use relay_types::backend::Color;

/// Complete visual theme for the UI toolkit.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Window background color.
    pub background: Color,

    /// Primary text color.
    pub text_primary: Color,
    /// Secondary/muted text color.
    pub text_secondary: Color,
    /// Disabled and placeholder text color.
    pub text_disabled: Color,
    /// Text on accent-colored backgrounds.
    pub text_on_accent: Color,

    /// Primary accent color.
    pub accent: Color,
    /// Accent color on hover.
    pub accent_hover: Color,
    /// Accent color when pressed.
    pub accent_pressed: Color,
    /// Subtle/transparent accent.
    pub accent_subtle: Color,

    /// Default border color.
    pub border: Color,
    /// Subtle/faint border color.
    pub border_subtle: Color,

    /// Button background color.
    pub button_bg: Color,
    /// Button background on hover.
    pub button_bg_hover: Color,
    /// Button background when pressed.
    pub button_bg_pressed: Color,
    /// Disabled button background.
    pub button_bg_disabled: Color,
    /// Input field background.
    pub input_bg: Color,
    /// Input field border.
    pub input_border: Color,
    /// Input field border when focused.
    pub input_border_focus: Color,
    /// Highlight behind selected text.
    pub selection_bg: Color,

    /// Small font size.
    pub font_size_sm: u16,
    /// Medium/default font size.
    pub font_size_md: u16,
    /// Large font size.
    pub font_size_lg: u16,

    /// Small spacing.
    pub spacing_sm: u16,
    /// Medium spacing.
    pub spacing_md: u16,
    /// Large spacing.
    pub spacing_lg: u16,

    /// Small border radius.
    pub border_radius_sm: u16,
    /// Medium border radius.
    pub border_radius_md: u16,
}

impl Theme {
    /// Look up a built-in theme by its config name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "classic" => Some(Self::classic()),
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            "high_contrast" => Some(Self::high_contrast()),
            _ => None,
        }
    }

    /// Dark theme.
    pub fn dark() -> Self {
        Self {
            background: Color::rgb(18, 18, 24),

            text_primary: Color::rgb(230, 230, 240),
            text_secondary: Color::rgb(160, 160, 180),
            text_disabled: Color::rgb(100, 100, 120),
            text_on_accent: Color::rgb(255, 255, 255),

            accent: Color::rgb(80, 160, 255),
            accent_hover: Color::rgb(110, 180, 255),
            accent_pressed: Color::rgb(60, 130, 220),
            accent_subtle: Color::rgba(80, 160, 255, 30),

            border: Color::rgb(60, 60, 80),
            border_subtle: Color::rgb(45, 45, 60),

            button_bg: Color::rgb(50, 50, 70),
            button_bg_hover: Color::rgb(65, 65, 90),
            button_bg_pressed: Color::rgb(40, 40, 55),
            button_bg_disabled: Color::rgb(35, 35, 45),
            input_bg: Color::rgb(25, 25, 35),
            input_border: Color::rgb(60, 60, 80),
            input_border_focus: Color::rgb(80, 160, 255),
            selection_bg: Color::rgba(80, 160, 255, 90),

            font_size_sm: 8,
            font_size_md: 16,
            font_size_lg: 24,

            spacing_sm: 4,
            spacing_md: 8,
            spacing_lg: 12,

            border_radius_sm: 2,
            border_radius_md: 4,
        }
    }

    /// Light theme.
    pub fn light() -> Self {
        Self {
            background: Color::rgb(245, 245, 250),

            text_primary: Color::rgb(20, 20, 30),
            text_secondary: Color::rgb(100, 100, 120),
            text_disabled: Color::rgb(170, 170, 180),
            text_on_accent: Color::rgb(255, 255, 255),

            accent: Color::rgb(50, 120, 220),
            accent_hover: Color::rgb(70, 140, 240),
            accent_pressed: Color::rgb(40, 100, 190),
            accent_subtle: Color::rgba(50, 120, 220, 20),

            border: Color::rgb(210, 210, 220),
            border_subtle: Color::rgb(230, 230, 235),

            button_bg: Color::rgb(230, 230, 240),
            button_bg_hover: Color::rgb(220, 220, 230),
            button_bg_pressed: Color::rgb(200, 200, 215),
            button_bg_disabled: Color::rgb(240, 240, 245),
            input_bg: Color::rgb(255, 255, 255),
            input_border: Color::rgb(200, 200, 210),
            input_border_focus: Color::rgb(50, 120, 220),
            selection_bg: Color::rgba(50, 120, 220, 70),

            font_size_sm: 8,
            font_size_md: 16,
            font_size_lg: 24,

            spacing_sm: 4,
            spacing_md: 8,
            spacing_lg: 12,

            border_radius_sm: 2,
            border_radius_md: 4,
        }
    }

    /// Classic command-box palette: grey window, white field, periwinkle
    /// button, blue focus ring.
    pub fn classic() -> Self {
        let mut theme = Self::light();
        theme.background = Color::rgb(240, 240, 240);
        theme.text_primary = Color::rgb(0, 0, 0);
        theme.input_border = Color::rgb(0, 0, 0);
        theme.input_border_focus = Color::rgb(0, 120, 215);
        theme.selection_bg = Color::rgba(0, 120, 215, 80);
        theme.accent = Color::rgb(100, 100, 255);
        theme.accent_hover = Color::rgb(120, 120, 255);
        theme.accent_pressed = Color::rgb(80, 80, 235);
        theme.border_radius_md = 5;
        theme
    }

    /// High-contrast theme.
    pub fn high_contrast() -> Self {
        Self {
            background: Color::rgb(0, 0, 0),

            text_primary: Color::rgb(255, 255, 255),
            text_secondary: Color::rgb(255, 255, 0),
            text_disabled: Color::rgb(128, 128, 128),
            text_on_accent: Color::rgb(0, 0, 0),

            accent: Color::rgb(0, 255, 255),
            accent_hover: Color::rgb(100, 255, 255),
            accent_pressed: Color::rgb(0, 200, 200),
            accent_subtle: Color::rgba(0, 255, 255, 50),

            border: Color::rgb(255, 255, 255),
            border_subtle: Color::rgb(200, 200, 200),

            button_bg: Color::rgb(40, 40, 40),
            button_bg_hover: Color::rgb(60, 60, 60),
            button_bg_pressed: Color::rgb(20, 20, 20),
            button_bg_disabled: Color::rgb(30, 30, 30),
            input_bg: Color::rgb(0, 0, 0),
            input_border: Color::rgb(255, 255, 255),
            input_border_focus: Color::rgb(0, 255, 255),
            selection_bg: Color::rgb(0, 90, 90),

            font_size_sm: 8,
            font_size_md: 16,
            font_size_lg: 24,

            spacing_sm: 4,
            spacing_md: 8,
            spacing_lg: 12,

            border_radius_sm: 0,
            border_radius_md: 0,
        }
    }
}
