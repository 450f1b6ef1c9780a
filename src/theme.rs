//! Theme configuration for the submission window

use gpui::*;

/// Theme colors for the form
#[derive(Clone)]
pub struct Theme {
    // Backgrounds
    pub background: Hsla,
    pub card_bg: Hsla,
    pub input_bg: Hsla,
    pub hover_bg: Hsla,

    // Text
    pub text: Hsla,
    pub text_secondary: Hsla,
    pub text_muted: Hsla,
    pub text_dimmed: Hsla,

    // Borders
    pub border: Hsla,
    pub border_subtle: Hsla,

    // Accent (focus ring, submit button)
    pub accent: Hsla,
    pub accent_hover: Hsla,

    // Feedback
    pub positive: Hsla,
    pub positive_subtle: Hsla,
    pub negative: Hsla,
    pub negative_subtle: Hsla,
    pub warning: Hsla,
}

impl Theme {
    /// Light theme: white card on a soft grey canvas
    pub fn light() -> Self {
        Self {
            background: hsla(220.0 / 360.0, 0.10, 0.97, 1.0),
            card_bg: hsla(0.0, 0.0, 1.0, 1.0),
            input_bg: hsla(220.0 / 360.0, 0.05, 0.99, 1.0),
            hover_bg: hsla(220.0 / 360.0, 0.12, 0.92, 1.0),

            text: hsla(222.0 / 360.0, 0.25, 0.12, 1.0),
            text_secondary: hsla(222.0 / 360.0, 0.15, 0.30, 1.0),
            text_muted: hsla(222.0 / 360.0, 0.10, 0.45, 1.0),
            text_dimmed: hsla(222.0 / 360.0, 0.08, 0.58, 1.0),

            border: hsla(220.0 / 360.0, 0.14, 0.86, 1.0),
            border_subtle: hsla(220.0 / 360.0, 0.10, 0.92, 1.0),

            accent: hsla(217.0 / 360.0, 0.83, 0.53, 1.0),
            accent_hover: hsla(221.0 / 360.0, 0.83, 0.45, 1.0),

            positive: hsla(142.0 / 360.0, 0.64, 0.24, 1.0),
            positive_subtle: hsla(138.0 / 360.0, 0.76, 0.97, 1.0),
            negative: hsla(0.0, 0.70, 0.35, 1.0),
            negative_subtle: hsla(0.0, 0.86, 0.97, 1.0),
            warning: hsla(40.0 / 360.0, 0.88, 0.48, 1.0),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
