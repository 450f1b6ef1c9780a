//! Submit button

use crate::theme::Theme;
use cause_submission::presentation::SubmitButton;
use gpui::prelude::*;
use gpui::*;

/// Render the form's submit control. Disabled buttons ignore clicks.
pub fn render_submit_button(
    theme: &Theme,
    button: &SubmitButton,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> impl IntoElement {
    let base = div()
        .id("submit-cause")
        .w_full()
        .py(px(12.0))
        .px(px(16.0))
        .rounded(px(6.0))
        .bg(theme.accent)
        .text_color(hsla(0.0, 0.0, 1.0, 1.0))
        .text_size(px(14.0))
        .font_weight(FontWeight::MEDIUM)
        .flex()
        .justify_center()
        .items_center();

    if button.disabled {
        base.opacity(0.5)
            .cursor_not_allowed()
            .gap(px(8.0))
            .child(spinner(px(14.0)))
            .child(button.label)
    } else {
        base.cursor_pointer()
            .hover(|s| s.bg(theme.accent_hover))
            .on_click(on_click)
            .child(button.label)
    }
}

/// Simple loading spinner
fn spinner(size: Pixels) -> Div {
    div()
        .size(size)
        .rounded_full()
        .border_2()
        .border_color(hsla(0.0, 0.0, 1.0, 0.4))
        .border_t_color(hsla(0.0, 0.0, 1.0, 1.0))
}
