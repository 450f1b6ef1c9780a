//! Text input component
//!
//! Renders one bound form field: label, value box (single or multi line)
//! and the validation message when the last submit was blocked on it.

use crate::theme::Theme;
use cause_submission::presentation::FieldRow;
use cause_submission::{FieldKind, FormField};
use gpui::prelude::*;
use gpui::*;

fn placeholder(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Number => "0.00",
        FieldKind::Email => "name@example.com",
        FieldKind::Tel => "+1 555 0100",
        FieldKind::DateTimeLocal => "YYYY-MM-DDTHH:MM",
        FieldKind::Text | FieldKind::TextArea => "",
    }
}

fn rows(row: &FieldRow) -> f32 {
    match row.field {
        FormField::Description => 4.0,
        FormField::SubmitterMessage => 3.0,
        FormField::ShortDescription => 2.0,
        _ => 1.0,
    }
}

/// Render a bound text input
pub fn render_text_input(
    theme: &Theme,
    row: &FieldRow,
    focused: bool,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> impl IntoElement {
    let has_error = row.error.is_some();
    let multiline = row.kind == FieldKind::TextArea;

    let border_color = if has_error {
        theme.negative
    } else if focused {
        theme.accent
    } else {
        theme.border
    };

    let shown = if row.value.is_empty() {
        placeholder(row.kind).to_string()
    } else {
        row.value.clone()
    };

    div()
        .flex()
        .flex_col()
        .gap(px(6.0))
        // Label
        .child(
            div()
                .text_size(px(12.0))
                .font_weight(FontWeight::MEDIUM)
                .text_color(theme.text_secondary)
                .child(row.label.clone()),
        )
        // Input container
        .child(
            div()
                .id(SharedString::from(format!("field-{}", row.field.name())))
                .min_h(px(20.0 * rows(row) + 20.0))
                .px(px(12.0))
                .py(px(10.0))
                .rounded(px(6.0))
                .bg(theme.input_bg)
                .border_1()
                .border_color(border_color)
                .flex()
                .when(!multiline, |el| el.items_center())
                .cursor_text()
                .on_click(on_click)
                .child(
                    div()
                        .flex_grow()
                        .text_size(px(13.0))
                        .text_color(if row.value.is_empty() {
                            theme.text_dimmed
                        } else {
                            theme.text
                        })
                        .child(shown),
                )
                .when(focused, |el| {
                    el.child(div().w(px(1.0)).h(px(16.0)).bg(theme.accent))
                }),
        )
        // Error message
        .when_some(row.error.clone(), |el, error| {
            el.child(
                div()
                    .text_size(px(11.0))
                    .text_color(theme.negative)
                    .child(error),
            )
        })
}
