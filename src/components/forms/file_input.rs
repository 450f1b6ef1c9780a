//! File input component
//!
//! A "Choose Files" control for one attachment category with the accept
//! hint, the chosen file names and the `Selected: N ...` summary.

use crate::theme::Theme;
use cause_submission::presentation::FileInputRow;
use gpui::prelude::*;
use gpui::*;

pub fn render_file_input(
    theme: &Theme,
    row: &FileInputRow,
    on_choose: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> impl IntoElement {
    div()
        .flex()
        .flex_col()
        .gap(px(6.0))
        .child(
            div()
                .text_size(px(12.0))
                .font_weight(FontWeight::MEDIUM)
                .text_color(theme.text_secondary)
                .child(row.label),
        )
        .child(
            div()
                .px(px(12.0))
                .py(px(8.0))
                .rounded(px(6.0))
                .border_1()
                .border_color(theme.border)
                .bg(theme.input_bg)
                .flex()
                .items_center()
                .gap(px(12.0))
                .child(
                    div()
                        .id(SharedString::from(format!("choose-{}", row.category.field_name())))
                        .px(px(10.0))
                        .py(px(4.0))
                        .rounded(px(4.0))
                        .border_1()
                        .border_color(theme.border)
                        .text_size(px(12.0))
                        .cursor_pointer()
                        .hover(|s| s.bg(theme.hover_bg))
                        .on_click(on_choose)
                        .child("Choose Files"),
                )
                .child(
                    div()
                        .text_size(px(12.0))
                        .text_color(theme.text_dimmed)
                        .child(if row.files.is_empty() {
                            format!("No files chosen ({})", row.accept)
                        } else {
                            row.files
                                .iter()
                                .map(|file| file.name.as_str())
                                .collect::<Vec<_>>()
                                .join(", ")
                        }),
                ),
        )
        // Files outside the accept hint are still sent; flag them only
        .children(row.files.iter().filter(|file| !file.suggested).map(|file| {
            div()
                .text_size(px(11.0))
                .text_color(theme.warning)
                .child(format!("{} is not a typical {} file", file.name, row.category.noun()))
        }))
        .when_some(row.selected_hint.clone(), |el, hint| {
            el.child(
                div()
                    .mt(px(2.0))
                    .text_size(px(12.0))
                    .text_color(theme.text_muted)
                    .child(hint),
            )
        })
}
