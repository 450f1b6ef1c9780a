//! Success / failure banner shown under the form

use crate::theme::Theme;
use cause_submission::presentation::Feedback;
use gpui::*;

pub fn render_feedback(theme: &Theme, feedback: &Feedback) -> impl IntoElement {
    let (bg, fg, heading, lines) = match feedback {
        Feedback::Success {
            heading,
            message,
            detail,
        } => (
            theme.positive_subtle,
            theme.positive,
            *heading,
            vec![(message.clone(), px(13.0)), (detail.clone(), px(11.0))],
        ),
        Feedback::Failure { heading, message } => (
            theme.negative_subtle,
            theme.negative,
            *heading,
            vec![(message.clone(), px(13.0))],
        ),
    };

    div()
        .p(px(16.0))
        .rounded(px(6.0))
        .bg(bg)
        .border_1()
        .border_color(fg.opacity(0.3))
        .flex()
        .flex_col()
        .gap(px(4.0))
        .child(
            div()
                .mb(px(4.0))
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(fg)
                .child(heading),
        )
        .children(
            lines
                .into_iter()
                .map(|(text, size)| div().text_size(size).text_color(fg).child(text)),
        )
}
