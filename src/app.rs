//! Submission window state and rendering

use crate::components::{render_feedback, render_file_input, render_submit_button, render_text_input};
use crate::theme::Theme;
use cause_submission::presentation::{FieldRow, FormView, FILES_HEADING, SUBMITTER_HEADING};
use cause_submission::{
    CauseForm, FieldKind, FileCategory, FileHandle, FormField, SubmissionClient,
    SubmissionTransport, SubmitBlocked,
};
use gpui::prelude::*;
use gpui::*;
use std::sync::Arc;

/// Main window state
pub struct CauseFormApp {
    form: CauseForm,
    client: Arc<SubmissionClient>,
    theme: Theme,
    focus_handle: FocusHandle,
    /// Field receiving keystrokes
    focused_field: Option<FormField>,
}

impl CauseFormApp {
    pub fn new(client: Arc<SubmissionClient>, cx: &mut Context<Self>) -> Self {
        Self {
            form: CauseForm::new(),
            client,
            theme: Theme::default(),
            focus_handle: cx.focus_handle(),
            focused_field: None,
        }
    }

    fn focus_field(&mut self, field: FormField, window: &mut Window, cx: &mut Context<Self>) {
        self.focused_field = Some(field);
        window.focus(&self.focus_handle);
        cx.notify();
    }

    fn handle_key_down(&mut self, event: &KeyDownEvent, window: &mut Window, cx: &mut Context<Self>) {
        let Some(field) = self.focused_field else {
            return;
        };
        let keystroke = &event.keystroke;
        let mut value = self.form.fields().get(field).to_string();

        match keystroke.key.as_str() {
            "backspace" => {
                value.pop();
            }
            "tab" => {
                self.focused_field = Some(adjacent_field(field, keystroke.modifiers.shift));
                cx.notify();
                return;
            }
            "escape" => {
                self.focused_field = None;
                cx.notify();
                return;
            }
            "enter" if field.kind() == FieldKind::TextArea => value.push('\n'),
            // Enter in a single-line input submits, as in a browser form
            "enter" => {
                self.submit(window, cx);
                return;
            }
            _ => {
                if keystroke.modifiers.control || keystroke.modifiers.platform {
                    return;
                }
                match &keystroke.key_char {
                    Some(typed) => value.push_str(typed),
                    None => return,
                }
            }
        }

        self.form.set_field(field, value);
        cx.notify();
    }

    /// Open the platform file dialog and replace the category's selection.
    /// Cancelling the dialog keeps the previous selection.
    fn choose_files(&mut self, category: FileCategory, cx: &mut Context<Self>) {
        let paths = cx.prompt_for_paths(PathPromptOptions {
            files: true,
            directories: false,
            multiple: true,
            prompt: None,
        });

        cx.spawn(async move |this: WeakEntity<Self>, cx: &mut AsyncApp| {
            let selection = match paths.await {
                Ok(Ok(Some(paths))) => paths,
                Ok(Ok(None)) | Err(_) => return,
                Ok(Err(e)) => {
                    log::error!("File dialog failed: {:?}", e);
                    return;
                }
            };

            let _ = this.update(cx, |app: &mut Self, cx: &mut Context<Self>| {
                let files: Vec<FileHandle> = selection.into_iter().map(FileHandle::from).collect();
                log::debug!("Selected {} file(s) for {}", files.len(), category.field_name());
                app.form.set_files(category, files);
                cx.notify();
            });
        })
        .detach();
    }

    /// Validate, then post the form on the background executor
    fn submit(&mut self, _window: &mut Window, cx: &mut Context<Self>) {
        let payload = match self.form.begin_submit() {
            Ok(payload) => payload,
            Err(SubmitBlocked::Invalid(violations)) => {
                self.focused_field = violations.first().map(|v| v.field);
                cx.notify();
                return;
            }
            Err(SubmitBlocked::InFlight) => return,
        };
        cx.notify();

        let client = self.client.clone();
        let request = cx
            .background_executor()
            .spawn(async move { client.submit_cause(&payload) });

        cx.spawn(async move |this: WeakEntity<Self>, cx: &mut AsyncApp| {
            let outcome = request.await;
            let _ = this.update(cx, |app: &mut Self, cx: &mut Context<Self>| {
                app.form.complete_submit(outcome);
                cx.notify();
            });
        })
        .detach();
    }
}

fn adjacent_field(field: FormField, backwards: bool) -> FormField {
    let all = FormField::ALL;
    let index = all.iter().position(|f| *f == field).unwrap_or(0);
    if backwards {
        all[(index + all.len() - 1) % all.len()]
    } else {
        all[(index + 1) % all.len()]
    }
}

impl Render for CauseFormApp {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let view = FormView::from_form(&self.form);
        let theme = self.theme.clone();

        div()
            .id("cause-form-root")
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::handle_key_down))
            .size_full()
            .overflow_y_scroll()
            .bg(theme.background)
            .text_color(theme.text)
            .flex()
            .justify_center()
            .child(
                div()
                    .w(px(720.0))
                    .my(px(32.0))
                    .p(px(24.0))
                    .rounded(px(8.0))
                    .bg(theme.card_bg)
                    .border_1()
                    .border_color(theme.border_subtle)
                    .flex()
                    .flex_col()
                    .gap(px(24.0))
                    .child(
                        div()
                            .text_size(px(22.0))
                            .font_weight(FontWeight::BOLD)
                            .child(view.heading),
                    )
                    .child(self.render_fields(&view.cause_fields, cx))
                    .child(self.render_section(
                        SUBMITTER_HEADING,
                        self.render_fields(&view.submitter_fields, cx),
                    ))
                    .child(self.render_section(FILES_HEADING, self.render_file_inputs(&view, cx)))
                    .child(self.render_section_border(render_submit_button(
                        &theme,
                        &view.submit,
                        cx.listener(|this, _event, window, cx| this.submit(window, cx)),
                    )))
                    .when_some(view.feedback.clone(), |el, feedback| {
                        el.child(render_feedback(&theme, &feedback))
                    }),
            )
    }
}

impl CauseFormApp {
    fn render_fields(&self, rows: &[FieldRow], cx: &mut Context<Self>) -> Div {
        div().flex().flex_col().gap(px(16.0)).children(rows.iter().map(|row| {
            let field = row.field;
            render_text_input(
                &self.theme,
                row,
                self.focused_field == Some(field),
                cx.listener(move |this, _event, window, cx| this.focus_field(field, window, cx)),
            )
        }))
    }

    fn render_file_inputs(&self, view: &FormView, cx: &mut Context<Self>) -> Div {
        div().flex().flex_col().gap(px(16.0)).children(view.file_inputs.iter().map(|row| {
            let category = row.category;
            render_file_input(
                &self.theme,
                row,
                cx.listener(move |this, _event, _window, cx| this.choose_files(category, cx)),
            )
        }))
    }

    fn render_section(&self, title: &'static str, body: impl IntoElement) -> Div {
        self.render_section_border(
            div()
                .flex()
                .flex_col()
                .gap(px(16.0))
                .child(
                    div()
                        .text_size(px(16.0))
                        .font_weight(FontWeight::SEMIBOLD)
                        .child(title),
                )
                .child(body),
        )
    }

    fn render_section_border(&self, body: impl IntoElement) -> Div {
        div()
            .pt(px(24.0))
            .border_t_1()
            .border_color(self.theme.border_subtle)
            .child(body)
    }
}
