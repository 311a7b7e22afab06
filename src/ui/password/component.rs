// SPDX-License-Identifier: MPL-2.0
//! Change Password form component.

use super::state::{Field, FormState, Phase, RemoteRequest, Step, SubmitError, Transition};
use crate::application::port::AuthService;
use crate::domain::account::ValidationError;
use crate::domain::error::AuthError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, operation, text_input, Column, Container, Id, Row, Space, Text};
use iced::{alignment, Element, Length, Task};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

const CURRENT_INPUT_ID: &str = "password-current-input";
const NEW_INPUT_ID: &str = "password-new-input";
const CONFIRM_INPUT_ID: &str = "password-confirm-input";

static NEXT_SESSION: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone)]
pub enum Message {
    Input(Field, String),
    /// Return pressed in a field.
    FieldSubmitted(Field),
    Submit,
    Cancel,
    RemoteFinished {
        session: u64,
        step: Step,
        result: Result<(), AuthError>,
    },
}

/// A remote call tagged with the form session that issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteCall {
    pub session: u64,
    pub request: RemoteRequest,
}

/// Side effects the application should perform after a form message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Run the call with [`perform`] and feed the result back.
    Remote(RemoteCall),
    Invalid(ValidationError),
    RemoteFailed(AuthError),
    /// Password changed; close the form.
    Completed,
    Cancelled,
}

/// Runs one remote stage against `auth`.
pub async fn perform(call: RemoteCall, auth: Arc<dyn AuthService>) -> Message {
    let RemoteCall { session, request } = call;
    let step = request.step();
    let result = match request {
        RemoteRequest::Verify(password) => auth.check_password(password).await,
        RemoteRequest::Update(password) => auth.update_password(password).await,
    };
    match &result {
        Ok(()) => tracing::info!(session, ?step, "password step succeeded"),
        Err(err) => tracing::warn!(session, ?step, error = %err, "password step failed"),
    }
    Message::RemoteFinished {
        session,
        step,
        result,
    }
}

#[derive(Debug)]
pub struct PasswordForm {
    session: u64,
    state: FormState,
}

impl PasswordForm {
    /// Opens a fresh form session with the first field focused.
    #[must_use]
    pub fn open() -> (Self, Task<Message>) {
        let form = Self {
            session: NEXT_SESSION.fetch_add(1, Ordering::Relaxed),
            state: FormState::new(),
        };
        (form, operation::focus(Id::new(CURRENT_INPUT_ID)))
    }

    #[must_use]
    pub fn session(&self) -> u64 {
        self.session
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        self.state.value(field)
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::Input(field, value) => {
                self.state.set_value(field, value);
                (Effect::None, Task::none())
            }
            Message::FieldSubmitted(Field::Current) => {
                (Effect::None, operation::focus(Id::new(NEW_INPUT_ID)))
            }
            Message::FieldSubmitted(Field::New) => {
                (Effect::None, operation::focus(Id::new(CONFIRM_INPUT_ID)))
            }
            Message::FieldSubmitted(Field::Confirm) | Message::Submit => {
                (self.submit(), Task::none())
            }
            Message::Cancel => (Effect::Cancelled, Task::none()),
            Message::RemoteFinished {
                session,
                step,
                result,
            } => {
                if session != self.session {
                    tracing::debug!(session, current = self.session, "result for closed form dropped");
                    return (Effect::None, Task::none());
                }
                let effect = match self.state.complete(step, result) {
                    Transition::Next(request) => Effect::Remote(RemoteCall {
                        session: self.session,
                        request,
                    }),
                    Transition::Failed(err) => Effect::RemoteFailed(err),
                    Transition::Succeeded => Effect::Completed,
                    Transition::Ignored => Effect::None,
                };
                (effect, Task::none())
            }
        }
    }

    fn submit(&mut self) -> Effect {
        match self.state.submit() {
            Ok(request) => Effect::Remote(RemoteCall {
                session: self.session,
                request,
            }),
            Err(SubmitError::Invalid(err)) => {
                tracing::debug!(rule = ?err, "password change rejected locally");
                Effect::Invalid(err)
            }
            Err(SubmitError::Busy) => Effect::None,
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let busy = self.state.phase().is_busy();

        let current = self.field_view(i18n, Field::Current, "password-current-label", busy);
        let new = self.field_view(i18n, Field::New, "password-new-label", busy);
        let confirm = self.field_view(i18n, Field::Confirm, "password-confirm-label", busy);

        let cancel = button(Text::new(i18n.tr("password-cancel")))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::secondary)
            .on_press(Message::Cancel);

        let done = button(Text::new(i18n.tr("password-done")))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::primary)
            .on_press_maybe((!busy).then_some(Message::Submit));

        let actions = Row::new()
            .spacing(spacing::SM)
            .push(Space::new().width(Length::Fill))
            .push(cancel)
            .push(done);

        let mut form = Column::new()
            .spacing(spacing::MD)
            .width(Length::Fixed(sizing::FORM_WIDTH))
            .push(current)
            .push(new)
            .push(confirm)
            .push(actions);

        if busy {
            form = form.push(
                Text::new(i18n.tr("password-progress"))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            );
        }

        Container::new(form)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Top)
            .into()
    }

    fn field_view<'a>(
        &'a self,
        i18n: &'a I18n,
        field: Field,
        label_key: &str,
        busy: bool,
    ) -> Element<'a, Message> {
        let label = i18n.tr(label_key);
        let id = match field {
            Field::Current => CURRENT_INPUT_ID,
            Field::New => NEW_INPUT_ID,
            Field::Confirm => CONFIRM_INPUT_ID,
        };

        let mut input = text_input(&label, self.state.value(field))
            .id(Id::new(id))
            .secure(true)
            .padding(spacing::XS)
            .size(typography::BODY)
            .width(Length::Fill);
        if !busy {
            input = input
                .on_input(move |value| Message::Input(field, value))
                .on_submit(Message::FieldSubmitted(field));
        }

        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(label).size(typography::CAPTION))
            .push(input)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(form: &mut PasswordForm, current: &str, new: &str, confirm: &str) {
        form.handle_message(Message::Input(Field::Current, current.into()));
        form.handle_message(Message::Input(Field::New, new.into()));
        form.handle_message(Message::Input(Field::Confirm, confirm.into()));
    }

    #[test]
    fn sessions_are_unique() {
        let (a, _) = PasswordForm::open();
        let (b, _) = PasswordForm::open();
        assert_ne!(a.session(), b.session());
    }

    #[test]
    fn return_in_confirm_submits() {
        let (mut form, _) = PasswordForm::open();
        fill(&mut form, "old", "new", "new");

        let (effect, _) = form.handle_message(Message::FieldSubmitted(Field::Confirm));

        assert_eq!(
            effect,
            Effect::Remote(RemoteCall {
                session: form.session(),
                request: RemoteRequest::Verify("old".into()),
            })
        );
    }

    #[test]
    fn return_in_other_fields_does_not_submit() {
        let (mut form, _) = PasswordForm::open();
        fill(&mut form, "old", "new", "new");

        let (effect, _) = form.handle_message(Message::FieldSubmitted(Field::Current));
        assert_eq!(effect, Effect::None);
        assert_eq!(form.phase(), Phase::Editing);
    }

    #[test]
    fn invalid_submit_reports_rule() {
        let (mut form, _) = PasswordForm::open();
        fill(&mut form, "old", "", "");

        let (effect, _) = form.handle_message(Message::Submit);
        assert_eq!(effect, Effect::Invalid(ValidationError::NewMissing));
    }

    #[test]
    fn results_from_another_session_are_ignored() {
        let (mut form, _) = PasswordForm::open();
        fill(&mut form, "old", "new", "new");
        form.handle_message(Message::Submit);

        let (effect, _) = form.handle_message(Message::RemoteFinished {
            session: form.session() + 1000,
            step: Step::Verify,
            result: Ok(()),
        });

        assert_eq!(effect, Effect::None);
        assert_eq!(form.phase(), Phase::Verifying);
    }

    #[test]
    fn second_submit_while_verifying_is_ignored() {
        let (mut form, _) = PasswordForm::open();
        fill(&mut form, "old", "new", "new");
        form.handle_message(Message::Submit);

        let (effect, _) = form.handle_message(Message::Submit);
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn cancel_is_always_available() {
        let (mut form, _) = PasswordForm::open();
        fill(&mut form, "old", "new", "new");
        form.handle_message(Message::Submit);

        let (effect, _) = form.handle_message(Message::Cancel);
        assert_eq!(effect, Effect::Cancelled);
    }
}
