use super::client::SubmitOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Email,
    Message,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Message,
            FormField::Message => FormField::Name,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FormField::Name => FormField::Message,
            FormField::Email => FormField::Name,
            FormField::Message => FormField::Email,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Message => "Message",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// Status line under the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitMessage {
    pub kind: MessageKind,
    pub text: String,
    /// Generation counter; a delayed clear only applies to the message it was
    /// scheduled for
    pub id: u64,
}

/// Contact form state. Rendering and key handling live in the UI layer.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub focus: FormField,
    submitting: bool,
    status: Option<SubmitMessage>,
    next_message_id: u64,
}

/// Values captured when a submission starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if self.submitting {
            return;
        }
        let focus = self.focus;
        self.field_mut(focus).push(c);
    }

    pub fn backspace(&mut self) {
        if self.submitting {
            return;
        }
        let focus = self.focus;
        self.field_mut(focus).pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn status(&self) -> Option<&SubmitMessage> {
        self.status.as_ref()
    }

    /// Start a submission. Returns `None` while one is already in flight.
    pub fn begin_submit(&mut self) -> Option<FormSubmission> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        self.status = None;
        Some(FormSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }

    /// Record the outcome of the in-flight submission. Fields are cleared on
    /// success and kept on failure. Returns the id of the new status message
    /// when it should be cleared after a delay.
    pub fn finish_submit(&mut self, outcome: SubmitOutcome) -> Option<u64> {
        self.submitting = false;
        self.next_message_id += 1;
        let id = self.next_message_id;

        match outcome {
            SubmitOutcome::Success(text) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.focus = FormField::Name;
                self.status = Some(SubmitMessage {
                    kind: MessageKind::Success,
                    text,
                    id,
                });
                Some(id)
            }
            SubmitOutcome::Failure(text) => {
                self.status = Some(SubmitMessage {
                    kind: MessageKind::Error,
                    text,
                    id,
                });
                None
            }
        }
    }

    /// Drop the status message if it is still the one identified by `id`
    pub fn clear_status(&mut self, id: u64) -> bool {
        match &self.status {
            Some(message) if message.id == id => {
                self.status = None;
                true
            }
            _ => false,
        }
    }
}
