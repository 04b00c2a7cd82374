//! Visitor side of the contact form: form state plus the HTTP client that
//! talks to the relay.

pub mod client;
pub mod form;

pub use client::{ClientError, RelayClient, RelayReply, SubmissionList, SubmitOutcome};
pub use form::{ContactForm, FormField, FormSubmission, MessageKind, SubmitMessage};
