//! # Contact Form
//!
//! Client-side validation of the contact form and the timed restore after a
//! successful submission.
//!
//! | Field   | Empty                 | Format                                              |
//! |---------|-----------------------|-----------------------------------------------------|
//! | name    | `Name is required`    | fewer than 2 UTF-16 units: `Name must be at least 2 characters` |
//! | email   | `Email is required`   | not `local@domain.tld`: `Please enter a valid email address` |
//! | message | `Message is required` | fewer than 10 UTF-16 units: `Message must be at least 10 characters` |

use anyhow::Result;
use regex::Regex;
use std::sync::OnceLock;

use super::{ContactField, Handler, HandlerContext, ViewCommand};
use crate::site::events::{BrowserEvent, TimerTask};
use crate::site::layout::ContactFormLayout;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
const NAME_MIN_CHARS: usize = 2;
const MESSAGE_MIN_CHARS: usize = 10;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

/// Field values as submitted, before trimming
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Read the current field values from the document
    pub fn from_document(context: &HandlerContext, form: &ContactFormLayout) -> Self {
        let value = |field: ContactField| {
            context
                .document
                .get(form.slot(field).input)
                .map(|element| element.value.clone())
                .unwrap_or_default()
        };
        Self {
            name: value(ContactField::Name),
            email: value(ContactField::Email),
            message: value(ContactField::Message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: ContactField,
    pub message: &'static str,
}

/// Length as a browser string reports it, in UTF-16 code units
fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Check every field; errors are reported for all failing fields at once
pub fn validate_submission(submission: &ContactSubmission) -> Vec<FieldError> {
    let mut errors = Vec::new();

    let name = submission.name.trim();
    if name.is_empty() {
        errors.push(FieldError {
            field: ContactField::Name,
            message: "Name is required",
        });
    } else if utf16_len(name) < NAME_MIN_CHARS {
        errors.push(FieldError {
            field: ContactField::Name,
            message: "Name must be at least 2 characters",
        });
    }

    let email = submission.email.trim();
    if email.is_empty() {
        errors.push(FieldError {
            field: ContactField::Email,
            message: "Email is required",
        });
    } else if !email_regex().is_match(email) {
        errors.push(FieldError {
            field: ContactField::Email,
            message: "Please enter a valid email address",
        });
    }

    let message = submission.message.trim();
    if message.is_empty() {
        errors.push(FieldError {
            field: ContactField::Message,
            message: "Message is required",
        });
    } else if utf16_len(message) < MESSAGE_MIN_CHARS {
        errors.push(FieldError {
            field: ContactField::Message,
            message: "Message must be at least 10 characters",
        });
    }

    errors
}

/// Submit on the contact form
pub struct FormSubmitHandler;

impl Handler for FormSubmitHandler {
    fn handle(&self, context: &HandlerContext, _event: &BrowserEvent) -> Result<Vec<ViewCommand>> {
        let mut commands = vec![ViewCommand::PreventDefault, ViewCommand::ClearFieldErrors];
        let Some(form) = &context.layout.contact else {
            return Ok(commands);
        };

        let submission = ContactSubmission::from_document(context, form);
        let errors = validate_submission(&submission);
        tracing::debug!("Contact form validated with {} errors", errors.len());

        if errors.is_empty() {
            commands.push(ViewCommand::ShowSubmissionSuccess);
            commands.push(ViewCommand::ScheduleFormReset {
                delay: context.settings.reset_delay,
            });
        } else {
            commands.extend(errors.into_iter().map(|error| ViewCommand::ShowFieldError {
                field: error.field,
                message: error.message.to_string(),
            }));
        }
        Ok(commands)
    }

    fn name(&self) -> &'static str {
        "FormSubmit"
    }
}

/// Timer callback restoring the form
pub struct FormResetHandler;

impl Handler for FormResetHandler {
    fn is_relevant(&self, _context: &HandlerContext, event: &BrowserEvent) -> bool {
        matches!(
            event,
            BrowserEvent::TimerFired {
                task: TimerTask::ResetContactForm,
                ..
            }
        )
    }

    fn handle(&self, _context: &HandlerContext, _event: &BrowserEvent) -> Result<Vec<ViewCommand>> {
        Ok(vec![ViewCommand::ResetContactForm])
    }

    fn name(&self) -> &'static str {
        "FormReset"
    }
}
