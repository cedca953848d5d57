//! UI events and error modeling for the MedCases controller.

use session_core::SessionEvent;

pub enum UiEvent {
    Session(SessionEvent),
    /// Open the auth screen on the sign-up form.
    ShowSignUp,
    Info(String),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Validation,
    Queue,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    Auth,
    Upload,
    General,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("queue")
            || message_lower.contains("disconnected")
        {
            UiErrorCategory::Queue
        } else if message_lower.contains("required")
            || message_lower.contains("invalid")
            || message_lower.contains("not a whole number")
            || message_lower.contains("is above")
            || message_lower.contains("select")
        {
            UiErrorCategory::Validation
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Validation => "Check the form",
        UiErrorCategory::Queue => "Event queue",
        UiErrorCategory::Unknown => "Unexpected",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::draft::DraftError;

    #[test]
    fn draft_errors_classify_as_validation() {
        for err in [
            DraftError::MissingDiagnosis,
            DraftError::MissingPresentation,
            DraftError::InvalidAge("x".to_string()),
            DraftError::AgeOutOfRange(200),
        ] {
            let ui_err = UiError::from_message(UiErrorContext::Upload, err.to_string());
            assert_eq!(ui_err.category(), UiErrorCategory::Validation, "{err}");
            assert_eq!(ui_err.context(), UiErrorContext::Upload);
        }
    }

    #[test]
    fn queue_failures_classify_as_queue() {
        let err = UiError::from_message(
            UiErrorContext::General,
            "UI event queue disconnected; restart the app",
        );
        assert_eq!(err.category(), UiErrorCategory::Queue);
        assert_eq!(err_label(err.category()), "Event queue");
    }

    #[test]
    fn unrecognized_messages_are_unknown() {
        let err = UiError::from_message(UiErrorContext::Auth, "something odd");
        assert_eq!(err.category(), UiErrorCategory::Unknown);
        assert_eq!(err.message(), "something odd");
    }
}
