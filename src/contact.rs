use std::fmt;

use crate::error::SiteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Success,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    phase: FormPhase,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// The submit control is disabled outside of [`FormPhase::Idle`].
    pub fn can_submit(&self) -> bool {
        self.phase == FormPhase::Idle
    }

    /// Idle -> Submitting. Every field must be non-empty.
    pub fn submit(&mut self) -> Result<(), SiteError> {
        if !self.can_submit() {
            return Err(SiteError::FormBusy);
        }
        if let Some(missing) = Field::ALL
            .into_iter()
            .find(|f| self.field(*f).is_empty())
        {
            return Err(SiteError::MissingField(missing));
        }
        self.phase = FormPhase::Submitting;
        Ok(())
    }

    /// Submitting -> Success, once the simulated send delay elapses.
    pub fn mark_sent(&mut self) {
        if self.phase == FormPhase::Submitting {
            self.phase = FormPhase::Success;
        }
    }

    /// Success -> Idle with every field cleared.
    pub fn reset(&mut self) {
        if self.phase == FormPhase::Success {
            *self = Self::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(Field::Name, "Ada".to_string());
        form.set(Field::Email, "ada@example.com".to_string());
        form.set(Field::Subject, "Hello".to_string());
        form.set(Field::Message, "Let's build something".to_string());
        form
    }

    #[test]
    fn test_full_cycle() {
        let mut form = filled();
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(form.submit(), Ok(()));
        assert_eq!(form.phase(), FormPhase::Submitting);
        // fields survive until the success state resets
        assert_eq!(form.field(Field::Name), "Ada");
        form.mark_sent();
        assert_eq!(form.phase(), FormPhase::Success);
        assert_eq!(form.field(Field::Message), "Let's build something");
        form.reset();
        assert_eq!(form, ContactForm::new());
        assert_eq!(form.phase(), FormPhase::Idle);
    }

    #[test]
    fn test_blocked_while_busy() {
        let mut form = filled();
        form.submit().expect("first submit should pass");
        assert_eq!(form.submit(), Err(SiteError::FormBusy));
        assert!(!form.can_submit());
        form.mark_sent();
        assert_eq!(form.submit(), Err(SiteError::FormBusy));
        assert!(!form.can_submit());
        form.reset();
        assert!(form.can_submit());
    }

    #[test]
    fn test_required_fields() {
        let mut form = filled();
        form.set(Field::Subject, String::new());
        assert_eq!(form.submit(), Err(SiteError::MissingField(Field::Subject)));
        assert_eq!(form.phase(), FormPhase::Idle);

        let mut empty = ContactForm::new();
        assert_eq!(empty.submit(), Err(SiteError::MissingField(Field::Name)));
    }

    #[test]
    fn test_whitespace_counts_as_filled() {
        // same rule as the inputs' `required` attribute
        let mut form = filled();
        form.set(Field::Subject, " ".to_string());
        assert_eq!(form.submit(), Ok(()));
        assert_eq!(form.phase(), FormPhase::Submitting);
    }

    #[test]
    fn test_out_of_order_transitions_ignored() {
        let mut form = filled();
        form.mark_sent();
        assert_eq!(form.phase(), FormPhase::Idle);
        form.reset();
        assert_eq!(form.field(Field::Email), "ada@example.com");
        form.submit().expect("submit should pass");
        form.reset();
        assert_eq!(form.phase(), FormPhase::Submitting);
    }
}
