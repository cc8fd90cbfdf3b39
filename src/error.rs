use thiserror::Error;

use crate::contact::Field;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
    #[error("section not found in document: {0}")]
    SectionNotFound(&'static str),
    #[error("form is already submitting")]
    FormBusy,
    #[error("missing required field: {0}")]
    MissingField(Field),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(SiteError::FormBusy.to_string(), "form is already submitting");
        assert_eq!(
            SiteError::MissingField(Field::Email).to_string(),
            "missing required field: email"
        );
        assert_eq!(
            SiteError::SectionNotFound("contact").to_string(),
            "section not found in document: contact"
        );
    }
}
