use crate::domain::{ContactEmail, FormField, FormFields, RequiredText};
use crate::util::error_chain_fmt;

/// A contact request that passed client-side validation.
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub first_name: RequiredText,
    pub last_name: RequiredText,
    pub email: ContactEmail,
    pub service: RequiredText,
    pub message: RequiredText,
}

impl ContactSubmission {
    /// Body pairs for an `application/x-www-form-urlencoded` post.
    pub fn form_body(&self) -> [(&'static str, &str); 5] {
        [
            (FormField::FirstName.wire_name(), self.first_name.as_ref()),
            (FormField::LastName.wire_name(), self.last_name.as_ref()),
            (FormField::Email.wire_name(), self.email.as_ref()),
            (FormField::Service.wire_name(), self.service.as_ref()),
            (FormField::Message.wire_name(), self.message.as_ref()),
        ]
    }
}

#[derive(thiserror::Error, PartialEq, Eq, Clone)]
pub enum ValidationError {
    #[error("Please fill in all required fields (First Name, Last Name, Email, Service, and Message).")]
    MissingFields(Vec<FormField>),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

impl std::fmt::Debug for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl TryFrom<&FormFields> for ContactSubmission {
    type Error = ValidationError;

    fn try_from(fields: &FormFields) -> Result<Self, Self::Error> {
        let missing: Vec<FormField> = FormField::ALL
            .into_iter()
            .filter(|field| !fields.is_filled(*field))
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }
        let required = |field: FormField| {
            RequiredText::parse(fields.get(field))
                .ok_or_else(|| ValidationError::MissingFields(vec![field]))
        };
        Ok(Self {
            first_name: required(FormField::FirstName)?,
            last_name: required(FormField::LastName)?,
            email: ContactEmail::parse(fields.get(FormField::Email))
                .map_err(|_| ValidationError::InvalidEmail)?,
            service: required(FormField::Service)?,
            message: required(FormField::Message)?,
        })
    }
}
