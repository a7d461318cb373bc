mod contact_email;
mod contact_submission;
mod form_fields;
mod required_text;

pub use contact_email::ContactEmail;
pub use contact_submission::{ContactSubmission, ValidationError};
pub use form_fields::{FormField, FormFields};
pub use required_text::RequiredText;
