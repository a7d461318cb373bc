use std::fmt;

/// The named inputs of the contact form, in the order they appear on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Service,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::FirstName,
        FormField::LastName,
        FormField::Email,
        FormField::Service,
        FormField::Message,
    ];

    /// The `name` attribute of the input, also used as the form body key.
    pub fn wire_name(&self) -> &'static str {
        match self {
            FormField::FirstName => "firstName",
            FormField::LastName => "lastName",
            FormField::Email => "email",
            FormField::Service => "service",
            FormField::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::FirstName => "First Name",
            FormField::LastName => "Last Name",
            FormField::Email => "Email",
            FormField::Service => "Service",
            FormField::Message => "Message",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw field values as currently typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Email => &self.email,
            FormField::Service => &self.service,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::FirstName => &mut self.first_name,
            FormField::LastName => &mut self.last_name,
            FormField::Email => &mut self.email,
            FormField::Service => &mut self.service,
            FormField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn is_filled(&self, field: FormField) -> bool {
        !self.get(field).trim().is_empty()
    }

    pub fn is_cleared(&self) -> bool {
        *self == FormFields::default()
    }
}
