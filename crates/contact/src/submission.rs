use serde::Serialize;

/// A contact form entry that passed validation.
///
/// Fields are trimmed and cannot be changed after construction; the only way
/// to obtain one is [`crate::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    name: String,
    phone: String,
    email: String,
    service: String,
    message: String,
}

impl ContactSubmission {
    pub(crate) fn new(
        name: String,
        phone: String,
        email: String,
        service: String,
        message: String,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            service,
            message,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
