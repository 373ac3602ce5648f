//! Contact form: validated, then recorded through the log.

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("{0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [&self.name, &self.email, &self.phone, &self.message];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err(ContactError::Validation(
                "name, email, phone, and message are required".to_string(),
            ));
        }
        if !self.email.contains('@') {
            return Err(ContactError::Validation(
                "please enter a valid email address".to_string(),
            ));
        }
        Ok(())
    }
}

/// Validates the message and logs it for `recipient`.
pub fn send_contact_message(message: &ContactMessage, recipient: &str) -> Result<(), ContactError> {
    message.validate()?;
    tracing::info!(
        recipient,
        from = %message.name,
        email = %message.email,
        phone = %message.phone,
        body = %message.message,
        "contact message received"
    );
    Ok(())
}
