use thiserror::Error;

use crate::config;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("name is required")]
    MissingName,
    #[error("message is required")]
    MissingMessage,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.is_empty() {
            return Err(ContactError::MissingName);
        }
        if self.message.is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(())
    }

    /// The pre-filled chat text. An empty email leaves its line blank.
    pub fn whatsapp_message(&self) -> String {
        let email_line = if self.email.is_empty() {
            String::new()
        } else {
            format!("*Email:* {}", self.email)
        };
        format!(
            "Hi {}! 👋\n\n*Name:* {}\n{}\n\n*Message:*\n{}\n\n*Sent from your portfolio website*",
            config::OWNER_NAME,
            self.name,
            email_line,
            self.message,
        )
    }

    pub fn whatsapp_link(&self) -> Result<String, ContactError> {
        self.validate()?;
        Ok(format!(
            "{}/{}?text={}",
            config::WHATSAPP_ENDPOINT,
            config::WHATSAPP_NUMBER,
            urlencoding::encode(&self.whatsapp_message()),
        ))
    }

    /// Builds the link and clears the form. On error the form is left as is.
    pub fn submit(&mut self) -> Result<String, ContactError> {
        let link = self.whatsapp_link()?;
        self.clear();
        Ok(link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    fn decoded_text(link: &str) -> String {
        let (_, encoded) = link.split_once("?text=").expect("text parameter");
        urlencoding::decode(encoded).expect("valid encoding").into_owned()
    }

    #[test]
    fn empty_name_opens_nothing() {
        let mut f = form("", "", "Hi");
        assert_eq!(f.submit(), Err(ContactError::MissingName));
        assert_eq!(f, form("", "", "Hi"));
    }

    #[test]
    fn empty_message_opens_nothing() {
        let mut f = form("Priya", "priya@example.com", "");
        assert_eq!(f.submit(), Err(ContactError::MissingMessage));
        assert_eq!(f, form("Priya", "priya@example.com", ""));
    }

    #[test]
    fn link_targets_recipient_and_carries_fields() {
        let mut f = form("Priya", "priya@example.com", "Let's talk about a project");
        let link = f.submit().unwrap();
        assert!(link.starts_with("https://wa.me/917858925358?text="));
        let text = decoded_text(&link);
        assert!(text.contains("*Name:* Priya"));
        assert!(text.contains("*Email:* priya@example.com"));
        assert!(text.contains("*Message:*\nLet's talk about a project"));
        assert_eq!(f, ContactForm::default());
    }

    #[test]
    fn missing_email_leaves_no_email_line() {
        let f = form("Priya", "", "Hello");
        let link = f.whatsapp_link().unwrap();
        let text = decoded_text(&link);
        assert!(!text.contains("Email"));
        assert!(text.contains("*Message:*\nHello\n"));
        assert!(text.starts_with("Hi Md Aman! 👋\n\n*Name:* Priya\n\n\n*Message:*"));
    }

    #[test]
    fn message_is_percent_encoded() {
        let link = form("A B", "", "x&y=z?\n").whatsapp_link().unwrap();
        let (_, encoded) = link.split_once("?text=").unwrap();
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('&'));
        assert!(!encoded.contains('\n'));
        assert!(!encoded.contains('?'));
        assert!(decoded_text(&link).contains("x&y=z?\n"));
    }

    #[test]
    fn set_updates_one_field() {
        let mut f = ContactForm::default();
        f.set(ContactField::Email, "a@b.c".into());
        assert_eq!(f, form("", "a@b.c", ""));
    }
}
