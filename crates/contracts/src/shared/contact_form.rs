//! Форма обратной связи. Отправка через сторонний сервис не делается:
//! после валидации собирается ссылка `mailto:`.

use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactFormError {
    #[error("Please enter your name")]
    EmptyName,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a message")]
    EmptyMessage,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(String),
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactFormError> {
        if self.name.trim().is_empty() {
            return Err(ContactFormError::EmptyName);
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ContactFormError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ContactFormError::EmptyMessage);
        }
        Ok(())
    }

    /// Ссылка `mailto:` с закодированными темой и телом письма
    pub fn mailto_href(&self, to: &str, subject: &str) -> String {
        let body = format!(
            "{}\n\n{} <{}>",
            self.message.trim(),
            self.name.trim(),
            self.email.trim()
        );
        format!(
            "mailto:{}?subject={}&body={}",
            to,
            urlencoding::encode(subject),
            urlencoding::encode(&body)
        )
    }
}

fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            name: "Layla".into(),
            email: "layla@example.com".into(),
            message: "Hello & welcome".into(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert_eq!(form().validate(), Ok(()));
    }

    #[test]
    fn test_validation_errors() {
        let mut f = form();
        f.name = "  ".into();
        assert_eq!(f.validate(), Err(ContactFormError::EmptyName));

        let mut f = form();
        f.message = String::new();
        assert_eq!(f.validate(), Err(ContactFormError::EmptyMessage));
    }

    #[test]
    fn test_email_rules() {
        for bad in ["", "plain", "@example.com", "a@b", "a@.com", "a b@example.com", "a@b@c.com"] {
            let mut f = form();
            f.email = bad.into();
            assert_eq!(f.validate(), Err(ContactFormError::InvalidEmail), "{}", bad);
        }
    }

    #[test]
    fn test_mailto_is_encoded() {
        let href = form().mailto_href("hello@studio.com", "New enquiry");
        assert!(href.starts_with("mailto:hello@studio.com?subject=New%20enquiry&body="));
        assert!(href.contains("Hello%20%26%20welcome"));
        assert!(!href.contains('\n'));
    }
}
