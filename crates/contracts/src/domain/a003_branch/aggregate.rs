use serde::{Deserialize, Serialize};

/// Офис (филиал) студии для страницы контактов
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl Branch {
    pub fn phone_href(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{}", digits)
    }

    pub fn email_href(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_href_strips_spaces() {
        let branch = Branch {
            id: 1,
            name: "DUBAI HEADQUARTERS".into(),
            address: "Downtown Dubai".into(),
            phone: "+971 4 123 4567".into(),
            email: "dubai@example.com".into(),
        };
        assert_eq!(branch.phone_href(), "tel:+97141234567");
        assert_eq!(branch.email_href(), "mailto:dubai@example.com");
    }
}
