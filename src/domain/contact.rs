use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    pub fn new(name: String, phone: String, email: String) -> Self {
        Contact { name, phone, email }
    }

    /// Single display line, "name / phone / email".
    pub fn display_line(&self) -> String {
        format!("{} / {} / {}", self.name, self.phone, self.email)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn display_line_joins_fields() {
        let contact = Contact::new(
            "Helen Richards".to_string(),
            "0800 1111".to_string(),
            "libero@convallis.edu".to_string(),
        );

        assert_eq!(
            contact.display_line(),
            "Helen Richards / 0800 1111 / libero@convallis.edu"
        );
    }
}
