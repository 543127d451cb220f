use std::str::FromStr;

use clap::ValueEnum;

use crate::domain::Contact;
use crate::errors::AppError;

/// Supported sort keys
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortField {
    Name,
    Phone,
    Email,
}

impl FromStr for SortField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SortField::Name),
            "phone" => Ok(SortField::Phone),
            "email" => Ok(SortField::Email),
            _ => Err(AppError::InvalidField(s.trim().to_string())),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            _ => Err(AppError::InvalidField(s.trim().to_string())),
        }
    }
}

pub struct ContactStore {
    contacts: Vec<Contact>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self {
            contacts: Vec::new(),
        }
    }

    /// Store pre-populated with the starter contacts.
    pub fn seeded() -> Self {
        Self {
            contacts: vec![
                Contact::new(
                    "Maxwell Wright".to_string(),
                    "(0191) 719 6495".to_string(),
                    "Curabitur.egestas.nunc@nonummyac.co.uk".to_string(),
                ),
                Contact::new(
                    "Raja Villarreal".to_string(),
                    "0866 398 2895".to_string(),
                    "posuere.vulputate@sed.com".to_string(),
                ),
                Contact::new(
                    "Helen Richards".to_string(),
                    "0800 1111".to_string(),
                    "libero@convallis.edu".to_string(),
                ),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn first(&self) -> Result<&Contact, AppError> {
        self.contacts
            .first()
            .ok_or_else(|| AppError::EmptyStore("first".to_string()))
    }

    pub fn last(&self) -> Result<&Contact, AppError> {
        self.contacts
            .last()
            .ok_or_else(|| AppError::EmptyStore("last".to_string()))
    }

    pub fn all(&self) -> &[Contact] {
        &self.contacts
    }

    /// Append a contact built from the three fields.
    /// Every field must be present (non-blank); no format checks beyond that.
    pub fn add(&mut self, name: &str, phone: &str, email: &str) -> Result<&Contact, AppError> {
        for (field, value) in [("name", name), ("phone", phone), ("email", email)] {
            if value.trim().is_empty() {
                return Err(AppError::MissingField(field.to_string()));
            }
        }

        self.contacts.push(Contact::new(
            name.to_string(),
            phone.to_string(),
            email.to_string(),
        ));

        self.contacts
            .last()
            .ok_or_else(|| AppError::EmptyStore("last".to_string()))
    }

    /// Stable in-place reorder by the chosen field, case-sensitive.
    pub fn sort_by(&mut self, field: SortField, direction: SortDirection) {
        match direction {
            SortDirection::Asc => self
                .contacts
                .sort_by(|a, b| key_of(a, field).cmp(key_of(b, field))),
            SortDirection::Desc => self
                .contacts
                .sort_by(|a, b| key_of(b, field).cmp(key_of(a, field))),
        }
    }
}

fn key_of(contact: &Contact, field: SortField) -> &str {
    match field {
        SortField::Name => &contact.name,
        SortField::Phone => &contact.phone,
        SortField::Email => &contact.email,
    }
}

impl Default for ContactStore {
    fn default() -> Self {
        Self::new()
    }
}
