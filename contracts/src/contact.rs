use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Service {
    #[serde(rename = "website")]
    Website,
    #[serde(rename = "google-ads")]
    GoogleAds,
    #[serde(rename = "social-ads")]
    SocialAds,
    #[serde(rename = "strategy")]
    Strategy,
    #[serde(rename = "other")]
    Other,
}

impl Service {
    pub const ALL: [Service; 5] = [
        Service::Website,
        Service::GoogleAds,
        Service::SocialAds,
        Service::Strategy,
        Service::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Service::Website => "website",
            Service::GoogleAds => "google-ads",
            Service::SocialAds => "social-ads",
            Service::Strategy => "strategy",
            Service::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Service::Website => "Website Development",
            Service::GoogleAds => "Google Ads",
            Service::SocialAds => "Social Media Ads",
            Service::Strategy => "Digital Strategy",
            Service::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Budget {
    #[serde(rename = "<5k")]
    UnderFiveK,
    #[serde(rename = "5k-10k")]
    FiveToTenK,
    #[serde(rename = "10k-25k")]
    TenToTwentyFiveK,
    #[serde(rename = "25k+")]
    OverTwentyFiveK,
    #[serde(rename = "not-sure")]
    NotSure,
}

impl Budget {
    pub const ALL: [Budget; 5] = [
        Budget::UnderFiveK,
        Budget::FiveToTenK,
        Budget::TenToTwentyFiveK,
        Budget::OverTwentyFiveK,
        Budget::NotSure,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Budget::UnderFiveK => "<5k",
            Budget::FiveToTenK => "5k-10k",
            Budget::TenToTwentyFiveK => "10k-25k",
            Budget::OverTwentyFiveK => "25k+",
            Budget::NotSure => "not-sure",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Budget::UnderFiveK => "<$5,000",
            Budget::FiveToTenK => "$5,000 - $10,000",
            Budget::TenToTwentyFiveK => "$10,000 - $25,000",
            Budget::OverTwentyFiveK => "$25,000+",
            Budget::NotSure => "Not Sure",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Service,
    Budget,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Service => "service",
            Field::Budget => "budget",
            Field::Message => "message",
        };
        f.write_str(name)
    }
}

/// Per-field validation messages, shown inline next to each input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("contact form has {} invalid field(s)", .0.len())]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}

/// The contact form exactly as typed. Select inputs hold their raw option
/// value, empty until the visitor picks one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub message: String,
}

/// A validated submission; this is the `POST /api/contact` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub service: Service,
    pub budget: Budget,
    pub message: String,
}

/// Acknowledgement returned for an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub id: String,
    pub received_at: String,
}

impl ContactDraft {
    pub fn field_value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => self.phone.as_deref().unwrap_or(""),
            Field::Service => &self.service,
            Field::Budget => &self.budget,
            Field::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = Some(value).filter(|v| !v.is_empty()),
            Field::Service => self.service = value,
            Field::Budget => self.budget = value,
            Field::Message => self.message = value,
        }
    }

    /// Checks a single field, so edits can clear their own error without
    /// revalidating the rest of the form.
    pub fn check(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Name if self.name.trim().chars().count() < NAME_MIN_CHARS => {
                Some("Name must be at least 2 characters")
            }
            Field::Email if !EMAIL_RE.is_match(self.email.trim()) => Some("Invalid email address"),
            Field::Service if Service::parse(&self.service).is_none() => Some("Please select a service"),
            Field::Budget if Budget::parse(&self.budget).is_none() => {
                Some("Please select a budget range")
            }
            Field::Message if self.message.trim().chars().count() < MESSAGE_MIN_CHARS => {
                Some("Message must be at least 10 characters")
            }
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<ContactRequest, FieldErrors> {
        let mut errors = FieldErrors::default();
        for field in [Field::Name, Field::Email, Field::Service, Field::Budget, Field::Message] {
            if let Some(message) = self.check(field) {
                errors.insert(field, message);
            }
        }

        match (Service::parse(&self.service), Budget::parse(&self.budget)) {
            (Some(service), Some(budget)) if errors.is_empty() => Ok(ContactRequest {
                name: self.name.trim().to_string(),
                email: self.email.trim().to_string(),
                phone: self
                    .phone
                    .as_deref()
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(str::to_string),
                service,
                budget,
                message: self.message.trim().to_string(),
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ContactDraft {
        ContactDraft {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
            service: "google-ads".to_string(),
            budget: "5k-10k".to_string(),
            message: "0123456789".to_string(),
        }
    }

    #[test]
    fn test_message_length_boundary() {
        let mut draft = valid_draft();
        draft.message = "012345678".to_string();
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.get(Field::Message).is_some());

        draft.message = "0123456789".to_string();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_every_failing_field_is_reported() {
        let errors = ContactDraft::default().validate().unwrap_err();
        let fields: Vec<Field> = errors.fields().collect();
        assert_eq!(
            fields,
            vec![Field::Name, Field::Email, Field::Service, Field::Budget, Field::Message]
        );
    }

    #[test]
    fn test_email_format() {
        let mut draft = valid_draft();
        for bad in ["", "ada", "ada@", "@example.com", "ada@example", "ada @example.com"] {
            draft.email = bad.to_string();
            assert_eq!(draft.check(Field::Email), Some("Invalid email address"), "{:?}", bad);
        }
        draft.email = "first.last+tag@sub.example.co".to_string();
        assert_eq!(draft.check(Field::Email), None);
    }

    #[test]
    fn test_phone_is_optional_and_unvalidated() {
        let mut draft = valid_draft();
        draft.set_field(Field::Phone, "call me maybe".to_string());
        let request = draft.validate().unwrap();
        assert_eq!(request.phone.as_deref(), Some("call me maybe"));

        draft.set_field(Field::Phone, String::new());
        assert_eq!(draft.phone, None);
        assert_eq!(draft.validate().unwrap().phone, None);
    }

    #[test]
    fn test_enumerated_values() {
        let mut draft = valid_draft();
        draft.service = "seo".to_string();
        draft.budget = "1m".to_string();
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.get(Field::Service), Some("Please select a service"));
        assert_eq!(errors.get(Field::Budget), Some("Please select a budget range"));
    }

    #[test]
    fn test_request_wire_format() {
        let request = valid_draft().validate().unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["service"], "google-ads");
        assert_eq!(json["budget"], "5k-10k");
        assert!(json.get("phone").is_none());

        let draft: ContactDraft = serde_json::from_value(json).unwrap();
        assert_eq!(draft.validate().unwrap(), request);
    }

    #[test]
    fn test_field_errors_serialize_by_field_name() {
        let mut errors = FieldErrors::default();
        errors.insert(Field::Message, "too short");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["message"], "too short");
    }

    #[test]
    fn test_budget_and_service_parse_their_wire_values() {
        for service in Service::ALL {
            assert_eq!(Service::parse(service.as_str()), Some(service));
        }
        for budget in Budget::ALL {
            assert_eq!(Budget::parse(budget.as_str()), Some(budget));
        }
    }
}
