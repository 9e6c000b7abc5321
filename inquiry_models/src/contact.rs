use std::{borrow::Cow, fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    email_address::EmailAddress,
    macros::{id, nutype_string},
};

/// Label shown for an inquiry without an interest area.
pub const INTEREST_NOT_SPECIFIED: &str = "Not specified";

/// One of the input fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Company,
    Interest,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Email,
        Self::Company,
        Self::Interest,
        Self::Message,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Company => "company",
            Self::Interest => "interest",
            Self::Message => "message",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, Self::Name | Self::Email | Self::Message)
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown contact form field {0:?}")]
pub struct UnknownContactFieldError(pub String);

impl FromStr for ContactField {
    type Err = UnknownContactFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownContactFieldError(s.into()))
    }
}

/// The values entered into the contact form.
///
/// This is also the JSON document posted to the contact endpoint. Keys that
/// are missing from an incoming document deserialize to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactFormFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub interest: String,
    pub message: String,
}

impl ContactFormFields {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Company => &self.company,
            ContactField::Interest => &self.interest,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Company => &mut self.company,
            ContactField::Interest => &mut self.interest,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Returns `true` if every field is an empty string.
    pub fn is_empty(&self) -> bool {
        ContactField::ALL
            .into_iter()
            .all(|field| self.get(field).is_empty())
    }

    /// Returns the required fields which are blank.
    pub fn missing_required(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|field| field.is_required() && self.get(*field).trim().is_empty())
            .collect()
    }
}

/// The interest areas offered by the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactInterest {
    DataEngineering,
    AiMl,
    GenerativeAi,
    BusinessIntelligence,
    MlOps,
    CloudMigration,
    AwsPoc,
    Other,
}

impl ContactInterest {
    pub const ALL: [Self; 8] = [
        Self::DataEngineering,
        Self::AiMl,
        Self::GenerativeAi,
        Self::BusinessIntelligence,
        Self::MlOps,
        Self::CloudMigration,
        Self::AwsPoc,
        Self::Other,
    ];

    /// The value submitted by the form.
    pub fn tag(self) -> &'static str {
        match self {
            Self::DataEngineering => "data-engineering",
            Self::AiMl => "ai-ml",
            Self::GenerativeAi => "genai",
            Self::BusinessIntelligence => "bi",
            Self::MlOps => "mlops",
            Self::CloudMigration => "cloud-migration",
            Self::AwsPoc => "aws-poc",
            Self::Other => "other",
        }
    }

    /// Human readable name of the interest area.
    pub fn label(self) -> &'static str {
        match self {
            Self::DataEngineering => "Data Engineering",
            Self::AiMl => "AI & Machine Learning",
            Self::GenerativeAi => "Generative AI",
            Self::BusinessIntelligence => "Business Intelligence",
            Self::MlOps => "MLOps",
            Self::CloudMigration => "Cloud Migration",
            Self::AwsPoc => "AWS POC Program",
            Self::Other => "Other",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|interest| interest.tag() == tag)
    }
}

/// Returns the display label for an interest tag.
///
/// Unknown tags are shown verbatim, an empty tag means no interest was
/// selected.
pub fn interest_label(tag: &str) -> Cow<'_, str> {
    if tag.is_empty() {
        return INTEREST_NOT_SPECIFIED.into();
    }
    match ContactInterest::from_tag(tag) {
        Some(interest) => interest.label().into(),
        None => tag.into(),
    }
}

/// The phase of a contact form submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Success => "success",
            Self::Error => "error",
        })
    }
}

id!(ContactInquiryId);

nutype_string!(ContactInquiryName(validate(len_char_max = 256)));
nutype_string!(ContactInquiryCompany(validate(len_char_max = 256)));
nutype_string!(ContactInterestTag(validate(len_char_max = 64)));
nutype_string!(ContactInquiryMessage(validate(len_char_max = 4096)));

/// A contact inquiry as received and stored by the contact endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInquiry {
    pub id: ContactInquiryId,
    pub name: ContactInquiryName,
    pub email: EmailAddress,
    pub company: Option<ContactInquiryCompany>,
    pub interest: Option<ContactInterestTag>,
    pub message: ContactInquiryMessage,
    pub created_at: DateTime<Utc>,
}

impl ContactInquiry {
    pub fn interest_label(&self) -> Cow<'_, str> {
        interest_label(self.interest.as_ref().map(|x| x.as_str()).unwrap_or(""))
    }
}
