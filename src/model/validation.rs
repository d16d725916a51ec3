use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;
use thiserror::Error;

use super::field::Field;

/// A single field's validation failure.
///
/// The `Display` text is the message shown to the applicant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required.")]
    Required(Field),
    #[error("At least one skill must be selected.")]
    NoSkills,
    #[error("Email must be a valid email format.")]
    InvalidEmail(String),
    #[error("Phone Number must be a valid number.")]
    InvalidPhone(String),
    #[error("Relevant Experience must be a number.")]
    ExperienceNotANumber(String),
    #[error("Relevant Experience must be a number greater than 0.")]
    ExperienceNotPositive(String),
    #[error("Portfolio URL must be a valid URL.")]
    InvalidPortfolioUrl(String),
    #[error("Preferred Interview Time must be a valid date and time (YYYY-MM-DD HH:MM).")]
    InvalidInterviewTime(String),
}

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid hardcoded regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("valid hardcoded regex"));

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^(http|https)://[^ "]+$"#).expect("valid hardcoded regex"));

/// Date-time shapes accepted for the interview time, most specific first.
const INTERVIEW_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Validates an email address shaped like `local@domain.tld`.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail(email.to_string()))
    }
}

/// Validates a phone number: ASCII digits only, no spaces, symbols or `+`.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_RE.is_match(phone) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhone(phone.to_string()))
    }
}

/// Validates years of experience: a finite number strictly greater than zero.
pub fn validate_experience(experience: &str) -> Result<(), ValidationError> {
    match experience.trim().parse::<f64>() {
        Ok(years) if !years.is_finite() => {
            Err(ValidationError::ExperienceNotANumber(experience.to_string()))
        }
        Ok(years) if years > 0.0 => Ok(()),
        Ok(_) => Err(ValidationError::ExperienceNotPositive(experience.to_string())),
        Err(_) => Err(ValidationError::ExperienceNotANumber(experience.to_string())),
    }
}

/// Validates a portfolio link: `http://` or `https://` followed by no spaces or quotes.
pub fn validate_portfolio_url(url: &str) -> Result<(), ValidationError> {
    if URL_RE.is_match(url) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPortfolioUrl(url.to_string()))
    }
}

/// Parses an interview time such as `2026-10-20 14:30` or `2026-10-20T14:30`.
pub fn parse_interview_time(value: &str) -> Result<NaiveDateTime, ValidationError> {
    let trimmed = value.trim();
    INTERVIEW_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| ValidationError::InvalidInterviewTime(value.to_string()))
}

/// Validates an interview time; see [`parse_interview_time`].
pub fn validate_interview_time(value: &str) -> Result<(), ValidationError> {
    parse_interview_time(value).map(|_| ())
}
