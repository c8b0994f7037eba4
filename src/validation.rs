use serde_json::Value;
use thiserror::Error;

use crate::structs::resume::{ResumeField, ResumeRecord};

/// Order in which required fields are checked. The first missing one is reported.
pub const VALIDATION_ORDER: [ResumeField; 12] = [
    ResumeField::Name,
    ResumeField::Introduction,
    ResumeField::Id,
    ResumeField::Birthday,
    ResumeField::Linkedin,
    ResumeField::City,
    ResumeField::Github,
    ResumeField::Bitbucket,
    ResumeField::Phone,
    ResumeField::Image,
    ResumeField::Degree,
    ResumeField::Conclusion,
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Value for {0} required!")]
    MissingField(ResumeField),
}

/// Checks that `candidate` carries every resume field as a non-empty string.
///
/// Anything other than a JSON object is reported as missing its first field.
pub fn validate(candidate: &Value) -> Result<(), ValidationError> {
    for field in VALIDATION_ORDER {
        if populated(candidate, field).is_none() {
            return Err(ValidationError::MissingField(field));
        }
    }
    Ok(())
}

pub fn validate_as_resume_entry(candidate: &Value) -> Result<ResumeRecord, ValidationError> {
    validate(candidate)?;
    let value = |field: ResumeField| populated(candidate, field).unwrap_or_default().to_owned();
    Ok(ResumeRecord {
        id: value(ResumeField::Id),
        name: value(ResumeField::Name),
        birthday: value(ResumeField::Birthday),
        introduction: value(ResumeField::Introduction),
        linkedin: value(ResumeField::Linkedin),
        github: value(ResumeField::Github),
        bitbucket: value(ResumeField::Bitbucket),
        city: value(ResumeField::City),
        phone: value(ResumeField::Phone),
        degree: value(ResumeField::Degree),
        image: value(ResumeField::Image),
        conclusion: value(ResumeField::Conclusion),
    })
}

fn populated(candidate: &Value, field: ResumeField) -> Option<&str> {
    candidate
        .get(field.as_str())
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}
