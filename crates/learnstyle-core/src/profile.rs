//! The respondent profile collected by the intake step.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Minimum accepted respondent age.
pub const MIN_AGE: u8 = 18;

/// Errors from profile validation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Respondent name must not be empty")]
    EmptyName,

    #[error("Respondent age {age} is below the minimum of {MIN_AGE}")]
    UnderAge { age: u8 },
}

/// The educational setting the respondent is answering from. Steers the
/// tone of the classifier's recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationalContext {
    University,
    Professional,
    ContinuingEducation,
}

impl fmt::Display for EducationalContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EducationalContext::University => write!(f, "University student"),
            EducationalContext::Professional => write!(f, "Working professional"),
            EducationalContext::ContinuingEducation => write!(f, "Continuing education"),
        }
    }
}

/// The respondent profile. Immutable once analysis begins; consumed
/// read-only by the request builder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RespondentProfile {
    /// Respondent's name, non-empty
    pub name: String,

    /// Respondent's age, at least [`MIN_AGE`]
    pub age: u8,

    /// Educational setting
    pub context: EducationalContext,
}

impl RespondentProfile {
    /// Create a validated profile.
    pub fn new(
        name: impl Into<String>,
        age: u8,
        context: EducationalContext,
    ) -> Result<Self, ProfileError> {
        let profile = Self {
            name: name.into(),
            age,
            context,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Validate the profile fields.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.name.trim().is_empty() {
            return Err(ProfileError::EmptyName);
        }
        if self.age < MIN_AGE {
            return Err(ProfileError::UnderAge { age: self.age });
        }
        Ok(())
    }
}
