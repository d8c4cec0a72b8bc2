use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::error::AppError;
use crate::sections::Rendered;

pub const HEIGHT_CM: RangeInclusive<u32> = 50..=300;
pub const WEIGHT_KG: RangeInclusive<u32> = 10..=300;
pub const AGE_YEARS: RangeInclusive<u32> = 5..=100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    #[serde(alias = "male")]
    Male,
    #[serde(alias = "female")]
    Female,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Goal {
    #[default]
    #[serde(alias = "cutting")]
    Cutting,
    #[serde(alias = "bulking")]
    Bulking,
    #[serde(alias = "recomp")]
    Recomp,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        })
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Goal::Cutting => "Cutting",
            Goal::Bulking => "Bulking",
            Goal::Recomp => "Recomp",
        })
    }
}

/// Raw form submission. Gender and goal fall back to the first option, like the form's selectors.
#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    pub height: Option<u32>,
    pub weight: Option<u32>,
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub goal: Goal,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub height_cm: u32,
    pub weight_kg: u32,
    pub age: u32,
    pub gender: Gender,
    pub goal: Goal,
    pub notes: String,
}

impl TryFrom<PlanRequest> for UserProfile {
    type Error = AppError;

    fn try_from(req: PlanRequest) -> Result<Self, Self::Error> {
        // zero counts as "not entered"
        let (Some(height), Some(weight), Some(age)) = (
            req.height.filter(|v| *v != 0),
            req.weight.filter(|v| *v != 0),
            req.age.filter(|v| *v != 0),
        ) else {
            return Err(AppError::InvalidInput(
                "Please enter all required fields: height, weight, and age.".into(),
            ));
        };

        check_range("Height (cm)", height, HEIGHT_CM)?;
        check_range("Weight (kg)", weight, WEIGHT_KG)?;
        check_range("Age (years)", age, AGE_YEARS)?;

        Ok(Self {
            height_cm: height,
            weight_kg: weight,
            age,
            gender: req.gender,
            goal: req.goal,
            notes: req.notes.unwrap_or_default(),
        })
    }
}

fn check_range(label: &str, value: u32, range: RangeInclusive<u32>) -> Result<(), AppError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(AppError::InvalidInput(format!(
            "{label} must be between {} and {}, got {value}",
            range.start(),
            range.end()
        )))
    }
}

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub generated_at: OffsetDateTime,
    pub model: String,
    pub raw: String,
    pub rendered: Rendered,
}

/// Export of a plan the client already holds.
#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub text: String,
}
