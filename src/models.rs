use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, ValidationError};

/// Self-assessed or targeted proficiency for a skill.
///
/// Stored as TEXT in the database; decoding an unknown value is a loud
/// validation error, never a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProficiencyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ProficiencyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProficiencyLevel::Beginner => "BEGINNER",
            ProficiencyLevel::Intermediate => "INTERMEDIATE",
            ProficiencyLevel::Advanced => "ADVANCED",
        }
    }

    /// Numeric value plotted on the skills radar chart.
    pub fn chart_value(&self) -> u32 {
        match self {
            ProficiencyLevel::Beginner => 25,
            ProficiencyLevel::Intermediate => 60,
            ProficiencyLevel::Advanced => 100,
        }
    }
}

impl fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProficiencyLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BEGINNER" => Ok(ProficiencyLevel::Beginner),
            "INTERMEDIATE" => Ok(ProficiencyLevel::Intermediate),
            "ADVANCED" => Ok(ProficiencyLevel::Advanced),
            other => Err(Error::Validation(ValidationError::UnknownVariant(
                "proficiency level",
                other.to_string(),
            ))),
        }
    }
}

/// Catalog category of a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SkillCategory {
    #[serde(rename = "SOFTSKILLS")]
    #[default]
    SoftSkills,
    #[serde(rename = "TECHNICAL")]
    Technical,
    #[serde(rename = "LEADERSHIP")]
    Leadership,
    #[serde(rename = "COMMUNICATION")]
    Communication,
}

impl SkillCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::SoftSkills => "SOFTSKILLS",
            SkillCategory::Technical => "TECHNICAL",
            SkillCategory::Leadership => "LEADERSHIP",
            SkillCategory::Communication => "COMMUNICATION",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SOFTSKILLS" => Ok(SkillCategory::SoftSkills),
            "TECHNICAL" => Ok(SkillCategory::Technical),
            "LEADERSHIP" => Ok(SkillCategory::Leadership),
            "COMMUNICATION" => Ok(SkillCategory::Communication),
            other => Err(Error::Validation(ValidationError::UnknownVariant(
                "skill category",
                other.to_string(),
            ))),
        }
    }
}

/// Lifecycle status of a goal.
///
/// A goal is created ACTIVE and moves forward to COMPLETED or INACTIVE;
/// only the COMPLETED transition has a side effect (proficiency upsert).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalStatus {
    Active,
    Completed,
    Inactive,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::Active => "ACTIVE",
            GoalStatus::Completed => "COMPLETED",
            GoalStatus::Inactive => "INACTIVE",
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(GoalStatus::Active),
            "COMPLETED" => Ok(GoalStatus::Completed),
            "INACTIVE" => Ok(GoalStatus::Inactive),
            other => Err(Error::Validation(ValidationError::UnknownVariant(
                "goal status",
                other.to_string(),
            ))),
        }
    }
}
