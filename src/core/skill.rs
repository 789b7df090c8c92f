//! Skill taxonomy shared by tasks and resources.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The closed set of skills a resource can hold and a task can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillType {
    Dev,
    Qa,
    Ops,
    Design,
    Pm,
}

impl SkillType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillType::Dev => "dev",
            SkillType::Qa => "qa",
            SkillType::Ops => "ops",
            SkillType::Design => "design",
            SkillType::Pm => "pm",
        }
    }

    /// All skills, in canonical order.
    pub fn all() -> [SkillType; 5] {
        [
            SkillType::Dev,
            SkillType::Qa,
            SkillType::Ops,
            SkillType::Design,
            SkillType::Pm,
        ]
    }
}

impl std::fmt::Display for SkillType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SkillType {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "dev" => Ok(SkillType::Dev),
            "qa" => Ok(SkillType::Qa),
            "ops" => Ok(SkillType::Ops),
            "design" => Ok(SkillType::Design),
            "pm" => Ok(SkillType::Pm),
            other => Err(Error::UnknownSkill(other.to_string())),
        }
    }
}
