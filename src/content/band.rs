use crate::models::Grade;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Grade bucket used to pick question tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeBand {
    /// K-2
    EarlyElementary,
    /// 3-5
    Elementary,
    /// 6-8
    Middle,
    /// 9 and up
    HighSchool,
}

impl GradeBand {
    /// Band for a numeric grade level. Total over all integers.
    pub fn from_level(level: i32) -> Self {
        match level {
            i32::MIN..=2 => Self::EarlyElementary,
            3..=5 => Self::Elementary,
            6..=8 => Self::Middle,
            _ => Self::HighSchool,
        }
    }

    pub fn from_grade(grade: &Grade) -> Self {
        Self::from_level(grade.level())
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Self::EarlyElementary => 0,
            Self::Elementary => 1,
            Self::Middle => 2,
            Self::HighSchool => 3,
        }
    }
}

impl fmt::Display for GradeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EarlyElementary => write!(f, "early_elementary"),
            Self::Elementary => write!(f, "elementary"),
            Self::Middle => write!(f, "middle"),
            Self::HighSchool => write!(f, "high_school"),
        }
    }
}
