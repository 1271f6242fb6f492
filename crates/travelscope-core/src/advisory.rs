//! Normalized advisory schema shared by the scraper, server, and CLI.

use serde::{Deserialize, Serialize};

/// Security advisory level as published by the advisory source.
///
/// Levels are fixed at build time; callers select one with
/// [`AdvisoryLevel::from_number`] rather than constructing arbitrary values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AdvisoryLevel {
    NormalPrecautions,
    IncreasedCaution,
    ReconsiderTravel,
    DoNotTravel,
}

impl AdvisoryLevel {
    /// All levels, lowest severity first.
    pub const ALL: [AdvisoryLevel; 4] = [
        AdvisoryLevel::NormalPrecautions,
        AdvisoryLevel::IncreasedCaution,
        AdvisoryLevel::ReconsiderTravel,
        AdvisoryLevel::DoNotTravel,
    ];

    #[must_use]
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::NormalPrecautions),
            2 => Some(Self::IncreasedCaution),
            3 => Some(Self::ReconsiderTravel),
            4 => Some(Self::DoNotTravel),
            _ => None,
        }
    }

    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::NormalPrecautions => 1,
            Self::IncreasedCaution => 2,
            Self::ReconsiderTravel => 3,
            Self::DoNotTravel => 4,
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::NormalPrecautions => "Exercise normal precautions",
            Self::IncreasedCaution => "Exercise increased caution",
            Self::ReconsiderTravel => "Reconsider travel",
            Self::DoNotTravel => "Do not travel",
        }
    }

    #[must_use]
    pub fn status(self) -> AdvisoryStatus {
        AdvisoryStatus::from_level_number(self.number())
    }
}

/// Health notice level as published by the health advisory source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum HealthLevel {
    UsualPrecautions,
    EnhancedPrecautions,
    ReconsiderNonessentialTravel,
    AvoidNonessentialTravel,
}

impl HealthLevel {
    /// All levels, highest severity first.
    pub const BY_SEVERITY: [HealthLevel; 4] = [
        HealthLevel::AvoidNonessentialTravel,
        HealthLevel::ReconsiderNonessentialTravel,
        HealthLevel::EnhancedPrecautions,
        HealthLevel::UsualPrecautions,
    ];

    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::UsualPrecautions => 1,
            Self::EnhancedPrecautions => 2,
            Self::ReconsiderNonessentialTravel => 3,
            Self::AvoidNonessentialTravel => 4,
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::UsualPrecautions => "Practice usual precautions",
            Self::EnhancedPrecautions => "Practice enhanced precautions",
            Self::ReconsiderNonessentialTravel => "Reconsider nonessential travel",
            Self::AvoidNonessentialTravel => "Avoid nonessential travel",
        }
    }
}

impl From<HealthLevel> for u8 {
    fn from(level: HealthLevel) -> Self {
        level.number()
    }
}

impl TryFrom<u8> for HealthLevel {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Self::UsualPrecautions),
            2 => Ok(Self::EnhancedPrecautions),
            3 => Ok(Self::ReconsiderNonessentialTravel),
            4 => Ok(Self::AvoidNonessentialTravel),
            other => Err(format!("health level out of range: {other}")),
        }
    }
}

/// Display status bucket for an advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvisoryStatus {
    Safe,
    Caution,
    Warning,
    Alert,
}

impl AdvisoryStatus {
    /// Maps a 1-4 level number onto a status. Out-of-range values clamp to
    /// the nearest bucket.
    #[must_use]
    pub fn from_level_number(n: u8) -> Self {
        match n {
            0 | 1 => Self::Safe,
            2 => Self::Caution,
            3 => Self::Warning,
            _ => Self::Alert,
        }
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Safe => "✅",
            Self::Caution => "⚠️",
            Self::Warning => "🔶",
            Self::Alert => "🚫",
        }
    }
}

/// The normalized record returned to display layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisoryRecord {
    pub status: AdvisoryStatus,
    pub message: String,
    pub emoji: String,
    pub details: String,
}

impl AdvisoryRecord {
    /// Builds the record for a security advisory level.
    #[must_use]
    pub fn for_level(level: AdvisoryLevel, details: impl Into<String>) -> Self {
        Self::from_parts(level.number(), level.description(), details)
    }

    /// Builds the record for a health notice level.
    #[must_use]
    pub fn for_health_level(level: HealthLevel, details: impl Into<String>) -> Self {
        Self::from_parts(level.number(), level.description(), details)
    }

    fn from_parts(number: u8, description: &str, details: impl Into<String>) -> Self {
        let status = AdvisoryStatus::from_level_number(number);
        Self {
            status,
            message: format!("Level {number}: {description}"),
            emoji: status.emoji().to_string(),
            details: details.into(),
        }
    }
}
