//! Core domain types for matside.
//!
//! This module defines the values the matcher works with:
//! - Athletes and their skill tiers
//! - Matches produced by either round

use crate::config::SkillMultipliers;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Athlete Types
// ============================================================================

/// Position of an athlete's record in the roster, assigned when parsed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AthleteId(pub usize);

impl fmt::Display for AthleteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Skill tier of an athlete
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    #[default]
    Beginner,
    Intermediate,
    Experienced,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 3] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Experienced,
    ];

    /// Resolve a roster label. Blank labels mean beginner.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "" | "beginner" => Some(SkillLevel::Beginner),
            "intermediate" => Some(SkillLevel::Intermediate),
            "experienced" => Some(SkillLevel::Experienced),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Experienced => "experienced",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weight as printed in reports: shortest round-trip form, always with a
/// fractional part (`100.0`, `104.5`).
#[derive(Clone, Copy, Debug)]
pub struct Pounds(pub f64);

impl fmt::Display for Pounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// One wrestler on the roster
///
/// The effective weight is fixed at construction; every ordering and
/// safety decision uses it instead of the raw weight.
#[derive(Clone, Debug)]
pub struct Athlete {
    id: AthleteId,
    name: String,
    school: String,
    skill_level: SkillLevel,
    effective_weight: f64,
}

impl Athlete {
    /// Build an athlete, applying the skill multiplier to the raw weight
    ///
    /// Rejects weights that would leave the safety ratio undefined
    /// (zero, negative, NaN or infinite).
    pub fn new(
        id: AthleteId,
        name: &str,
        raw_weight: f64,
        school: &str,
        skill_level: SkillLevel,
        multipliers: &SkillMultipliers,
    ) -> Result<Self> {
        let name = name.trim().to_string();
        let effective_weight = raw_weight * multipliers.for_level(skill_level);

        if !effective_weight.is_finite() || effective_weight <= 0.0 {
            return Err(Error::InvalidWeight {
                name,
                weight: effective_weight,
            });
        }

        Ok(Self {
            id,
            name,
            school: school.trim().to_string(),
            skill_level,
            effective_weight,
        })
    }

    pub fn id(&self) -> AthleteId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn school(&self) -> &str {
        &self.school
    }

    pub fn skill_level(&self) -> SkillLevel {
        self.skill_level
    }

    pub fn effective_weight(&self) -> f64 {
        self.effective_weight
    }

    /// Whether two athletes print identically (name, weight, school, skill)
    ///
    /// Distinct roster entries with identical fields compare as the same
    /// entry here.
    pub fn same_entry(&self, other: &Athlete) -> bool {
        self.name == other.name
            && self.effective_weight == other.effective_weight
            && self.school == other.school
            && self.skill_level == other.skill_level
    }

    pub fn same_school(&self, other: &Athlete) -> bool {
        self.school == other.school
    }
}

impl fmt::Display for Athlete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} lbs {} {}",
            self.name,
            Pounds(self.effective_weight),
            self.school,
            self.skill_level
        )
    }
}

// ============================================================================
// Match Types
// ============================================================================

/// Which pass of the matcher produced a match
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Round {
    /// Adjacent-weight pass; partners must come from different schools
    First,
    /// Fallback pass for leftovers; school is ignored
    Second,
}

/// A practice pairing of two distinct athletes
#[derive(Clone, Debug)]
pub struct Match {
    pub w1: Athlete,
    pub w2: Athlete,
    pub round: Round,
}

impl Match {
    pub fn new(w1: Athlete, w2: Athlete, round: Round) -> Self {
        Self { w1, w2, round }
    }

    /// Corner label used in reports, e.g. `Jo Smith (Central 120.0 lbs)`
    fn corner(athlete: &Athlete) -> String {
        format!(
            "{} ({} {} lbs)",
            athlete.name(),
            athlete.school(),
            Pounds(athlete.effective_weight())
        )
    }

    pub fn red_corner(&self) -> String {
        Self::corner(&self.w1)
    }

    pub fn green_corner(&self) -> String {
        Self::corner(&self.w2)
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.red_corner(), self.green_corner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn athlete(id: usize, name: &str, weight: f64, school: &str, skill: SkillLevel) -> Athlete {
        Athlete::new(
            AthleteId(id),
            name,
            weight,
            school,
            skill,
            &SkillMultipliers::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_skill_multiplier_applied_once() {
        let a = athlete(0, "Ann Lee", 100.0, "North", SkillLevel::Intermediate);
        assert_eq!(a.effective_weight(), 103.0);

        let b = athlete(1, "Bo Kim", 100.0, "North", SkillLevel::Beginner);
        assert_eq!(b.effective_weight(), 100.0);

        let c = athlete(2, "Cy Orr", 100.0, "North", SkillLevel::Experienced);
        assert_eq!(c.effective_weight(), 105.0);
    }

    #[test]
    fn test_blank_label_is_beginner() {
        assert_eq!(SkillLevel::from_label(""), Some(SkillLevel::Beginner));
        assert_eq!(SkillLevel::from_label("   "), Some(SkillLevel::Beginner));
        assert_eq!(
            SkillLevel::from_label(" experienced "),
            Some(SkillLevel::Experienced)
        );
        assert_eq!(SkillLevel::from_label("expert"), None);
    }

    #[test]
    fn test_rejects_non_positive_weight() {
        let multipliers = SkillMultipliers::default();
        for weight in [0.0, -120.0, f64::NAN, f64::INFINITY] {
            let result = Athlete::new(
                AthleteId(0),
                "Zed Null",
                weight,
                "North",
                SkillLevel::Beginner,
                &multipliers,
            );
            assert!(matches!(result, Err(Error::InvalidWeight { .. })));
        }
    }

    #[test]
    fn test_name_and_school_trimmed() {
        let a = athlete(0, "  Ann Lee ", 120.0, " North  ", SkillLevel::Beginner);
        assert_eq!(a.name(), "Ann Lee");
        assert_eq!(a.school(), "North");
    }

    #[test]
    fn test_display_formats() {
        let a = athlete(0, "Ann Lee", 120.0, "North", SkillLevel::Beginner);
        let b = athlete(1, "Bo Kim", 121.5, "South", SkillLevel::Beginner);
        assert_eq!(a.to_string(), "Ann Lee 120.0 lbs North beginner");

        let m = Match::new(a, b, Round::First);
        assert_eq!(
            m.to_string(),
            "Ann Lee (North 120.0 lbs),Bo Kim (South 121.5 lbs)"
        );
    }

    #[test]
    fn test_same_entry_ignores_id() {
        let a = athlete(0, "Ann Lee", 120.0, "North", SkillLevel::Beginner);
        let twin = athlete(7, "Ann Lee", 120.0, "North", SkillLevel::Beginner);
        let other = athlete(8, "Ann Lee", 120.0, "South", SkillLevel::Beginner);

        assert!(a.same_entry(&twin));
        assert!(!a.same_entry(&other));
        assert_ne!(a.id(), twin.id());
    }
}
