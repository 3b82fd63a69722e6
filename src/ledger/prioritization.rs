//! Prioritization rows and the 1..=5 rating scale.

use crate::id::generate_item_id;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A rating on the 1..=5 slider scale.
///
/// Every constructor clamps, so a `Rating` held anywhere in the ledger is in
/// range. Deserialization clamps too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;
    /// Slider midpoint, the default for new rows
    pub const MID: Rating = Rating(3);

    /// Clamp any integer into the scale.
    pub fn clamped(value: i64) -> Self {
        Rating(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// One step up, saturating at 5
    pub fn increment(self) -> Self {
        Self::clamped(self.0 as i64 + 1)
    }

    /// One step down, saturating at 1
    pub fn decrement(self) -> Self {
        Self::clamped(self.0 as i64 - 1)
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::MID
    }
}

impl From<i64> for Rating {
    fn from(value: i64) -> Self {
        Self::clamped(value)
    }
}

impl From<Rating> for i64 {
    fn from(rating: Rating) -> Self {
        rating.0 as i64
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One process scored for prioritization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrioritizationItem {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub impact: Rating,
    #[serde(default)]
    pub effort: Rating,
    #[serde(default)]
    pub risk: Rating,
    #[serde(default)]
    pub note: String,
}

impl PrioritizationItem {
    /// Create a row with the slider defaults (3/3/3) and a fresh id.
    pub fn new() -> Self {
        Self {
            id: generate_item_id(),
            name: String::new(),
            impact: Rating::MID,
            effort: Rating::MID,
            risk: Rating::MID,
            note: String::new(),
        }
    }

    /// `impact − effort − risk`, always computed from the current ratings.
    ///
    /// Ranges over [-9, 4]; negative scores are normal.
    pub fn score(&self) -> i32 {
        self.impact.get() as i32 - self.effort.get() as i32 - self.risk.get() as i32
    }

    /// Only named rows are exported.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
    }

    /// Read a rating by axis.
    pub fn rating(&self, axis: RatingAxis) -> Rating {
        match axis {
            RatingAxis::Impact => self.impact,
            RatingAxis::Effort => self.effort,
            RatingAxis::Risk => self.risk,
        }
    }

    pub(crate) fn apply(&mut self, update: PrioritizationUpdate) {
        match update {
            PrioritizationUpdate::Name(v) => self.name = v,
            PrioritizationUpdate::Impact(r) => self.impact = r,
            PrioritizationUpdate::Effort(r) => self.effort = r,
            PrioritizationUpdate::Risk(r) => self.risk = r,
            PrioritizationUpdate::Note(v) => self.note = v,
        }
    }
}

impl Default for PrioritizationItem {
    fn default() -> Self {
        Self::new()
    }
}

/// The three slider axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingAxis {
    Impact,
    Effort,
    Risk,
}

impl RatingAxis {
    pub const ALL: [RatingAxis; 3] = [RatingAxis::Impact, RatingAxis::Effort, RatingAxis::Risk];

    pub fn label(self) -> &'static str {
        match self {
            RatingAxis::Impact => "Impacto",
            RatingAxis::Effort => "Esfuerzo",
            RatingAxis::Risk => "Riesgo",
        }
    }

    /// Wrap a rating into the matching update command.
    pub fn update(self, rating: Rating) -> PrioritizationUpdate {
        match self {
            RatingAxis::Impact => PrioritizationUpdate::Impact(rating),
            RatingAxis::Effort => PrioritizationUpdate::Effort(rating),
            RatingAxis::Risk => PrioritizationUpdate::Risk(rating),
        }
    }
}

/// A single-field edit on a [`PrioritizationItem`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrioritizationUpdate {
    Name(String),
    Impact(Rating),
    Effort(Rating),
    Risk(Rating),
    Note(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_clamps() {
        assert_eq!(Rating::clamped(0).get(), 1);
        assert_eq!(Rating::clamped(-40).get(), 1);
        assert_eq!(Rating::clamped(3).get(), 3);
        assert_eq!(Rating::clamped(9).get(), 5);
    }

    #[test]
    fn test_rating_step_saturates() {
        assert_eq!(Rating::clamped(5).increment().get(), 5);
        assert_eq!(Rating::clamped(1).decrement().get(), 1);
        assert_eq!(Rating::MID.increment().get(), 4);
    }

    #[test]
    fn test_rating_deserialize_clamps() {
        let r: Rating = serde_json::from_str("12").unwrap();
        assert_eq!(r.get(), 5);
        let r: Rating = serde_json::from_str("-1").unwrap();
        assert_eq!(r.get(), 1);
    }

    #[test]
    fn test_new_item_defaults() {
        let item = PrioritizationItem::new();
        assert!(item.name.is_empty());
        assert!(item.note.is_empty());
        assert_eq!(item.impact, Rating::MID);
        assert_eq!(item.effort, Rating::MID);
        assert_eq!(item.risk, Rating::MID);
        assert_eq!(item.score(), -3);
    }

    #[test]
    fn test_score_over_whole_domain() {
        let mut item = PrioritizationItem::new();
        for i in 1..=5 {
            for e in 1..=5 {
                for r in 1..=5 {
                    item.apply(PrioritizationUpdate::Impact(Rating::clamped(i)));
                    item.apply(PrioritizationUpdate::Effort(Rating::clamped(e)));
                    item.apply(PrioritizationUpdate::Risk(Rating::clamped(r)));
                    let score = item.score();
                    assert_eq!(score as i64, i - e - r);
                    assert!((-9..=4).contains(&score));
                }
            }
        }
    }

    #[test]
    fn test_axis_update_targets_right_field() {
        let mut item = PrioritizationItem::new();
        item.apply(RatingAxis::Effort.update(Rating::clamped(1)));
        assert_eq!(item.rating(RatingAxis::Effort).get(), 1);
        assert_eq!(item.rating(RatingAxis::Impact), Rating::MID);
        assert_eq!(item.rating(RatingAxis::Risk), Rating::MID);
    }
}
