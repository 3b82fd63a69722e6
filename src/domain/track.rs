//! Track selector
//!
//! A track is the learner's domain context. It picks which examples and
//! guided questions are shown, and is stamped into the exported deliverable.

use crate::error::{MicroDsiError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three fixed domain contexts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Track {
    /// IT service management
    #[default]
    Itsm,
    /// Human resources
    Hr,
    /// Procurement
    Proc,
}

impl Track {
    /// All tracks in selector order
    pub const ALL: [Track; 3] = [Track::Itsm, Track::Hr, Track::Proc];

    /// Lowercase identifier, used in filenames and the cache
    pub fn as_str(self) -> &'static str {
        match self {
            Track::Itsm => "itsm",
            Track::Hr => "hr",
            Track::Proc => "proc",
        }
    }

    /// Uppercase label, used in the report header
    pub fn label(self) -> &'static str {
        match self {
            Track::Itsm => "ITSM",
            Track::Hr => "HR",
            Track::Proc => "PROC",
        }
    }

    /// Cycle to the next track in selector order
    pub fn next(self) -> Self {
        match self {
            Track::Itsm => Track::Hr,
            Track::Hr => Track::Proc,
            Track::Proc => Track::Itsm,
        }
    }

    /// Cycle to the previous track in selector order
    pub fn prev(self) -> Self {
        match self {
            Track::Itsm => Track::Proc,
            Track::Hr => Track::Itsm,
            Track::Proc => Track::Hr,
        }
    }

    /// Suggested filename for the exported deliverable
    pub fn export_filename(self) -> String {
        format!("entregable-microdsi-{}.md", self.as_str())
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Track {
    type Err = MicroDsiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "itsm" => Ok(Track::Itsm),
            "hr" => Ok(Track::Hr),
            "proc" => Ok(Track::Proc),
            other => Err(MicroDsiError::UnknownTrack(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_default_is_itsm() {
        assert_eq!(Track::default(), Track::Itsm);
    }

    #[test]
    fn test_track_parse_case_insensitive() {
        assert_eq!("ITSM".parse::<Track>().unwrap(), Track::Itsm);
        assert_eq!(" hr ".parse::<Track>().unwrap(), Track::Hr);
        assert_eq!("Proc".parse::<Track>().unwrap(), Track::Proc);
    }

    #[test]
    fn test_track_parse_unknown() {
        let err = "finance".parse::<Track>().unwrap_err();
        assert!(matches!(err, MicroDsiError::UnknownTrack(ref s) if s == "finance"));
    }

    #[test]
    fn test_track_cycle() {
        for track in Track::ALL {
            assert_eq!(track.next().prev(), track);
        }
        assert_eq!(Track::Itsm.next().next().next(), Track::Itsm);
    }

    #[test]
    fn test_track_labels() {
        assert_eq!(Track::Itsm.label(), "ITSM");
        assert_eq!(Track::Proc.to_string(), "proc");
        assert_eq!(Track::Hr.export_filename(), "entregable-microdsi-hr.md");
    }

    #[test]
    fn test_track_serde_lowercase() {
        let json = serde_json::to_string(&Track::Proc).unwrap();
        assert_eq!(json, "\"proc\"");
        let back: Track = serde_json::from_str("\"hr\"").unwrap();
        assert_eq!(back, Track::Hr);
    }
}
