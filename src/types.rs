//! Core domain types

use std::fmt;

use crate::{Error, Result};

/// The persisted door flag.
///
/// On stable storage this is the literal text `"true"` (open) or
/// `"false"` (closed) — the same format the original device wrote, so
/// an existing state file keeps working across upgrades.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorState {
    Open,
    Closed,
}

impl DoorState {
    /// Encode for the storage boundary.
    pub fn as_text(self) -> &'static str {
        match self {
            DoorState::Open => "true",
            DoorState::Closed => "false",
        }
    }

    /// Decode from the storage boundary. Exact match only: no trimming,
    /// no case-folding.
    pub fn from_text(text: &str) -> Result<Self> {
        match text {
            "true" => Ok(DoorState::Open),
            "false" => Ok(DoorState::Closed),
            other => Err(Error::CorruptState(format!(
                "expected \"true\" or \"false\", found {:?}",
                other
            ))),
        }
    }
}

impl fmt::Display for DoorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DoorState::Open => "open",
            DoorState::Closed => "closed",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_codec_round_trips() {
        assert_eq!(DoorState::Open.as_text(), "true");
        assert_eq!(DoorState::Closed.as_text(), "false");
        assert_eq!(DoorState::from_text("true").unwrap(), DoorState::Open);
        assert_eq!(DoorState::from_text("false").unwrap(), DoorState::Closed);
    }

    #[test]
    fn decode_is_exact_match() {
        assert!(DoorState::from_text("True").is_err());
        assert!(DoorState::from_text("true\n").is_err());
        assert!(DoorState::from_text(" false").is_err());
        assert!(DoorState::from_text("").is_err());
    }
}
