//! Advisory availability answers.

use std::fmt;

/// Why a candidate is or is not available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityReason {
    TooShort,
    AlreadyTaken,
    Available,
}

impl AvailabilityReason {
    /// Human-readable reason shown next to the candidate input.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::TooShort => "Too short",
            Self::AlreadyTaken => "Already taken",
            Self::Available => "Available",
        }
    }
}

impl fmt::Display for AvailabilityReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of an availability check. A positive answer reserves nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Availability {
    reason: AvailabilityReason,
}

impl Availability {
    #[must_use]
    pub const fn too_short() -> Self {
        Self {
            reason: AvailabilityReason::TooShort,
        }
    }

    #[must_use]
    pub const fn taken() -> Self {
        Self {
            reason: AvailabilityReason::AlreadyTaken,
        }
    }

    #[must_use]
    pub const fn available() -> Self {
        Self {
            reason: AvailabilityReason::Available,
        }
    }

    #[must_use]
    pub const fn is_available(self) -> bool {
        matches!(self.reason, AvailabilityReason::Available)
    }

    #[must_use]
    pub const fn reason(self) -> AvailabilityReason {
        self.reason
    }
}
