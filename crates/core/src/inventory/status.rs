//! Assignment status of an asset.
//!
//! Variant discriminants match the seed order (1-based) of the
//! `assignment_statuses` lookup table.
//!
//! ```text
//!     AVAILABLE --assign--> ASSIGNED --recover--> RECOVERED
//!         ^                                           |
//!         +------------------- assign ----------------+
//! ```

use serde::{Deserialize, Serialize};

use crate::types::StatusId;

#[repr(i16)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentStatus {
    #[default]
    Available = 1,
    Assigned = 2,
    Recovered = 3,
}

impl AssignmentStatus {
    /// Return the database status ID.
    pub fn id(self) -> StatusId {
        self as StatusId
    }

    /// Map a database status ID back to a variant.
    pub fn from_id(id: StatusId) -> Option<Self> {
        match id {
            1 => Some(Self::Available),
            2 => Some(Self::Assigned),
            3 => Some(Self::Recovered),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Assigned => "ASSIGNED",
            Self::Recovered => "RECOVERED",
        }
    }

    /// AVAILABLE and RECOVERED are both valid sources for `assign`.
    pub fn can_assign(self) -> bool {
        self != Self::Assigned
    }

    /// Only an assigned asset can be recovered.
    pub fn can_recover(self) -> bool {
        self == Self::Assigned
    }

    /// An assigned asset is pinned until it is recovered.
    pub fn can_delete(self) -> bool {
        self != Self::Assigned
    }
}

impl From<AssignmentStatus> for StatusId {
    fn from(value: AssignmentStatus) -> Self {
        value as StatusId
    }
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
