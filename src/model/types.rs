use crate::error::{RestaurantError, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Built-in seed data set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SeedRevision {
    /// Ids 1, 2, 3.
    #[default]
    OneBased,
    /// Ids 0, 1, 2, as shipped by the first schema revision.
    ZeroBased,
}

impl SeedRevision {
    pub fn first_id(self) -> i32 {
        match self {
            SeedRevision::OneBased => 1,
            SeedRevision::ZeroBased => 0,
        }
    }
}

impl fmt::Display for SeedRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedRevision::OneBased => write!(f, "one-based"),
            SeedRevision::ZeroBased => write!(f, "zero-based"),
        }
    }
}

impl FromStr for SeedRevision {
    type Err = RestaurantError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "one-based" | "one_based" | "1" => Ok(SeedRevision::OneBased),
            "zero-based" | "zero_based" | "0" => Ok(SeedRevision::ZeroBased),
            _ => Err(RestaurantError::Config(format!(
                "Invalid seed revision: {}",
                s
            ))),
        }
    }
}

/// Strategy for assigning ids to newly created restaurants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum IdMode {
    /// Monotonic counter starting above the highest seeded id. Never reuses ids.
    #[default]
    Counter,
    /// Highest id currently stored plus one. Reuses the id of a deleted maximum.
    MaxPlusOne,
    /// Id of the last stored record plus one (0 counts as absent).
    /// Can collide once records are deleted.
    LastPlusOne,
}

impl fmt::Display for IdMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdMode::Counter => write!(f, "counter"),
            IdMode::MaxPlusOne => write!(f, "max-plus-one"),
            IdMode::LastPlusOne => write!(f, "last-plus-one"),
        }
    }
}

impl FromStr for IdMode {
    type Err = RestaurantError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "counter" | "monotonic" => Ok(IdMode::Counter),
            "max-plus-one" | "max" => Ok(IdMode::MaxPlusOne),
            "last-plus-one" | "last" | "legacy" => Ok(IdMode::LastPlusOne),
            _ => Err(RestaurantError::Config(format!("Invalid id mode: {}", s))),
        }
    }
}
