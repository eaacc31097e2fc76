//! Search configuration.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

// ── TurnPolicy ────────────────────────────────────────────────────────────────

/// Which resource is settled first when a unit's turn ends during a search.
///
/// At a turn boundary the unit both burns fuel and gains or loses hit
/// points.  When the health rule looks at fuel (or the other way round) the
/// order matters: a unit may survive one order and die under the other.
/// Rulesets disagree on this, so it is a setting rather than a constant.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TurnPolicy {
    /// Refuel or burn fuel, then apply the health rule.
    #[default]
    FuelFirst,
    /// Apply the health rule, then refuel or burn fuel.
    HealthFirst,
}

impl TurnPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            TurnPolicy::FuelFirst   => "fuel-first",
            TurnPolicy::HealthFirst => "health-first",
        }
    }
}

impl fmt::Display for TurnPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TurnPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fuel-first" | "fuel"     => Ok(TurnPolicy::FuelFirst),
            "health-first" | "health" => Ok(TurnPolicy::HealthFirst),
            _ => Err(CoreError::UnknownTurnPolicy(s.to_owned())),
        }
    }
}

// ── SearchConfig ──────────────────────────────────────────────────────────────

/// Path-finder configuration.
///
/// Typically built in code or loaded by the application from its own config
/// file (enable the `serde` feature) and handed to the path finder at
/// construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Order of the fuel and health updates at a turn boundary.
    pub turn_policy: TurnPolicy,
}

impl SearchConfig {
    pub fn with_turn_policy(mut self, turn_policy: TurnPolicy) -> Self {
        self.turn_policy = turn_policy;
        self
    }
}
