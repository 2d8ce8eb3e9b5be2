// WHY: the entitlement gate decides whether a request may reach the core at all; it runs
// before detection and never inside it

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::history::ProcessingKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    #[default]
    Basic,
    Premium,
    Professional,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Premium => "premium",
            Self::Professional => "professional",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "premium" => Ok(Self::Premium),
            "professional" => Ok(Self::Professional),
            other => Err(format!("unknown tier: {other}")),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuotaError {
    #[error("{tier} tier allows {limit} {kind} requests; upgrade required")]
    LimitReached {
        tier: Tier,
        kind: ProcessingKind,
        limit: usize,
    },
}

impl QuotaError {
    pub fn upgrade_required(&self) -> bool {
        matches!(self, Self::LimitReached { .. })
    }
}

/// Decides whether a caller at `tier` with `usage` prior requests of `kind` may run another
pub trait EntitlementGate {
    fn check(&self, tier: Tier, kind: ProcessingKind, usage: usize) -> Result<(), QuotaError>;
}

/// Per-tier lifetime request limits; `None` is unlimited
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierLimits {
    pub basic_plagiarism: Option<usize>,
    pub basic_paraphrase: Option<usize>,
}

impl Default for TierLimits {
    fn default() -> Self {
        Self {
            basic_plagiarism: Some(5),
            basic_paraphrase: Some(20),
        }
    }
}

impl TierLimits {
    pub fn limit(&self, tier: Tier, kind: ProcessingKind) -> Option<usize> {
        match (tier, kind) {
            (Tier::Basic, ProcessingKind::Plagiarism) => self.basic_plagiarism,
            (Tier::Basic, ProcessingKind::Paraphrase) => self.basic_paraphrase,
            (Tier::Premium | Tier::Professional, _) => None,
        }
    }
}

impl EntitlementGate for TierLimits {
    fn check(&self, tier: Tier, kind: ProcessingKind, usage: usize) -> Result<(), QuotaError> {
        match self.limit(tier, kind) {
            Some(limit) if usage >= limit => Err(QuotaError::LimitReached { tier, kind, limit }),
            _ => Ok(()),
        }
    }
}
