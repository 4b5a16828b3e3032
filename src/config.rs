//! Runtime configuration knobs.
//!
//! `matchcore` needs far fewer knobs than a CLI tool: the interesting
//! "configuration" is mostly a handful of tunable thresholds.
//! `MatchConfig` turns those thresholds into overridable defaults rather
//! than baked-in constants, following the same env-var-over-default
//! precedence a `ConfigManager` uses, scaled down to what a library
//! actually needs.

use crate::cpu_feature::SimdLevel;
use crate::error::{MatchError, Result};
use serde::{Deserialize, Serialize};

/// Minimum text length (in bytes) before the KMP engine considers using a
/// SIMD kernel at all.
pub const DEFAULT_SIMD_MIN_TEXT_LEN: usize = 64;

/// Default DFA compile-time state cap.
pub const DEFAULT_DFA_STATE_CAP: usize = 10_000;

/// Configuration for both cores.
///
/// `MatchConfig` is plain data: constructing one never touches the
/// filesystem or environment unless you call [`MatchConfig::from_env`] or
/// [`MatchConfig::from_toml_str`] explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Force a specific SIMD level instead of the probed one. `None` means
    /// "use whatever the CPU feature probe reports" (the normal case).
    pub simd_override: Option<SimdLevel>,

    /// Below this text length the KMP engine always uses the scalar
    /// reference implementation, regardless of available CPU features.
    pub simd_min_text_len: usize,

    /// Maximum number of states subset construction may produce before
    /// `compile_regex` fails with [`MatchError::PatternTooComplex`].
    pub dfa_state_cap: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            simd_override: None,
            simd_min_text_len: DEFAULT_SIMD_MIN_TEXT_LEN,
            dfa_state_cap: DEFAULT_DFA_STATE_CAP,
        }
    }
}

impl MatchConfig {
    /// Build a config from `MATCHCORE_*` environment variables, falling
    /// back to defaults for anything unset or unparsable.
    ///
    /// Recognized variables: `MATCHCORE_SIMD_MIN_TEXT_LEN`,
    /// `MATCHCORE_DFA_STATE_CAP`, `MATCHCORE_SIMD_OVERRIDE` (one of
    /// `scalar`, `sse42`, `avx2`, `avx512`).
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(val) = std::env::var("MATCHCORE_SIMD_MIN_TEXT_LEN") {
            if let Ok(n) = val.parse() {
                cfg.simd_min_text_len = n;
            }
        }
        if let Ok(val) = std::env::var("MATCHCORE_DFA_STATE_CAP") {
            if let Ok(n) = val.parse() {
                cfg.dfa_state_cap = n;
            }
        }
        if let Ok(val) = std::env::var("MATCHCORE_SIMD_OVERRIDE") {
            cfg.simd_override = match val.to_ascii_lowercase().as_str() {
                "scalar" => Some(SimdLevel::Scalar),
                "sse42" => Some(SimdLevel::Sse42),
                "avx2" => Some(SimdLevel::Avx2),
                "avx512" => Some(SimdLevel::Avx512),
                _ => {
                    log::warn!("ignoring unrecognized MATCHCORE_SIMD_OVERRIDE={val:?}");
                    cfg.simd_override
                }
            };
        }

        cfg
    }

    /// Parse a config from a TOML document, e.g. a `matchcore.toml`
    /// checked into a consuming project. Missing fields fall back to
    /// [`MatchConfig::default`].
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| MatchError::InvalidConfig(e.to_string()))
    }

    /// Reject configurations that can't produce useful behavior.
    pub fn validate(&self) -> Result<()> {
        if self.dfa_state_cap == 0 {
            return Err(MatchError::InvalidConfig(
                "dfa_state_cap must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
