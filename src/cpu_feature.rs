//! Process-wide CPU feature detection, cached once and read lock-free
//! thereafter.
//!
//! rfgrep's `SimdSearchEngine::new` (`simd.rs`) calls
//! `is_x86_feature_detected!` directly at every construction site. That
//! macro already caches its own result, but spec.md §4.1 wants the cache to
//! be an explicit, single process-wide value so the rest of the crate can
//! query it without re-running CPUID. [`CpuFeatures::detect`] makes that
//! cache explicit via [`std::sync::OnceLock`].

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Flags for the CPU features the SIMD kernels can use.
///
/// Detection fails closed: a flag is only ever `true` when every
/// precondition for using it safely has been confirmed (instruction
/// support *and*, for the wide-vector levels, OS-enabled register state).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuFeatures {
    pub sse42: bool,
    pub avx2: bool,
    pub avx512f: bool,
    pub avx512bw: bool,
}

impl CpuFeatures {
    const fn none() -> Self {
        Self {
            sse42: false,
            avx2: false,
            avx512f: false,
            avx512bw: false,
        }
    }

    /// Probe the running CPU. Consults `is_x86_feature_detected!`, which on
    /// supported targets already performs both the base/extended-leaf
    /// CPUID checks and the XCR0 OS-enabled-state check spec.md §4.1
    /// requires (YMM state for AVX2; YMM+ZMM+opmask state for AVX-512).
    /// On any other target architecture, every flag is `false`.
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    fn detect() -> Self {
        Self {
            sse42: is_x86_feature_detected!("sse4.2"),
            avx2: is_x86_feature_detected!("avx2"),
            avx512f: is_x86_feature_detected!("avx512f"),
            avx512bw: is_x86_feature_detected!("avx512bw"),
        }
    }

    #[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
    fn detect() -> Self {
        Self::none()
    }

    /// The widest SIMD level this CPU supports, purely advisory: every
    /// engine must still produce correct results via the scalar path.
    pub fn simd_level(&self) -> SimdLevel {
        if self.avx512f && self.avx512bw {
            SimdLevel::Avx512
        } else if self.avx2 {
            SimdLevel::Avx2
        } else if self.sse42 {
            SimdLevel::Sse42
        } else {
            SimdLevel::Scalar
        }
    }
}

/// The widest SIMD kernel width available (or usable, if overridden by
/// [`crate::config::MatchConfig::simd_override`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SimdLevel {
    Scalar,
    Sse42,
    Avx2,
    Avx512,
}

static FEATURES: OnceLock<CpuFeatures> = OnceLock::new();

/// Return the cached, process-wide CPU feature set, probing the CPU on the
/// first call and serving every later call from the cache without taking a
/// lock.
pub fn features() -> CpuFeatures {
    *FEATURES.get_or_init(|| {
        let f = CpuFeatures::detect();
        log::debug!(
            "cpu feature probe: sse4.2={} avx2={} avx512f={} avx512bw={}",
            f.sse42,
            f.avx2,
            f.avx512f,
            f.avx512bw
        );
        f
    })
}

/// Convenience wrapper around [`features`] + [`CpuFeatures::simd_level`].
pub fn simd_level() -> SimdLevel {
    features().simd_level()
}
