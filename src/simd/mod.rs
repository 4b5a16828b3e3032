//! Width-specialized byte-scan kernels and the dispatch loop that drains a
//! buffer through progressively narrower widths.
//!
//! Each width module (`sse42`, `avx2`, `avx512`) exposes only the raw
//! chunk-level primitive (compare one fixed-size chunk, return a bitmask);
//! the vector-loop-then-narrower-vector-then-scalar draining order spec.md
//! §4.2 requires lives here, once, so it's exercised identically regardless
//! of which widths are available on a given CPU.

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub mod avx2;
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub mod avx512;
pub mod scalar;
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub mod sse42;

use crate::cpu_feature::SimdLevel;

/// Locate the first occurrence of `b` in `buf`, using the widest kernel
/// `level` allows, draining the remainder through narrower widths and
/// finally the scalar loop.
///
/// Empty buffers return `None`, matching spec.md §4.2's contract.
pub fn find_first_eq(buf: &[u8], b: u8, level: SimdLevel) -> Option<usize> {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        find_first_eq_dispatch(buf, b, level)
    }
    #[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
    {
        let _ = level;
        scalar::find_first_eq(buf, b)
    }
}

/// Length of the maximal common prefix of `a` and `b`, bounded by `len`
/// and by the shorter of the two slices, using the widest kernel `level`
/// allows.
pub fn prefix_eq_len(a: &[u8], b: &[u8], len: usize, level: SimdLevel) -> usize {
    let limit = len.min(a.len()).min(b.len());
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        prefix_eq_len_dispatch(&a[..limit], &b[..limit], level)
    }
    #[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
    {
        let _ = level;
        scalar::prefix_eq_len(&a[..limit], &b[..limit])
    }
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
fn find_first_eq_dispatch(buf: &[u8], b: u8, level: SimdLevel) -> Option<usize> {
    let mut i = 0usize;
    let n = buf.len();

    if level >= SimdLevel::Avx512 {
        while i + avx512::WIDTH <= n {
            let mask = unsafe { avx512::eq_mask(&buf[i..i + avx512::WIDTH], b) };
            if mask != 0 {
                return Some(i + mask.trailing_zeros() as usize);
            }
            i += avx512::WIDTH;
        }
    }
    if level >= SimdLevel::Avx2 {
        while i + avx2::WIDTH <= n {
            let mask = unsafe { avx2::eq_mask(&buf[i..i + avx2::WIDTH], b) };
            if mask != 0 {
                return Some(i + mask.trailing_zeros() as usize);
            }
            i += avx2::WIDTH;
        }
    }
    if level >= SimdLevel::Sse42 {
        while i + sse42::WIDTH <= n {
            let mask = unsafe { sse42::eq_mask(&buf[i..i + sse42::WIDTH], b) };
            if mask != 0 {
                return Some(i + mask.trailing_zeros() as usize);
            }
            i += sse42::WIDTH;
        }
    }
    scalar::find_first_eq(&buf[i..], b).map(|off| i + off)
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
fn prefix_eq_len_dispatch(a: &[u8], b: &[u8], level: SimdLevel) -> usize {
    let limit = a.len();
    let mut i = 0usize;

    if level >= SimdLevel::Avx512 {
        while i + avx512::WIDTH <= limit {
            let mask =
                unsafe { avx512::cmp_mask(&a[i..i + avx512::WIDTH], &b[i..i + avx512::WIDTH]) };
            if mask != 0 {
                return i + mask.trailing_zeros() as usize;
            }
            i += avx512::WIDTH;
        }
    }
    if level >= SimdLevel::Avx2 {
        while i + avx2::WIDTH <= limit {
            let mask = unsafe { avx2::cmp_mask(&a[i..i + avx2::WIDTH], &b[i..i + avx2::WIDTH]) };
            if mask != 0 {
                return i + mask.trailing_zeros() as usize;
            }
            i += avx2::WIDTH;
        }
    }
    if level >= SimdLevel::Sse42 {
        while i + sse42::WIDTH <= limit {
            let mask =
                unsafe { sse42::cmp_mask(&a[i..i + sse42::WIDTH], &b[i..i + sse42::WIDTH]) };
            if mask != 0 {
                return i + mask.trailing_zeros() as usize;
            }
            i += sse42::WIDTH;
        }
    }
    i + scalar::prefix_eq_len(&a[i..limit], &b[i..limit])
}
