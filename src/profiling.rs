//! Simple profiling counters for understanding hot paths.
//!
//! Counters are process-wide and shared by every array, so concurrent
//! users (including parallel tests) see each other's increments.

use std::sync::atomic::{AtomicU64, Ordering};

pub static GROWTHS: AtomicU64 = AtomicU64::new(0);
pub static SLOTS_MOVED: AtomicU64 = AtomicU64::new(0);
pub static SHIFTS: AtomicU64 = AtomicU64::new(0);

#[inline]
pub fn growth(moved: usize) {
    GROWTHS.fetch_add(1, Ordering::Relaxed);
    SLOTS_MOVED.fetch_add(moved as u64, Ordering::Relaxed);
}

#[inline]
pub fn shift(count: usize) {
    SHIFTS.fetch_add(count as u64, Ordering::Relaxed);
}

pub fn growths() -> u64 {
    GROWTHS.load(Ordering::Relaxed)
}

pub fn reset() {
    GROWTHS.store(0, Ordering::Relaxed);
    SLOTS_MOVED.store(0, Ordering::Relaxed);
    SHIFTS.store(0, Ordering::Relaxed);
}

pub fn report() -> String {
    let growths = GROWTHS.load(Ordering::Relaxed);
    let moved = SLOTS_MOVED.load(Ordering::Relaxed);
    let shifts = SHIFTS.load(Ordering::Relaxed);
    let per_growth = if growths > 0 { moved as f64 / growths as f64 } else { 0.0 };

    format!(
        "Growths: {} ({} moved, {:.1} per growth), Shifts: {}",
        growths, moved, per_growth, shifts
    )
}
