//! Simulation time model.
//!
//! # Design
//!
//! The host reads its wall clock once per animation frame and passes the
//! value in as a [`Timestamp`] (milliseconds).  Every timer in the simulation
//! is an absolute `Timestamp` compared against that value.  Nothing fires on
//! its own, so there are no stale callbacks to cancel: dropping the owner
//! drops the timer.
//!
//! Integer milliseconds keep all deadline arithmetic exact.

use std::fmt;

/// An absolute wall-clock reading in milliseconds.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub u64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0);

    /// The timestamp `ms` milliseconds after `self` (saturating).
    #[inline]
    pub fn offset_ms(self, ms: u64) -> Timestamp {
        Timestamp(self.0.saturating_add(ms))
    }

    /// Milliseconds elapsed from `earlier` to `self`.
    ///
    /// Saturates to zero if the host clock stepped backwards.
    #[inline]
    pub fn since(self, earlier: Timestamp) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// `true` once `self` has reached `deadline`.
    #[inline]
    pub fn reached(self, deadline: Timestamp) -> bool {
        self >= deadline
    }
}

impl std::ops::Add<u64> for Timestamp {
    type Output = Timestamp;
    #[inline]
    fn add(self, rhs: u64) -> Timestamp {
        self.offset_ms(rhs)
    }
}

impl std::ops::Sub for Timestamp {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Timestamp) -> u64 {
        self.since(rhs)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}
