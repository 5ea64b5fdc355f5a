//! Compass headings and angle canonicalization.
//!
//! # Conventions
//!
//! Absolute headings use the compass convention: 0° is the reference
//! direction (north / up), angles grow clockwise, and every stored value is
//! canonical in `[0, 360)`.
//!
//! Relative rotations (how far to turn) are canonical in `(-180, 180]`.  A
//! positive rotation is a right (clockwise) turn.
//!
//! Host events carry unbounded signed doubles.  They are canonicalized the
//! moment they become a [`Heading`], so comparisons and commits never drift.

use std::fmt;

use crate::{CoreError, CoreResult};

/// Canonicalize an absolute angle into `[0, 360)`.
///
/// `rem_euclid` can round a tiny negative input up to exactly `360.0`; that
/// case folds back to `0.0`.  Negative zero also becomes `0.0`.
#[inline]
pub fn normalize_absolute(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 || wrapped == 0.0 { 0.0 } else { wrapped }
}

/// Canonicalize a relative rotation into `(-180, 180]`.
#[inline]
pub fn normalize_relative(degrees: f64) -> f64 {
    let wrapped = normalize_absolute(degrees);
    if wrapped > 180.0 { wrapped - 360.0 } else { wrapped }
}

/// An absolute compass heading, always canonical in `[0, 360)`.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Heading(f64);

impl Heading {
    /// The reference direction.
    pub const NORTH: Heading = Heading(0.0);
    pub const EAST:  Heading = Heading(90.0);
    pub const SOUTH: Heading = Heading(180.0);
    pub const WEST:  Heading = Heading(270.0);

    /// Canonicalize `degrees` into a heading.
    ///
    /// Non-finite input yields a non-finite heading; use
    /// [`try_new`][Self::try_new] where the value comes from configuration.
    #[inline]
    pub fn new(degrees: f64) -> Self {
        Heading(normalize_absolute(degrees))
    }

    /// Like [`new`][Self::new] but rejects NaN and infinities.
    pub fn try_new(degrees: f64) -> CoreResult<Self> {
        if degrees.is_finite() {
            Ok(Self::new(degrees))
        } else {
            Err(CoreError::NonFiniteAngle(degrees))
        }
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.0
    }

    /// The heading pointing the other way: `self - 180`, canonicalized.
    #[inline]
    pub fn opposite(self) -> Heading {
        Heading::new(self.0 - 180.0)
    }

    /// `self + delta`, canonicalized.
    #[inline]
    pub fn rotated(self, delta: f64) -> Heading {
        Heading::new(self.0 + delta)
    }

    /// Signed rotation in `(-180, 180]` that turns `self` onto `target`.
    ///
    /// Positive means turn right.  An exact half-turn is reported as `+180`.
    #[inline]
    pub fn turn_to(self, target: Heading) -> f64 {
        normalize_relative(target.0 - self.0)
    }
}

impl From<Heading> for f64 {
    #[inline]
    fn from(h: Heading) -> f64 {
        h.0
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°", self.0)
    }
}
