//! Unit types for field quantities.
//!
//! Provides type-safe representations of field distances and headings so a
//! coordinate is never confused with an angle.

use core::ops::{Add, Sub};

use serde::Deserialize;

/// Distance or coordinate on the field, in inches.
///
/// The field origin is a corner; a full field is 144 x 144 inches.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Inches(pub f64);

impl Inches {
    /// Create a new Inches value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Check the value is neither NaN nor infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Inches {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Inches {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Robot heading in degrees.
///
/// Headings are stored as written; use [`Degrees::normalized`] to wrap into
/// `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Degrees(pub f64);

impl Degrees {
    /// Create a new Degrees value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Convert to radians.
    #[inline]
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Create from radians.
    #[inline]
    pub fn from_radians(radians: f64) -> Self {
        Self(radians.to_degrees())
    }

    /// Wrap into `[0, 360)`.
    pub fn normalized(self) -> Self {
        let wrapped = libm::fmod(self.0, 360.0);
        let wrapped = if wrapped < 0.0 { wrapped + 360.0 } else { wrapped };
        // fmod of a tiny negative plus 360 rounds up to 360
        if wrapped >= 360.0 {
            Self(0.0)
        } else {
            Self(wrapped)
        }
    }

    /// Check the value is neither NaN nor infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Degrees {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Degrees {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Extension trait for creating unit types from primitives.
pub trait UnitExt {
    /// Convert to Inches.
    fn inches(self) -> Inches;
    /// Convert to Degrees.
    fn degrees(self) -> Degrees;
}

impl UnitExt for f64 {
    #[inline]
    fn inches(self) -> Inches {
        Inches(self)
    }

    #[inline]
    fn degrees(self) -> Degrees {
        Degrees(self)
    }
}
