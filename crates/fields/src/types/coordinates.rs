//! WGS 84 coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FieldError, FieldKind};
use crate::foundation::Validate;
use crate::macros::field_decoder;
use crate::validators::InRange;

const LATITUDE: InRange<f64> = InRange::new(FieldKind::Latitude, -90.0, 90.0);
const LONGITUDE: InRange<f64> = InRange::new(FieldKind::Longitude, -180.0, 180.0);

// ============================================================================
// LATITUDE
// ============================================================================

/// A WGS 84 latitude in decimal degrees, within `[-90.0, 90.0]`.
///
/// # Examples
///
/// ```
/// use gbfs_fields::types::Latitude;
///
/// let lat = Latitude::new(45.5017).unwrap();
/// assert_eq!(lat.get(), 45.5017);
/// assert!(Latitude::new(-90.0).is_ok());
/// assert!(Latitude::new(90.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Latitude(f64);

impl Latitude {
    /// Southern bound, inclusive.
    pub const MIN: f64 = -90.0;
    /// Northern bound, inclusive.
    pub const MAX: f64 = 90.0;

    /// Creates a latitude, rejecting values outside `[-90.0, 90.0]` and `NaN`.
    pub fn new(degrees: f64) -> Result<Self, FieldError> {
        LATITUDE.validate(&degrees)?;
        Ok(Self(degrees))
    }

    /// The latitude in decimal degrees.
    #[inline]
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Latitude {
    type Error = FieldError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Latitude> for f64 {
    fn from(lat: Latitude) -> Self {
        lat.0
    }
}

impl fmt::Display for Latitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

field_decoder!(Latitude as Latitude via decode_f64);

// ============================================================================
// LONGITUDE
// ============================================================================

/// A WGS 84 longitude in decimal degrees, within `[-180.0, 180.0]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Longitude(f64);

impl Longitude {
    /// Western bound, inclusive.
    pub const MIN: f64 = -180.0;
    /// Eastern bound, inclusive.
    pub const MAX: f64 = 180.0;

    /// Creates a longitude, rejecting values outside `[-180.0, 180.0]` and `NaN`.
    pub fn new(degrees: f64) -> Result<Self, FieldError> {
        LONGITUDE.validate(&degrees)?;
        Ok(Self(degrees))
    }

    #[inline]
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Longitude {
    type Error = FieldError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Longitude> for f64 {
    fn from(lon: Longitude) -> Self {
        lon.0
    }
}

impl fmt::Display for Longitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

field_decoder!(Longitude as Longitude via decode_f64);

// ============================================================================
// TESTS
// ============================================================================
