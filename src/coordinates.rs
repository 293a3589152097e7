// Copyright (c) 2024 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The coordinates module contains the geographic position types used by the
//! geodesic calculations.
//!
//! A `GlobalCoordinates` is always held in its canonical range:
//! -90° <= latitude <= 90° and -180° < longitude <= 180°.
//! Latitudes beyond a pole are reflected back over the pole, moving the
//! longitude onto the opposite meridian.

use crate::Metres;
use angle_sc::{Degrees, Validate};
use core::cmp::Ordering;
use core::fmt;
use unit_sphere::LatLong;

/// Wrap `value` into the range [-180, 180).
#[must_use]
fn wrap_latitude(value: f64) -> f64 {
    let mut result = libm::fmod(value + 180.0, 360.0);
    if result < 0.0 {
        result += 360.0;
    }
    result - 180.0
}

/// Wrap `value` into the range (-180, 180].
#[must_use]
fn wrap_longitude(value: f64) -> f64 {
    let mut result = libm::fmod(value + 180.0, 360.0);
    if result <= 0.0 {
        result += 360.0;
    }
    result -= 180.0;
    // rounding of tiny values can land exactly on -180
    if result <= -180.0 {
        result + 360.0
    } else {
        result
    }
}

/// Whether `longitude` lies in the canonical range (-180, 180].
#[must_use]
fn is_canonical_longitude(longitude: f64) -> bool {
    -180.0 < longitude && longitude <= 180.0
}

/// Canonicalize a latitude and longitude pair.
/// Values already in the canonical range are returned unchanged.
/// * `latitude`, `longitude` - in degrees.
///
/// returns the canonical latitude and longitude.
#[must_use]
pub fn canonicalize(latitude: f64, longitude: f64) -> (f64, f64) {
    let mut lat = latitude;
    let mut lon = longitude;

    if !(-90.0..=90.0).contains(&lat) {
        lat = wrap_latitude(lat);
        if 90.0 < lat {
            lat = 180.0 - lat;
            lon += 180.0;
        } else if lat < -90.0 {
            lat = -180.0 - lat;
            lon += 180.0;
        }
    }

    if !is_canonical_longitude(lon) {
        lon = wrap_longitude(lon);
    }

    (lat, lon)
}

/// A latitude and longitude on the surface of an ellipsoid, in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlobalCoordinates {
    latitude: f64,
    longitude: f64,
}

impl Validate for GlobalCoordinates {
    /// Test whether a `GlobalCoordinates` is valid.
    /// Whether -90° <= `latitude` <= 90° and -180° < `longitude` <= 180°.
    fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && is_canonical_longitude(self.longitude)
    }
}

impl GlobalCoordinates {
    /// Construct a `GlobalCoordinates` in its canonical range.
    /// * `latitude` - the latitude, any value.
    /// * `longitude` - the longitude, any value.
    /// # Examples
    /// ```
    /// use vincenty_geodesic::{Degrees, GlobalCoordinates};
    ///
    /// // 10° beyond the North pole
    /// let coords = GlobalCoordinates::new(Degrees(100.0), Degrees(0.0));
    /// assert_eq!(80.0, coords.latitude().0);
    /// assert_eq!(180.0, coords.longitude().0);
    /// ```
    #[must_use]
    pub fn new(latitude: Degrees, longitude: Degrees) -> Self {
        let (latitude, longitude) = canonicalize(latitude.0, longitude.0);
        Self {
            latitude,
            longitude,
        }
    }

    /// Accessor for the latitude.
    #[must_use]
    pub const fn latitude(&self) -> Degrees {
        Degrees(self.latitude)
    }

    /// Accessor for the longitude.
    #[must_use]
    pub const fn longitude(&self) -> Degrees {
        Degrees(self.longitude)
    }

    /// Set the latitude, the coordinates are canonicalized again.
    pub fn set_latitude(&mut self, latitude: Degrees) -> &mut Self {
        *self = Self::new(latitude, self.longitude());
        self
    }

    /// Set the longitude, the coordinates are canonicalized again.
    pub fn set_longitude(&mut self, longitude: Degrees) -> &mut Self {
        *self = Self::new(self.latitude(), longitude);
        self
    }

    /// A copy of these coordinates with a different latitude.
    #[must_use]
    pub fn with_latitude(self, latitude: Degrees) -> Self {
        Self::new(latitude, self.longitude())
    }

    /// A copy of these coordinates with a different longitude.
    #[must_use]
    pub fn with_longitude(self, longitude: Degrees) -> Self {
        Self::new(self.latitude(), longitude)
    }
}

/// `GlobalCoordinates` are ordered West to East, then South to North.
impl PartialOrd for GlobalCoordinates {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.longitude.partial_cmp(&other.longitude) {
            Some(Ordering::Equal) => self.latitude.partial_cmp(&other.latitude),
            ordering => ordering,
        }
    }
}

impl From<&LatLong> for GlobalCoordinates {
    fn from(lat_long: &LatLong) -> Self {
        Self::new(lat_long.lat(), lat_long.lon())
    }
}

impl From<GlobalCoordinates> for LatLong {
    fn from(coords: GlobalCoordinates) -> Self {
        Self::new(coords.latitude(), coords.longitude())
    }
}

/// Write a signed angle as its magnitude followed by a hemisphere letter.
fn write_hemisphere(
    f: &mut fmt::Formatter<'_>,
    value: f64,
    positive: char,
    negative: char,
) -> fmt::Result {
    let mut buf = ryu::Buffer::new();
    let hemisphere = if value >= 0.0 { positive } else { negative };
    write!(f, "{}{hemisphere};", buf.format(libm::fabs(value)))
}

impl fmt::Display for GlobalCoordinates {
    /// Formats as e.g. `38.88922N;77.04978W;`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hemisphere(f, self.latitude, 'N', 'S')?;
        write_hemisphere(f, self.longitude, 'E', 'W')
    }
}

/// A `GlobalCoordinates` with an elevation above the surface of the ellipsoid.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlobalPosition {
    coordinates: GlobalCoordinates,
    elevation: f64,
}

impl Validate for GlobalPosition {
    /// Whether the coordinates are valid and the elevation is finite.
    fn is_valid(&self) -> bool {
        self.coordinates.is_valid() && self.elevation.is_finite()
    }
}

impl GlobalPosition {
    /// Construct a `GlobalPosition`.
    /// * `latitude`, `longitude` - canonicalized as `GlobalCoordinates::new`.
    /// * `elevation` - the height above the ellipsoid.
    #[must_use]
    pub fn new(latitude: Degrees, longitude: Degrees, elevation: Metres) -> Self {
        Self::from_coordinates(GlobalCoordinates::new(latitude, longitude), elevation)
    }

    /// Construct a `GlobalPosition` from a `GlobalCoordinates` and an elevation.
    #[must_use]
    pub const fn from_coordinates(coordinates: GlobalCoordinates, elevation: Metres) -> Self {
        Self {
            coordinates,
            elevation: elevation.0,
        }
    }

    /// Accessor for the coordinates.
    #[must_use]
    pub const fn coordinates(&self) -> &GlobalCoordinates {
        &self.coordinates
    }

    /// Accessor for the latitude.
    #[must_use]
    pub const fn latitude(&self) -> Degrees {
        self.coordinates.latitude()
    }

    /// Accessor for the longitude.
    #[must_use]
    pub const fn longitude(&self) -> Degrees {
        self.coordinates.longitude()
    }

    /// Accessor for the elevation.
    #[must_use]
    pub const fn elevation(&self) -> Metres {
        Metres(self.elevation)
    }

    /// Set the latitude, the coordinates are canonicalized again.
    pub fn set_latitude(&mut self, latitude: Degrees) -> &mut Self {
        self.coordinates.set_latitude(latitude);
        self
    }

    /// Set the longitude, the coordinates are canonicalized again.
    pub fn set_longitude(&mut self, longitude: Degrees) -> &mut Self {
        self.coordinates.set_longitude(longitude);
        self
    }

    /// Set the elevation.
    pub fn set_elevation(&mut self, elevation: Metres) -> &mut Self {
        self.elevation = elevation.0;
        self
    }
}

/// `GlobalPosition`s are ordered by their coordinates, then by elevation.
impl PartialOrd for GlobalPosition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.coordinates.partial_cmp(&other.coordinates) {
            Some(Ordering::Equal) => self.elevation.partial_cmp(&other.elevation),
            ordering => ordering,
        }
    }
}

impl fmt::Display for GlobalPosition {
    /// Formats as e.g. `38.88922N;77.04978W;elevation=10.0m`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = ryu::Buffer::new();
        write!(f, "{}elevation={}m", self.coordinates, buf.format(self.elevation))
    }
}
