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

//! The results of solving the inverse geodetic problem.

use crate::{Degrees, Metres};
use core::fmt;

/// The length and azimuths of a geodesic between two positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeodeticCurve {
    /// The length of the geodesic on the ellipsoid.
    ellipsoidal_distance: f64,
    /// The azimuth at the start position, in degrees.
    azimuth: f64,
    /// The azimuth from the end position back to the start, in degrees.
    reverse_azimuth: f64,
}

impl GeodeticCurve {
    /// Constructor.
    /// * `ellipsoidal_distance` - the length of the geodesic.
    /// * `azimuth` - the azimuth at the start position.
    /// * `reverse_azimuth` - the azimuth at the end position towards the start.
    #[must_use]
    pub const fn new(
        ellipsoidal_distance: Metres,
        azimuth: Degrees,
        reverse_azimuth: Degrees,
    ) -> Self {
        Self {
            ellipsoidal_distance: ellipsoidal_distance.0,
            azimuth: azimuth.0,
            reverse_azimuth: reverse_azimuth.0,
        }
    }

    /// Accessor for the length of the geodesic on the ellipsoid.
    #[must_use]
    pub const fn ellipsoidal_distance(&self) -> Metres {
        Metres(self.ellipsoidal_distance)
    }

    /// Accessor for the azimuth at the start position.
    #[must_use]
    pub const fn azimuth(&self) -> Degrees {
        Degrees(self.azimuth)
    }

    /// Accessor for the reverse azimuth.
    #[must_use]
    pub const fn reverse_azimuth(&self) -> Degrees {
        Degrees(self.reverse_azimuth)
    }
}

impl fmt::Display for GeodeticCurve {
    /// Formats as `s=<distance>;a12=<azimuth>;a21=<reverse azimuth>;`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = ryu::Buffer::new();
        write!(f, "s={};", buf.format(self.ellipsoidal_distance))?;
        write!(f, "a12={};", buf.format(self.azimuth))?;
        write!(f, "a21={};", buf.format(self.reverse_azimuth))
    }
}

/// A `GeodeticCurve` between two positions with elevations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeodeticMeasurement {
    curve: GeodeticCurve,
    /// The end elevation minus the start elevation.
    elevation_change: f64,
    /// The straight line distance between the positions.
    point_to_point_distance: f64,
}

impl GeodeticMeasurement {
    /// Constructor, the point to point distance is derived from the
    /// `ellipsoidal_distance` of the `curve` and the `elevation_change`.
    /// * `curve` - the geodesic on the elevation adjusted ellipsoid.
    /// * `elevation_change` - the change in elevation between the positions.
    /// # Examples
    /// ```
    /// use vincenty_geodesic::{Degrees, GeodeticCurve, GeodeticMeasurement, Metres};
    ///
    /// let curve = GeodeticCurve::new(Metres(4000.0), Degrees(90.0), Degrees(270.0));
    /// let measurement = GeodeticMeasurement::new(curve, Metres(-3000.0));
    /// assert_eq!(Metres(5000.0), measurement.point_to_point_distance());
    /// ```
    #[must_use]
    pub fn new(curve: GeodeticCurve, elevation_change: Metres) -> Self {
        Self {
            curve,
            elevation_change: elevation_change.0,
            point_to_point_distance: libm::hypot(curve.ellipsoidal_distance, elevation_change.0),
        }
    }

    /// Accessor for the underlying `GeodeticCurve`.
    #[must_use]
    pub const fn curve(&self) -> &GeodeticCurve {
        &self.curve
    }

    #[must_use]
    pub const fn ellipsoidal_distance(&self) -> Metres {
        self.curve.ellipsoidal_distance()
    }

    #[must_use]
    pub const fn azimuth(&self) -> Degrees {
        self.curve.azimuth()
    }

    #[must_use]
    pub const fn reverse_azimuth(&self) -> Degrees {
        self.curve.reverse_azimuth()
    }

    /// Accessor for the end elevation minus the start elevation.
    #[must_use]
    pub const fn elevation_change(&self) -> Metres {
        Metres(self.elevation_change)
    }

    /// Accessor for the straight line distance between the positions.
    #[must_use]
    pub const fn point_to_point_distance(&self) -> Metres {
        Metres(self.point_to_point_distance)
    }
}

impl fmt::Display for GeodeticMeasurement {
    /// Formats as the `GeodeticCurve` followed by `elev12=<change>;p2p=<distance>`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = ryu::Buffer::new();
        write!(f, "{}elev12={};", self.curve, buf.format(self.elevation_change))?;
        write!(f, "p2p={}", buf.format(self.point_to_point_distance))
    }
}
