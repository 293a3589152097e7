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

//! vincenty-geodesic
//!
//! [![License](https://img.shields.io/badge/License-MIT-blue)](https://opensource.org/license/mit/)
//!
//! A library for solving the direct and inverse geodetic problems on an
//! ellipsoid of revolution using
//! [Vincenty's formulae](https://en.wikipedia.org/wiki/Vincenty%27s_formulae).
//!
//! ## Geodetic problems
//!
//! The shortest path between two points on the surface of an ellipsoid is a
//! [geodesic](https://en.wikipedia.org/wiki/Geodesics_on_an_ellipsoid).
//!
//! - The *direct* problem: given a start position, an initial bearing and a
//!   distance, find the position (and bearing) at the end of the geodesic,
//!   see `calculate_ending_coordinates`.
//! - The *inverse* problem: given two positions, find the length of the
//!   geodesic between them and its azimuths at each end,
//!   see `calculate_geodetic_curve`.
//!
//! `calculate_geodetic_measurement` extends the inverse problem to positions
//! with elevations: it solves the inverse problem on an ellipsoid scaled to
//! the mean elevation of the positions and combines the result with the
//! elevation change into a point to point distance.
//!
//! ## Design
//!
//! The algorithms are from T. Vincenty,
//! [Direct and Inverse Solutions of Geodesics on the Ellipsoid with application
//! of nested equations](https://www.ngs.noaa.gov/PUBS_LIB/inverse.pdf),
//! Survey Review XXIII, 1975.
//!
//! The `Ellipsoid` class represents an ellipsoid of revolution.
//! The `StandardEllipsoid` enum names commonly used reference ellipsoids,
//! e.g. the static `WGS84_ELLIPSOID`.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Angle`,
//!   `Degrees` and `Radians` and perform trigonometric calculations;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define `LatLong`;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres` and
//!   `NauticalMiles` and perform conversions between them.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.

#![cfg_attr(not(test), no_std)]

extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod coordinates;
pub mod curve;
pub mod ellipsoid;
pub mod geodesic;

pub use angle_sc::{Angle, Degrees, Radians, Validate};
pub use coordinates::{GlobalCoordinates, GlobalPosition};
pub use curve::{GeodeticCurve, GeodeticMeasurement};
pub use ellipsoid::standard::{
    StandardEllipsoid, ANS_ELLIPSOID, CLARKE1858_ELLIPSOID, CLARKE1880_ELLIPSOID, GRS67_ELLIPSOID,
    GRS80_ELLIPSOID, SPHERE_ELLIPSOID, WGS72_ELLIPSOID, WGS84_ELLIPSOID,
};
pub use geodesic::Precision;
pub use icao_units::non_si::NauticalMiles;
pub use icao_units::si::Metres;
pub use unit_sphere::LatLong;

/// The errors returned by the library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A bearing was not a number.
    #[error("invalid azimuth: bearing is not a number")]
    InvalidAzimuth,
    /// A name did not match any `StandardEllipsoid`.
    #[error("unknown ellipsoid name")]
    UnknownEllipsoid,
}

/// The parameters of an `Ellipsoid`.
///
/// An `Ellipsoid` can only be constructed from its Semimajor axis and either
/// its flattening or its inverse flattening, so the derived parameters are
/// always consistent.
#[derive(Clone, Debug, PartialEq)]
pub struct Ellipsoid {
    /// The Semimajor axis of the ellipsoid.
    a: Metres,
    /// The Semiminor axis of the ellipsoid.
    b: Metres,
    /// The flattening of the ellipsoid, a ratio.
    f: f64,
    /// The inverse flattening of the ellipsoid.
    inverse_f: f64,

    /// One minus the flattening ratio.
    one_minus_f: f64,
    /// The square of the second Eccentricity of the ellipsoid.
    ep_2: f64,
}

impl Validate for Ellipsoid {
    /// Test whether an `Ellipsoid` is valid.
    /// Whether `a` is finite and positive and 0 <= `f` < 1.
    fn is_valid(&self) -> bool {
        self.a.0.is_finite() && 0.0 < self.a.0 && (0.0..1.0).contains(&self.f)
    }
}

impl Ellipsoid {
    /// Construct an `Ellipsoid` from its Semimajor axis and flattening.
    /// * `a` - the Semimajor axis of the `Ellipsoid`.
    /// * `f` - the flattening of the `Ellipsoid`, a ratio.
    /// # Examples
    /// ```
    /// use vincenty_geodesic::{Ellipsoid, Metres};
    ///
    /// let sphere = Ellipsoid::from_a_and_f(Metres(6_371_000.0), 0.0);
    /// assert_eq!(sphere.a(), sphere.b());
    /// assert!(sphere.inverse_f().is_infinite());
    /// ```
    #[must_use]
    pub fn from_a_and_f(a: Metres, f: f64) -> Self {
        Self::from_parameters(a, f, 1.0 / f)
    }

    /// Construct an `Ellipsoid` from its Semimajor axis and inverse flattening.
    /// * `a` - the Semimajor axis of the `Ellipsoid`.
    /// * `inverse_f` - the inverse flattening of the `Ellipsoid`.
    #[must_use]
    pub fn from_a_and_inverse_f(a: Metres, inverse_f: f64) -> Self {
        Self::from_parameters(a, 1.0 / inverse_f, inverse_f)
    }

    fn from_parameters(a: Metres, f: f64, inverse_f: f64) -> Self {
        Self {
            a,
            b: ellipsoid::calculate_minor_axis(a, f),
            f,
            inverse_f,
            one_minus_f: 1.0 - f,
            ep_2: ellipsoid::calculate_sq_2nd_eccentricity(f),
        }
    }

    /// Construct an `Ellipsoid` with the WGS-84 parameters.
    #[must_use]
    pub fn wgs84() -> Self {
        StandardEllipsoid::Wgs84.build()
    }

    /// The Semimajor axis of the ellipsoid.
    #[must_use]
    pub const fn a(&self) -> Metres {
        self.a
    }

    /// The Semiminor axis of the ellipsoid.
    #[must_use]
    pub const fn b(&self) -> Metres {
        self.b
    }

    /// The flattening of the ellipsoid, a ratio.
    #[must_use]
    pub const fn f(&self) -> f64 {
        self.f
    }

    /// The inverse flattening of the ellipsoid.
    #[must_use]
    pub const fn inverse_f(&self) -> f64 {
        self.inverse_f
    }

    /// One minus the flattening ratio.
    #[must_use]
    pub const fn one_minus_f(&self) -> f64 {
        self.one_minus_f
    }

    /// The square of the second Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn ep_2(&self) -> f64 {
        self.ep_2
    }

    /// Convert a geodetic Latitude to a parametric Latitude on the
    /// auxiliary sphere.
    /// * `lat` - the geodetic Latitude
    #[must_use]
    pub fn calculate_parametric_latitude(&self, lat: Angle) -> Angle {
        ellipsoid::calculate_parametric_latitude(lat, self.one_minus_f)
    }

    /// Convert a parametric Latitude on the auxiliary sphere to a
    /// geodetic Latitude.
    /// * `beta` - the parametric Latitude
    #[must_use]
    pub fn calculate_geodetic_latitude(&self, beta: Angle) -> Angle {
        ellipsoid::calculate_geodetic_latitude(beta, self.one_minus_f)
    }
}

/// Calculate the position reached by travelling along a geodesic from a
/// start position, the "direct" problem.
/// * `start` - the start position.
/// * `start_bearing` - the initial bearing.
/// * `distance` - the distance to travel along the geodesic.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the end position.
/// # Errors
/// `Error::InvalidAzimuth` if `start_bearing` is not a number.
///
/// # Examples
/// ```
/// use vincenty_geodesic::*;
/// use angle_sc::is_within_tolerance;
///
/// let lincoln_memorial = GlobalCoordinates::new(Degrees(38.88922), Degrees(-77.04978));
/// let result = calculate_ending_coordinates(
///     &lincoln_memorial,
///     Degrees(1.0),
///     Metres(6_179_016.13586),
///     &WGS84_ELLIPSOID,
/// )
/// .unwrap();
///
/// assert!(is_within_tolerance(85.60006433, result.latitude().0, 1e-7));
/// assert!(is_within_tolerance(92.17243943, result.longitude().0, 1e-7));
/// ```
pub fn calculate_ending_coordinates(
    start: &GlobalCoordinates,
    start_bearing: Degrees,
    distance: Metres,
    ellipsoid: &Ellipsoid,
) -> Result<GlobalCoordinates, Error> {
    calculate_ending_coordinates_and_bearing(start, start_bearing, distance, ellipsoid)
        .map(|(coordinates, _)| coordinates)
}

/// Calculate the position and bearing reached by travelling along a geodesic
/// from a start position.
/// * `start` - the start position.
/// * `start_bearing` - the initial bearing.
/// * `distance` - the distance to travel along the geodesic.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the end position and the bearing at the end position,
/// in the range [0, 360).
/// # Errors
/// `Error::InvalidAzimuth` if `start_bearing` is not a number.
pub fn calculate_ending_coordinates_and_bearing(
    start: &GlobalCoordinates,
    start_bearing: Degrees,
    distance: Metres,
    ellipsoid: &Ellipsoid,
) -> Result<(GlobalCoordinates, Degrees), Error> {
    geodesic::solve_direct(
        start,
        start_bearing,
        distance,
        &Precision::default(),
        ellipsoid,
    )
}

/// Calculate the geodesic between a pair of positions, the "inverse" problem.
/// * `start`, `end` - the start and end positions.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the length and azimuths of the geodesic.
///
/// # Examples
/// ```
/// use vincenty_geodesic::*;
/// use angle_sc::is_within_tolerance;
///
/// let lincoln_memorial = GlobalCoordinates::new(Degrees(38.88922), Degrees(-77.04978));
/// let eiffel_tower = GlobalCoordinates::new(Degrees(48.85889), Degrees(2.29583));
/// let curve = calculate_geodetic_curve(&lincoln_memorial, &eiffel_tower, &WGS84_ELLIPSOID);
///
/// assert!(is_within_tolerance(6_179_016.136, curve.ellipsoidal_distance().0, 1e-3));
/// assert!(is_within_tolerance(51.76792142, curve.azimuth().0, 1e-7));
/// assert!(is_within_tolerance(291.75529334, curve.reverse_azimuth().0, 1e-7));
///
/// let distance_nm = NauticalMiles::from(curve.ellipsoidal_distance());
/// println!("Lincoln Memorial-Eiffel Tower distance: {:?}", distance_nm);
/// ```
#[must_use]
pub fn calculate_geodetic_curve(
    start: &GlobalCoordinates,
    end: &GlobalCoordinates,
    ellipsoid: &Ellipsoid,
) -> GeodeticCurve {
    geodesic::solve_inverse(start, end, &Precision::default(), ellipsoid)
}

/// Calculate the geodesic and the point to point distance between a pair of
/// positions with elevations.
/// * `start`, `end` - the start and end positions.
/// * `ellipsoid` - the reference `Ellipsoid`.
///
/// returns the `GeodeticMeasurement` between the positions.
#[must_use]
pub fn calculate_geodetic_measurement(
    start: &GlobalPosition,
    end: &GlobalPosition,
    ellipsoid: &Ellipsoid,
) -> GeodeticMeasurement {
    geodesic::measure(start, end, &Precision::default(), ellipsoid)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use super::*;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_ellipsoid_wgs84() {
        let geoid = Ellipsoid::wgs84();
        let f = 1.0 / ellipsoid::standard::WGS84_INVERSE_F;
        assert_eq!(ellipsoid::standard::WGS84_A, geoid.a());
        assert_eq!(f, geoid.f());
        assert_eq!(ellipsoid::standard::WGS84_INVERSE_F, geoid.inverse_f());
        assert_eq!(
            ellipsoid::calculate_minor_axis(ellipsoid::standard::WGS84_A, f),
            geoid.b()
        );
        assert_eq!(1.0 - f, geoid.one_minus_f());
        assert_eq!(ellipsoid::calculate_sq_2nd_eccentricity(f), geoid.ep_2());
        assert!(geoid.is_valid());
        assert_eq!(&geoid, &*WGS84_ELLIPSOID);
    }

    #[test]
    fn test_ellipsoid_factories() {
        let from_f = Ellipsoid::from_a_and_f(Metres(6_378_137.0), 0.5);
        assert_eq!(2.0, from_f.inverse_f());
        assert_eq!(Metres(3_189_068.5), from_f.b());

        let from_inverse_f = Ellipsoid::from_a_and_inverse_f(Metres(6_378_137.0), 2.0);
        assert_eq!(from_f, from_inverse_f);

        // f · (1/f) = 1
        for standard in StandardEllipsoid::ALL {
            let geoid = standard.ellipsoid();
            if 0.0 < geoid.f() {
                assert!(is_within_tolerance(
                    1.0,
                    geoid.f() * geoid.inverse_f(),
                    f64::EPSILON
                ));
            }
        }
    }

    #[test]
    fn test_ellipsoid_validate() {
        assert!(!Ellipsoid::from_a_and_f(Metres(0.0), 0.0).is_valid());
        assert!(!Ellipsoid::from_a_and_f(Metres(-1.0), 0.0).is_valid());
        assert!(!Ellipsoid::from_a_and_f(Metres(f64::INFINITY), 0.0).is_valid());
        assert!(!Ellipsoid::from_a_and_f(Metres(1.0), 1.0).is_valid());
        assert!(!Ellipsoid::from_a_and_f(Metres(1.0), -0.1).is_valid());
        assert!(!Ellipsoid::from_a_and_f(Metres(1.0), f64::NAN).is_valid());
        assert!(Ellipsoid::from_a_and_f(Metres(1.0), 0.0).is_valid());
    }

    #[test]
    fn test_ellipsoid_latitudes() {
        let geoid = Ellipsoid::wgs84();
        let lat = Angle::from(Degrees(45.0));
        let beta = geoid.calculate_parametric_latitude(lat);
        assert!(Degrees::from(beta).0 < 45.0);

        let result = geoid.calculate_geodetic_latitude(beta);
        assert!(is_within_tolerance(
            45.0,
            Degrees::from(result).0,
            32.0 * f64::EPSILON
        ));
    }

    #[test]
    fn test_ellipsoid_traits() {
        let geoid = Ellipsoid::wgs84();

        let geoid_clone = geoid.clone();
        assert!(geoid_clone == geoid);

        println!("Ellipsoid: {:?}", geoid);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            "invalid azimuth: bearing is not a number",
            Error::InvalidAzimuth.to_string()
        );
        assert_eq!("unknown ellipsoid name", Error::UnknownEllipsoid.to_string());
    }

    #[test]
    fn test_calculate_geodetic_curve() {
        let lincoln_memorial = GlobalCoordinates::new(Degrees(38.88922), Degrees(-77.04978));
        let eiffel_tower = GlobalCoordinates::new(Degrees(48.85889), Degrees(2.29583));
        let curve = calculate_geodetic_curve(&lincoln_memorial, &eiffel_tower, &WGS84_ELLIPSOID);

        assert!(is_within_tolerance(
            6_179_016.136,
            curve.ellipsoidal_distance().0,
            1e-3
        ));
        assert!(is_within_tolerance(51.76792142, curve.azimuth().0, 1e-7));
        assert!(is_within_tolerance(
            291.75529334,
            curve.reverse_azimuth().0,
            1e-7
        ));

        let distance_nm = NauticalMiles::from(curve.ellipsoidal_distance());
        assert!(is_within_tolerance(3_336.401_8, distance_nm.0, 1e-4));
    }

    #[test]
    fn test_calculate_ending_coordinates() {
        let lincoln_memorial = GlobalCoordinates::new(Degrees(38.88922), Degrees(-77.04978));
        let (result, bearing) = calculate_ending_coordinates_and_bearing(
            &lincoln_memorial,
            Degrees(1.0),
            Metres(6_179_016.13586),
            &WGS84_ELLIPSOID,
        )
        .unwrap();

        assert!(is_within_tolerance(85.60006433, result.latitude().0, 1e-7));
        assert!(is_within_tolerance(92.17243943, result.longitude().0, 1e-7));
        assert!((0.0..360.0).contains(&bearing.0));

        let coordinates = calculate_ending_coordinates(
            &lincoln_memorial,
            Degrees(1.0),
            Metres(6_179_016.13586),
            &WGS84_ELLIPSOID,
        )
        .unwrap();
        assert_eq!(result, coordinates);

        assert_eq!(
            Err(Error::InvalidAzimuth),
            calculate_ending_coordinates(
                &lincoln_memorial,
                Degrees(f64::NAN),
                Metres(1000.0),
                &WGS84_ELLIPSOID,
            )
        );
    }

    #[test]
    fn test_calculate_geodetic_measurement() {
        let pikes_peak =
            GlobalPosition::new(Degrees(38.840511), Degrees(-105.0445896), Metres(4301.0));
        let alcatraz_island = GlobalPosition::new(Degrees(37.826389), Degrees(-122.4225), Metres(0.0));
        let measurement =
            calculate_geodetic_measurement(&pikes_peak, &alcatraz_island, &WGS84_ELLIPSOID);

        assert_eq!(-4301.0, measurement.elevation_change().0);
        assert!(is_within_tolerance(
            1_521_788.826,
            measurement.point_to_point_distance().0,
            1e-3
        ));
        assert!(is_within_tolerance(
            1_521_782.748,
            measurement.ellipsoidal_distance().0,
            1e-3
        ));
        assert!(is_within_tolerance(271.21039153, measurement.azimuth().0, 1e-7));
        assert!(is_within_tolerance(
            80.38029386,
            measurement.reverse_azimuth().0,
            1e-7
        ));
    }
}
