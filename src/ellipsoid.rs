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

//! The ellipsoid module contains functions for deriving the parameters of an
//! ellipsoid from its Semimajor axis (the equivalent of its radius) and
//! flattening ratio.

pub mod coefficients;
pub mod standard;

use crate::Metres;
use angle_sc::Angle;

/// Calculate the Semiminor axis of an ellipsoid.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use vincenty_geodesic::Metres;
/// use vincenty_geodesic::ellipsoid::{calculate_minor_axis, standard};
///
/// // The WGS 84 Semiminor axis measured in metres.
/// let b : Metres = Metres(6_356_752.314_245_179);
/// assert_eq!(b, calculate_minor_axis(standard::WGS84_A, 1.0 / standard::WGS84_INVERSE_F));
/// ```
#[must_use]
pub fn calculate_minor_axis(a: Metres, f: f64) -> Metres {
    Metres(a.0 * (1.0 - f))
}

/// Calculate the square of the second Eccentricity of an ellipsoid,
/// i.e. (a² - b²) / b².
/// * `f` - the flattening ratio.
#[must_use]
pub fn calculate_sq_2nd_eccentricity(f: f64) -> f64 {
    let one_minus_f = 1.0 - f;
    f * (2.0 - f) / (one_minus_f * one_minus_f)
}

/// Function to convert a `geodetic` Latitude to a `parametric` (reduced)
/// Latitude on the auxiliary sphere, i.e. tan(U) = (1 - f) tan(φ).
/// * `lat` - the `geodetic` Latitude
/// * `one_minus_f` - one minus the flattening ratio.
#[must_use]
pub fn calculate_parametric_latitude(lat: Angle, one_minus_f: f64) -> Angle {
    Angle::from_y_x(one_minus_f * lat.sin().0, lat.cos().0)
}

/// Function to convert a `parametric` Latitude on the auxiliary sphere to a
/// `geodetic` Latitude.
/// * `lat` - the `parametric` Latitude
/// * `one_minus_f` - one minus the flattening ratio.
#[must_use]
pub fn calculate_geodetic_latitude(lat: Angle, one_minus_f: f64) -> Angle {
    Angle::from_y_x(lat.sin().0 / one_minus_f, lat.cos().0)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use super::*;
    use angle_sc::{is_within_tolerance, Degrees, Radians};

    #[test]
    fn test_calculate_sq_2nd_eccentricity() {
        let a = standard::WGS84_A;
        let f = 1.0 / standard::WGS84_INVERSE_F;
        let b = calculate_minor_axis(a, f);

        let expected = (a.0 * a.0 - b.0 * b.0) / (b.0 * b.0);
        assert!(is_within_tolerance(
            expected,
            calculate_sq_2nd_eccentricity(f),
            1e-15
        ));

        assert_eq!(0.0, calculate_sq_2nd_eccentricity(0.0));
    }

    #[test]
    fn test_calculate_parametric_and_geodetic_latitude() {
        let one_minus_f = 1.0 - 1.0 / standard::WGS84_INVERSE_F;

        for i in -90..91 {
            let latitude = i as f64;
            let lat = Angle::from(Degrees(latitude));
            let parametric_lat = calculate_parametric_latitude(lat, one_minus_f);
            let result = calculate_geodetic_latitude(parametric_lat, one_minus_f);

            assert!(is_within_tolerance(
                Radians::from(lat).0,
                Radians::from(result).0,
                f64::EPSILON
            ));
        }
    }

    #[test]
    fn test_parametric_latitude_at_poles_and_equator() {
        let one_minus_f = 1.0 - 1.0 / standard::WGS84_INVERSE_F;

        let north = calculate_parametric_latitude(Angle::from(Degrees(90.0)), one_minus_f);
        assert!(is_within_tolerance(1.0, north.sin().0, f64::EPSILON));
        assert!(is_within_tolerance(0.0, north.cos().0, f64::EPSILON));

        let equator = calculate_parametric_latitude(Angle::from(Degrees(0.0)), one_minus_f);
        assert_eq!(0.0, equator.sin().0);
        assert_eq!(1.0, equator.cos().0);
    }
}
