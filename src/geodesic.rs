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

//! The geodesic module contains Vincenty's solutions of the direct and
//! inverse geodetic problems.
//!
//! Equation numbers refer to T. Vincenty,
//! [Direct and Inverse Solutions of Geodesics on the Ellipsoid with application
//! of nested equations](https://www.ngs.noaa.gov/PUBS_LIB/inverse.pdf).

#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]

use crate::ellipsoid::coefficients::{
    calculate_delta_lambda, calculate_delta_sigma, calculate_u_squared, evaluate_a, evaluate_b,
};
use crate::{
    Ellipsoid, Error, GeodeticCurve, GeodeticMeasurement, GlobalCoordinates, GlobalPosition,
    Metres,
};
use angle_sc::{Angle, Degrees, Validate};
use core::f64::consts::{PI, TAU};

/// The default convergence tolerance of the iterative solvers.
pub const DEFAULT_TOLERANCE: f64 = 1e-13;

/// The default maximum number of iterations of the iterative solvers.
pub const DEFAULT_MAX_ITERATIONS: u32 = 20;

/// The convergence criteria of the iterative solvers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Precision {
    /// The change between iterations below which a solver has converged.
    pub tolerance: f64,
    /// The maximum number of iterations a solver may perform.
    pub max_iterations: u32,
}

impl Precision {
    #[must_use]
    pub const fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS)
    }
}

impl Validate for Precision {
    /// Whether `tolerance` is finite and positive and `max_iterations` is
    /// at least one.
    fn is_valid(&self) -> bool {
        self.tolerance.is_finite() && 0.0 < self.tolerance && 0 < self.max_iterations
    }
}

/// Normalize an azimuth in degrees from the range [-360, 720) into [0, 360).
#[must_use]
pub fn normalize_azimuth(degrees: f64) -> f64 {
    let mut result = degrees;
    if result < 0.0 {
        result += 360.0;
    }
    if 360.0 <= result {
        result -= 360.0;
    }
    result
}

/// Solve the direct geodetic problem: find the position and bearing reached
/// after travelling `distance` along a geodesic from `start` with an
/// initial bearing of `start_bearing`.
/// * `start` - the start position.
/// * `start_bearing` - the initial bearing.
/// * `distance` - the distance to travel along the geodesic.
/// * `precision` - the convergence criteria.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the end position and the bearing at the end position,
/// in the range [0, 360).
/// # Errors
/// `Error::InvalidAzimuth` if `start_bearing` is not a number.
pub fn solve_direct(
    start: &GlobalCoordinates,
    start_bearing: Degrees,
    distance: Metres,
    precision: &Precision,
    ellipsoid: &Ellipsoid,
) -> Result<(GlobalCoordinates, Degrees), Error> {
    if start_bearing.0.is_nan() {
        return Err(Error::InvalidAzimuth);
    }

    let b = ellipsoid.b().0;
    let f = ellipsoid.f();

    let alpha1 = Angle::from(start_bearing);
    let sin_alpha1 = alpha1.sin().0;
    let cos_alpha1 = alpha1.cos().0;

    let beta1 = ellipsoid.calculate_parametric_latitude(Angle::from(start.latitude()));
    let sin_u1 = beta1.sin().0;
    let cos_u1 = beta1.cos().0;

    // eq. 1
    let sigma1 = libm::atan2(sin_u1, cos_u1 * cos_alpha1);

    // eq. 2
    let sin_alpha = cos_u1 * sin_alpha1;
    let sq_cos_alpha = (1.0 - sin_alpha) * (1.0 + sin_alpha);

    // eqs. 3 and 4
    let u_sq = calculate_u_squared(sq_cos_alpha, ellipsoid.ep_2());
    let a = evaluate_a(u_sq);
    let b_coeff = evaluate_b(u_sq);

    // eqs. 5, 6 and 7, iterate until sigma changes by less than the tolerance
    let s_over_b_a = distance.0 / (b * a);
    let mut sigma = s_over_b_a;
    let mut prev_sigma = s_over_b_a;
    let mut converged = false;
    let mut iterations = 0;
    while iterations < precision.max_iterations {
        iterations += 1;
        let cos_2sigma_m = libm::cos(2.0 * sigma1 + sigma);
        let delta_sigma =
            calculate_delta_sigma(b_coeff, libm::sin(sigma), libm::cos(sigma), cos_2sigma_m);
        sigma = s_over_b_a + delta_sigma;

        if libm::fabs(sigma - prev_sigma) < precision.tolerance {
            converged = true;
            break;
        }
        prev_sigma = sigma;
    }

    if converged {
        log::trace!("solve_direct converged after {iterations} iterations");
    } else {
        log::warn!("solve_direct did not converge after {iterations} iterations");
    }

    let cos_2sigma_m = libm::cos(2.0 * sigma1 + sigma);
    let sin_sigma = libm::sin(sigma);
    let cos_sigma = libm::cos(sigma);
    let x = sin_u1 * sin_sigma - cos_u1 * cos_sigma * cos_alpha1;

    // eq. 8
    let phi2 = libm::atan2(
        sin_u1 * cos_sigma + cos_u1 * sin_sigma * cos_alpha1,
        ellipsoid.one_minus_f() * libm::sqrt(sin_alpha * sin_alpha + x * x),
    );

    // eq. 9
    let lambda = libm::atan2(
        sin_sigma * sin_alpha1,
        cos_u1 * cos_sigma - sin_u1 * sin_sigma * cos_alpha1,
    );

    // eqs. 10 and 11
    let l = lambda
        - calculate_delta_lambda(
            f,
            sin_alpha,
            sq_cos_alpha,
            sigma,
            sin_sigma,
            cos_sigma,
            cos_2sigma_m,
        );

    // eq. 12
    let alpha2 = libm::atan2(sin_alpha, -x);

    let end = GlobalCoordinates::new(
        Degrees(phi2.to_degrees()),
        Degrees(start.longitude().0 + l.to_degrees()),
    );
    Ok((end, Degrees(normalize_azimuth(alpha2.to_degrees()))))
}

/// Solve the inverse geodetic problem: find the length and azimuths of the
/// geodesic between a pair of positions.
///
/// If the longitude difference does not converge, the positions are
/// assumed to lie on a meridian (or be antipodal) and the azimuths are
/// 180° and 0° if `start` is North of `end`, 0° and 180° if it is South of
/// `end` and NaN otherwise.
/// * `start`, `end` - the start and end positions.
/// * `precision` - the convergence criteria.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the length and azimuths of the geodesic, azimuths are
/// in the range [0, 360).
#[allow(clippy::similar_names)]
#[must_use]
pub fn solve_inverse(
    start: &GlobalCoordinates,
    end: &GlobalCoordinates,
    precision: &Precision,
    ellipsoid: &Ellipsoid,
) -> GeodeticCurve {
    let b = ellipsoid.b().0;
    let f = ellipsoid.f();

    // the longitude difference is not wrapped
    let omega = end.longitude().0.to_radians() - start.longitude().0.to_radians();

    let beta1 = ellipsoid.calculate_parametric_latitude(Angle::from(start.latitude()));
    let sin_u1 = beta1.sin().0;
    let cos_u1 = beta1.cos().0;

    let beta2 = ellipsoid.calculate_parametric_latitude(Angle::from(end.latitude()));
    let sin_u2 = beta2.sin().0;
    let cos_u2 = beta2.cos().0;

    let sin_u1_sin_u2 = sin_u1 * sin_u2;
    let cos_u1_sin_u2 = cos_u1 * sin_u2;
    let sin_u1_cos_u2 = sin_u1 * cos_u2;
    let cos_u1_cos_u2 = cos_u1 * cos_u2;

    // eq. 13
    let mut lambda = omega;

    let mut a = 0.0;
    let mut sigma = 0.0;
    let mut delta_sigma = 0.0;
    let mut converged = false;
    let mut iterations = 0;
    while iterations < precision.max_iterations {
        let lambda0 = lambda;
        let sin_lambda = libm::sin(lambda);
        let cos_lambda = libm::cos(lambda);

        // eq. 14
        let y = cos_u2 * sin_lambda;
        let x = cos_u1_sin_u2 - sin_u1_cos_u2 * cos_lambda;
        let sq_sin_sigma = y * y + x * x;
        let sin_sigma = libm::sqrt(sq_sin_sigma);

        // eqs. 15 and 16
        let cos_sigma = sin_u1_sin_u2 + cos_u1_cos_u2 * cos_lambda;
        sigma = libm::atan2(sin_sigma, cos_sigma);

        // eq. 17
        let sin_alpha = if sq_sin_sigma == 0.0 {
            0.0
        } else {
            cos_u1_cos_u2 * sin_lambda / sin_sigma
        };
        let sq_cos_alpha = (1.0 - sin_alpha) * (1.0 + sin_alpha);

        // eq. 18
        let cos_2sigma_m = if sq_cos_alpha == 0.0 {
            0.0
        } else {
            cos_sigma - 2.0 * sin_u1_sin_u2 / sq_cos_alpha
        };

        // eqs. 3, 4 and 6
        let u_sq = calculate_u_squared(sq_cos_alpha, ellipsoid.ep_2());
        a = evaluate_a(u_sq);
        delta_sigma = calculate_delta_sigma(evaluate_b(u_sq), sin_sigma, cos_sigma, cos_2sigma_m);

        // eqs. 10 and 11 (modified)
        lambda = omega
            + calculate_delta_lambda(
                f,
                sin_alpha,
                sq_cos_alpha,
                sigma,
                sin_sigma,
                cos_sigma,
                cos_2sigma_m,
            );

        // NaN when lambda is zero, so a meridian never converges
        let change = libm::fabs((lambda - lambda0) / lambda);
        let index = iterations;
        iterations += 1;
        if 1 < index && change < precision.tolerance {
            converged = true;
            break;
        }
    }

    // eq. 19
    let s = b * a * (sigma - delta_sigma);

    let (alpha1, alpha2) = if converged {
        log::trace!("solve_inverse converged after {iterations} iterations");
        let sin_lambda = libm::sin(lambda);
        let cos_lambda = libm::cos(lambda);

        // eq. 20
        let mut radians = libm::atan2(
            cos_u2 * sin_lambda,
            cos_u1_sin_u2 - sin_u1_cos_u2 * cos_lambda,
        );
        if radians < 0.0 {
            radians += TAU;
        }
        let alpha1 = radians.to_degrees();

        // eq. 21
        radians = libm::atan2(
            cos_u1 * sin_lambda,
            -sin_u1_cos_u2 + cos_u1_sin_u2 * cos_lambda,
        ) + PI;
        if radians < 0.0 {
            radians += TAU;
        }
        (alpha1, radians.to_degrees())
    } else {
        log::debug!(
            "solve_inverse did not converge after {iterations} iterations, assuming a meridian"
        );
        let lat1 = start.latitude().0;
        let lat2 = end.latitude().0;
        if lat1 > lat2 {
            (180.0, 0.0)
        } else if lat1 < lat2 {
            (0.0, 180.0)
        } else {
            (f64::NAN, f64::NAN)
        }
    };

    GeodeticCurve::new(
        Metres(s),
        Degrees(normalize_azimuth(alpha1)),
        Degrees(normalize_azimuth(alpha2)),
    )
}

/// Measure the geodesic between a pair of positions with elevations.
///
/// The inverse problem is solved on an ellipsoid with the flattening of
/// `ellipsoid` and its Semimajor axis raised by the mean elevation of the
/// positions.
/// * `start`, `end` - the start and end positions.
/// * `precision` - the convergence criteria.
/// * `ellipsoid` - the reference `Ellipsoid`.
///
/// returns the `GeodeticMeasurement` between the positions.
#[must_use]
pub fn measure(
    start: &GlobalPosition,
    end: &GlobalPosition,
    precision: &Precision,
    ellipsoid: &Ellipsoid,
) -> GeodeticMeasurement {
    let elev1 = start.elevation().0;
    let elev2 = end.elevation().0;
    let mean_elevation = (elev1 + elev2) / 2.0;

    let mean_latitude =
        (start.latitude().0.to_radians() + end.latitude().0.to_radians()) / 2.0;

    let f = ellipsoid.f();
    let a = ellipsoid.a().0 + mean_elevation * (1.0 + f * libm::sin(mean_latitude));
    let adjusted = Ellipsoid::from_a_and_f(Metres(a), f);

    let curve = solve_inverse(start.coordinates(), end.coordinates(), precision, &adjusted);
    GeodeticMeasurement::new(curve, Metres(elev2 - elev1))
}
