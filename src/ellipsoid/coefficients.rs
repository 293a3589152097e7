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

//! This module contains the series coefficients used by Vincenty's direct and
//! inverse formulae.
//!
//! Equation numbers refer to T. Vincenty,
//! [Direct and Inverse Solutions of Geodesics on the Ellipsoid with application
//! of nested equations](https://www.ngs.noaa.gov/PUBS_LIB/inverse.pdf),
//! Survey Review XXIII, 1975.

#![allow(clippy::suboptimal_flops)]

/// The polynomial coefficients of `A`, Vincenty Eq. 3.
const COEFFS_A: [f64; 4] = [4096.0, -768.0, 320.0, -175.0];

/// The polynomial coefficients of `B`, Vincenty Eq. 4.
const COEFFS_B: [f64; 4] = [256.0, -128.0, 74.0, -47.0];

/// Evaluate the polynomial in x using
/// [Horner's method](https://en.wikipedia.org/wiki/Horner%27s_method).
/// * `coeffs` - the polynomial coefficients, lowest order first.
/// * `x` - the variable.
#[must_use]
pub fn evaluate_polynomial(coeffs: &[f64], x: f64) -> f64 {
    coeffs
        .split_last()
        .map_or(0.0, |(last, elements)| {
            elements
                .iter()
                .rev()
                .fold(*last, |result, element| element + x * result)
        })
}

/// Calculate `u²`, the square of the reduced eccentricity along the geodesic.
/// * `sq_cos_alpha` - the square of the cosine of the azimuth at the equator.
/// * `ep_2` - the square of the second eccentricity of the ellipsoid.
#[must_use]
pub fn calculate_u_squared(sq_cos_alpha: f64, ep_2: f64) -> f64 {
    sq_cos_alpha * ep_2
}

/// The scale factor `A`, Vincenty Eq. 3.
/// * `u_sq` - `u²` from `calculate_u_squared`.
/// # Examples
/// ```
/// use vincenty_geodesic::ellipsoid::coefficients::evaluate_a;
///
/// // A sphere has no correction.
/// assert_eq!(1.0, evaluate_a(0.0));
/// ```
#[must_use]
pub fn evaluate_a(u_sq: f64) -> f64 {
    1.0 + u_sq / 16384.0 * evaluate_polynomial(&COEFFS_A, u_sq)
}

/// The scale factor `B`, Vincenty Eq. 4.
/// * `u_sq` - `u²` from `calculate_u_squared`.
#[must_use]
pub fn evaluate_b(u_sq: f64) -> f64 {
    u_sq / 1024.0 * evaluate_polynomial(&COEFFS_B, u_sq)
}

/// The longitude correction factor `C`, Vincenty Eq. 10.
/// * `f` - the flattening of the ellipsoid.
/// * `sq_cos_alpha` - the square of the cosine of the azimuth at the equator.
#[must_use]
pub fn evaluate_c(f: f64, sq_cos_alpha: f64) -> f64 {
    f / 16.0 * sq_cos_alpha * (4.0 + f * (4.0 - 3.0 * sq_cos_alpha))
}

/// The difference between the great circle arc length on the auxiliary
/// sphere and the geodesic length, Vincenty Eq. 6.
/// * `b` - the `B` coefficient.
/// * `sin_sigma`, `cos_sigma` - the sine and cosine of the arc length.
/// * `cos_2sigma_m` - the cosine of twice the arc length from the equator
///   to the mid point of the arc.
#[must_use]
pub fn calculate_delta_sigma(b: f64, sin_sigma: f64, cos_sigma: f64, cos_2sigma_m: f64) -> f64 {
    let sq_cos_2sigma_m = cos_2sigma_m * cos_2sigma_m;
    b * sin_sigma
        * (cos_2sigma_m
            + b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * sq_cos_2sigma_m)
                    - b / 6.0
                        * cos_2sigma_m
                        * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                        * (-3.0 + 4.0 * sq_cos_2sigma_m)))
}

/// The difference between the longitude difference on the auxiliary sphere
/// and on the ellipsoid, the correction term of Vincenty Eq. 11.
/// * `f` - the flattening of the ellipsoid.
/// * `sin_alpha` - the sine of the azimuth at the equator.
/// * `sq_cos_alpha` - the square of the cosine of the azimuth at the equator.
/// * `sigma` - the arc length on the auxiliary sphere, in radians.
/// * `sin_sigma`, `cos_sigma` - the sine and cosine of `sigma`.
/// * `cos_2sigma_m` - as `calculate_delta_sigma`.
#[must_use]
pub fn calculate_delta_lambda(
    f: f64,
    sin_alpha: f64,
    sq_cos_alpha: f64,
    sigma: f64,
    sin_sigma: f64,
    cos_sigma: f64,
    cos_2sigma_m: f64,
) -> f64 {
    let c = evaluate_c(f, sq_cos_alpha);
    (1.0 - c)
        * f
        * sin_alpha
        * (sigma
            + c * sin_sigma
                * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)))
}
