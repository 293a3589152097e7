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

//! The standard module contains the primary parameters of commonly used
//! reference ellipsoids and lazily constructed, shared instances of them.

use crate::{Ellipsoid, Error, Metres};
use core::str::FromStr;
use once_cell::sync::Lazy;

/// The WGS 84 Semimajor axis measured in metres.
pub const WGS84_A: Metres = Metres(6_378_137.0);
/// The WGS 84 inverse flattening.
pub const WGS84_INVERSE_F: f64 = 298.257_223_563;

/// The GRS 80 Semimajor axis measured in metres.
pub const GRS80_A: Metres = Metres(6_378_137.0);
/// The GRS 80 inverse flattening.
pub const GRS80_INVERSE_F: f64 = 298.257_222_101;

/// The GRS 67 Semimajor axis measured in metres.
pub const GRS67_A: Metres = Metres(6_378_160.0);
/// The GRS 67 inverse flattening.
pub const GRS67_INVERSE_F: f64 = 298.25;

/// The Australian National Spheroid Semimajor axis measured in metres.
pub const ANS_A: Metres = Metres(6_378_160.0);
/// The Australian National Spheroid inverse flattening.
pub const ANS_INVERSE_F: f64 = 298.25;

/// The WGS 72 Semimajor axis measured in metres.
pub const WGS72_A: Metres = Metres(6_378_135.0);
/// The WGS 72 inverse flattening.
pub const WGS72_INVERSE_F: f64 = 298.26;

/// The Clarke 1858 Semimajor axis measured in metres.
pub const CLARKE1858_A: Metres = Metres(6_378_293.645);
/// The Clarke 1858 inverse flattening.
pub const CLARKE1858_INVERSE_F: f64 = 294.26;

/// The Clarke 1880 Semimajor axis measured in metres.
pub const CLARKE1880_A: Metres = Metres(6_378_249.145);
/// The Clarke 1880 inverse flattening.
pub const CLARKE1880_INVERSE_F: f64 = 293.465;

/// The radius of the spherical "ellipsoid" measured in metres.
pub const SPHERE_A: Metres = Metres(6_371_000.0);

/// A static instance of the WGS 84 `Ellipsoid`.
pub static WGS84_ELLIPSOID: Lazy<Ellipsoid> = Lazy::new(|| StandardEllipsoid::Wgs84.build());
/// A static instance of the GRS 80 `Ellipsoid`.
pub static GRS80_ELLIPSOID: Lazy<Ellipsoid> = Lazy::new(|| StandardEllipsoid::Grs80.build());
/// A static instance of the GRS 67 `Ellipsoid`.
pub static GRS67_ELLIPSOID: Lazy<Ellipsoid> = Lazy::new(|| StandardEllipsoid::Grs67.build());
/// A static instance of the Australian National Spheroid.
pub static ANS_ELLIPSOID: Lazy<Ellipsoid> = Lazy::new(|| StandardEllipsoid::Ans.build());
/// A static instance of the WGS 72 `Ellipsoid`.
pub static WGS72_ELLIPSOID: Lazy<Ellipsoid> = Lazy::new(|| StandardEllipsoid::Wgs72.build());
/// A static instance of the Clarke 1858 `Ellipsoid`.
pub static CLARKE1858_ELLIPSOID: Lazy<Ellipsoid> =
    Lazy::new(|| StandardEllipsoid::Clarke1858.build());
/// A static instance of the Clarke 1880 `Ellipsoid`.
pub static CLARKE1880_ELLIPSOID: Lazy<Ellipsoid> =
    Lazy::new(|| StandardEllipsoid::Clarke1880.build());
/// A static instance of the spherical "ellipsoid".
pub static SPHERE_ELLIPSOID: Lazy<Ellipsoid> = Lazy::new(|| StandardEllipsoid::Sphere.build());

/// The catalog of standard reference ellipsoids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StandardEllipsoid {
    /// World Geodetic System 1984.
    Wgs84,
    /// Geodetic Reference System 1980.
    Grs80,
    /// Geodetic Reference System 1967.
    Grs67,
    /// Australian National Spheroid.
    Ans,
    /// World Geodetic System 1972.
    Wgs72,
    /// Clarke 1858.
    Clarke1858,
    /// Clarke 1880.
    Clarke1880,
    /// A sphere with the mean radius of the Earth.
    Sphere,
}

impl StandardEllipsoid {
    /// All of the standard ellipsoids.
    pub const ALL: [Self; 8] = [
        Self::Wgs84,
        Self::Grs80,
        Self::Grs67,
        Self::Ans,
        Self::Wgs72,
        Self::Clarke1858,
        Self::Clarke1880,
        Self::Sphere,
    ];

    /// The name of the ellipsoid.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wgs84 => "WGS84",
            Self::Grs80 => "GRS80",
            Self::Grs67 => "GRS67",
            Self::Ans => "ANS",
            Self::Wgs72 => "WGS72",
            Self::Clarke1858 => "Clarke1858",
            Self::Clarke1880 => "Clarke1880",
            Self::Sphere => "Sphere",
        }
    }

    /// Construct a new `Ellipsoid` from the primary parameters.
    #[must_use]
    pub fn build(self) -> Ellipsoid {
        match self {
            Self::Wgs84 => Ellipsoid::from_a_and_inverse_f(WGS84_A, WGS84_INVERSE_F),
            Self::Grs80 => Ellipsoid::from_a_and_inverse_f(GRS80_A, GRS80_INVERSE_F),
            Self::Grs67 => Ellipsoid::from_a_and_inverse_f(GRS67_A, GRS67_INVERSE_F),
            Self::Ans => Ellipsoid::from_a_and_inverse_f(ANS_A, ANS_INVERSE_F),
            Self::Wgs72 => Ellipsoid::from_a_and_inverse_f(WGS72_A, WGS72_INVERSE_F),
            Self::Clarke1858 => {
                Ellipsoid::from_a_and_inverse_f(CLARKE1858_A, CLARKE1858_INVERSE_F)
            }
            Self::Clarke1880 => {
                Ellipsoid::from_a_and_inverse_f(CLARKE1880_A, CLARKE1880_INVERSE_F)
            }
            Self::Sphere => Ellipsoid::from_a_and_f(SPHERE_A, 0.0),
        }
    }

    /// The shared instance of the ellipsoid, constructed on first use.
    /// # Examples
    /// ```
    /// use vincenty_geodesic::ellipsoid::standard::{StandardEllipsoid, WGS84_ELLIPSOID};
    ///
    /// let wgs84 = StandardEllipsoid::Wgs84.ellipsoid();
    /// assert!(core::ptr::eq(wgs84, &*WGS84_ELLIPSOID));
    /// ```
    #[must_use]
    pub fn ellipsoid(self) -> &'static Ellipsoid {
        match self {
            Self::Wgs84 => &*WGS84_ELLIPSOID,
            Self::Grs80 => &*GRS80_ELLIPSOID,
            Self::Grs67 => &*GRS67_ELLIPSOID,
            Self::Ans => &*ANS_ELLIPSOID,
            Self::Wgs72 => &*WGS72_ELLIPSOID,
            Self::Clarke1858 => &*CLARKE1858_ELLIPSOID,
            Self::Clarke1880 => &*CLARKE1880_ELLIPSOID,
            Self::Sphere => &*SPHERE_ELLIPSOID,
        }
    }
}

impl FromStr for StandardEllipsoid {
    type Err = Error;

    /// Find a standard ellipsoid by name, ignoring ASCII case.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ellipsoid| ellipsoid.name().eq_ignore_ascii_case(name.trim()))
            .ok_or(Error::UnknownEllipsoid)
    }
}
