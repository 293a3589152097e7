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

// extern crate we're testing, same as any other code would do.
extern crate vincenty_geodesic;

use angle_sc::{is_within_tolerance, Degrees};
use vincenty_geodesic::{
    calculate_ending_coordinates_and_bearing, calculate_geodetic_curve,
    calculate_geodetic_measurement, geodesic, GlobalCoordinates, GlobalPosition, LatLong, Metres,
    StandardEllipsoid, WGS84_ELLIPSOID,
};

/// The smallest difference between two azimuths, in degrees.
fn azimuth_difference(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs() % 360.0;
    diff.min(360.0 - diff)
}

const FILENAME: &str = "data/geodetic_curve_examples.csv";

/// lat1, lon1, lat2, lon2, distance, azimuth, reverse azimuth,
/// distance tolerance, azimuth tolerance
type DataRecord = (f64, f64, f64, f64, f64, f64, f64, f64, f64);

#[test]
fn test_geodetic_curve_examples() -> Result<(), Box<dyn std::error::Error>> {
    let mut rdr = csv::Reader::from_path(FILENAME)?;

    let mut count = 0;
    for result in rdr.deserialize::<DataRecord>() {
        let record = result?;

        let start = GlobalCoordinates::new(Degrees(record.0), Degrees(record.1));
        let end = GlobalCoordinates::new(Degrees(record.2), Degrees(record.3));
        let curve = calculate_geodetic_curve(&start, &end, &WGS84_ELLIPSOID);

        let delta_length_m = (record.4 - curve.ellipsoidal_distance().0).abs();
        assert!(
            delta_length_m <= record.7,
            "line: {count} delta_length_m: {delta_length_m}"
        );

        let delta_azimuth = azimuth_difference(record.5, curve.azimuth().0);
        assert!(
            delta_azimuth <= record.8,
            "line: {count} delta_azimuth: {delta_azimuth}"
        );

        let delta_reverse_azimuth = azimuth_difference(record.6, curve.reverse_azimuth().0);
        assert!(
            delta_reverse_azimuth <= record.8,
            "line: {count} delta_reverse_azimuth: {delta_reverse_azimuth}"
        );

        count += 1;
    }
    assert_eq!(3, count);

    Ok(())
}

#[test]
fn test_direct_inverse_round_trips() {
    let positions = [
        LatLong::new(Degrees(38.88922), Degrees(-77.04978)),
        LatLong::new(Degrees(48.85889), Degrees(2.29583)),
        LatLong::new(Degrees(42.0), Degrees(29.0)),
        LatLong::new(Degrees(39.0), Degrees(-77.0)),
        LatLong::new(Degrees(64.0), Degrees(-22.0)),
        LatLong::new(Degrees(-33.8688), Degrees(151.2093)),
    ];

    for (i, a) in positions.iter().enumerate() {
        for (j, b) in positions.iter().enumerate() {
            if i == j {
                continue;
            }
            let start = GlobalCoordinates::from(a);
            let end = GlobalCoordinates::from(b);
            let curve = calculate_geodetic_curve(&start, &end, &WGS84_ELLIPSOID);

            let (result, _) = calculate_ending_coordinates_and_bearing(
                &start,
                curve.azimuth(),
                curve.ellipsoidal_distance(),
                &WGS84_ELLIPSOID,
            )
            .unwrap();

            assert!(is_within_tolerance(
                end.latitude().0,
                result.latitude().0,
                1e-7
            ));
            assert!(azimuth_difference(end.longitude().0, result.longitude().0) < 1e-7);
        }
    }
}

#[test]
fn test_geodetic_measurement_pikes_peak_alcatraz_island() {
    let pikes_peak = GlobalPosition::new(Degrees(38.840511), Degrees(-105.0445896), Metres(4301.0));
    let alcatraz_island = GlobalPosition::new(Degrees(37.826389), Degrees(-122.4225), Metres(0.0));
    let measurement = calculate_geodetic_measurement(&pikes_peak, &alcatraz_island, &WGS84_ELLIPSOID);

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
    println!("Pikes Peak-Alcatraz Island: {measurement}");

    // On the surface of the reference ellipsoid the geodesic is shorter
    let curve = calculate_geodetic_curve(
        pikes_peak.coordinates(),
        alcatraz_island.coordinates(),
        &WGS84_ELLIPSOID,
    );
    assert!(curve.ellipsoidal_distance().0 < measurement.ellipsoidal_distance().0);
}

#[test]
fn test_standard_ellipsoids() {
    let lincoln_memorial = GlobalCoordinates::new(Degrees(38.88922), Degrees(-77.04978));
    let eiffel_tower = GlobalCoordinates::new(Degrees(48.85889), Degrees(2.29583));
    let precision = geodesic::Precision::default();

    let wgs84 = geodesic::solve_inverse(
        &lincoln_memorial,
        &eiffel_tower,
        &precision,
        "wgs84".parse::<StandardEllipsoid>().unwrap().ellipsoid(),
    );
    let grs80 = geodesic::solve_inverse(
        &lincoln_memorial,
        &eiffel_tower,
        &precision,
        StandardEllipsoid::Grs80.ellipsoid(),
    );
    // WGS 84 and GRS 80 differ by 0.1 mm in their Semiminor axes
    assert!(is_within_tolerance(
        wgs84.ellipsoidal_distance().0,
        grs80.ellipsoidal_distance().0,
        1e-3
    ));

    for standard in StandardEllipsoid::ALL {
        let curve = geodesic::solve_inverse(
            &lincoln_memorial,
            &eiffel_tower,
            &precision,
            standard.ellipsoid(),
        );
        println!("{}: {curve}", standard.name());
        assert!(is_within_tolerance(
            wgs84.ellipsoidal_distance().0,
            curve.ellipsoidal_distance().0,
            50_000.0
        ));
    }
}
