//! The eight fixed geometric checks.
//!
//! Order and names are stable; consumers look results up by name.
//!
//! 1. Basis Vector Lengths
//! 2. Tetrahedral Symmetry
//! 3. Origin Identity
//! 4. Round-Trip Conversion
//! 5. Distance Symmetry
//! 6. Triangle Inequality
//! 7. S3 Constant Validation
//! 8. Synergetics Volume Ratios

use crate::config::VerifyConfig;
use crate::report::{CheckResult, VerificationReport};
use crate::solids;
use quadray_core::synergetics::{
    BASIS_LENGTH, CUBO_VOL, OCTA_VOL, S3, TETRAHEDRAL_ANGLE_DEG, TETRA_VOL,
};
use quadray_core::{angle_between, Quadray};

/// Sample points for the round-trip check.
pub const ROUND_TRIP_SAMPLES: [Quadray; 6] = [
    Quadray::new(1.0, 0.0, 0.0, 0.0),
    Quadray::new(0.0, 1.0, 0.0, 0.0),
    Quadray::new(0.0, 0.0, 1.0, 0.0),
    Quadray::new(0.0, 0.0, 0.0, 1.0),
    Quadray::new(2.0, 1.0, 0.0, 1.0),
    Quadray::new(3.0, 2.0, 1.0, 0.0),
];

const LABELS: [&str; 4] = ["A", "B", "C", "D"];

/// Run every check and log the outcome.
pub fn verify_geometric_identities(config: &VerifyConfig) -> VerificationReport {
    let mut report = VerificationReport::new();
    report.push(basis_lengths(config));
    report.push(tetrahedral_symmetry(config));
    report.push(origin_identity(config));
    report.push(round_trips(config));
    report.push(distance_symmetry(config));
    report.push(triangle_inequality(config));
    report.push(s3_constant(config));
    report.push(volume_ratios(config));
    report.log();
    report
}

/// Check that `q` survives quadray → Cartesian → quadray within
/// `tolerance`, comparing normalized forms.
pub fn verify_round_trip(q: &Quadray, tolerance: f64) -> CheckResult {
    let recovered = Quadray::from_cartesian(q.to_cartesian());
    let error = q.normalized().distance_to(&recovered.normalized());
    CheckResult::new(
        "Round-Trip",
        format!("quadray -> cartesian -> quadray for {q}"),
        format!("error < {tolerance}"),
        format!("error={error:.6}"),
        error < tolerance,
    )
}

fn basis_lengths(config: &VerifyConfig) -> CheckResult {
    let lengths = Quadray::BASIS.map(|b| b.length());
    let rendered: Vec<String> = lengths.iter().map(|l| format!("{l:.4}")).collect();
    CheckResult::new(
        "Basis Vector Lengths",
        format!("All 4 basis vectors have length {BASIS_LENGTH:.4}"),
        format!("{BASIS_LENGTH:.4}"),
        format!("[{}]", rendered.join(", ")),
        lengths
            .iter()
            .all(|l| (l - BASIS_LENGTH).abs() < config.tolerance),
    )
}

fn tetrahedral_symmetry(config: &VerifyConfig) -> CheckResult {
    let mut angles = Vec::with_capacity(6);
    for i in 0..4 {
        for j in (i + 1)..4 {
            let angle = angle_between(&Quadray::BASIS[i], &Quadray::BASIS[j]);
            angles.push((format!("{}-{}", LABELS[i], LABELS[j]), angle));
        }
    }
    let rendered: Vec<String> = angles.iter().map(|(p, a)| format!("{p}: {a:.2}")).collect();
    CheckResult::new(
        "Tetrahedral Symmetry",
        format!("All basis pairs form {TETRAHEDRAL_ANGLE_DEG:.2} degree angles"),
        format!("{TETRAHEDRAL_ANGLE_DEG:.2}"),
        format!("[{}]", rendered.join(", ")),
        angles
            .iter()
            .all(|(_, a)| (a - TETRAHEDRAL_ANGLE_DEG).abs() < config.angle_tolerance_deg),
    )
}

fn origin_identity(config: &VerifyConfig) -> CheckResult {
    let o = Quadray::ORIGIN.to_cartesian();
    CheckResult::new(
        "Origin Identity",
        "Quadray (0,0,0,0) maps to Cartesian (0,0,0)",
        "(0, 0, 0)",
        format!("({:.4}, {:.4}, {:.4})", o.x, o.y, o.z),
        o.abs().max_element() < config.tolerance,
    )
}

fn round_trips(config: &VerifyConfig) -> CheckResult {
    let results: Vec<CheckResult> = ROUND_TRIP_SAMPLES
        .iter()
        .map(|q| verify_round_trip(q, config.tolerance))
        .collect();
    let rendered: Vec<&str> = results.iter().map(|r| r.actual.as_str()).collect();
    CheckResult::new(
        "Round-Trip Conversion",
        "Quadray -> Cartesian -> Quadray recovers the original position",
        format!("all errors < {}", config.tolerance),
        format!("[{}]", rendered.join(", ")),
        results.iter().all(|r| r.passed),
    )
}

fn distance_symmetry(config: &VerifyConfig) -> CheckResult {
    let d1 = Quadray::A.distance_to(&Quadray::B);
    let d2 = Quadray::B.distance_to(&Quadray::A);
    CheckResult::new(
        "Distance Symmetry",
        "distance(A,B) == distance(B,A)",
        "d1 == d2",
        format!("d1={d1:.6}, d2={d2:.6}"),
        (d1 - d2).abs() < config.symmetry_tolerance,
    )
}

fn triangle_inequality(config: &VerifyConfig) -> CheckResult {
    let (a, b, c) = (Quadray::A, Quadray::B, Quadray::C);
    let ab = a.distance_to(&b);
    let bc = b.distance_to(&c);
    let ac = a.distance_to(&c);
    CheckResult::new(
        "Triangle Inequality",
        "d(A,B) + d(B,C) >= d(A,C)",
        format!("{ab:.4} + {bc:.4} >= {ac:.4}"),
        format!("{:.4} >= {ac:.4}", ab + bc),
        ab + bc >= ac - config.tolerance,
    )
}

fn s3_constant(config: &VerifyConfig) -> CheckResult {
    let expected = (9.0f64 / 8.0).sqrt();
    CheckResult::new(
        "S3 Constant Validation",
        "S3 = sqrt(9/8)",
        format!("{expected:.6}"),
        format!("{S3:.6}"),
        (S3 - expected).abs() < config.symmetry_tolerance,
    )
}

fn volume_ratios(config: &VerifyConfig) -> CheckResult {
    let tetra = solids::tetra_volume(&solids::tetrahedron());
    let octa = solids::centred_volume(&solids::octahedron());
    let cubo = solids::centred_volume(&solids::cuboctahedron());
    let tol = config.tolerance;
    let ratios_hold = tetra > tol
        && (octa / tetra - f64::from(OCTA_VOL / TETRA_VOL)).abs() < tol
        && (cubo / tetra - f64::from(CUBO_VOL / TETRA_VOL)).abs() < tol;
    CheckResult::new(
        "Synergetics Volume Ratios",
        "Tetra:Octa:Cubo = 1:4:20, measured from vertex coordinates",
        format!("{TETRA_VOL}:{OCTA_VOL}:{CUBO_VOL}"),
        format!("{tetra:.4}:{octa:.4}:{cubo:.4}"),
        ratios_hold && (tetra - f64::from(TETRA_VOL)).abs() < tol,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const NAMES: [&str; 8] = [
        "Basis Vector Lengths",
        "Tetrahedral Symmetry",
        "Origin Identity",
        "Round-Trip Conversion",
        "Distance Symmetry",
        "Triangle Inequality",
        "S3 Constant Validation",
        "Synergetics Volume Ratios",
    ];

    #[test]
    fn default_run_passes_all_eight() {
        let report = verify_geometric_identities(&VerifyConfig::default());
        assert_eq!(report.checks().len(), 8);
        assert!(report.all_passed(), "{}", report.summary());
        assert_eq!(report.pass_count(), 8);
    }

    #[test]
    fn check_names_are_stable() {
        let report = verify_geometric_identities(&VerifyConfig::default());
        let names: Vec<&str> = report.checks().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, NAMES);
    }

    #[test]
    fn run_is_deterministic() {
        let cfg = VerifyConfig::default();
        assert_eq!(verify_geometric_identities(&cfg), verify_geometric_identities(&cfg));
    }

    #[test]
    fn impossible_tolerance_fails_without_panicking() {
        // A zero tolerance makes every strict `< tol` comparison fail.
        let report = verify_geometric_identities(&VerifyConfig::new(0.0));
        assert!(!report.all_passed());
        assert_eq!(report.checks().len(), 8);
        assert!(!report.get("Origin Identity").unwrap().passed);
        // Checks that use the other tolerances are unaffected.
        assert!(report.get("S3 Constant Validation").unwrap().passed);
    }

    #[test]
    fn negative_angle_tolerance_fails_symmetry_only() {
        let mut cfg = VerifyConfig::default();
        cfg.angle_tolerance_deg = -1.0;
        let report = verify_geometric_identities(&cfg);
        let failed: Vec<&str> = report.failed().map(|c| c.name.as_str()).collect();
        assert_eq!(failed, vec!["Tetrahedral Symmetry"]);
    }

    #[test]
    fn volume_check_reports_measured_values() {
        let report = verify_geometric_identities(&VerifyConfig::default());
        let v = report.get("Synergetics Volume Ratios").unwrap();
        assert_eq!(v.expected, "1:4:20");
        assert_eq!(v.actual, "1.0000:4.0000:20.0000");
    }

    #[test]
    fn basis_length_actual_rendering() {
        let report = verify_geometric_identities(&VerifyConfig::default());
        let c = report.get("Basis Vector Lengths").unwrap();
        assert_eq!(c.actual, "[0.7071, 0.7071, 0.7071, 0.7071]");
    }

    #[test]
    fn round_trip_samples_pass() {
        for q in &ROUND_TRIP_SAMPLES {
            let r = verify_round_trip(q, 0.01);
            assert!(r.passed, "{}: {}", r.description, r.actual);
            assert_eq!(r.name, "Round-Trip");
        }
    }

    #[test]
    fn round_trip_of_non_finite_fails() {
        let r = verify_round_trip(&Quadray::new(f64::NAN, 0.0, 0.0, 0.0), 0.01);
        assert!(!r.passed);
    }

    proptest! {
        #[test]
        fn round_trip_holds_for_finite_points(
            a in -100.0f64..100.0, b in -100.0f64..100.0,
            c in -100.0f64..100.0, d in -100.0f64..100.0,
        ) {
            let r = verify_round_trip(&Quadray::new(a, b, c, d), 1e-6);
            prop_assert!(r.passed, "{}", r.actual);
        }
    }
}
