use satellite_propellant_budget::constants::G0;
use satellite_propellant_budget::propulsion::{DomainError, burn, burn_duration_s, mass_ratio};

fn expected_propellant(m_before: f64, dv: f64, isp: f64) -> f64 {
    m_before * (1.0 - (-dv / (G0 * isp)).exp())
}

#[test]
fn propellant_matches_closed_form_across_grid() {
    for &m in &[1.0, 250.0, 3_500.0, 48_000.0] {
        for &dv in &[1.0, 50.0, 1_800.0, 6_000.0] {
            for &isp in &[150.0, 220.0, 320.0, 1_600.0, 4_500.0] {
                let result = burn(m, dv, isp).unwrap();
                let expected = expected_propellant(m, dv, isp);
                assert!(
                    (result.propellant_kg - expected).abs() <= 1e-9 * m,
                    "m={m} dv={dv} isp={isp}: {} vs {expected}",
                    result.propellant_kg
                );
                assert_eq!(
                    result.propellant_kg,
                    result.mass_before_kg - result.mass_after_kg
                );
            }
        }
    }
}

#[test]
fn propellant_increases_with_delta_v_and_decreases_with_isp() {
    let mut last = 0.0;
    for dv in [10.0, 100.0, 500.0, 1_000.0, 2_000.0] {
        let prop = burn(2_000.0, dv, 300.0).unwrap().propellant_kg;
        assert!(prop > last);
        last = prop;
    }

    let mut last = f64::INFINITY;
    for isp in [200.0, 250.0, 300.0, 450.0, 3_000.0] {
        let prop = burn(2_000.0, 1_000.0, isp).unwrap().propellant_kg;
        assert!(prop < last);
        last = prop;
    }
}

#[test]
fn zero_delta_v_consumes_nothing() {
    let result = burn(1_234.5, 0.0, 300.0).unwrap();
    assert_eq!(result.mass_after_kg, 1_234.5);
    assert_eq!(result.propellant_kg, 0.0);
    assert_eq!(mass_ratio(0.0, 300.0).unwrap(), 1.0);
}

#[test]
fn mass_ratio_is_inverse_of_remaining_fraction() {
    let result = burn(2_000.0, 1_800.0, 300.0).unwrap();
    let ratio = mass_ratio(1_800.0, 300.0).unwrap();
    assert!((result.mass_before_kg / result.mass_after_kg - ratio).abs() < 1e-12);
}

#[test]
fn invalid_inputs_are_domain_errors() {
    assert_eq!(
        burn(0.0, 100.0, 300.0).unwrap_err(),
        DomainError::NonPositiveMass(0.0)
    );
    assert_eq!(
        burn(-5.0, 100.0, 300.0).unwrap_err(),
        DomainError::NonPositiveMass(-5.0)
    );
    assert_eq!(
        burn(100.0, 100.0, 0.0).unwrap_err(),
        DomainError::NonPositiveIsp(0.0)
    );
    assert_eq!(
        burn(100.0, -1.0, 300.0).unwrap_err(),
        DomainError::NegativeDeltaV(-1.0)
    );
    assert!(matches!(
        mass_ratio(100.0, -3.0),
        Err(DomainError::NonPositiveIsp(_))
    ));
}

#[test]
fn burn_duration_uses_constant_mass_flow() {
    // 490 N at 320 s burns g0 * 320 / 490 seconds per kilogram.
    let duration = burn_duration_s(1_000.0, 320.0, 490.0);
    let expected = 1_000.0 * G0 * 320.0 / 490.0;
    assert!((duration - expected).abs() < 1e-9);
}
