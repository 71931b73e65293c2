use satellite_propellant_budget::budget::{
    ManeuverInput, ManeuverType, SolveError, SolverSettings, closed_form_initial_mass,
    evaluate_sequence, solve_initial_mass,
};
use satellite_propellant_budget::propulsion::{PropellantFamily, Thruster};

fn thruster(id: &str, family: PropellantFamily, isp_s: f64) -> Thruster {
    Thruster {
        id: id.to_string(),
        name: id.to_uppercase(),
        family,
        isp_s,
        thrust_n: None,
    }
}

fn maneuver(
    name: &str,
    dv: f64,
    thruster: &Thruster,
    occurrences: u32,
    eff: f64,
) -> ManeuverInput {
    ManeuverInput {
        name: name.to_string(),
        maneuver_type: ManeuverType::Custom,
        delta_v_mps: dv,
        thruster: thruster.clone(),
        occurrences,
        thruster_efficiency: eff,
    }
}

fn mission_lists() -> Vec<Vec<ManeuverInput>> {
    let mono = thruster("mono", PropellantFamily::ChemicalMono, 220.0);
    let biprop = thruster(
        "biprop",
        PropellantFamily::ChemicalBiprop {
            mixture_ratio_ox_to_fuel: 0.8,
        },
        320.0,
    );
    let xenon = thruster("xenon", PropellantFamily::ElectricXenon, 1_600.0);
    vec![
        vec![maneuver("single", 1_800.0, &biprop, 1, 1.0)],
        vec![
            maneuver("transfer", 1_800.0, &biprop, 1, 0.97),
            maneuver("nssk", 50.0, &mono, 15, 0.9),
            maneuver("ewsk", 2.0, &mono, 15, 1.0),
            maneuver("disposal", 11.0, &mono, 1, 1.0),
        ],
        vec![
            maneuver("raise", 1_500.0, &xenon, 1, 0.6),
            maneuver("keep", 45.0, &xenon, 180, 1.0),
        ],
        vec![maneuver("tiny", 0.5, &mono, 1, 1.0)],
        vec![maneuver("huge", 4_000.0, &mono, 2, 0.8)],
    ]
}

#[test]
fn solver_matches_closed_form() {
    let settings = SolverSettings::default();
    for (i, maneuvers) in mission_lists().iter().enumerate() {
        for dry in [50.0, 2_000.0, 45_000.0] {
            let solved = solve_initial_mass(dry, maneuvers, &settings).unwrap();
            let exact = closed_form_initial_mass(dry, maneuvers).unwrap();
            let rel = (solved.initial_mass_kg - exact).abs() / exact;
            assert!(
                rel < 1e-4,
                "list {i} dry {dry}: solved {} vs closed form {exact}",
                solved.initial_mass_kg
            );
        }
    }
}

#[test]
fn mass_is_conserved_along_the_chain() {
    let settings = SolverSettings::default();
    for maneuvers in mission_lists() {
        let solved = solve_initial_mass(2_000.0, &maneuvers, &settings).unwrap();
        let steps = &solved.sequence.steps;
        assert_eq!(steps.len(), maneuvers.len());
        assert_eq!(steps[0].m_before_kg, solved.initial_mass_kg);
        for pair in steps.windows(2) {
            assert_eq!(pair[1].m_before_kg, pair[0].m_after_kg);
        }
        for step in steps {
            assert_eq!(step.propellant_kg, step.m_before_kg - step.m_after_kg);
        }
        let last = steps.last().unwrap();
        let expected = solved.initial_mass_kg - solved.sequence.total_propellant_kg;
        assert!((last.m_after_kg - expected).abs() < 1e-6);
        // The solved mass leaves exactly the dry mass after the last burn.
        assert!((last.m_after_kg - 2_000.0).abs() < 1e-5);
    }
}

#[test]
fn solving_twice_is_bit_identical() {
    let settings = SolverSettings::default();
    for maneuvers in mission_lists() {
        let first = solve_initial_mass(1_800.0, &maneuvers, &settings).unwrap();
        let second = solve_initial_mass(1_800.0, &maneuvers, &settings).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn sequence_evaluation_is_referentially_transparent() {
    let lists = mission_lists();
    let maneuvers = &lists[1];
    let a = evaluate_sequence(4_321.0, maneuvers).unwrap();
    let b = evaluate_sequence(4_321.0, maneuvers).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.initial_mass_kg, 4_321.0);
    assert_eq!(a.final_mass_kg, a.steps.last().unwrap().m_after_kg);
}

#[test]
fn residual_is_reported_within_tolerance() {
    let settings = SolverSettings::default();
    let lists = mission_lists();
    let solved = solve_initial_mass(2_000.0, &lists[1], &settings).unwrap();
    assert!(solved.residual_kg.abs() < settings.tolerance_kg);
    assert!(solved.iterations <= settings.max_iterations);
}

#[test]
fn too_few_expansions_is_unsolvable() {
    let lists = mission_lists();
    let settings = SolverSettings {
        max_expansions: 1,
        ..SolverSettings::default()
    };
    // The transfer list needs roughly 2.6x the dry mass, beyond a single doubling.
    let err = solve_initial_mass(2_000.0, &lists[1], &settings).unwrap_err();
    assert!(matches!(err, SolveError::Unsolvable(_)), "got {err:?}");
}

#[test]
fn too_few_iterations_is_unsolvable() {
    let lists = mission_lists();
    let settings = SolverSettings {
        max_iterations: 3,
        ..SolverSettings::default()
    };
    let err = solve_initial_mass(2_000.0, &lists[0], &settings).unwrap_err();
    assert!(matches!(err, SolveError::Unsolvable(_)), "got {err:?}");
}

#[test]
fn extreme_mass_ratio_still_matches_closed_form() {
    let xenon = thruster("xenon", PropellantFamily::ElectricXenon, 1_600.0);
    let maneuvers = vec![maneuver("keep", 50.0, &xenon, 10_000, 1.0)];
    let solved = solve_initial_mass(2_000.0, &maneuvers, &SolverSettings::default()).unwrap();
    let expected = closed_form_initial_mass(2_000.0, &maneuvers).unwrap();
    assert!(expected > 1e17);
    let rel = (solved.initial_mass_kg - expected).abs() / expected;
    assert!(rel < 1e-6, "solved {} vs {expected}", solved.initial_mass_kg);
    assert!((solved.sequence.final_mass_kg - 2_000.0).abs() < 1e-6);
}

#[test]
fn mass_ratio_beyond_expansion_cap_is_unsolvable() {
    let mono = thruster("mono", PropellantFamily::ChemicalMono, 220.0);
    let maneuvers = vec![maneuver("keep", 50.0, &mono, 10_000, 1.0)];
    let err = solve_initial_mass(2_000.0, &maneuvers, &SolverSettings::default()).unwrap_err();
    assert!(matches!(err, SolveError::Unsolvable(_)), "got {err:?}");
}
