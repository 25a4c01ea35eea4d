#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]

use antigrav::{FieldConfig, Simulator, TimeCursor, ValidationError};
use proptest::prelude::*;

fn any_field() -> impl Strategy<Value = FieldConfig> {
    (0.0f64..=1.0, 0.1f64..50.0, -100.0f64..100.0, 0.0f64..=1.0).prop_map(
        |(strength, frequency, radius, stability)| {
            FieldConfig::new(strength, frequency, radius, stability).unwrap()
        },
    )
}

// =============================================================================
// Field construction
// =============================================================================

proptest! {
    #[test]
    fn valid_fractions_are_echoed(
        strength in 0.0f64..=1.0,
        frequency in -1e6f64..1e6,
        radius in -1e6f64..1e6,
        stability in 0.0f64..=1.0,
    ) {
        let field = FieldConfig::new(strength, frequency, radius, stability).unwrap();
        prop_assert_eq!(field.strength(), strength);
        prop_assert_eq!(field.frequency(), frequency);
        prop_assert_eq!(field.radius(), radius);
        prop_assert_eq!(field.stability(), stability);
    }

    #[test]
    fn strength_outside_unit_interval_rejected(
        strength in prop_oneof![-1e6f64..-1e-9, (1.0f64 + 1e-9)..1e6],
        stability in 0.0f64..=1.0,
    ) {
        let result = FieldConfig::new(strength, 9.8, 5.0, stability);
        prop_assert_eq!(result, Err(ValidationError::StrengthOutOfRange(strength)));
    }

    #[test]
    fn stability_outside_unit_interval_rejected(
        strength in 0.0f64..=1.0,
        stability in prop_oneof![-1e6f64..-1e-9, (1.0f64 + 1e-9)..1e6],
    ) {
        let result = FieldConfig::new(strength, 9.8, 5.0, stability);
        prop_assert_eq!(result, Err(ValidationError::StabilityOutOfRange(stability)));
    }
}

// =============================================================================
// Force bounds and determinism
// =============================================================================

proptest! {
    #[test]
    fn force_is_bounded(
        field in any_field(),
        mass in 1e-6f64..1e6,
        t in -1e4f64..1e4,
    ) {
        let sim = Simulator::with_field(mass, field).unwrap();
        let f = sim.force_at(t);
        prop_assert!((-1.0..=1.0).contains(&f), "force {} out of bounds", f);
    }

    #[test]
    fn force_is_deterministic(
        field in any_field(),
        mass in 0.1f64..100.0,
        t in 0.0f64..100.0,
    ) {
        let mut sim = Simulator::with_field(mass, field).unwrap();
        let a = sim.calculate_force(Some(t));
        let b = sim.calculate_force(Some(t));
        prop_assert_eq!(a, b);
        prop_assert_eq!(sim.cursor().current(), 0.0);
    }

    #[test]
    fn heavier_mass_feels_less_force(
        field in any_field(),
        light in 0.1f64..10.0,
        extra in 1.0f64..100.0,
        t in 0.0f64..10.0,
    ) {
        let a = Simulator::with_field(light, field).unwrap().force_at(t);
        let b = Simulator::with_field(light + extra, field).unwrap().force_at(t);
        // Rounding can tie both at the same 4-decimal value.
        prop_assert!(b.abs() <= a.abs() + 1e-4);
    }

    #[test]
    fn cursor_readings_match_explicit_times(
        field in any_field(),
        n in 1usize..50,
    ) {
        let mut sim = Simulator::with_field(1.0, field).unwrap();
        let mut shadow = TimeCursor::new();
        for _ in 0..n {
            let expected = sim.force_at(shadow.advance());
            prop_assert_eq!(sim.calculate_force(None), expected);
        }
        prop_assert_eq!(sim.cursor(), shadow);
    }
}

// =============================================================================
// Trajectory shape
// =============================================================================

proptest! {
    #[test]
    fn trajectory_has_requested_length(
        duration in 0.0f64..100.0,
        steps in 1usize..500,
        mass in 0.1f64..50.0,
    ) {
        let sim = Simulator::new(mass).unwrap();
        let trajectory = sim.simulate_trajectory(duration, steps).unwrap();

        prop_assert_eq!(trajectory.len(), steps);
        prop_assert_eq!(trajectory.heights().len(), steps);
        prop_assert_eq!(trajectory.times()[0], 0.0);
        if steps > 1 {
            prop_assert_eq!(trajectory.times()[steps - 1], duration);
        }
        prop_assert!(trajectory.times().windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(trajectory.heights().iter().all(|h| h.is_finite()));
    }

    #[test]
    fn trajectory_is_repeatable(
        field in any_field(),
        duration in 0.1f64..20.0,
        steps in 1usize..200,
    ) {
        let sim = Simulator::with_field(2.0, field).unwrap();
        let a = sim.simulate_trajectory(duration, steps).unwrap();
        let b = sim.simulate_trajectory(duration, steps).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn euler_height_growth_is_bounded(
        field in any_field(),
        mass in 0.1f64..50.0,
        duration in 0.0f64..20.0,
        steps in 1usize..300,
    ) {
        // |a| <= 1/mass, so |v_k| <= k·dt/mass and |h_k| <= k(k+1)/2 · dt²/mass
        let sim = Simulator::with_field(mass, field).unwrap();
        let trajectory = sim.simulate_trajectory(duration, steps).unwrap();
        let dt = duration / steps as f64;
        for (k, &h) in trajectory.heights().iter().enumerate() {
            let k = (k + 1) as f64;
            let bound = k * (k + 1.0) / 2.0 * dt * dt / mass;
            prop_assert!(h.abs() <= bound + 1e-9, "h={} bound={}", h, bound);
        }
    }
}

// =============================================================================
// Optimizer heuristic
// =============================================================================

proptest! {
    #[test]
    fn optimized_strength_never_decreases(
        field in any_field(),
        target in 0.0f64..1000.0,
    ) {
        let sim = Simulator::with_field(1.0, field).unwrap();
        let optimized = sim.optimize_field(target).unwrap();

        prop_assert!(optimized.strength() >= field.strength());
        prop_assert!(optimized.strength() <= 1.0);
        prop_assert!(optimized.stability() >= 0.8);
        prop_assert!(optimized.stability() >= field.stability());
        prop_assert_eq!(optimized.frequency(), field.frequency());
        prop_assert_eq!(optimized.radius(), field.radius());
        prop_assert_eq!(*sim.field(), field);
    }

    #[test]
    fn optimized_strength_is_monotonic_in_target(
        field in any_field(),
        lower in 0.0f64..100.0,
        delta in 0.0f64..100.0,
    ) {
        let sim = Simulator::with_field(1.0, field).unwrap();
        let a = sim.optimize_field(lower).unwrap();
        let b = sim.optimize_field(lower + delta).unwrap();
        prop_assert!(b.strength() >= a.strength());
    }
}
