use gapminder_scenes::core::{LinearScale, LogScale, SqrtScale};
use gapminder_scenes::scenes::{RADIUS_RANGE_PX, SceneCursor};
use proptest::prelude::*;

proptest! {
    #[test]
    fn linear_scale_round_trip_property(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let domain_end = domain_start + domain_span;
        let value = domain_start + value_factor * domain_span;
        let scale = LinearScale::new((domain_start, domain_end), (70.0, 820.0)).expect("valid scale");

        let px = scale.domain_to_pixel(value);
        let recovered = scale.pixel_to_domain(px);

        prop_assert!((recovered - value).abs() <= 1e-6 * domain_span.max(1.0));
    }

    #[test]
    fn radius_grows_with_population(
        pop_max in 1.0f64..2_000_000_000.0,
        lower_factor in 0.0f64..1.0,
        upper_factor in 0.0f64..1.0
    ) {
        let scale = SqrtScale::new((0.0, pop_max), RADIUS_RANGE_PX).expect("valid scale");
        let (low, high) = if lower_factor <= upper_factor {
            (lower_factor, upper_factor)
        } else {
            (upper_factor, lower_factor)
        };

        let small = scale.domain_to_pixel(low * pop_max);
        let large = scale.domain_to_pixel(high * pop_max);
        prop_assert!(small <= large);
        prop_assert!(small >= RADIUS_RANGE_PX.0 - 1e-9);
        prop_assert!(large <= RADIUS_RANGE_PX.1 + 1e-9);
    }

    #[test]
    fn log_scale_is_monotonic_inside_domain(
        gdp_max in 200.0f64..200_000.0,
        a in 0.0f64..1.0,
        b in 0.0f64..1.0
    ) {
        let scale = LogScale::new((100.0, gdp_max), (70.0, 820.0)).expect("valid scale").with_clamp(true);
        let lhs = 100.0 + a * (gdp_max - 100.0);
        let rhs = 100.0 + b * (gdp_max - 100.0);

        let (px_l, px_r) = (scale.domain_to_pixel(lhs), scale.domain_to_pixel(rhs));
        prop_assert!(px_l.is_finite() && px_r.is_finite());
        if lhs < rhs {
            prop_assert!(px_l <= px_r);
        }
    }

    #[test]
    fn cursor_returns_home_after_count_advances(count in 1usize..16, steps in 0usize..64) {
        let mut cursor = SceneCursor::new(count).expect("cursor");
        for step in 1..=steps {
            prop_assert_eq!(cursor.advance(), step % count);
        }
        prop_assert_eq!(cursor.current(), steps % count);

        for _ in 0..count {
            cursor.advance();
        }
        prop_assert_eq!(cursor.current(), steps % count);
    }
}
