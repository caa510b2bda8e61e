// Host-side tests for constants and their mathematical relationships.

use orbit_cursor::constants::*;
use orbit_cursor::core::CursorConfig;

#[test]
#[allow(clippy::assertions_on_constants)]
fn ease_factors_are_proper_fractions() {
    for ease in [RADIUS_EASE, FOLLOW_EASE, SIZE_EASE] {
        assert!(ease > 0.0 && ease < 1.0, "ease {ease} would overshoot or stall");
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ranges_are_ordered() {
    assert!(RADIUS_SCALE_MAX > RADIUS_SCALE_MIN);
    assert!(RADIUS_SCALE_MIN > 0.0);
    assert!(SPEED_MAX > SPEED_MIN && SPEED_MIN > 0.0);
    assert!(OUTER_SIZE_MAX > OUTER_SIZE_MIN);
    assert!(INNER_SIZE_MAX > INNER_SIZE_MIN);
    assert!(INNER_ORBIT_FACTOR_MAX > INNER_ORBIT_FACTOR_MIN);
    assert!(INNER_ORBIT_FACTOR_MAX < 1.0);
    assert!(INNER_WOBBLE_MAX > INNER_WOBBLE_MIN);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn opacity_values_are_valid() {
    for a in [OUTER_ALPHA, INNER_ALPHA] {
        assert!((0.0..=1.0).contains(&a));
    }
    assert!((0.0..=1.0).contains(&LINE_ALPHA));
    assert!(LINE_WIDTH > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reroll_threshold_is_reachable() {
    // the size gap shrinks geometrically, so any positive epsilon is hit
    assert!(SIZE_REROLL_EPSILON > 0.0);
    assert!(SIZE_REROLL_EPSILON < OUTER_SIZE_MAX - OUTER_SIZE_MIN);
}

#[test]
fn theme_slots_and_fallback_are_populated() {
    assert_eq!(THEME_COLOR_SLOTS.len(), FALLBACK_PALETTE.len());
    assert!(THEME_COLOR_SLOTS.iter().all(|s| s.starts_with("--")));
    assert!(FALLBACK_PALETTE.iter().all(|c| c.starts_with('#')));
}

#[test]
fn default_config_mirrors_constants() {
    let cfg = CursorConfig::default();
    assert_eq!(cfg.quantity, DEFAULT_QUANTITY);
    assert_eq!(cfg.inner_count, DEFAULT_INNER_COUNT);
    assert_eq!(cfg.base_radius, BASE_RADIUS);
    assert_eq!(cfg.outer_size.max, OUTER_SIZE_MAX);
    assert_eq!(cfg.inner_size.min, INNER_SIZE_MIN);
    assert_eq!(cfg.line_alpha, LINE_ALPHA);
}

#[test]
fn loading_ready_state_matches_dom_string() {
    assert_eq!(LOADING_READY_STATE, "loading");
}
