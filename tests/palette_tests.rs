// Host-side tests for theme palette discovery.

use orbit_cursor::constants::{FALLBACK_PALETTE, THEME_COLOR_SLOTS};
use orbit_cursor::core::Palette;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

fn theme(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn empty_theme_falls_back_to_defaults() {
    let palette = Palette::from_theme(|_| None);
    assert_eq!(palette.len(), 6);
    assert_eq!(palette.colors(), FALLBACK_PALETTE.map(String::from).as_slice());
    assert_eq!(palette, Palette::default());
}

#[test]
fn blank_values_count_as_missing() {
    // getPropertyValue yields "" for unset custom properties
    let palette = Palette::from_theme(|_| Some("   ".to_string()));
    assert_eq!(palette, Palette::fallback());
}

#[test]
fn theme_values_are_trimmed_and_kept_in_slot_order() {
    let t = theme(&[
        ("--gis-accent", " #00ff00 "),
        ("--dataviz-accent", "#ff0000"),
        ("--hci-accent", ""),
        ("--sustainability-accent", "\trgb(1, 2, 3)\n"),
    ]);
    let palette = Palette::from_theme(|slot| t.get(slot).cloned());
    assert_eq!(palette.colors(), &["#ff0000", "#00ff00", "rgb(1, 2, 3)"]);
}

#[test]
fn every_slot_is_consulted() {
    let mut seen = Vec::new();
    let _ = Palette::from_theme(|slot| {
        seen.push(slot.to_string());
        None
    });
    assert_eq!(seen, THEME_COLOR_SLOTS.map(String::from));
}

#[test]
fn reading_an_unchanged_theme_twice_is_stable() {
    let t = theme(&[("--hci-accent", "#abcdef"), ("--gis-accent", "#123456")]);
    let a = Palette::from_theme(|slot| t.get(slot).cloned());
    let b = Palette::from_theme(|slot| t.get(slot).cloned());
    assert_eq!(a, b);
}

#[test]
fn pick_returns_palette_members() {
    let palette = Palette::fallback();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let c = palette.pick(&mut rng);
        assert!(palette.colors().iter().any(|p| p == c));
    }
}

#[test]
fn pick_from_single_color_palette() {
    let palette = Palette::from_theme(|slot| (slot == "--hci-accent").then(|| "#111".to_string()));
    let mut rng = StdRng::seed_from_u64(3);
    assert_eq!(palette.len(), 1);
    assert!(!palette.is_empty());
    assert_eq!(palette.pick(&mut rng), "#111");
}
