// Host-side tests for the key/pad/sample binding table.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod bindings {
    include!("../src/core/bindings.rs");
}

use bindings::*;

#[test]
fn binding_table_has_twelve_unique_keys() {
    assert_eq!(PAD_BINDINGS.len(), 12);
    for (i, a) in PAD_BINDINGS.iter().enumerate() {
        for b in PAD_BINDINGS.iter().skip(i + 1) {
            assert_ne!(a.key, b.key, "duplicate key {}", a.key);
        }
    }
}

#[test]
fn binding_table_has_unique_samples() {
    for (i, a) in PAD_BINDINGS.iter().enumerate() {
        for b in PAD_BINDINGS.iter().skip(i + 1) {
            assert_ne!(a.sample, b.sample, "duplicate sample {}", a.sample);
        }
    }
}

#[test]
fn binding_table_follows_physical_layout_order() {
    let layout: Vec<&str> = "qwerasdfzxcv".split("").filter(|s| !s.is_empty()).collect();
    for (binding, key) in PAD_BINDINGS.iter().zip(&layout) {
        assert_eq!(binding.key, *key);
    }
}

#[test]
fn every_key_resolves_to_its_own_pad() {
    for (i, binding) in PAD_BINDINGS.iter().enumerate() {
        assert_eq!(command_for_key(binding.key), Some(Command::PressPad(i)));
    }
}

#[test]
fn unbound_keys_resolve_to_nothing() {
    for key in ["t", "y", "b", "1", " ", "Enter", "Q", ""] {
        assert_eq!(command_for_key(key), None, "key {key:?} should be unbound");
    }
}

#[test]
fn impulse_response_is_not_a_pad_sample() {
    for binding in PAD_BINDINGS.iter() {
        assert_ne!(binding.sample, IMPULSE_RESPONSE_FILE);
    }
}

#[test]
fn grid_offsets_cover_all_twelve_cells() {
    let mut seen = Vec::new();
    for i in 0..12 {
        let cell = pad_grid_offset(i);
        assert!(
            !seen.contains(&(cell.0 as i32, cell.1 as i32)),
            "pad {i} overlaps another pad at {cell:?}"
        );
        seen.push((cell.0 as i32, cell.1 as i32));
    }
    assert_eq!(seen.len(), 12);
}

#[test]
fn grid_offsets_form_a_4x3_lattice() {
    let xs = [-5.5, -0.5, 4.5, 9.5];
    let ys = [-4.0, 0.0, 4.0];
    for i in 0..12 {
        let (x, y) = pad_grid_offset(i);
        assert!(xs.contains(&x), "unexpected column {x} for pad {i}");
        assert!(ys.contains(&y), "unexpected row {y} for pad {i}");
    }
}
