// Host-side tests for procedural mesh construction.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod geometry {
    include!("../src/core/geometry.rs");
}

use geometry::*;

const CS: usize = 8;

fn outline_point_count(corner_segments: usize) -> usize {
    4 * (corner_segments + 1)
}

#[test]
fn outline_has_four_arcs_worth_of_points() {
    let outline = rounded_rect_outline(4.0, 3.0, 0.1, CS);
    assert_eq!(outline.len(), outline_point_count(CS));
}

#[test]
fn outline_stays_inside_the_bounding_box() {
    let (w, h, r) = (28.0, 15.0, 0.5);
    let outline = rounded_rect_outline(w, h, r, CS);
    for p in &outline {
        assert!(p.x.abs() <= w / 2.0 + 1e-4, "x out of bounds: {p:?}");
        assert!(p.y.abs() <= h / 2.0 + 1e-4, "y out of bounds: {p:?}");
    }
}

#[test]
fn outline_touches_all_four_sides() {
    let (w, h, r) = (4.0, 3.0, 0.1);
    let outline = rounded_rect_outline(w, h, r, CS);
    let max_x = outline.iter().map(|p| p.x).fold(f32::MIN, f32::max);
    let max_y = outline.iter().map(|p| p.y).fold(f32::MIN, f32::max);
    let min_x = outline.iter().map(|p| p.x).fold(f32::MAX, f32::min);
    let min_y = outline.iter().map(|p| p.y).fold(f32::MAX, f32::min);
    assert!((max_x - w / 2.0).abs() < 1e-4);
    assert!((min_x + w / 2.0).abs() < 1e-4);
    assert!((max_y - h / 2.0).abs() < 1e-4);
    assert!((min_y + h / 2.0).abs() < 1e-4);
}

#[test]
fn outline_is_counter_clockwise() {
    let outline = rounded_rect_outline(2.0, 1.0, 0.1, CS);
    // Shoelace: positive signed area means CCW
    let mut area = 0.0f32;
    for i in 0..outline.len() {
        let a = outline[i];
        let b = outline[(i + 1) % outline.len()];
        area += a.x * b.y - b.x * a.y;
    }
    assert!(area > 0.0, "outline winding is not CCW (area {area})");
}

#[test]
fn outline_normals_are_unit_length_and_outward() {
    let outline = rounded_rect_outline(4.0, 3.0, 0.1, CS);
    let normals = outline_normals(&outline);
    assert_eq!(normals.len(), outline.len());
    for (p, n) in outline.iter().zip(&normals) {
        assert!((n.length() - 1.0).abs() < 1e-4);
        // The outline is centered on the origin, so outward means
        // pointing away from it
        assert!(n.dot(*p) > 0.0, "normal {n:?} points inward at {p:?}");
    }
}

#[test]
fn extrusion_has_the_expected_topology() {
    let mesh = extrude_rounded_rect(4.0, 3.0, 0.1, 1.0, 0.3, CS);
    let n = outline_point_count(CS);
    // Two fan caps (ring + center) and three stitched bands of two
    // rings each
    assert_eq!(mesh.vertex_count(), 8 * n + 2);
    assert_eq!(mesh.triangle_count(), 8 * n);
}

#[test]
fn extrusion_indices_are_in_range() {
    let mesh = extrude_rounded_rect(2.0, 1.0, 0.1, 1.0, 0.2, CS);
    let count = mesh.vertex_count() as u32;
    for &i in &mesh.indices {
        assert!(i < count, "index {i} out of range {count}");
    }
}

#[test]
fn extrusion_normals_are_unit_length() {
    let mesh = extrude_rounded_rect(28.0, 15.0, 0.5, 1.0, 0.5, CS);
    for n in &mesh.normals {
        let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
        assert!((len - 1.0).abs() < 1e-3, "non-unit normal {n:?}");
    }
}

#[test]
fn extrusion_spans_bevel_to_depth_plus_bevel() {
    let (depth, bevel) = (1.0, 0.3);
    let mesh = extrude_rounded_rect(4.0, 3.0, 0.1, depth, bevel, CS);
    let min_z = mesh.positions.iter().map(|p| p[2]).fold(f32::MAX, f32::min);
    let max_z = mesh.positions.iter().map(|p| p[2]).fold(f32::MIN, f32::max);
    assert!((min_z + bevel).abs() < 1e-4);
    assert!((max_z - depth - bevel).abs() < 1e-4);
}

#[test]
fn beveled_caps_are_inset_from_the_body() {
    let (w, h, bevel) = (4.0, 3.0, 0.3);
    let mesh = extrude_rounded_rect(w, h, 0.1, 1.0, bevel, CS);
    for p in &mesh.positions {
        // Front cap vertices sit on the shrunk outline
        if (p[2] - 1.3).abs() < 1e-4 {
            assert!(p[0].abs() <= w / 2.0 - bevel + 1e-4);
            assert!(p[1].abs() <= h / 2.0 - bevel + 1e-4);
        }
    }
}

#[test]
fn sphere_has_expected_counts_and_radius() {
    let (radius, segments, rings) = (1.0, 32, 32);
    let mesh = uv_sphere(radius, segments, rings);
    assert_eq!(mesh.vertex_count(), (rings + 1) * segments);
    assert_eq!(mesh.triangle_count(), rings * segments * 2);
    for p in &mesh.positions {
        let len = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
        assert!((len - radius).abs() < 1e-4, "vertex off the sphere: {p:?}");
    }
}

#[test]
fn sphere_normals_match_positions() {
    let radius = 2.5;
    let mesh = uv_sphere(radius, 16, 12);
    for (p, n) in mesh.positions.iter().zip(&mesh.normals) {
        for axis in 0..3 {
            assert!((n[axis] - p[axis] / radius).abs() < 1e-4);
        }
    }
}
