// Procedural mesh construction for the machine's physical controls.
//
// Everything on the panel is a rounded-rectangle outline extruded with
// a bevel; the power monitor is a UV sphere. Outputs are CPU-side
// buffers the renderer uploads once at startup.
//
// Preconditions (not checked): `radius` < half of both width and
// height, and outlines are convex. Degenerate inputs produce garbage
// geometry, not errors.

use glam::{Vec2, Vec3};

pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Closed rounded-rectangle outline: four quarter-circle arcs joined by
/// implicit straight segments, counter-clockwise, starting on the
/// bottom-right corner. `corner_segments + 1` points per arc.
pub fn rounded_rect_outline(
    width: f32,
    height: f32,
    radius: f32,
    corner_segments: usize,
) -> Vec<Vec2> {
    use std::f32::consts::{FRAC_PI_2, PI};

    let cx = width / 2.0 - radius;
    let cy = height / 2.0 - radius;
    let corners = [
        (cx, -cy, -FRAC_PI_2),
        (cx, cy, 0.0),
        (-cx, cy, FRAC_PI_2),
        (-cx, -cy, PI),
    ];

    let mut points = Vec::with_capacity(4 * (corner_segments + 1));
    for &(x, y, start) in &corners {
        for i in 0..=corner_segments {
            let a = start + FRAC_PI_2 * i as f32 / corner_segments as f32;
            points.push(Vec2::new(x + radius * a.cos(), y + radius * a.sin()));
        }
    }
    points
}

/// Per-point outward normals of a convex counter-clockwise outline,
/// averaged over the two adjacent edges.
pub fn outline_normals(points: &[Vec2]) -> Vec<Vec2> {
    let n = points.len();
    let mut normals = Vec::with_capacity(n);
    for i in 0..n {
        let prev = points[(i + n - 1) % n];
        let next = points[(i + 1) % n];
        let e0 = points[i] - prev;
        let e1 = next - points[i];
        // Edge normal of a CCW outline is the edge direction rotated -90 deg
        let n0 = Vec2::new(e0.y, -e0.x);
        let n1 = Vec2::new(e1.y, -e1.x);
        normals.push((n0 + n1).normalize());
    }
    normals
}

/// Extrude a rounded rectangle along +Z with a beveled rim on both
/// caps. The body wall spans `z in [0, depth]`; each bevel climbs
/// outward by `bevel` while shrinking the cap outline by the same
/// amount, a 45-degree rim profile.
pub fn extrude_rounded_rect(
    width: f32,
    height: f32,
    radius: f32,
    depth: f32,
    bevel: f32,
    corner_segments: usize,
) -> MeshData {
    let outer = rounded_rect_outline(width, height, radius, corner_segments);
    let cap_radius = (radius - bevel).max(1e-3);
    let cap = rounded_rect_outline(
        width - 2.0 * bevel,
        height - 2.0 * bevel,
        cap_radius,
        corner_segments,
    );
    let rim = outline_normals(&outer);

    let mut mesh = MeshData {
        positions: Vec::new(),
        normals: Vec::new(),
        indices: Vec::new(),
    };

    cap_fan(&mut mesh, &cap, -bevel, false);
    let back_in = push_ring(&mut mesh, &cap, -bevel, &rim, -1.0);
    let back_out = push_ring(&mut mesh, &outer, 0.0, &rim, -1.0);
    stitch(&mut mesh, back_in, back_out, outer.len());

    let wall_lo = push_ring(&mut mesh, &outer, 0.0, &rim, 0.0);
    let wall_hi = push_ring(&mut mesh, &outer, depth, &rim, 0.0);
    stitch(&mut mesh, wall_lo, wall_hi, outer.len());

    let front_out = push_ring(&mut mesh, &outer, depth, &rim, 1.0);
    let front_in = push_ring(&mut mesh, &cap, depth + bevel, &rim, 1.0);
    stitch(&mut mesh, front_out, front_in, outer.len());

    cap_fan(&mut mesh, &cap, depth + bevel, true);
    mesh
}

/// UV sphere centered on the origin. Pole rows are degenerate rings,
/// which keeps the stitching uniform.
pub fn uv_sphere(radius: f32, segments: usize, rings: usize) -> MeshData {
    use std::f32::consts::PI;

    let mut mesh = MeshData {
        positions: Vec::new(),
        normals: Vec::new(),
        indices: Vec::new(),
    };

    for ring in 0..=rings {
        let theta = PI * ring as f32 / rings as f32;
        for seg in 0..segments {
            let phi = 2.0 * PI * seg as f32 / segments as f32;
            let n = Vec3::new(
                theta.sin() * phi.cos(),
                theta.cos(),
                theta.sin() * phi.sin(),
            );
            mesh.positions.push((n * radius).to_array());
            mesh.normals.push(n.to_array());
        }
    }

    for ring in 0..rings {
        let a = ring * segments;
        let b = (ring + 1) * segments;
        for seg in 0..segments {
            let next = (seg + 1) % segments;
            mesh.indices.extend_from_slice(&[
                (a + seg) as u32,
                (a + next) as u32,
                (b + next) as u32,
            ]);
            mesh.indices.extend_from_slice(&[
                (a + seg) as u32,
                (b + next) as u32,
                (b + seg) as u32,
            ]);
        }
    }
    mesh
}

// One row of extrusion vertices at height `z`. `slope` tilts the
// outward rim normal into Z: -1 for the back bevel, 0 for the wall,
// +1 for the front bevel.
fn push_ring(mesh: &mut MeshData, outline: &[Vec2], z: f32, rim: &[Vec2], slope: f32) -> u32 {
    let start = mesh.positions.len() as u32;
    for (p, n2) in outline.iter().zip(rim) {
        mesh.positions.push([p.x, p.y, z]);
        let n = Vec3::new(n2.x, n2.y, slope).normalize();
        mesh.normals.push(n.to_array());
    }
    start
}

// Quad-stitch two same-length rings, outward winding for a CCW outline
// with ring `b` in front of ring `a`.
fn stitch(mesh: &mut MeshData, a: u32, b: u32, count: usize) {
    for i in 0..count as u32 {
        let j = (i + 1) % count as u32;
        mesh.indices.extend_from_slice(&[a + i, a + j, b + j]);
        mesh.indices.extend_from_slice(&[a + i, b + j, b + i]);
    }
}

// Flat cap triangulated as a fan around the outline centroid.
fn cap_fan(mesh: &mut MeshData, outline: &[Vec2], z: f32, front: bool) {
    let start = mesh.positions.len() as u32;
    let normal = [0.0, 0.0, if front { 1.0 } else { -1.0 }];
    let centroid = outline.iter().copied().sum::<Vec2>() / outline.len() as f32;
    mesh.positions.push([centroid.x, centroid.y, z]);
    mesh.normals.push(normal);
    for p in outline {
        mesh.positions.push([p.x, p.y, z]);
        mesh.normals.push(normal);
    }
    let count = outline.len() as u32;
    for i in 0..count {
        let j = (i + 1) % count;
        if front {
            mesh.indices
                .extend_from_slice(&[start, start + 1 + i, start + 1 + j]);
        } else {
            mesh.indices
                .extend_from_slice(&[start, start + 1 + j, start + 1 + i]);
        }
    }
}
