use glam::{Vec2, Vec3};
use web_sys as web;

#[derive(Default, Clone, Copy)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub down: bool,
}

/// What a picking ray can land on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickKind {
    PowerButton,
    Pad(usize),
}

/// A control's world-space pick volume, approximated as a sphere.
#[derive(Clone, Copy, Debug)]
pub struct PickTarget {
    pub kind: PickKind,
    pub center: Vec3,
    pub radius: f32,
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Closest target hit by the ray, if any.
pub fn nearest_pick(ray_origin: Vec3, ray_dir: Vec3, targets: &[PickTarget]) -> Option<PickKind> {
    let mut best: Option<(PickKind, f32)> = None;
    for target in targets {
        if let Some(t) = ray_sphere(ray_origin, ray_dir, target.center, target.radius) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((target.kind, t)),
            }
        }
    }
    best.map(|(kind, _)| kind)
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width() as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height() as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}
