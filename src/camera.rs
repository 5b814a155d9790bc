// Orbit camera around the machine, with the polar angle clamped near
// the +Y pole so the panel is always viewed from above.

use glam::{Mat4, Vec3, Vec4};

// Keep a little margin off the exact pole to avoid a degenerate up vector.
const MIN_POLAR_ANGLE: f32 = 0.05;

#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f32,
    pub yaw: f32,
    pub polar: f32,
    pub max_polar: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl OrbitCamera {
    /// Build from an eye/target pose; radius, yaw and polar angle are
    /// derived from the offset.
    pub fn looking_from(
        eye: Vec3,
        target: Vec3,
        max_polar: f32,
        fovy_radians: f32,
        znear: f32,
        zfar: f32,
    ) -> Self {
        let offset = eye - target;
        let radius = offset.length();
        let polar = (offset.y / radius).clamp(-1.0, 1.0).acos();
        let yaw = offset.x.atan2(offset.z);
        Self {
            target,
            radius,
            yaw,
            polar: polar.clamp(MIN_POLAR_ANGLE, max_polar),
            max_polar,
            fovy_radians,
            znear,
            zfar,
        }
    }

    pub fn eye(&self) -> Vec3 {
        let dir = Vec3::new(
            self.polar.sin() * self.yaw.sin(),
            self.polar.cos(),
            self.polar.sin() * self.yaw.cos(),
        );
        self.target + dir * self.radius
    }

    /// Apply a pointer-drag delta. Polar is clamped; yaw wraps freely.
    pub fn orbit(&mut self, d_yaw: f32, d_polar: f32) {
        self.yaw += d_yaw;
        self.polar = (self.polar + d_polar).clamp(MIN_POLAR_ANGLE, self.max_polar);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, aspect, self.znear, self.zfar)
    }

    /// World-space picking ray through a backing-store pixel.
    pub fn screen_to_world_ray(
        &self,
        width: f32,
        height: f32,
        sx: f32,
        sy: f32,
    ) -> (Vec3, Vec3) {
        let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
        let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
        let aspect = width / height.max(1.0);
        let inv = (self.projection_matrix(aspect) * self.view_matrix()).inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let far: Vec3 = p_far.truncate() / p_far.w;
        let ro = self.eye();
        let rd = (far - ro).normalize();
        (ro, rd)
    }
}
