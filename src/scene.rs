//! Scene assembly: the machine's rigid mesh hierarchy, and the per-frame
//! mapping from pure state onto instance transforms and colors.

use crate::constants::*;
use crate::core::{
    self, extrude_rounded_rect, pad_grid_offset, uv_sphere, MachineState, MeshData, Surface,
    PAD_COUNT,
};
use crate::input::{PickKind, PickTarget};
use glam::{Mat4, Vec3};

pub type MeshId = usize;

pub const MESH_HOUSING: MeshId = 0;
pub const MESH_LEFT_RECESS: MeshId = 1;
pub const MESH_RIGHT_RECESS: MeshId = 2;
pub const MESH_PAD: MeshId = 3;
pub const MESH_POWER_BUTTON: MeshId = 4;
pub const MESH_MONITOR: MeshId = 5;

/// Build the six unique meshes, indexed by the `MESH_*` ids.
pub fn build_meshes() -> Vec<MeshData> {
    vec![
        extrude_rounded_rect(
            HOUSING_WIDTH,
            HOUSING_HEIGHT,
            HOUSING_RADIUS,
            HOUSING_DEPTH,
            HOUSING_BEVEL,
            CORNER_SEGMENTS,
        ),
        extrude_rounded_rect(
            LEFT_RECESS_WIDTH,
            LEFT_RECESS_HEIGHT,
            RECESS_RADIUS,
            HOUSING_DEPTH,
            RECESS_BEVEL,
            CORNER_SEGMENTS,
        ),
        extrude_rounded_rect(
            RIGHT_RECESS_WIDTH,
            RIGHT_RECESS_HEIGHT,
            RECESS_RADIUS,
            HOUSING_DEPTH,
            RECESS_BEVEL,
            CORNER_SEGMENTS,
        ),
        extrude_rounded_rect(
            PAD_WIDTH,
            PAD_HEIGHT,
            PAD_RADIUS,
            PAD_DEPTH,
            PAD_BEVEL,
            CORNER_SEGMENTS,
        ),
        extrude_rounded_rect(
            POWER_BUTTON_WIDTH,
            POWER_BUTTON_HEIGHT,
            POWER_BUTTON_RADIUS,
            POWER_BUTTON_DEPTH,
            POWER_BUTTON_BEVEL,
            CORNER_SEGMENTS,
        ),
        uv_sphere(MONITOR_RADIUS, SPHERE_SEGMENTS, SPHERE_RINGS),
    ]
}

/// One renderable thing: a mesh with a model transform and a color.
#[derive(Clone, Copy)]
pub struct Instance {
    pub mesh: MeshId,
    pub model: Mat4,
    pub color: [f32; 3],
}

/// Mutually exclusive on/off appearances for a toggleable control.
#[derive(Clone, Copy)]
struct MaterialPair {
    on: [f32; 3],
    off: [f32; 3],
}

impl MaterialPair {
    fn pick(&self, surface: Surface) -> [f32; 3] {
        match surface {
            Surface::On => self.on,
            Surface::Off => self.off,
        }
    }
}

/// The composite assembly: housing, recesses, power controls, and the
/// 4x3 pad grid, positioned as one rigid hierarchy.
pub struct Machine {
    pub state: MachineState,
    instances: Vec<Instance>,
    pad_slots: [usize; PAD_COUNT],
    power_button_slot: usize,
    monitor_slot: usize,
    pad_materials: MaterialPair,
    monitor_materials: MaterialPair,
    root: Mat4,
}

impl Machine {
    pub fn new() -> Self {
        // The panel is modeled face-on and then laid flat, facing the
        // raised camera.
        let root = Mat4::from_rotation_x(std::f32::consts::FRAC_PI_2);
        let child = |offset: [f32; 3]| root * Mat4::from_translation(Vec3::from(offset));

        let mut instances = vec![
            Instance {
                mesh: MESH_HOUSING,
                model: root,
                color: COLOR_HOUSING,
            },
            Instance {
                mesh: MESH_LEFT_RECESS,
                model: child(LEFT_RECESS_OFFSET),
                color: COLOR_RECESS,
            },
            Instance {
                mesh: MESH_RIGHT_RECESS,
                model: child(RIGHT_RECESS_OFFSET),
                color: COLOR_RECESS,
            },
        ];

        let monitor_slot = instances.len();
        instances.push(Instance {
            mesh: MESH_MONITOR,
            model: child(MONITOR_OFFSET),
            color: COLOR_MONITOR_OFF,
        });

        let power_button_slot = instances.len();
        instances.push(Instance {
            mesh: MESH_POWER_BUTTON,
            model: child(POWER_BUTTON_OFFSET)
                * Mat4::from_rotation_y(core::POWER_BUTTON_TILT),
            color: COLOR_POWER_BUTTON,
        });

        let mut pad_slots = [0usize; PAD_COUNT];
        for (i, slot) in pad_slots.iter_mut().enumerate() {
            let (x, y) = pad_grid_offset(i);
            *slot = instances.len();
            instances.push(Instance {
                mesh: MESH_PAD,
                model: child([x, y, PAD_OFFSET_Z]),
                color: COLOR_PAD_OFF,
            });
        }

        Self {
            state: MachineState::new(),
            instances,
            pad_slots,
            power_button_slot,
            monitor_slot,
            pad_materials: MaterialPair {
                on: COLOR_PAD_ON,
                off: COLOR_PAD_OFF,
            },
            monitor_materials: MaterialPair {
                on: COLOR_MONITOR_ON,
                off: COLOR_MONITOR_OFF,
            },
            root,
        }
    }

    /// Re-derive instance colors and transforms from the pure state.
    /// Invariant: after this call every applied material matches its
    /// component's toggle state.
    pub fn sync(&mut self) {
        for (i, slot) in self.pad_slots.iter().enumerate() {
            self.instances[*slot].color = self.pad_materials.pick(self.state.pad_surface(i));
        }
        self.instances[self.monitor_slot].color = self
            .monitor_materials
            .pick(self.state.power_monitor.surface());
        self.instances[self.power_button_slot].model = self.root
            * Mat4::from_translation(Vec3::from(POWER_BUTTON_OFFSET))
            * Mat4::from_rotation_y(self.state.power_button.rotation_y);
    }

    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    /// World-space pick volumes for the pointer ray: the power button
    /// plus every pad.
    pub fn pick_targets(&self) -> Vec<PickTarget> {
        let mut targets = Vec::with_capacity(PAD_COUNT + 1);
        targets.push(PickTarget {
            kind: PickKind::PowerButton,
            center: self.root.transform_point3(Vec3::from(POWER_BUTTON_OFFSET)),
            radius: POWER_PICK_RADIUS,
        });
        for i in 0..PAD_COUNT {
            let (x, y) = pad_grid_offset(i);
            targets.push(PickTarget {
                kind: PickKind::Pad(i),
                center: self.root.transform_point3(Vec3::new(x, y, PAD_OFFSET_Z)),
                radius: PAD_PICK_RADIUS,
            });
        }
        targets
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}
