// Pure drum-machine state: power, pads, and the front-panel indicators.
//
// No platform types here; the scene layer maps this state onto mesh
// transforms and material colors once per frame, and host-side tests
// drive it directly.

pub const PAD_COUNT: usize = 12;

/// How long a pressed pad stays lit, in milliseconds.
pub const PAD_LIT_MS: f64 = 200.0;

/// Resting tilt of the power button around its Y axis.
pub const POWER_BUTTON_TILT: f32 = std::f32::consts::PI / 24.0;

/// Which of a component's two materials is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Surface {
    Off,
    On,
}

/// A single percussive trigger pad.
///
/// A press schedules one revert deadline; pressing again while lit
/// replaces the deadline, so the highlight restarts instead of racing
/// an older timer.
#[derive(Clone, Copy, Debug, Default)]
pub struct PadState {
    lit_until_ms: Option<f64>,
}

impl PadState {
    pub fn surface(&self) -> Surface {
        if self.lit_until_ms.is_some() {
            Surface::On
        } else {
            Surface::Off
        }
    }

    fn press(&mut self, now_ms: f64) {
        self.lit_until_ms = Some(now_ms + PAD_LIT_MS);
    }

    fn tick(&mut self, now_ms: f64) {
        if let Some(deadline) = self.lit_until_ms {
            if now_ms >= deadline {
                self.lit_until_ms = None;
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct PowerButtonState {
    pub rotation_y: f32,
}

impl PowerButtonState {
    fn new() -> Self {
        Self {
            rotation_y: POWER_BUTTON_TILT,
        }
    }

    fn toggle(&mut self) {
        self.rotation_y = -self.rotation_y;
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PowerMonitorState {
    is_on: bool,
}

impl PowerMonitorState {
    pub fn surface(&self) -> Surface {
        if self.is_on {
            Surface::On
        } else {
            Surface::Off
        }
    }

    fn toggle(&mut self) {
        self.is_on = !self.is_on;
    }
}

/// The composite machine: one power flag cascading to the button and
/// monitor, and twelve pads gated on that flag.
pub struct MachineState {
    is_on: bool,
    pads: [PadState; PAD_COUNT],
    pub power_button: PowerButtonState,
    pub power_monitor: PowerMonitorState,
}

impl MachineState {
    pub fn new() -> Self {
        Self {
            is_on: false,
            pads: [PadState::default(); PAD_COUNT],
            power_button: PowerButtonState::new(),
            power_monitor: PowerMonitorState::default(),
        }
    }

    pub fn is_on(&self) -> bool {
        self.is_on
    }

    pub fn pad_surface(&self, index: usize) -> Surface {
        self.pads[index].surface()
    }

    /// Flip power and cascade to the button tilt and the monitor lamp.
    pub fn toggle(&mut self) {
        self.is_on = !self.is_on;
        self.power_button.toggle();
        self.power_monitor.toggle();
    }

    /// Press a pad. Returns whether the press took effect; while the
    /// machine is off this is a no-op.
    pub fn press_pad(&mut self, index: usize, now_ms: f64) -> bool {
        if !self.is_on {
            return false;
        }
        match self.pads.get_mut(index) {
            Some(pad) => {
                pad.press(now_ms);
                true
            }
            None => false,
        }
    }

    /// Expire due pad highlights.
    pub fn tick(&mut self, now_ms: f64) {
        for pad in &mut self.pads {
            pad.tick(now_ms);
        }
    }
}

impl Default for MachineState {
    fn default() -> Self {
        Self::new()
    }
}
