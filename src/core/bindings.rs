// The binding table between physical keys, pads, and sample files,
// plus the commands the event layer emits from raw input.

/// A discrete input command consumed by the app each frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    PressPad(usize),
    TogglePower,
}

#[derive(Clone, Copy, Debug)]
pub struct PadBinding {
    pub key: &'static str,
    pub sample: &'static str,
}

/// One declared key -> sample mapping in physical layout order
/// (rows `q w e r` / `a s d f` / `z x c v`). Pad index equals position
/// in this table everywhere in the crate.
pub const PAD_BINDINGS: [PadBinding; 12] = [
    PadBinding { key: "q", sample: "drum-fx-01.mp3" },
    PadBinding { key: "w", sample: "drum-fx-02.mp3" },
    PadBinding { key: "e", sample: "drum-hh-01.mp3" },
    PadBinding { key: "r", sample: "drum-hh-02.mp3" },
    PadBinding { key: "a", sample: "drum-kd-01.mp3" },
    PadBinding { key: "s", sample: "drum-kd-02.mp3" },
    PadBinding { key: "d", sample: "drum-oh-01.mp3" },
    PadBinding { key: "f", sample: "drum-oh-02.mp3" },
    PadBinding { key: "z", sample: "drum-perc-01.mp3" },
    PadBinding { key: "x", sample: "drum-perc-02.mp3" },
    PadBinding { key: "c", sample: "drum-sd-01.mp3" },
    PadBinding { key: "v", sample: "drum-sd-02.mp3" },
];

pub const IMPULSE_RESPONSE_FILE: &str = "ir-hall.mp3";

/// Resolve a literal `event.key()` value against the binding table.
pub fn command_for_key(key: &str) -> Option<Command> {
    PAD_BINDINGS
        .iter()
        .position(|b| b.key == key)
        .map(Command::PressPad)
}

/// Pad center offset on the panel, relative to the machine origin.
///
/// Columns step by `index % 4`, rows by `index % 3`; 4 and 3 are
/// coprime, so the 12 indices land on all 12 distinct grid cells.
pub fn pad_grid_offset(index: usize) -> (f32, f32) {
    let col = (index % 4) as f32;
    let row = (index % 3) as f32;
    (col * 5.0 - 5.5, row * 4.0 - 4.0)
}
