//! Top-level application state: the machine, the orbit camera, the
//! command queue the event layer feeds, and the lazily built audio
//! stack. Owned values behind `Rc<RefCell<...>>` rather than
//! module-level globals, so event closures and the frame loop share
//! the same state explicitly.

use crate::audio::{self, SampleBank};
use crate::camera::OrbitCamera;
use crate::constants::*;
use crate::core::{Command, PAD_BINDINGS};
use crate::input::PointerState;
use crate::scene::Machine;
use anyhow::anyhow;
use glam::Vec3;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Progress of the one-shot lazy audio build. `Failed` is terminal:
/// a failed fetch/decode is never retried.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Ready,
    Failed,
}

#[derive(Clone)]
pub struct App {
    pub machine: Rc<RefCell<Machine>>,
    pub camera: Rc<RefCell<OrbitCamera>>,
    pub pointer: Rc<RefCell<PointerState>>,
    commands: Rc<RefCell<VecDeque<Command>>>,
    audio_ctx: web::AudioContext,
    bank: Rc<RefCell<Option<SampleBank>>>,
    load_state: Rc<RefCell<LoadState>>,
}

impl App {
    pub fn new() -> anyhow::Result<Self> {
        let audio_ctx =
            web::AudioContext::new().map_err(|e| anyhow!("AudioContext: {:?}", e))?;
        let camera = OrbitCamera::looking_from(
            Vec3::from(CAMERA_EYE),
            Vec3::ZERO,
            MAX_POLAR_ANGLE,
            CAMERA_FOVY_RADIANS,
            CAMERA_NEAR,
            CAMERA_FAR,
        );
        Ok(Self {
            machine: Rc::new(RefCell::new(Machine::new())),
            camera: Rc::new(RefCell::new(camera)),
            pointer: Rc::new(RefCell::new(PointerState::default())),
            commands: Rc::new(RefCell::new(VecDeque::new())),
            audio_ctx,
            bank: Rc::new(RefCell::new(None)),
            load_state: Rc::new(RefCell::new(LoadState::Idle)),
        })
    }

    /// Queue a command from an event handler; applied on the next frame.
    pub fn dispatch(&self, command: Command) {
        self.commands.borrow_mut().push_back(command);
    }

    pub fn drain_commands(&self, now_ms: f64) {
        loop {
            let command = self.commands.borrow_mut().pop_front();
            match command {
                Some(Command::PressPad(index)) => self.press_pad(index, now_ms),
                Some(Command::TogglePower) => self.toggle_power(),
                None => break,
            }
        }
    }

    fn press_pad(&self, index: usize, now_ms: f64) {
        let pressed = self.machine.borrow_mut().state.press_pad(index, now_ms);
        if !pressed {
            return;
        }
        // Before the bank is ready the press stays visual-only
        if let Some(bank) = self.bank.borrow().as_ref() {
            bank.play(PAD_BINDINGS[index].sample);
        }
    }

    fn toggle_power(&self) {
        if self.machine.borrow().state.is_on() {
            _ = self.audio_ctx.suspend();
            self.machine.borrow_mut().state.toggle();
            log::info!("[power] off");
            return;
        }
        let load_state = *self.load_state.borrow();
        match load_state {
            LoadState::Ready => {
                _ = self.audio_ctx.resume();
                self.machine.borrow_mut().state.toggle();
                log::info!("[power] on");
            }
            LoadState::Idle => {
                *self.load_state.borrow_mut() = LoadState::Loading;
                self.spawn_audio_init();
            }
            // Loading: the pending init flips power when it lands.
            // Failed: power-on silently does nothing.
            LoadState::Loading | LoadState::Failed => {}
        }
    }

    fn spawn_audio_init(&self) {
        let app = self.clone();
        spawn_local(async move {
            match audio::init_audio(&app.audio_ctx).await {
                Ok(bank) => {
                    *app.bank.borrow_mut() = Some(bank);
                    *app.load_state.borrow_mut() = LoadState::Ready;
                    _ = app.audio_ctx.resume();
                    app.machine.borrow_mut().state.toggle();
                    log::info!("[power] on");
                }
                Err(e) => {
                    *app.load_state.borrow_mut() = LoadState::Failed;
                    log::error!("[audio] init failed: {:?}", e);
                }
            }
        });
    }
}
