//! WebAudio: asset fetch/decode, the fixed routing graph, and one-shot
//! sample playback.
//!
//! Graph shape: every sample feeds the compressor; the compressor feeds
//! the destination directly (dry) and a hall convolution whose output
//! is blended in at fixed gain (wet). Any fetch or decode failure
//! aborts the whole build, leaving no partial audio path behind.

use crate::core::{IMPULSE_RESPONSE_FILE, PAD_BINDINGS};
use anyhow::{anyhow, bail, Result};
use std::collections::HashMap;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Wet-path blend into the destination.
pub const REVERB_GAIN: f32 = 0.25;

const SOUND_PATH: &str = "/assets/sounds";

/// Fetch one audio asset by file name and decode it into an immutable
/// buffer. Non-2xx responses and undecodable payloads are errors.
pub async fn fetch_audio_buffer(
    ctx: &web::BaseAudioContext,
    file_name: &str,
) -> Result<web::AudioBuffer> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(&format!("{SOUND_PATH}/{file_name}")))
        .await
        .map_err(|e| anyhow!("fetch {file_name}: {:?}", e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow!("fetch {file_name}: {:?}", e))?;
    if !resp.ok() {
        bail!("fetch {file_name}: status {}", resp.status());
    }
    let data = JsFuture::from(
        resp.array_buffer()
            .map_err(|e| anyhow!("read {file_name}: {:?}", e))?,
    )
    .await
    .map_err(|e| anyhow!("read {file_name}: {:?}", e))?;
    let data: js_sys::ArrayBuffer = data
        .dyn_into()
        .map_err(|e| anyhow!("read {file_name}: {:?}", e))?;
    let decoded = JsFuture::from(
        ctx.decode_audio_data(&data)
            .map_err(|e| anyhow!("decode {file_name}: {:?}", e))?,
    )
    .await
    .map_err(|e| anyhow!("decode {file_name}: {:?}", e))?;
    decoded
        .dyn_into::<web::AudioBuffer>()
        .map_err(|e| anyhow!("decode {file_name}: {:?}", e))
}

fn create_gain(ctx: &web::BaseAudioContext, value: f32, label: &str) -> Result<web::GainNode> {
    match web::GainNode::new(ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(anyhow!("{label} GainNode"))
        }
    }
}

/// The fixed signal chain all instruments connect into.
pub struct MainBus {
    compressor: web::DynamicsCompressorNode,
}

impl MainBus {
    /// Single entry point for instrument outputs.
    pub fn entry(&self) -> web::AudioNode {
        self.compressor.clone().into()
    }
}

/// Build the dry/wet routing graph. Fails as a whole if the impulse
/// response cannot be fetched or decoded.
pub async fn build_main_bus(ctx: &web::BaseAudioContext) -> Result<MainBus> {
    let compressor = web::DynamicsCompressorNode::new(ctx)
        .map_err(|e| anyhow!("DynamicsCompressorNode: {:?}", e))?;
    let ir = fetch_audio_buffer(ctx, IMPULSE_RESPONSE_FILE).await?;
    let convolver =
        web::ConvolverNode::new(ctx).map_err(|e| anyhow!("ConvolverNode: {:?}", e))?;
    convolver.set_buffer(Some(&ir));
    let reverb_gain = create_gain(ctx, REVERB_GAIN, "Reverb")?;

    _ = compressor.connect_with_audio_node(&ctx.destination());
    _ = convolver.connect_with_audio_node(&reverb_gain);
    _ = reverb_gain.connect_with_audio_node(&ctx.destination());
    _ = compressor.connect_with_audio_node(&convolver);

    Ok(MainBus { compressor })
}

/// One decoded drum sample bound to the shared bus entry point.
pub struct SampleCell {
    ctx: web::BaseAudioContext,
    buffer: web::AudioBuffer,
    output: web::AudioNode,
}

impl SampleCell {
    fn new(output: web::AudioNode, buffer: web::AudioBuffer) -> Self {
        Self {
            ctx: output.context(),
            buffer,
            output,
        }
    }

    /// Fire-and-forget one-shot playback. Each trigger gets its own
    /// source and gain stage; the graph drops them when playback ends,
    /// so overlapping triggers stay independent.
    pub fn play_sample(&self) {
        let src = match web::AudioBufferSourceNode::new(&self.ctx) {
            Ok(s) => s,
            Err(e) => {
                log::error!("AudioBufferSourceNode error: {:?}", e);
                return;
            }
        };
        src.set_buffer(Some(&self.buffer));
        if let Ok(amp) = web::GainNode::new(&self.ctx) {
            _ = src.connect_with_audio_node(&amp);
            _ = amp.connect_with_audio_node(&self.output);
            _ = src.start();
        }
    }
}

/// All decoded pads, keyed by sample file name.
pub struct SampleBank {
    cells: HashMap<&'static str, SampleCell>,
}

impl SampleBank {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn play(&self, file_name: &str) {
        match self.cells.get(file_name) {
            Some(cell) => cell.play_sample(),
            None => log::warn!("[audio] no sample named {file_name}"),
        }
    }
}

/// Decode every sample in the binding table into the bank. Sequenced
/// after the bus build so a cell can never reference a missing entry
/// point; any single failure fails the whole bank.
pub async fn build_sample_bank(output: &web::AudioNode) -> Result<SampleBank> {
    let ctx = output.context();
    let mut cells = HashMap::new();
    for binding in PAD_BINDINGS.iter() {
        let buffer = fetch_audio_buffer(&ctx, binding.sample).await?;
        cells.insert(binding.sample, SampleCell::new(output.clone(), buffer));
    }
    Ok(SampleBank { cells })
}

/// The whole lazy power-on sequence: routing graph first, then the
/// bank wired into its entry point.
pub async fn init_audio(ctx: &web::BaseAudioContext) -> Result<SampleBank> {
    let bus = build_main_bus(ctx).await?;
    let bank = build_sample_bank(&bus.entry()).await?;
    log::info!("[audio] bank ready with {} samples", bank.len());
    Ok(bank)
}
