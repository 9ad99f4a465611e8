use gloo::timers::callback::Interval;
use snake_core::{AudioSink, Tone, Waveform};
use wasm_bindgen::JsValue;
use web_sys::{AudioContext, AudioContextState, GainNode, OscillatorNode, OscillatorType};

const MUSIC_GAIN: f32 = 0.06;
const PAD_FREQUENCIES_HZ: [f32; 2] = [110.0, 220.0];
const PAD_DETUNE_CENTS: f32 = 8.0;
/// A, B, D, E
const ARPEGGIO_HZ: [f32; 4] = [220.0, 246.94, 293.66, 329.63];
const ARPEGGIO_STEP_MS: u32 = 480;
const LEAD_PEAK: f32 = 0.08;
const SILENT: f32 = 0.0001;

const fn oscillator_type(waveform: Waveform) -> OscillatorType {
    use Waveform::*;
    match waveform {
        Sine => OscillatorType::Sine,
        Square => OscillatorType::Square,
        Sawtooth => OscillatorType::Sawtooth,
        Triangle => OscillatorType::Triangle,
    }
}

/// WebAudio output, the context is created on first use since browsers only allow it after a
/// user gesture.
#[derive(Debug, Default)]
pub(crate) struct Audio {
    ctx: Option<AudioContext>,
    music: Option<Music>,
}

impl Audio {
    fn context(&mut self) -> Result<&AudioContext, JsValue> {
        let ctx = match self.ctx.take() {
            Some(ctx) => ctx,
            None => AudioContext::new()?,
        };
        let ctx = self.ctx.insert(ctx);
        if ctx.state() == AudioContextState::Suspended {
            // the returned promise only tells when it is done
            let _ = ctx.resume()?;
        }
        Ok(ctx)
    }

    fn try_play_tone(&mut self, tone: Tone) -> Result<(), JsValue> {
        let ctx = self.context()?;
        let oscillator = ctx.create_oscillator()?;
        let gain = ctx.create_gain()?;

        oscillator.set_type(oscillator_type(tone.waveform));
        oscillator.frequency().set_value(tone.frequency_hz);
        oscillator.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;

        let now = ctx.current_time();
        gain.gain().set_value_at_time(tone.volume, now)?;
        gain.gain()
            .exponential_ramp_to_value_at_time(0.001, now + tone.duration_secs)?;
        oscillator.start_with_when(now)?;
        oscillator.stop_with_when(now + tone.duration_secs + 0.02)?;
        Ok(())
    }

    pub(crate) fn start_music(&mut self) {
        if self.music.is_some() {
            return;
        }
        match self.context().and_then(Music::start) {
            Ok(music) => {
                log::debug!("music started");
                self.music = Some(music);
            }
            Err(err) => log::warn!("failed to start music: {:?}", err),
        }
    }

    pub(crate) fn stop_music(&mut self) {
        if let Some(music) = self.music.take() {
            music.stop();
            log::debug!("music stopped");
        }
    }

    pub(crate) fn set_music(&mut self, on: bool) {
        if on {
            self.start_music();
        } else {
            self.stop_music();
        }
    }
}

impl AudioSink for Audio {
    fn play_tone(&mut self, tone: Tone) {
        if let Err(err) = self.try_play_tone(tone) {
            log::warn!("failed to play tone: {:?}", err);
        }
    }
}

/// Two detuned sine pads under a triangle arpeggio.
#[derive(Debug)]
struct Music {
    master: GainNode,
    pads: [OscillatorNode; 2],
    lead: OscillatorNode,
    lead_gain: GainNode,
    _arpeggio: Interval,
}

impl Music {
    fn start(ctx: &AudioContext) -> Result<Self, JsValue> {
        let master = ctx.create_gain()?;
        master.gain().set_value(MUSIC_GAIN);
        master.connect_with_audio_node(&ctx.destination())?;

        let pads = [ctx.create_oscillator()?, ctx.create_oscillator()?];
        for (pad, frequency) in pads.iter().zip(PAD_FREQUENCIES_HZ) {
            pad.set_type(OscillatorType::Sine);
            pad.frequency().set_value(frequency);
            pad.connect_with_audio_node(&master)?;
        }
        pads[1].detune().set_value(PAD_DETUNE_CENTS);
        for pad in &pads {
            pad.start()?;
        }

        let lead = ctx.create_oscillator()?;
        let lead_gain = ctx.create_gain()?;
        lead.set_type(OscillatorType::Triangle);
        lead.frequency().set_value(ARPEGGIO_HZ[0]);
        lead_gain.gain().set_value(SILENT);
        lead.connect_with_audio_node(&lead_gain)?;
        lead_gain.connect_with_audio_node(&ctx.destination())?;
        lead.start()?;

        let arpeggio = {
            let ctx = ctx.clone();
            let lead = lead.clone();
            let lead_gain = lead_gain.clone();
            let mut step = 0;
            Interval::new(ARPEGGIO_STEP_MS, move || {
                let note = ARPEGGIO_HZ[step % ARPEGGIO_HZ.len()];
                step += 1;
                if let Err(err) = pluck(&ctx, &lead, &lead_gain, note) {
                    log::warn!("arpeggio step failed: {:?}", err);
                }
            })
        };

        Ok(Self {
            master,
            pads,
            lead,
            lead_gain,
            _arpeggio: arpeggio,
        })
    }

    fn stop(self) {
        let Self {
            master,
            pads,
            lead,
            lead_gain,
            _arpeggio,
        } = self;
        drop(_arpeggio);

        for oscillator in pads.iter().chain([&lead]) {
            if let Err(err) = oscillator.stop().and_then(|_| oscillator.disconnect()) {
                log::warn!("failed to stop oscillator: {:?}", err);
            }
        }
        for gain in [&lead_gain, &master] {
            if let Err(err) = gain.disconnect() {
                log::warn!("failed to disconnect gain: {:?}", err);
            }
        }
    }
}

/// Sets the lead to `frequency` with a fast attack and a short decay.
fn pluck(
    ctx: &AudioContext,
    lead: &OscillatorNode,
    lead_gain: &GainNode,
    frequency: f32,
) -> Result<(), JsValue> {
    let now = ctx.current_time();
    lead.frequency().set_value_at_time(frequency, now)?;
    let gain = lead_gain.gain();
    gain.cancel_scheduled_values(now)?;
    gain.set_value_at_time(SILENT, now)?;
    gain.exponential_ramp_to_value_at_time(LEAD_PEAK, now + 0.02)?;
    gain.exponential_ramp_to_value_at_time(SILENT, now + 0.22)?;
    Ok(())
}
