// =============================================================================
// SYNTH.RS - Chiptune cue generation
//
// Every sound in the game is generated here at startup:
// - single-oscillator blips with an exponential decay (step, talk, menu)
// - short note sequences with a pluck envelope (fanfare, ambient melody)
// - 16-bit mono WAV encoding so the audio backend can decode from memory
// =============================================================================

pub const SAMPLE_RATE: u32 = 44_100;

/// Length of the linear attack in a pluck envelope, in seconds.
const PLUCK_ATTACK: f32 = 0.01;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Wave {
    Square,
    Sine,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Envelope {
    /// Exponential slide from gain `from` to gain `to` across the tone.
    Decay { from: f32, to: f32 },
    /// Linear rise to `peak` over 10 ms, then linear fall to silence.
    Pluck { peak: f32 },
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tone {
    pub wave: Wave,
    pub freq: f32,
    pub seconds: f32,
    pub envelope: Envelope,
}

impl Tone {
    pub const fn blip(wave: Wave, freq: f32, seconds: f32, from: f32) -> Self {
        Self { wave, freq, seconds, envelope: Envelope::Decay { from, to: 0.01 } }
    }

    pub const fn note(freq: f32, seconds: f32, peak: f32) -> Self {
        Self { wave: Wave::Square, freq, seconds, envelope: Envelope::Pluck { peak } }
    }

    /// Number of samples this tone renders to.
    pub fn len(&self) -> usize {
        (self.seconds.max(0.0) * SAMPLE_RATE as f32).round() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn gain_at(&self, t: f32) -> f32 {
        match self.envelope {
            Envelope::Decay { from, to } => {
                if from <= 0.0 || self.seconds <= 0.0 {
                    return 0.0;
                }
                from * (to / from).powf((t / self.seconds).clamp(0.0, 1.0))
            }
            Envelope::Pluck { peak } => {
                if t < PLUCK_ATTACK {
                    peak * t / PLUCK_ATTACK
                } else {
                    let release = (self.seconds - PLUCK_ATTACK).max(f32::EPSILON);
                    peak * (1.0 - (t - PLUCK_ATTACK) / release).max(0.0)
                }
            }
        }
    }

    fn oscillator(&self, t: f32) -> f32 {
        let phase = (t * self.freq).fract();
        match self.wave {
            Wave::Square => if phase < 0.5 { 1.0 } else { -1.0 },
            Wave::Sine => (phase * std::f32::consts::TAU).sin(),
        }
    }
}

/// Render one tone to samples in -1.0 ..= 1.0.
pub fn render_tone(tone: &Tone) -> Vec<f32> {
    (0..tone.len())
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE as f32;
            tone.oscillator(t) * tone.gain_at(t)
        })
        .collect()
}

/// Render tones back to back.
pub fn render_sequence(tones: &[Tone]) -> Vec<f32> {
    tones.iter().flat_map(render_tone).collect()
}

// ── Cue definitions ──────────────────────────────────────────────────────────

/// Footstep: low square thud.
pub const STEP: Tone = Tone::blip(Wave::Square, 100.0, 0.05, 0.05);
/// Dialogue opens: soft high sine ping.
pub const TALK: Tone = Tone::blip(Wave::Sine, 800.0, 0.1, 0.1);
/// Editor panel shown/hidden.
pub const MENU: Tone = Tone::blip(Wave::Square, 600.0, 0.15, 0.08);

/// Rising arpeggio played when free play begins.
pub const FANFARE: [Tone; 4] = [
    Tone::note(523.25, 0.08, 0.15),
    Tone::note(659.25, 0.08, 0.15),
    Tone::note(783.99, 0.08, 0.15),
    Tone::note(1046.50, 0.24, 0.15),
];

/// Ambient loop, C major: C5 D5 E5 C5 G4 A4 B4 C5.
pub const MELODY: [Tone; 8] = [
    Tone::note(523.25, 0.5, 0.3),
    Tone::note(587.33, 0.5, 0.3),
    Tone::note(659.25, 0.5, 0.3),
    Tone::note(523.25, 0.5, 0.3),
    Tone::note(392.00, 1.0, 0.3),
    Tone::note(440.00, 0.5, 0.3),
    Tone::note(493.88, 0.5, 0.3),
    Tone::note(523.25, 1.0, 0.3),
];

// ── WAV encoding ─────────────────────────────────────────────────────────────

/// Encode samples as a 16-bit PCM mono RIFF/WAVE file.
pub fn encode_wav(samples: &[f32], sample_rate: u32) -> Vec<u8> {
    let data_len = (samples.len() * 2) as u32;
    let mut out = Vec::with_capacity(44 + data_len as usize);

    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVE");

    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&1u16.to_le_bytes()); // mono
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&(sample_rate * 2).to_le_bytes());
    out.extend_from_slice(&2u16.to_le_bytes());
    out.extend_from_slice(&16u16.to_le_bytes());

    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    for &s in samples {
        let v = (s.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
        out.extend_from_slice(&v.to_le_bytes());
    }
    out
}
