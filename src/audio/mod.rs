pub mod synth;

use std::collections::HashMap;
use std::io::Cursor;
use std::time::Duration;

use kira::{
    manager::{AudioManager, AudioManagerSettings, backend::DefaultBackend},
    sound::static_sound::{StaticSoundData, StaticSoundHandle, StaticSoundSettings},
    tween::Tween,
    Volume,
};
use log::{info, warn};

use crate::events::GameEvent;
use synth::{SAMPLE_RATE, encode_wav, render_sequence, render_tone};

/// Sounds the game can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Step,
    Talk,
    Menu,
    Fanfare,
    Music,
}

impl Cue {
    pub const ALL: [Cue; 5] = [Cue::Step, Cue::Talk, Cue::Menu, Cue::Fanfare, Cue::Music];

    /// Raw samples for this cue.
    pub fn samples(self) -> Vec<f32> {
        match self {
            Cue::Step => render_tone(&synth::STEP),
            Cue::Talk => render_tone(&synth::TALK),
            Cue::Menu => render_tone(&synth::MENU),
            Cue::Fanfare => render_sequence(&synth::FANFARE),
            Cue::Music => render_sequence(&synth::MELODY),
        }
    }

    /// In-memory WAV for this cue.
    pub fn wav(self) -> Vec<u8> {
        encode_wav(&self.samples(), SAMPLE_RATE)
    }
}

/// One-shot cue for a core signal, if any.
pub fn cue_for(event: &GameEvent) -> Option<Cue> {
    match event {
        GameEvent::Step => Some(Cue::Step),
        GameEvent::Talk => Some(Cue::Talk),
        GameEvent::MenuToggle => Some(Cue::Menu),
        GameEvent::PhaseEnterPlay => Some(Cue::Fanfare),
        GameEvent::PhaseChanged { .. } => None,
    }
}

/// Fire-and-forget audio for the game's signals plus the ambient loop.
///
/// Nothing here can fail the caller: a missing device, a cue that failed to
/// decode or a muted context all turn playback into a no-op.
pub struct AudioContext {
    /// `None` when audio hardware is unavailable (headless / CI / no audio device).
    manager: Option<AudioManager>,
    sounds: HashMap<Cue, StaticSoundData>,
    active_music: Option<StaticSoundHandle>,
    enabled: bool,
    music_volume: f32,
}

impl AudioContext {
    pub fn new(enabled: bool, music_volume: f32) -> Self {
        let manager = match AudioManager::<DefaultBackend>::new(AudioManagerSettings::default()) {
            Ok(m) => Some(m),
            Err(e) => {
                warn!("failed to initialize audio manager: {e}. Audio disabled.");
                None
            }
        };

        let mut sounds = HashMap::new();
        if manager.is_some() {
            for cue in Cue::ALL {
                match StaticSoundData::from_cursor(Cursor::new(cue.wav())) {
                    Ok(data) => { sounds.insert(cue, data); }
                    Err(e) => warn!("failed to decode cue {cue:?}: {e}"),
                }
            }
            info!("audio ready ({} cues)", sounds.len());
        }

        Self {
            manager,
            sounds,
            active_music: None,
            enabled,
            music_volume: music_volume.clamp(0.0, 1.0),
        }
    }

    /// Returns true if audio hardware is available.
    pub fn is_available(&self) -> bool { self.manager.is_some() }

    pub fn is_enabled(&self) -> bool { self.enabled }

    /// Mute or unmute. Muting stops the ambient loop; unmuting restarts it.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if enabled {
            self.start_music();
        } else {
            self.stop_music();
        }
        info!("sound {}", if enabled { "on" } else { "off" });
    }

    pub fn toggle(&mut self) -> bool {
        self.set_enabled(!self.enabled);
        self.enabled
    }

    /// React to a core signal.
    pub fn handle_event(&mut self, event: &GameEvent) {
        if let Some(cue) = cue_for(event) {
            self.play(cue);
        }
    }

    /// Play a cue once.
    pub fn play(&mut self, cue: Cue) {
        if !self.enabled {
            return;
        }
        let Some(manager) = self.manager.as_mut() else { return; };
        if let Some(data) = self.sounds.get(&cue) {
            if let Err(e) = manager.play(data.clone()) {
                warn!("failed to play cue {cue:?}: {e}");
            }
        }
    }

    /// Start the ambient melody on a loop, fading in. No-op if already playing.
    pub fn start_music(&mut self) {
        if !self.enabled || self.active_music.is_some() {
            return;
        }
        let Some(manager) = self.manager.as_mut() else { return; };
        let Some(data) = self.sounds.get(&Cue::Music) else { return; };

        let mut settings = StaticSoundSettings::new().loop_region(0.0..);
        settings.volume = Volume::Amplitude(0.0).into();

        match manager.play(data.clone().with_settings(settings)) {
            Ok(mut handle) => {
                let _ = handle.set_volume(Volume::Amplitude(self.music_volume as f64), Tween {
                    duration: Duration::from_secs_f32(1.0),
                    ..Default::default()
                });
                self.active_music = Some(handle);
            }
            Err(e) => warn!("failed to play music: {e}"),
        }
    }

    /// Fade out and drop the ambient loop.
    pub fn stop_music(&mut self) {
        if let Some(mut handle) = self.active_music.take() {
            let _ = handle.stop(Tween {
                duration: Duration::from_secs_f32(0.5),
                ..Default::default()
            });
        }
    }
}

impl Drop for AudioContext {
    fn drop(&mut self) {
        self.stop_music();
    }
}
