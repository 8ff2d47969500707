use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{error, info, warn};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use crate::audio::AudioContext;
use crate::config::GameConfig;
use crate::editor::EditorInput;
use crate::events::GameEvent;
use crate::game::Game;
use crate::input::{ActionMap, Control, KeyCode, default_bindings};
use crate::renderer::Renderer;
use crate::view;

// ── Color ──────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const WHITE: Self = Self([1.0, 1.0, 1.0, 1.0]);
    pub const BLACK: Self = Self([0.0, 0.0, 0.0, 1.0]);
    pub const GRAY: Self = Self([0.6, 0.6, 0.6, 1.0]);
    pub const TRANSPARENT: Self = Self([0.0, 0.0, 0.0, 0.0]);

    /// Opaque color from 8-bit channels.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self([r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0])
    }

    /// Parse `#rrggbb` (leading `#` optional). `None` for anything else.
    pub fn from_hex(tag: &str) -> Option<Self> {
        let hex = tag.strip_prefix('#').unwrap_or(tag);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::rgb8(channel(0)?, channel(2)?, channel(4)?))
    }
}

// ── Editor key routing ─────────────────────────────────────────────────────

/// While the editor panel is open it consumes the keyboard: editing keys
/// become editor input and printable text is typed into the draft.
pub fn editor_input_for(code: KeyCode, text: Option<&str>) -> Vec<EditorInput> {
    match code {
        KeyCode::Backspace => vec![EditorInput::Backspace],
        KeyCode::Enter | KeyCode::NumpadEnter => vec![EditorInput::Newline],
        KeyCode::Tab => vec![EditorInput::NextNpc],
        KeyCode::F5 => vec![EditorInput::Save],
        KeyCode::Escape => vec![EditorInput::Cancel],
        _ => text
            .map(|t| t.chars().filter(|c| !c.is_control()).map(EditorInput::Char).collect())
            .unwrap_or_default(),
    }
}

// ── Entry point ────────────────────────────────────────────────────────────

/// Open the window and run a session until the window closes.
pub fn run(config: GameConfig) -> anyhow::Result<()> {
    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;
    match app.fatal.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

// ── App (winit ApplicationHandler) ──────────────────────────────────────────

struct App {
    config: GameConfig,
    game: Game,
    bindings: ActionMap<Control>,
    audio: Option<AudioContext>,
    renderer: Option<Renderer>,
    /// Session clock origin; core times are offsets from here.
    started: Instant,
    caption: String,
    /// Start-up failure reported after the event loop exits.
    fatal: Option<anyhow::Error>,
}

impl App {
    fn new(config: GameConfig) -> Self {
        let game = Game::new(config.timing());
        Self {
            config,
            game,
            bindings: default_bindings(),
            audio: None,
            renderer: None,
            started: Instant::now(),
            caption: String::new(),
            fatal: None,
        }
    }

    fn now(&self) -> Duration {
        self.started.elapsed()
    }

    fn on_key(&mut self, code: KeyCode, state: ElementState, repeat: bool, text: Option<&str>) {
        let control = self.bindings.action_for(code);
        match state {
            ElementState::Pressed => {
                if self.game.editor().is_visible() && control != Some(Control::ToggleEditor) {
                    if !repeat {
                        for input in editor_input_for(code, text) {
                            self.game.editor_input(input);
                        }
                    }
                    return;
                }
                // Auto-repeat only refreshes held movement.
                if repeat && !matches!(control, Some(Control::Move(_))) {
                    return;
                }
                match control {
                    Some(Control::ToggleSound) => {
                        if let Some(audio) = self.audio.as_mut() {
                            audio.toggle();
                        }
                    }
                    Some(control) => {
                        let now = self.now();
                        self.game.key_down(control, now);
                    }
                    None => {}
                }
            }
            // Releases always reach the game so no key stays held behind the editor.
            ElementState::Released => {
                if let Some(control) = control {
                    self.game.key_up(control);
                }
            }
        }
    }

    fn frame(&mut self) {
        let now = self.now();
        self.game.advance_clock(now);

        let events: Vec<GameEvent> = self.game.drain_events().collect();
        for event in &events {
            if let GameEvent::PhaseChanged { phase } = event {
                info!("entered {phase:?}");
            }
            if let Some(audio) = self.audio.as_mut() {
                audio.handle_event(event);
            }
        }

        let snapshot = self.game.snapshot();
        let caption = view::caption(&snapshot, &self.config.title);
        let quads = view::build_scene(&snapshot, self.config.tile_size as f32);

        let Some(renderer) = self.renderer.as_mut() else { return };
        if caption != self.caption {
            info!("{caption}");
            renderer.window.set_title(&caption);
            self.caption = caption;
        }
        match renderer.render(&quads) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => renderer.reconfigure(),
            Err(e) => warn!("render error: {e}"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.renderer.is_some() {
            return;
        }
        let (width, height) = self.config.window_size();
        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title(&self.config.title)
                .with_inner_size(winit::dpi::PhysicalSize::new(width, height)),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                error!("failed to create window: {e}");
                self.fatal = Some(e.into());
                event_loop.exit();
                return;
            }
        };

        let (lw, lh) = self.config.logical_size();
        match pollster::block_on(Renderer::new(window, lw, lh)) {
            Ok(renderer) => self.renderer = Some(renderer),
            Err(e) => {
                error!("failed to initialize renderer: {e:#}");
                self.fatal = Some(e);
                event_loop.exit();
                return;
            }
        }

        let mut audio = AudioContext::new(self.config.sound_enabled, self.config.music_volume);
        audio.start_music();
        self.audio = Some(audio);
        info!("session started ({width}x{height})");
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(renderer) = self.renderer.as_ref() {
            renderer.window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.game.shutdown();
                if let Some(audio) = self.audio.as_mut() {
                    audio.stop_music();
                }
                info!("session ended");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size);
                }
            }

            // Focus loss swallows key releases; drop held movement.
            WindowEvent::Focused(false) => {
                self.game.release_all();
            }

            WindowEvent::RedrawRequested => self.frame(),

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        repeat,
                        ref text,
                        ..
                    },
                ..
            } => {
                let text = text.as_ref().map(|t| t.as_str());
                self.on_key(code, state, repeat, text);
            }

            _ => {}
        }
    }
}
