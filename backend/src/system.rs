use super::error::BackendError;
use super::events::{IoEvent, KeyCode, MouseButtonId};
use super::glutils;
use super::platform::{Backend, ContextSettings, MusicHandle};
use gl;
use sdl2;
use sdl2::event::Event;
use sdl2::mixer::{self, Music};
use sdl2::mouse::MouseButton;
use sdl2::video::GLProfile;
use std::path::Path;
use tracing::{debug, info, warn};

const AUDIO_CHUNK_SIZE: i32 = 1024;

impl From<Event> for IoEvent {
    fn from(event: Event) -> IoEvent {
        match event {
            Event::Quit { .. } => IoEvent::Quit,
            Event::KeyDown {
                keycode: Some(k), ..
            } => IoEvent::KeyDown(KeyCode(k.into_i32())),
            Event::KeyUp {
                keycode: Some(k), ..
            } => IoEvent::KeyUp(KeyCode(k.into_i32())),
            Event::MouseMotion {
                x, y, xrel, yrel, ..
            } => IoEvent::MouseMotion(x, y, xrel, yrel),
            Event::MouseButtonDown {
                mouse_btn, x, y, ..
            } => IoEvent::MouseButtonDown(button_id(mouse_btn, x, y)),
            Event::MouseButtonUp {
                mouse_btn, x, y, ..
            } => IoEvent::MouseButtonUp(button_id(mouse_btn, x, y)),
            Event::MouseWheel { x, y, .. } => IoEvent::MouseWheel(x, y),
            _ => IoEvent::Other,
        }
    }
}

fn button_id(button: MouseButton, x: i32, y: i32) -> MouseButtonId {
    match button {
        MouseButton::Left => MouseButtonId::Left(x, y),
        MouseButton::Right => MouseButtonId::Right(x, y),
        MouseButton::Middle => MouseButtonId::Middle(x, y),
        _ => MouseButtonId::Other(x, y),
    }
}

/// A live SDL window with its GL context, event pump and (when available)
/// the opened mixer. Fields drop in declaration order, GL context first.
pub struct System {
    pub w: u32,
    pub h: u32,
    _gl_ctx: sdl2::video::GLContext,
    window: sdl2::video::Window,
    event_pump: sdl2::EventPump,
    audio_open: bool,
    _audio_subsystem: Option<sdl2::AudioSubsystem>,
    _video_subsystem: sdl2::VideoSubsystem,
    _sdl_context: sdl2::Sdl,
}

impl System {
    pub fn new(settings: &ContextSettings) -> Result<System, BackendError> {
        let sdl_context = sdl2::init().map_err(BackendError::Init)?;
        let video_subsystem = sdl_context.video().map_err(BackendError::Init)?;
        let audio_subsystem = match sdl_context.audio() {
            Ok(a) => Some(a),
            Err(e) => {
                warn!("audio subsystem unavailable, music disabled: {e}");
                None
            }
        };

        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(GLProfile::Core);
        gl_attr.set_context_version(3, 2);

        let (w, h) = settings.resolved_size();
        let window = video_subsystem
            .window(settings.resolved_caption(), w, h)
            .position_centered()
            .opengl()
            .build()
            .map_err(|e| BackendError::Window(e.to_string()))?;

        let gl_ctx = window
            .gl_create_context()
            .map_err(BackendError::GlContext)?;
        gl::load_with(|name| video_subsystem.gl_get_proc_address(name) as *const _);

        debug_assert_eq!(gl_attr.context_profile(), GLProfile::Core);
        debug_assert_eq!(gl_attr.context_version(), (3, 2));

        // the window manager may not honour the requested size
        let (w, h) = window.size();
        if let Err(e) = glutils::setup_default_state(w, h) {
            warn!("default GL state: {e}");
        }
        if let Some([r, g, b, a]) = settings.clear_color {
            unsafe { gl::ClearColor(r, g, b, a) };
        }
        glutils::log_opengl_info();

        // before the mixer opens, so no error path leaves audio open
        let event_pump = sdl_context.event_pump().map_err(BackendError::Init)?;

        let audio_open = audio_subsystem.is_some()
            && match mixer::open_audio(
                mixer::DEFAULT_FREQUENCY,
                mixer::DEFAULT_FORMAT,
                mixer::DEFAULT_CHANNELS,
                AUDIO_CHUNK_SIZE,
            ) {
                Ok(()) => true,
                Err(e) => {
                    warn!("opening audio device failed, music disabled: {e}");
                    false
                }
            };

        Ok(System {
            w,
            h,
            _gl_ctx: gl_ctx,
            window,
            event_pump,
            audio_open,
            _audio_subsystem: audio_subsystem,
            _video_subsystem: video_subsystem,
            _sdl_context: sdl_context,
        })
    }

    pub fn poll_event(&mut self) -> Option<IoEvent> {
        self.event_pump.poll_event().map(IoEvent::from)
    }

    pub fn audio_open(&self) -> bool {
        self.audio_open
    }

    pub fn draw_to_screen(&mut self) {
        self.window.gl_swap_window();
    }

    pub fn clear_screen(&mut self) {
        unsafe {
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }
}

impl Drop for System {
    fn drop(&mut self) {
        if self.audio_open {
            mixer::close_audio();
        }
    }
}

/// [`Backend`] over SDL2, OpenGL and SDL_mixer.
#[derive(Default)]
pub struct SdlBackend {
    // never freed, see `destroy_context`
    tracks: Vec<Music<'static>>,
    system: Option<System>,
}

impl SdlBackend {
    pub fn new() -> SdlBackend {
        SdlBackend::default()
    }
}

impl Backend for SdlBackend {
    fn create_context(&mut self, settings: &ContextSettings) -> Result<(), BackendError> {
        if self.system.is_some() {
            return Err(BackendError::ContextState("context already created"));
        }
        if settings.has_asset_bundle() && !settings.asset_path.is_file() {
            warn!("asset bundle {:?} not found", settings.asset_path);
        }

        let system = System::new(settings)?;
        info!(
            caption = settings.resolved_caption(),
            w = system.w,
            h = system.h,
            "context created"
        );
        self.system = Some(system);
        Ok(())
    }

    fn destroy_context(&mut self) -> Result<(), BackendError> {
        let system = match self.system.take() {
            Some(s) => s,
            None => return Err(BackendError::ContextState("no context to destroy")),
        };
        // loaded music stays allocated until the process exits
        for track in self.tracks.drain(..) {
            std::mem::forget(track);
        }
        drop(system);
        info!("context destroyed");
        Ok(())
    }

    fn clear_screen(&mut self) {
        if let Some(system) = self.system.as_mut() {
            system.clear_screen();
        }
    }

    fn present_frame(&mut self) {
        if let Some(system) = self.system.as_mut() {
            system.draw_to_screen();
        }
    }

    fn poll_event(&mut self) -> Option<IoEvent> {
        self.system.as_mut()?.poll_event()
    }

    fn load_music(&mut self, path: &Path) -> Option<MusicHandle> {
        if !self.system.as_ref()?.audio_open() {
            return None;
        }
        match Music::from_file(path) {
            Ok(music) => {
                self.tracks.push(music);
                Some(MusicHandle::new(self.tracks.len() - 1))
            }
            Err(e) => {
                debug!("music {path:?} not loaded: {e}");
                None
            }
        }
    }

    fn play_music(&mut self, music: MusicHandle, loops: i32) {
        match self.tracks.get(music.id()) {
            Some(track) => {
                if let Err(e) = track.play(loops) {
                    warn!("playing music failed: {e}");
                }
            }
            None => warn!("unknown music handle {}", music.id()),
        }
    }
}
