use super::config::DemoConfig;
use backend::{Backend, BackendError, IoEvent, KeyCode, MusicHandle};
use tracing::{debug, info, warn};

/// `Running` until a quit request or escape, then `Terminating` for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminating,
}

/// The demo's main loop: drain input, clear, present, repeat.
#[derive(Debug)]
pub struct DemoLoop {
    state: LoopState,
    frames: u64,
}

impl Default for DemoLoop {
    fn default() -> Self {
        DemoLoop::new()
    }
}

impl DemoLoop {
    pub fn new() -> DemoLoop {
        DemoLoop {
            state: LoopState::Running,
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Frames cleared and presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn handle_event(&mut self, event: &IoEvent) {
        match event {
            IoEvent::Quit => self.state = LoopState::Terminating,
            IoEvent::KeyDown(code) if *code == KeyCode::ESCAPE => {
                self.state = LoopState::Terminating
            }
            _ => {}
        }
    }

    /// Polls until the queue is empty, never waits. Returns the number of
    /// events seen.
    pub fn drain_events<B: Backend + ?Sized>(&mut self, backend: &mut B) -> usize {
        let mut seen = 0;
        while let Some(event) = backend.poll_event() {
            self.handle_event(&event);
            seen += 1;
        }
        seen
    }

    /// One frame. Rendering happens even when this frame's events ended the
    /// loop; there is no frame pacing.
    pub fn step<B: Backend + ?Sized>(&mut self, backend: &mut B) {
        let seen = self.drain_events(backend);
        if seen > 0 {
            debug!(frame = self.frames, events = seen, "input drained");
        }
        backend.clear_screen();
        backend.present_frame();
        self.frames += 1;
    }
}

/// Outcome of a completed [`run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub frames: u64,
    pub music: Option<MusicHandle>,
}

/// Best effort: a track that cannot be loaded is simply not played.
pub fn start_music<B: Backend + ?Sized>(
    backend: &mut B,
    config: &DemoConfig,
) -> Option<MusicHandle> {
    let music = match backend.load_music(&config.music_path) {
        Some(m) => m,
        None => {
            debug!("no music from {:?}, playing silently", config.music_path);
            return None;
        }
    };
    backend.play_music(music, config.music_loops);
    Some(music)
}

/// Creates the context, starts the music and runs frames until the user
/// quits, then destroys the context.
///
/// A context that cannot be created is an error: no event could ever stop the
/// loop without a window. A failing destroy is only logged.
pub fn run<B: Backend + ?Sized>(
    backend: &mut B,
    config: &DemoConfig,
) -> Result<RunReport, BackendError> {
    backend.create_context(&config.context_settings())?;
    let music = start_music(backend, config);

    let mut demo = DemoLoop::new();
    while demo.is_running() {
        demo.step(backend);
    }
    info!(frames = demo.frames(), "demo loop finished");

    if let Err(e) = backend.destroy_context() {
        warn!("context teardown failed: {e}");
    }

    Ok(RunReport {
        frames: demo.frames(),
        music,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use backend::recording::RecordingBackend;
    use backend::ContextSettings;

    #[test]
    fn starts_running() {
        let demo = DemoLoop::new();
        assert_eq!(demo.state(), LoopState::Running);
        assert_eq!(demo.frames(), 0);
    }

    #[test]
    fn quit_and_escape_terminate() {
        let mut demo = DemoLoop::new();
        demo.handle_event(&IoEvent::Quit);
        assert_eq!(demo.state(), LoopState::Terminating);

        let mut demo = DemoLoop::new();
        demo.handle_event(&IoEvent::KeyDown(KeyCode::ESCAPE));
        assert!(!demo.is_running());
    }

    #[test]
    fn other_events_are_ignored() {
        let mut demo = DemoLoop::new();
        for event in [
            IoEvent::KeyDown(KeyCode::from_char('a')),
            IoEvent::KeyDown(KeyCode::RETURN),
            IoEvent::KeyUp(KeyCode::ESCAPE),
            IoEvent::MouseMotion(1, 2, 3, 4),
            IoEvent::MouseWheel(0, -1),
            IoEvent::Other,
        ] {
            demo.handle_event(&event);
        }
        assert!(demo.is_running());
    }

    #[test]
    fn drain_counts_every_event_of_the_batch() {
        let mut demo = DemoLoop::new();
        let mut backend = RecordingBackend::new()
            .with_batch([IoEvent::Other, IoEvent::Quit, IoEvent::MouseWheel(0, 1)])
            .without_final_quit();
        backend
            .create_context(&ContextSettings::new("drain", 8, 8))
            .unwrap();

        assert_eq!(demo.drain_events(&mut backend), 3);
        assert!(!demo.is_running());
        assert_eq!(demo.drain_events(&mut backend), 0);
        assert_eq!(demo.frames(), 0);
    }

    #[test]
    fn terminating_is_absorbing() {
        let mut demo = DemoLoop::new();
        demo.handle_event(&IoEvent::Quit);
        demo.handle_event(&IoEvent::KeyDown(KeyCode::from_char('a')));
        demo.handle_event(&IoEvent::Quit);
        assert_eq!(demo.state(), LoopState::Terminating);
    }
}
