//! A scripted stand-in for the native backend that records every call it
//! receives, used to check the demo loop without a display or sound card.

use super::error::BackendError;
use super::events::IoEvent;
use super::platform::{Backend, ContextSettings, MusicHandle};
use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateContext(ContextSettings),
    DestroyContext,
    ClearScreen,
    PresentFrame,
    /// One poll, with what it returned.
    PollEvent(Option<IoEvent>),
    LoadMusic(PathBuf),
    PlayMusic(MusicHandle, i32),
}

/// Events are served in batches: one batch per drain of the queue. After
/// the last scripted batch a single `Quit` is delivered unless
/// [`RecordingBackend::without_final_quit`] was used.
#[derive(Debug)]
pub struct RecordingBackend {
    calls: Vec<Call>,
    batches: VecDeque<VecDeque<IoEvent>>,
    final_quit: bool,
    music_files: HashSet<PathBuf>,
    loaded: usize,
    fail_create: Option<&'static str>,
    live: bool,
}

impl Default for RecordingBackend {
    fn default() -> Self {
        RecordingBackend::new()
    }
}

impl RecordingBackend {
    pub fn new() -> RecordingBackend {
        RecordingBackend {
            calls: Vec::new(),
            batches: VecDeque::new(),
            final_quit: true,
            music_files: HashSet::new(),
            loaded: 0,
            fail_create: None,
            live: false,
        }
    }

    /// Queue the events returned by one drain.
    pub fn with_batch(mut self, events: impl IntoIterator<Item = IoEvent>) -> Self {
        self.batches.push_back(events.into_iter().collect());
        self
    }

    /// Queue `rounds` drains that find the queue empty.
    pub fn with_idle_rounds(mut self, rounds: usize) -> Self {
        for _ in 0..rounds {
            self.batches.push_back(VecDeque::new());
        }
        self
    }

    /// Make `path` loadable as music. Any other path fails to load.
    pub fn with_music(mut self, path: impl Into<PathBuf>) -> Self {
        self.music_files.insert(path.into());
        self
    }

    pub fn without_final_quit(mut self) -> Self {
        self.final_quit = false;
        self
    }

    pub fn failing_create(mut self, reason: &'static str) -> Self {
        self.fail_create = Some(reason);
        self
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    pub fn frames_presented(&self) -> usize {
        self.count(&Call::PresentFrame)
    }

    /// Calls with the empty polls that end every drain left out.
    pub fn calls_without_empty_polls(&self) -> Vec<Call> {
        self.calls
            .iter()
            .filter(|c| **c != Call::PollEvent(None))
            .cloned()
            .collect()
    }

    fn next_event(&mut self) -> Option<IoEvent> {
        if self.batches.is_empty() && self.final_quit {
            self.final_quit = false;
            self.batches.push_back(VecDeque::from([IoEvent::Quit]));
        }
        let batch = self.batches.front_mut()?;
        match batch.pop_front() {
            Some(event) => Some(event),
            None => {
                // end of this drain, the next poll starts the next batch
                self.batches.pop_front();
                None
            }
        }
    }
}

impl Backend for RecordingBackend {
    fn create_context(&mut self, settings: &ContextSettings) -> Result<(), BackendError> {
        self.calls.push(Call::CreateContext(settings.clone()));
        if let Some(reason) = self.fail_create {
            return Err(BackendError::Init(reason.to_string()));
        }
        if self.live {
            return Err(BackendError::ContextState("context already created"));
        }
        self.live = true;
        Ok(())
    }

    fn destroy_context(&mut self) -> Result<(), BackendError> {
        self.calls.push(Call::DestroyContext);
        if !self.live {
            return Err(BackendError::ContextState("no context to destroy"));
        }
        self.live = false;
        Ok(())
    }

    fn clear_screen(&mut self) {
        self.calls.push(Call::ClearScreen);
    }

    fn present_frame(&mut self) {
        self.calls.push(Call::PresentFrame);
    }

    fn poll_event(&mut self) -> Option<IoEvent> {
        let event = if self.live { self.next_event() } else { None };
        self.calls.push(Call::PollEvent(event));
        event
    }

    fn load_music(&mut self, path: &Path) -> Option<MusicHandle> {
        self.calls.push(Call::LoadMusic(path.to_path_buf()));
        if !self.live || !self.music_files.contains(path) {
            return None;
        }
        self.loaded += 1;
        Some(MusicHandle::new(self.loaded - 1))
    }

    fn play_music(&mut self, music: MusicHandle, loops: i32) {
        self.calls.push(Call::PlayMusic(music, loops));
    }
}
