use std::mem;

use macroquad::input::utils::{register_input_subscriber, repeat_all_miniquad_input};
use macroquad::miniquad::EventHandler;
use quad_immersive::LifecycleEvent;

/// Translates miniquad window events into lifecycle events.
#[derive(Default)]
pub(crate) struct LifecycleEvents {
    pending: Vec<LifecycleEvent>,
}

impl LifecycleEvents {
    pub(crate) fn take(&mut self) -> Vec<LifecycleEvent> {
        mem::take(&mut self.pending)
    }
}

impl EventHandler for LifecycleEvents {
    fn update(&mut self) {}

    fn draw(&mut self) {}

    fn window_minimized_event(&mut self) {
        self.pending.push(LifecycleEvent::FocusChanged(false));
    }

    // Android resumes the activity before giving the window focus back.
    fn window_restored_event(&mut self) {
        self.pending.push(LifecycleEvent::Resume);
        self.pending.push(LifecycleEvent::FocusChanged(true));
    }
}

/// Subscribes to macroquad's input queue for window events.
pub(crate) struct LifecycleBridge {
    subscriber: usize,
    events: LifecycleEvents,
}

impl LifecycleBridge {
    pub(crate) fn new() -> Self {
        Self {
            subscriber: register_input_subscriber(),
            events: LifecycleEvents::default(),
        }
    }

    /// Lifecycle events received since the last poll, oldest first.
    pub(crate) fn poll(&mut self) -> Vec<LifecycleEvent> {
        repeat_all_miniquad_input(&mut self.events, self.subscriber);
        self.events.take()
    }
}
