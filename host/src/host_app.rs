use macroquad::prelude::*;
use quad_immersive::{
    ImmersiveController, ImmersiveHooks, Lifecycle, LifecycleEvent, LifecycleObserver,
    ScreenOrientation, request_orientation,
};

use crate::bridge::LifecycleBridge;
use crate::window::{self, HostWindow};

/// The host's own lifecycle handling, registered ahead of the immersive hooks.
struct HostActivity;

impl<W> LifecycleObserver<W> for HostActivity {
    fn on_create(&mut self, _window: &mut W) {
        log::info!("Window created");
    }

    fn on_resume(&mut self, _window: &mut W) {
        log::info!("Resumed");
    }

    fn on_window_focus_changed(&mut self, _window: &mut W, has_focus: bool) {
        log::debug!("Window focus: {}", has_focus);
    }
}

pub struct App {
    window: Option<HostWindow>,
    lifecycle: Lifecycle<HostWindow>,
    bridge: LifecycleBridge,
    controller: ImmersiveController,
    created: bool,
}

impl App {
    pub fn new() -> Self {
        let mut window = window::open();
        let controller = ImmersiveController::new(window::generation(window.as_ref()));

        let mut lifecycle = Lifecycle::new();
        lifecycle.register(Box::new(HostActivity));
        lifecycle.register(Box::new(ImmersiveHooks::new(controller)));

        if let Some(window) = &mut window {
            request_orientation(window, ScreenOrientation::Landscape);
        }

        Self {
            window,
            lifecycle,
            bridge: LifecycleBridge::new(),
            controller,
            created: false,
        }
    }

    fn dispatch(&mut self, event: LifecycleEvent) {
        if let Some(window) = &mut self.window {
            self.lifecycle.dispatch(event, window);
        }
    }

    /// Run one frame. Returns false if the app should exit.
    pub fn tick(&mut self) -> bool {
        if !self.created {
            self.created = true;
            self.dispatch(LifecycleEvent::Create);
        }
        for event in self.bridge.poll() {
            self.dispatch(event);
        }

        if is_key_pressed(KeyCode::Escape) {
            return false;
        }

        self.render();
        true
    }

    fn render(&self) {
        clear_background(BLACK);
        let mode = if self.controller.generation().is_modern() {
            "insets controller"
        } else {
            "legacy flags"
        };
        let label = format!("{} - {}", self.controller.generation(), mode);
        draw_text(&label, 16.0, screen_height() - 16.0, 24.0, DARKGRAY);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
