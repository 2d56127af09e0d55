use crate::controller::ImmersiveController;
use crate::window::ImmersiveSurface;

/// A lifecycle callback from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// The window was first created.
    Create,
    /// The app became active again.
    Resume,
    /// The window gained (`true`) or lost (`false`) input focus.
    FocusChanged(bool),
}

/// Receives lifecycle callbacks. All methods default to doing nothing.
pub trait LifecycleObserver<W> {
    fn on_create(&mut self, _window: &mut W) {}

    fn on_resume(&mut self, _window: &mut W) {}

    fn on_window_focus_changed(&mut self, _window: &mut W, _has_focus: bool) {}
}

/// Observers registered against the host's lifecycle, notified in
/// registration order.
pub struct Lifecycle<W> {
    observers: Vec<Box<dyn LifecycleObserver<W>>>,
}

impl<W> Default for Lifecycle<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Lifecycle<W> {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    pub fn register(&mut self, observer: Box<dyn LifecycleObserver<W>>) {
        self.observers.push(observer);
    }

    pub fn dispatch(&mut self, event: LifecycleEvent, window: &mut W) {
        log::debug!("Lifecycle event: {:?}", event);
        for observer in &mut self.observers {
            match event {
                LifecycleEvent::Create => observer.on_create(window),
                LifecycleEvent::Resume => observer.on_resume(window),
                LifecycleEvent::FocusChanged(has_focus) => {
                    observer.on_window_focus_changed(window, has_focus)
                }
            }
        }
    }
}

/// Re-applies immersive mode on create, resume and focus gain.
pub struct ImmersiveHooks {
    controller: ImmersiveController,
}

impl ImmersiveHooks {
    pub fn new(controller: ImmersiveController) -> Self {
        Self { controller }
    }
}

impl<W: ImmersiveSurface> LifecycleObserver<W> for ImmersiveHooks {
    fn on_create(&mut self, window: &mut W) {
        window.apply_immersive(&self.controller);
    }

    fn on_resume(&mut self, window: &mut W) {
        window.apply_immersive(&self.controller);
    }

    fn on_window_focus_changed(&mut self, window: &mut W, has_focus: bool) {
        if has_focus {
            window.apply_immersive(&self.controller);
        }
    }
}
