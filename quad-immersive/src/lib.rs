//! Immersive display for full-screen miniquad/macroquad games.
//!
//! Keeps the status bar and navigation bar hidden across both generations of
//! the Android window API, and re-applies that state at every lifecycle
//! re-entry point (create, resume, focus gained).
//!
//! # Usage
//!
//! ```ignore
//! let controller = ImmersiveController::new(generation);
//! let mut lifecycle = Lifecycle::new();
//! lifecycle.register(Box::new(ImmersiveHooks::new(controller)));
//! lifecycle.dispatch(LifecycleEvent::Create, &mut window);
//! ```
//!
//! On Android the window is an [`android::ActivityWindow`], which also reports
//! the generation and runs every window call on the UI thread. Other targets
//! supply their own [`WindowHandle`].

macro_rules! warn_err {
    ($expr:expr, $($arg:tt)+) => {
        $expr.map_err(|e| log::warn!($($arg)+, e)).ok()
    };
}

#[cfg(target_os = "android")]
pub mod android;
mod controller;
mod generation;
mod lifecycle;
mod orientation;
mod policy;
mod strategy;
mod ui_task;
mod window;

#[cfg(test)]
mod testing;

pub use controller::ImmersiveController;
pub use generation::PlatformGeneration;
pub use lifecycle::{ImmersiveHooks, Lifecycle, LifecycleEvent, LifecycleObserver};
pub use orientation::{request_orientation, OrientationControl, ScreenOrientation};
pub use policy::{BarsBehavior, CutoutMode, ImmersivePolicy, SystemBars, SystemUiFlags};
pub use strategy::{ImmersiveStrategy, LegacyFlagStrategy, ModernInsetsStrategy, Strategy};
pub use window::{ImmersiveSurface, InsetsController, WindowHandle};

