use std::fmt::Display;

use crate::controller::ImmersiveController;
use crate::policy::{BarsBehavior, CutoutMode, SystemBars, SystemUiFlags};

/// The on-screen window, as far as system chrome is concerned.
///
/// Implementations forward to the host window API. Every call is best-effort:
/// errors are reported but callers never treat them as fatal.
pub trait WindowHandle {
    type Error: Display;
    type Insets<'a>: InsetsController<Error = Self::Error>
    where
        Self: 'a;

    /// `Window.setDecorFitsSystemWindows`
    fn set_decor_fits_system_windows(&mut self, fits: bool) -> Result<(), Self::Error>;

    /// Updates `layoutInDisplayCutoutMode` in the window attributes.
    fn set_cutout_mode(&mut self, mode: CutoutMode) -> Result<(), Self::Error>;

    /// Returns the insets controller, or `None` when the window has none yet.
    fn insets_controller(&mut self) -> Result<Option<Self::Insets<'_>>, Self::Error>;

    /// Sets the legacy composite flag on the window's content view.
    fn set_system_ui_visibility(&mut self, flags: SystemUiFlags) -> Result<(), Self::Error>;
}

/// Requests visibility changes for system-drawn regions of a window.
pub trait InsetsController {
    type Error: Display;

    fn hide(&mut self, bars: SystemBars) -> Result<(), Self::Error>;

    fn set_system_bars_behavior(&mut self, behavior: BarsBehavior) -> Result<(), Self::Error>;
}

/// Something immersive mode can be applied to.
///
/// Every [`WindowHandle`] is one, applied on the calling thread. Backends whose
/// window lives on another thread implement this directly and forward the
/// controller there.
pub trait ImmersiveSurface {
    fn apply_immersive(&mut self, controller: &ImmersiveController);
}

impl<W: WindowHandle> ImmersiveSurface for W {
    fn apply_immersive(&mut self, controller: &ImmersiveController) {
        controller.apply(self);
    }
}
