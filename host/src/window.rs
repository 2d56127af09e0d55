//! The window handed to the immersive controller.
//!
//! - Android: the activity's window via JNI
//! - Desktop: macroquad fullscreen standing in for hidden system bars

#[cfg(target_os = "android")]
mod android {
    use macroquad::miniquad::native::android::{ACTIVITY, attach_jni_env};
    use quad_immersive::PlatformGeneration;
    use quad_immersive::android::ActivityWindow;

    pub(crate) type HostWindow = ActivityWindow;

    pub(crate) fn open() -> Option<HostWindow> {
        let window = unsafe {
            let activity = ACTIVITY;
            ActivityWindow::from_env(attach_jni_env().cast(), activity.cast())
        };
        warn_err!(window, "Failed to get the activity window: {}")
    }

    pub(crate) fn generation(window: Option<&HostWindow>) -> PlatformGeneration {
        window.map_or(PlatformGeneration(0), ActivityWindow::platform_generation)
    }
}

#[cfg(not(target_os = "android"))]
mod desktop {
    use std::convert::Infallible;

    use quad_immersive::{
        BarsBehavior, CutoutMode, InsetsController, OrientationControl, PlatformGeneration,
        SystemBars, SystemUiFlags, WindowHandle,
    };

    pub(crate) type HostWindow = DesktopWindow;

    pub(crate) fn open() -> Option<HostWindow> {
        Some(DesktopWindow::new(macroquad::window::set_fullscreen))
    }

    /// Desktop has no legacy window API.
    pub(crate) fn generation(_window: Option<&HostWindow>) -> PlatformGeneration {
        PlatformGeneration::MODERN_THRESHOLD
    }

    /// A desktop window has no system bars; hiding them means going fullscreen.
    pub(crate) struct DesktopWindow {
        fullscreen: bool,
        set_fullscreen: fn(bool),
    }

    impl DesktopWindow {
        pub(crate) fn new(set_fullscreen: fn(bool)) -> Self {
            Self {
                fullscreen: false,
                set_fullscreen,
            }
        }

        fn enter_fullscreen(&mut self) {
            if !self.fullscreen {
                (self.set_fullscreen)(true);
                self.fullscreen = true;
            }
        }
    }

    impl WindowHandle for DesktopWindow {
        type Error = Infallible;
        type Insets<'a> = DesktopInsets<'a>;

        fn set_decor_fits_system_windows(&mut self, _fits: bool) -> Result<(), Infallible> {
            Ok(())
        }

        fn set_cutout_mode(&mut self, _mode: CutoutMode) -> Result<(), Infallible> {
            Ok(())
        }

        fn insets_controller(&mut self) -> Result<Option<DesktopInsets<'_>>, Infallible> {
            Ok(Some(DesktopInsets { window: self }))
        }

        fn set_system_ui_visibility(&mut self, flags: SystemUiFlags) -> Result<(), Infallible> {
            if flags.contains(SystemUiFlags::FULLSCREEN) {
                self.enter_fullscreen();
            }
            Ok(())
        }
    }

    impl OrientationControl for DesktopWindow {
        type Error = Infallible;

        fn set_requested_orientation(&mut self, orientation: i32) -> Result<(), Infallible> {
            log::debug!("Orientation {} ignored on desktop", orientation);
            Ok(())
        }
    }

    pub(crate) struct DesktopInsets<'a> {
        window: &'a mut DesktopWindow,
    }

    impl InsetsController for DesktopInsets<'_> {
        type Error = Infallible;

        fn hide(&mut self, bars: SystemBars) -> Result<(), Infallible> {
            if bars.contains(SystemBars::STATUS_BARS) {
                self.window.enter_fullscreen();
            }
            Ok(())
        }

        fn set_system_bars_behavior(&mut self, _behavior: BarsBehavior) -> Result<(), Infallible> {
            Ok(())
        }
    }

}

#[cfg(target_os = "android")]
pub(crate) use android::{HostWindow, generation, open};
#[cfg(not(target_os = "android"))]
pub(crate) use desktop::{HostWindow, generation, open};
