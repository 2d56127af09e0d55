//! A window that records every call made to it, and a logger that records
//! every line logged on the current thread.

use std::cell::RefCell;
use std::fmt;

use crate::orientation::OrientationControl;
use crate::policy::{BarsBehavior, CutoutMode, SystemBars, SystemUiFlags};
use crate::window::{InsetsController, WindowHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Call {
    DecorFitsSystemWindows(bool),
    CutoutMode(CutoutMode),
    Hide(SystemBars),
    BarsBehavior(BarsBehavior),
    SystemUiVisibility(SystemUiFlags),
    Orientation(i32),
}

/// Window state after the recorded calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct WindowState {
    pub(crate) decor_fits: Option<bool>,
    pub(crate) cutout_mode: Option<CutoutMode>,
    pub(crate) hidden_bars: Option<SystemBars>,
    pub(crate) behavior: Option<BarsBehavior>,
    pub(crate) system_ui: Option<SystemUiFlags>,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct MockError(&'static str);

impl fmt::Display for MockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub(crate) struct RecordingWindow {
    pub(crate) calls: Vec<Call>,
    state: WindowState,
    has_insets_controller: bool,
    pub(crate) fail_decor_fits: bool,
    pub(crate) fail_insets_lookup: bool,
    pub(crate) fail_orientation: bool,
}

impl RecordingWindow {
    pub(crate) fn new() -> Self {
        Self {
            calls: Vec::new(),
            state: WindowState::default(),
            has_insets_controller: true,
            fail_decor_fits: false,
            fail_insets_lookup: false,
            fail_orientation: false,
        }
    }

    pub(crate) fn without_insets_controller() -> Self {
        Self {
            has_insets_controller: false,
            ..Self::new()
        }
    }

    pub(crate) fn state(&self) -> WindowState {
        self.state
    }

    pub(crate) fn chrome_hidden(&self) -> bool {
        let by_insets = self
            .state
            .hidden_bars
            .is_some_and(|bars| bars.contains(SystemBars::STATUS_BARS | SystemBars::NAVIGATION_BARS));
        let by_flags = self.state.system_ui.is_some_and(|flags| {
            flags.contains(SystemUiFlags::FULLSCREEN | SystemUiFlags::HIDE_NAVIGATION)
        });
        by_insets || by_flags
    }
}

impl WindowHandle for RecordingWindow {
    type Error = MockError;
    type Insets<'a> = RecordingInsets<'a>;

    fn set_decor_fits_system_windows(&mut self, fits: bool) -> Result<(), MockError> {
        if self.fail_decor_fits {
            return Err(MockError("decor view detached"));
        }
        self.calls.push(Call::DecorFitsSystemWindows(fits));
        self.state.decor_fits = Some(fits);
        Ok(())
    }

    fn set_cutout_mode(&mut self, mode: CutoutMode) -> Result<(), MockError> {
        self.calls.push(Call::CutoutMode(mode));
        self.state.cutout_mode = Some(mode);
        Ok(())
    }

    fn insets_controller(&mut self) -> Result<Option<RecordingInsets<'_>>, MockError> {
        if self.fail_insets_lookup {
            return Err(MockError("insets lookup failed"));
        }
        if !self.has_insets_controller {
            return Ok(None);
        }
        Ok(Some(RecordingInsets { window: self }))
    }

    fn set_system_ui_visibility(&mut self, flags: SystemUiFlags) -> Result<(), MockError> {
        self.calls.push(Call::SystemUiVisibility(flags));
        self.state.system_ui = Some(flags);
        Ok(())
    }
}

impl OrientationControl for RecordingWindow {
    type Error = MockError;

    fn set_requested_orientation(&mut self, orientation: i32) -> Result<(), MockError> {
        if self.fail_orientation {
            return Err(MockError("no activity"));
        }
        self.calls.push(Call::Orientation(orientation));
        Ok(())
    }
}

pub(crate) struct RecordingInsets<'a> {
    window: &'a mut RecordingWindow,
}

impl InsetsController for RecordingInsets<'_> {
    type Error = MockError;

    fn hide(&mut self, bars: SystemBars) -> Result<(), MockError> {
        self.window.calls.push(Call::Hide(bars));
        self.window.state.hidden_bars = Some(bars);
        Ok(())
    }

    fn set_system_bars_behavior(&mut self, behavior: BarsBehavior) -> Result<(), MockError> {
        self.window.calls.push(Call::BarsBehavior(behavior));
        self.window.state.behavior = Some(behavior);
        Ok(())
    }
}

thread_local! {
    static RECORDS: RefCell<Vec<(log::Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        RECORDS.with(|r| r.borrow_mut().push((record.level(), record.args().to_string())));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

/// Runs `f` and returns what it logged on this thread.
pub(crate) fn capture_logs(f: impl FnOnce()) -> Vec<(log::Level, String)> {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(log::LevelFilter::Debug);
    RECORDS.with(|r| r.borrow_mut().clear());
    f();
    RECORDS.with(|r| r.take())
}
