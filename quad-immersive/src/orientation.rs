use std::fmt::Display;

/// Screen orientation the game asks the activity for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenOrientation {
    /// Landscape, either way up.
    Landscape,
    /// Portrait, either way up.
    Portrait,
    /// Any of the four orientations.
    Any,
}

impl ScreenOrientation {
    /// `ActivityInfo.SCREEN_ORIENTATION_*` value.
    pub fn activity_info_value(self) -> i32 {
        match self {
            ScreenOrientation::Landscape => 6,
            ScreenOrientation::Portrait => 7,
            ScreenOrientation::Any => 10,
        }
    }
}

/// Something that can change the requested orientation, usually the activity.
pub trait OrientationControl {
    type Error: Display;

    /// `Activity.setRequestedOrientation`
    fn set_requested_orientation(&mut self, orientation: i32) -> Result<(), Self::Error>;
}

/// Requests `orientation`; failures are logged and ignored.
pub fn request_orientation<C: OrientationControl>(control: &mut C, orientation: ScreenOrientation) {
    if warn_err!(
        control.set_requested_orientation(orientation.activity_info_value()),
        "Failed to request {:?} orientation: {}",
        orientation
    )
    .is_some()
    {
        log::debug!("Requested {:?} orientation", orientation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, RecordingWindow};

    #[test]
    fn passes_activity_info_constants() {
        let mut window = RecordingWindow::new();
        request_orientation(&mut window, ScreenOrientation::Landscape);
        request_orientation(&mut window, ScreenOrientation::Portrait);
        request_orientation(&mut window, ScreenOrientation::Any);
        assert_eq!(
            window.calls,
            vec![
                Call::Orientation(6),
                Call::Orientation(7),
                Call::Orientation(10)
            ]
        );
    }

    #[test]
    fn failure_is_tolerated() {
        let mut window = RecordingWindow::new();
        window.fail_orientation = true;
        request_orientation(&mut window, ScreenOrientation::Landscape);
        assert!(window.calls.is_empty());
    }
}
