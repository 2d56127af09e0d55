//! The hardcoded immersive configuration, in Android's own constant values.

use std::ops::BitOr;

/// Set of `WindowInsets.Type` regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SystemBars(i32);

impl SystemBars {
    pub const STATUS_BARS: Self = Self(1 << 0);
    pub const NAVIGATION_BARS: Self = Self(1 << 1);
    pub const CAPTION_BAR: Self = Self(1 << 2);
    /// `WindowInsets.Type.systemBars()`
    pub const ALL: Self = Self(Self::STATUS_BARS.0 | Self::NAVIGATION_BARS.0 | Self::CAPTION_BAR.0);

    pub fn mask(self) -> i32 {
        self.0
    }

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for SystemBars {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// How hidden system bars react to user gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarsBehavior {
    /// Bars reappear on touch and stay.
    Default,
    /// A swipe shows the bars briefly, then they hide again.
    ShowTransientBarsBySwipe,
}

impl BarsBehavior {
    /// `WindowInsetsController.BEHAVIOR_*` value.
    pub fn value(self) -> i32 {
        match self {
            BarsBehavior::Default => 1,
            BarsBehavior::ShowTransientBarsBySwipe => 2,
        }
    }
}

/// `WindowManager.LayoutParams.layoutInDisplayCutoutMode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CutoutMode {
    Default,
    /// Content extends into the cutout on the short edges of the screen.
    ShortEdges,
    Never,
    Always,
}

impl CutoutMode {
    pub fn value(self) -> i32 {
        match self {
            CutoutMode::Default => 0,
            CutoutMode::ShortEdges => 1,
            CutoutMode::Never => 2,
            CutoutMode::Always => 3,
        }
    }
}

/// Legacy `View.SYSTEM_UI_FLAG_*` bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SystemUiFlags(i32);

impl SystemUiFlags {
    pub const HIDE_NAVIGATION: Self = Self(0x0000_0002);
    pub const FULLSCREEN: Self = Self(0x0000_0004);
    pub const LAYOUT_STABLE: Self = Self(0x0000_0100);
    pub const LAYOUT_FULLSCREEN: Self = Self(0x0000_0400);
    pub const IMMERSIVE_STICKY: Self = Self(0x0000_1000);

    pub fn bits(self) -> i32 {
        self.0
    }

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for SystemUiFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Everything needed to put a window into immersive mode, for both API
/// generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImmersivePolicy {
    pub(crate) hidden_bars: SystemBars,
    pub(crate) behavior: BarsBehavior,
    pub(crate) cutout_mode: CutoutMode,
    /// `false` lets content draw under the system bars.
    pub(crate) decor_fits_system_windows: bool,
    pub(crate) legacy_flags: SystemUiFlags,
}

impl ImmersivePolicy {
    /// Full-bleed game: no bars, swipe reveals them transiently.
    pub const FULL_SCREEN_GAME: Self = Self {
        hidden_bars: SystemBars::ALL,
        behavior: BarsBehavior::ShowTransientBarsBySwipe,
        cutout_mode: CutoutMode::ShortEdges,
        decor_fits_system_windows: false,
        legacy_flags: SystemUiFlags(
            SystemUiFlags::LAYOUT_STABLE.0
                | SystemUiFlags::LAYOUT_FULLSCREEN.0
                | SystemUiFlags::FULLSCREEN.0
                | SystemUiFlags::HIDE_NAVIGATION.0
                | SystemUiFlags::IMMERSIVE_STICKY.0,
        ),
    };
}
