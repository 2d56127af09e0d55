use std::fmt;

/// Window-management API level of the host platform (Android `SDK_INT`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlatformGeneration(pub u32);

impl PlatformGeneration {
    /// First generation with `WindowInsetsController` (Android 11, API 30).
    pub const MODERN_THRESHOLD: Self = Self(30);

    /// Returns true if the insets-controller API is available. Inclusive.
    pub fn is_modern(self) -> bool {
        self >= Self::MODERN_THRESHOLD
    }
}

impl fmt::Display for PlatformGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API {}", self.0)
    }
}
