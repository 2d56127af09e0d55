use crate::generation::PlatformGeneration;
use crate::policy::ImmersivePolicy;
use crate::window::{InsetsController, WindowHandle};

/// One way of putting a window into immersive mode.
pub trait ImmersiveStrategy {
    /// Hides system chrome. Failing steps are logged and skipped.
    fn apply<W: WindowHandle>(&self, window: &mut W);
}

/// API 30+: window flags plus `WindowInsetsController`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModernInsetsStrategy {
    policy: ImmersivePolicy,
}

impl ModernInsetsStrategy {
    pub fn new(policy: ImmersivePolicy) -> Self {
        Self { policy }
    }
}

impl ImmersiveStrategy for ModernInsetsStrategy {
    fn apply<W: WindowHandle>(&self, window: &mut W) {
        let policy = &self.policy;
        warn_err!(
            window.set_decor_fits_system_windows(policy.decor_fits_system_windows),
            "Failed to set decor fits system windows: {}"
        );
        warn_err!(
            window.set_cutout_mode(policy.cutout_mode),
            "Failed to set cutout mode: {}"
        );

        let mut insets = match window.insets_controller() {
            Ok(Some(insets)) => insets,
            Ok(None) => {
                log::debug!("No insets controller, system bars left to window flags");
                return;
            }
            Err(e) => {
                log::warn!("Failed to get insets controller: {}", e);
                return;
            }
        };
        warn_err!(
            insets.hide(policy.hidden_bars),
            "Failed to hide system bars: {}"
        );
        warn_err!(
            insets.set_system_bars_behavior(policy.behavior),
            "Failed to set system bars behavior: {}"
        );
    }
}

/// API < 30: one composite `setSystemUiVisibility` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyFlagStrategy {
    policy: ImmersivePolicy,
}

impl LegacyFlagStrategy {
    pub fn new(policy: ImmersivePolicy) -> Self {
        Self { policy }
    }
}

impl ImmersiveStrategy for LegacyFlagStrategy {
    fn apply<W: WindowHandle>(&self, window: &mut W) {
        warn_err!(
            window.set_system_ui_visibility(self.policy.legacy_flags),
            "Failed to set system UI visibility: {}"
        );
    }
}

/// The strategy for this process, chosen once from the platform generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Modern(ModernInsetsStrategy),
    Legacy(LegacyFlagStrategy),
}

impl Strategy {
    pub fn select(generation: PlatformGeneration, policy: ImmersivePolicy) -> Self {
        if generation.is_modern() {
            Strategy::Modern(ModernInsetsStrategy::new(policy))
        } else {
            Strategy::Legacy(LegacyFlagStrategy::new(policy))
        }
    }
}

impl ImmersiveStrategy for Strategy {
    fn apply<W: WindowHandle>(&self, window: &mut W) {
        match self {
            Strategy::Modern(modern) => modern.apply(window),
            Strategy::Legacy(legacy) => legacy.apply(window),
        }
    }
}
