use crate::generation::PlatformGeneration;
use crate::policy::ImmersivePolicy;
use crate::strategy::{ImmersiveStrategy, Strategy};
use crate::window::WindowHandle;

/// Applies the immersive policy to whatever window it is handed.
///
/// Holds no window state: every [`apply`](Self::apply) unconditionally
/// re-hides the system bars, so calling it again after the OS has shown them
/// restores immersive mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImmersiveController {
    generation: PlatformGeneration,
    strategy: Strategy,
}

impl ImmersiveController {
    pub fn new(generation: PlatformGeneration) -> Self {
        let strategy = Strategy::select(generation, ImmersivePolicy::FULL_SCREEN_GAME);
        log::debug!("Immersive mode for {}: {:?}", generation, strategy);
        Self {
            generation,
            strategy,
        }
    }

    pub fn generation(&self) -> PlatformGeneration {
        self.generation
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    pub fn apply<W: WindowHandle>(&self, window: &mut W) {
        self.strategy.apply(window);
    }
}
