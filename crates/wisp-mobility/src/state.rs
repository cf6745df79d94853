//! Per-agent navigation state.

use wisp_core::Vec3;

/// One agent's current movement order.
///
/// An agent is either **idle** (`destination == None`) or **navigating**
/// toward a point at `speed` world units per tick.  Repeated
/// `set_destination` calls with a new point simply retarget; the original
/// order is forgotten.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct NavState {
    /// Where the agent is headed, if anywhere.
    pub destination: Option<Vec3>,

    /// World units advanced per tick while navigating.
    pub speed: f32,
}

impl NavState {
    #[inline]
    pub fn idle() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.destination.is_some()
    }
}
