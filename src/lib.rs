//! Kinetic ("flick") scrolling for pointer-driven surfaces.
//!
//! A primary-button drag moves a pair of scroll [`Adjustment`]s directly;
//! on release the surface keeps coasting with friction until the smoothed
//! velocity estimate dies out. Hosts plug in through small collaborator
//! contracts: a pointer event source, a coordinate [`LocalTransform`] and
//! a [`FrameClock`] that drives `on_tick` while the animation runs.

pub mod adjustment;
pub mod clock;
pub mod config;
pub mod input;
pub mod kinetics;
pub mod transform;

pub use adjustment::{Adjustment, Scrollable};
pub use clock::{FrameClock, FrameTimer, ManualClock};
pub use config::{Config, Kinetics};
pub use input::{EventStatus, PointerButton, PointerEvent};
pub use kinetics::{KineticScroller, Velocity};
pub use transform::{IdentityTransform, LocalTransform, ViewportTransform};
