mod decay;
mod velocity;

pub use velocity::Velocity;

use crate::adjustment::{Adjustment, Scrollable};
use crate::clock::{FrameClock, ManualClock};
use crate::config::Kinetics;
use crate::input::{EventStatus, PointerButton, PointerEvent};
use crate::transform::{IdentityTransform, LocalTransform};

type ClockFactory = Box<dyn FnMut() -> Box<dyn FrameClock>>;

/// Kinetic scrolling controller for one scrollable surface.
///
/// While a primary-button drag is active, pointer motion moves the two
/// adjustments directly. On release, if the smoothed velocity is fast
/// enough, the frame clock is started and each `on_tick` coasts the
/// offsets onward under friction until the velocity dies out. A new press
/// always cancels residual momentum, so drag motion and inertial decay
/// never drive an adjustment at the same time.
pub struct KineticScroller {
    hadjust: Adjustment,
    vadjust: Adjustment,
    kinetics: Kinetics,
    transform: Box<dyn LocalTransform>,
    make_clock: ClockFactory,
    clock: Option<Box<dyn FrameClock>>,
    dragging: bool,
    last_x: f32,
    last_y: f32,
    last_t: u32,
    velocity: Velocity,
}

impl KineticScroller {
    pub fn new(hadjust: Adjustment, vadjust: Adjustment) -> Self {
        Self {
            hadjust,
            vadjust,
            kinetics: Kinetics::default(),
            transform: Box::new(IdentityTransform),
            make_clock: Box::new(|| Box::new(ManualClock::new())),
            clock: None,
            dragging: false,
            last_x: 0.0,
            last_y: 0.0,
            last_t: 0,
            velocity: Velocity::zero(),
        }
    }

    /// Build a controller over a scrollable child's own adjustments.
    pub fn for_child(child: &impl Scrollable) -> Self {
        Self::new(child.hadjustment(), child.vadjustment())
    }

    pub fn kinetics(&self) -> &Kinetics {
        &self.kinetics
    }

    /// Swap in new tuning constants, e.g. after a config reload.
    pub fn set_kinetics(&mut self, kinetics: Kinetics) {
        self.kinetics = kinetics;
    }

    /// Replace the device-to-surface coordinate transform.
    pub fn set_transform(&mut self, transform: impl LocalTransform + 'static) {
        self.transform = Box::new(transform);
    }

    /// Replace the clock factory. The animation handle is created from it
    /// lazily on the first qualifying release and reused afterwards; any
    /// previously created handle is discarded.
    pub fn set_clock_factory(
        &mut self,
        factory: impl FnMut() -> Box<dyn FrameClock> + 'static,
    ) {
        self.make_clock = Box::new(factory);
        self.clock = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// True while the inertial animation is running. Polling hosts feed
    /// `on_tick` each frame while this holds.
    pub fn is_decaying(&self) -> bool {
        self.clock.as_ref().map_or(false, |c| c.is_running())
    }

    /// The current smoothed velocity in surface units per millisecond.
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    /// Route a pointer sample to the drag tracker. Non-primary buttons and
    /// moves outside a drag report `Ignored` and must keep propagating.
    pub fn handle_event(&mut self, event: PointerEvent) -> EventStatus {
        match event {
            PointerEvent::Press { x, y, button, t } => self.on_press(x, y, button, t),
            PointerEvent::Move { x, y, t } => self.on_move(x, y, t),
            PointerEvent::Release { button, .. } => self.on_release(button),
        }
    }

    fn on_press(&mut self, x: f32, y: f32, button: PointerButton, t: u32) -> EventStatus {
        if button != PointerButton::Primary {
            return EventStatus::Ignored;
        }

        self.dragging = true;

        if let Some(clock) = self.clock.as_mut() {
            if clock.is_running() {
                log::debug!("press cancels inertial animation");
                clock.stop();
            }
        }
        self.velocity.reset();

        let (x, y) = self.transform.to_local(x, y);
        self.last_x = x;
        self.last_y = y;
        self.last_t = t;

        EventStatus::Handled
    }

    fn on_move(&mut self, x: f32, y: f32, t: u32) -> EventStatus {
        if !self.dragging {
            return EventStatus::Ignored;
        }

        let (new_x, new_y) = self.transform.to_local(x, y);

        // Displacement is old minus new: dragging content left increases
        // the horizontal offset.
        let dx = self.last_x - new_x;
        let dy = self.last_y - new_y;

        self.hadjust.set_value(self.hadjust.value() + dx as f64);
        self.vadjust.set_value(self.vadjust.value() + dy as f64);

        // A repeated timestamp contributes displacement but no velocity
        // sample; dividing by zero here would poison the estimate.
        let dt = t.saturating_sub(self.last_t);
        if dt > 0 {
            self.velocity.update(
                dx / dt as f32,
                dy / dt as f32,
                self.kinetics.smoothing_samples,
            );
        }

        self.last_x = new_x;
        self.last_y = new_y;
        self.last_t = t;

        EventStatus::Handled
    }

    fn on_release(&mut self, button: PointerButton) -> EventStatus {
        if button != PointerButton::Primary {
            return EventStatus::Ignored;
        }

        self.dragging = false;

        if self.velocity.exceeds(self.kinetics.velocity_start_min) {
            log::trace!(
                "release at ({:.4}, {:.4}) units/ms, starting decay",
                self.velocity.x,
                self.velocity.y
            );
            if self.clock.is_none() {
                self.clock = Some((self.make_clock)());
            }
            if let Some(clock) = self.clock.as_mut() {
                clock.start(true);
            }
        }

        EventStatus::Handled
    }

    /// Advance the inertial animation by `delta_ms` milliseconds.
    ///
    /// No-op while a drag is active, while the clock is stopped (a stale
    /// queued tick must not mutate anything), or when no time has elapsed.
    pub fn on_tick(&mut self, delta_ms: f32) {
        if self.dragging || !self.is_decaying() || delta_ms <= 0.0 {
            return;
        }

        let moving = decay::tick(
            &mut self.velocity,
            &self.hadjust,
            &self.vadjust,
            delta_ms,
            &self.kinetics,
        );

        if !moving {
            log::trace!("momentum exhausted, stopping clock");
            if let Some(clock) = self.clock.as_mut() {
                clock.stop();
            }
        }
    }
}
