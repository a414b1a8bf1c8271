use crate::adjustment::Adjustment;
use crate::config::Kinetics;

use super::velocity::Velocity;

/// Advance one axis by one frame. Returns the velocity left afterwards.
///
/// A component below the cutoff snaps to exactly zero without moving the
/// offset again; otherwise the offset advances by `velocity * delta_ms`
/// and the velocity is scaled by `1 - friction / delta_ms`. Note the
/// friction term divides by `delta_ms`, so braking strengthens as frames
/// get shorter; this defines the deceleration feel and must not be
/// rewritten as a multiply.
fn tick_axis(velocity: f32, adjust: &Adjustment, delta_ms: f32, kinetics: &Kinetics) -> f32 {
    if velocity == 0.0 {
        return 0.0;
    }
    if velocity.abs() < kinetics.velocity_cut_off {
        return 0.0;
    }
    adjust.set_value(adjust.value() + (velocity * delta_ms) as f64);
    velocity * (1.0 - kinetics.friction_coefficient / delta_ms)
}

/// Run one decay frame over both axes. Returns true while movement remains.
pub(crate) fn tick(
    velocity: &mut Velocity,
    hadjust: &Adjustment,
    vadjust: &Adjustment,
    delta_ms: f32,
    kinetics: &Kinetics,
) -> bool {
    velocity.x = tick_axis(velocity.x, hadjust, delta_ms, kinetics);
    velocity.y = tick_axis(velocity.y, vadjust, delta_ms, kinetics);
    !velocity.is_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_offset_and_applies_friction() {
        let adjust = Adjustment::new(0.0);
        let k = Kinetics::default();
        let after = tick_axis(0.1, &adjust, 20.0, &k);
        assert!((adjust.value() - 2.0).abs() < 1e-5);
        assert!((after - 0.0975).abs() < 1e-6);
    }

    #[test]
    fn sub_cutoff_velocity_snaps_without_moving() {
        let adjust = Adjustment::new(100.0);
        let k = Kinetics::default();
        let after = tick_axis(0.02, &adjust, 16.0, &k);
        assert_eq!(after, 0.0);
        assert!((adjust.value() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn zero_velocity_is_left_alone() {
        let adjust = Adjustment::new(5.0);
        let k = Kinetics::default();
        assert_eq!(tick_axis(0.0, &adjust, 16.0, &k), 0.0);
        assert!((adjust.value() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn negative_velocity_decays_symmetrically() {
        let adjust = Adjustment::new(0.0);
        let k = Kinetics::default();
        let after = tick_axis(-0.1, &adjust, 20.0, &k);
        assert!((adjust.value() + 2.0).abs() < 1e-5);
        assert!((after + 0.0975).abs() < 1e-6);
    }

    #[test]
    fn decay_terminates_in_finite_ticks() {
        let h = Adjustment::new(0.0);
        let v = Adjustment::new(0.0);
        let k = Kinetics::default();
        let mut vel = Velocity { x: 0.43, y: -0.2 };
        let mut ticks = 0;
        while tick(&mut vel, &h, &v, 16.0, &k) {
            ticks += 1;
            assert!(ticks < 1000, "decay never terminated");
        }
        assert!(vel.is_zero());
        assert!(h.value() > 0.0);
        assert!(v.value() < 0.0);
    }

    #[test]
    fn axes_stop_independently() {
        let h = Adjustment::new(0.0);
        let v = Adjustment::new(0.0);
        let k = Kinetics::default();
        // x below cutoff, y well above: one tick kills x but not y
        let mut vel = Velocity { x: 0.025, y: 0.5 };
        assert!(tick(&mut vel, &h, &v, 16.0, &k));
        assert_eq!(vel.x, 0.0);
        assert!(vel.y > 0.0);
        assert!(h.value().abs() < 1e-9);
        assert!(v.value() > 0.0);
    }
}
