//! Drag-to-aim gesture
//!
//! Power comes from drag length, launch direction from the drag vector.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{heading, rad_to_deg};

/// Fire request produced by a successful release
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FireCommand {
    /// Normalized power, (threshold, 1]
    pub power: f32,
    /// Raw drag vector (end - start); only its direction matters
    pub drag: Vec2,
}

impl FireCommand {
    /// Aim angle in radians
    pub fn angle(&self) -> f32 {
        heading(self.drag)
    }
}

/// In-progress drag
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AimGesture {
    pub start: Vec2,
    pub end: Vec2,
    pub active: bool,
    /// Drag length mapped to full power
    full_power_distance: f32,
    /// Minimum power for a release to fire
    fire_threshold: f32,
}

impl AimGesture {
    pub fn new(full_power_distance: f32, fire_threshold: f32) -> Self {
        Self {
            start: Vec2::ZERO,
            end: Vec2::ZERO,
            active: false,
            full_power_distance,
            fire_threshold,
        }
    }

    /// Drag vector (end - start)
    pub fn drag(&self) -> Vec2 {
        self.end - self.start
    }

    /// Normalized power in [0, 1]
    pub fn power(&self) -> f32 {
        if self.full_power_distance <= 0.0 {
            return 0.0;
        }
        (self.drag().length() / self.full_power_distance).clamp(0.0, 1.0)
    }

    /// Aim angle in radians, atan2(dy, dx)
    pub fn angle(&self) -> f32 {
        heading(self.drag())
    }

    /// Aim angle in degrees (for the angle guide)
    pub fn angle_degrees(&self) -> f32 {
        rad_to_deg(self.angle())
    }

    /// Radius of the power ring drawn at the drag origin
    pub fn indicator_radius(&self) -> f32 {
        self.power() * 30.0 + 5.0
    }

    /// Start a drag at `pos`
    pub fn begin(&mut self, pos: Vec2) {
        self.start = pos;
        self.end = pos;
        self.active = true;
    }

    /// Move the drag end; ignored when no drag is active
    pub fn update(&mut self, pos: Vec2) {
        if !self.active {
            return;
        }
        self.end = pos;
    }

    /// Finish the drag at `pos`. Returns a fire command only when power
    /// exceeds the fire threshold; weaker releases are dropped silently.
    pub fn release(&mut self, pos: Vec2) -> Option<FireCommand> {
        if !self.active {
            return None;
        }
        self.end = pos;

        let power = self.power();
        let drag = self.drag();
        self.cancel();

        (power > self.fire_threshold).then_some(FireCommand { power, drag })
    }

    /// Drop the gesture without firing
    pub fn cancel(&mut self) {
        self.active = false;
        self.start = Vec2::ZERO;
        self.end = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{DRAG_FULL_POWER, FIRE_THRESHOLD};
    use proptest::prelude::*;

    fn gesture() -> AimGesture {
        AimGesture::new(DRAG_FULL_POWER, FIRE_THRESHOLD)
    }

    #[test]
    fn test_begin_update_power_angle() {
        let mut aim = gesture();
        aim.begin(Vec2::new(100.0, 300.0));
        assert!(aim.active);
        assert_eq!(aim.power(), 0.0);

        aim.update(Vec2::new(150.0, 300.0));
        assert!((aim.power() - 0.5).abs() < 1e-6);
        assert!(aim.angle().abs() < 1e-6);

        aim.update(Vec2::new(100.0, 250.0));
        assert!((aim.angle_degrees() + 90.0).abs() < 1e-4);
        assert!((aim.indicator_radius() - 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_update_ignored_when_inactive() {
        let mut aim = gesture();
        aim.update(Vec2::new(50.0, 50.0));
        assert!(!aim.active);
        assert_eq!(aim.end, Vec2::ZERO);
    }

    #[test]
    fn test_release_fires_above_threshold() {
        let mut aim = gesture();
        aim.begin(Vec2::new(100.0, 300.0));
        aim.update(Vec2::new(150.0, 300.0));
        let cmd = aim.release(Vec2::new(150.0, 300.0)).unwrap();
        assert!((cmd.power - 0.5).abs() < 1e-6);
        assert!(cmd.angle().abs() < 1e-6);
        assert!(!aim.active);
    }

    #[test]
    fn test_release_uses_release_point() {
        let mut aim = gesture();
        aim.begin(Vec2::new(0.0, 0.0));
        let cmd = aim.release(Vec2::new(0.0, 300.0)).unwrap();
        assert_eq!(cmd.power, 1.0);
        assert!((cmd.angle() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_zero_length_drag_does_not_fire() {
        let mut aim = gesture();
        aim.begin(Vec2::new(10.0, 10.0));
        assert!(aim.release(Vec2::new(10.0, 10.0)).is_none());
        assert!(!aim.active);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut aim = gesture();
        aim.begin(Vec2::ZERO);
        assert!(aim.release(Vec2::new(10.0, 0.0)).is_none());
    }

    #[test]
    fn test_release_without_begin() {
        let mut aim = gesture();
        assert!(aim.release(Vec2::new(200.0, 0.0)).is_none());
    }

    proptest! {
        #[test]
        fn prop_power_is_clamped_distance(
            sx in -1000.0f32..1000.0, sy in -1000.0f32..1000.0,
            ex in -1000.0f32..1000.0, ey in -1000.0f32..1000.0
        ) {
            let mut aim = gesture();
            aim.begin(Vec2::new(sx, sy));
            aim.update(Vec2::new(ex, ey));
            let expected = (Vec2::new(ex - sx, ey - sy).length() / 100.0).min(1.0);
            prop_assert!((0.0..=1.0).contains(&aim.power()));
            prop_assert!((aim.power() - expected).abs() < 1e-4);
        }

        #[test]
        fn prop_release_fires_iff_above_threshold(dx in -150.0f32..150.0, dy in -150.0f32..150.0) {
            let mut aim = gesture();
            aim.begin(Vec2::ZERO);
            aim.update(Vec2::new(dx, dy));
            let power = aim.power();
            let fired = aim.release(Vec2::new(dx, dy));
            prop_assert_eq!(fired.is_some(), power > FIRE_THRESHOLD);
            if let Some(cmd) = fired {
                prop_assert!(cmd.power > FIRE_THRESHOLD && cmd.power <= 1.0);
            }
        }
    }
}
