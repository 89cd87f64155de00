use crate::config::SpringConfig;
use crate::constants::{SPRING_MAX_DT_SEC, SPRING_SUBSTEP_SEC};
use glam::Vec2;

/// Damped spring chasing a 2D target, integrated with fixed substeps.
#[derive(Clone, Debug)]
pub struct SpringFollower {
    pub config: SpringConfig,
    pos: Vec2,
    vel: Vec2,
    target: Vec2,
}

impl SpringFollower {
    pub fn new(config: SpringConfig, start: Vec2) -> Self {
        Self {
            config,
            pos: start,
            vel: Vec2::ZERO,
            target: start,
        }
    }

    #[inline]
    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    /// Jump straight to `pos` with no motion left over.
    pub fn snap_to(&mut self, pos: Vec2) {
        self.pos = pos;
        self.target = pos;
        self.vel = Vec2::ZERO;
    }

    pub fn step(&mut self, dt_sec: f32) {
        let mut remaining = dt_sec.clamp(0.0, SPRING_MAX_DT_SEC);
        let SpringConfig {
            stiffness,
            damping,
            mass,
        } = self.config;
        while remaining > 0.0 {
            let h = remaining.min(SPRING_SUBSTEP_SEC);
            let force = (self.target - self.pos) * stiffness - self.vel * damping;
            self.vel += force / mass * h;
            self.pos += self.vel * h;
            remaining -= h;
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.vel
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{MAIN_SPRING, TRAIL_SPRING};

    #[test]
    fn settles_on_target() {
        for cfg in [MAIN_SPRING, TRAIL_SPRING] {
            let mut s = SpringFollower::new(SpringConfig::from_array(cfg), Vec2::ZERO);
            s.set_target(Vec2::new(300.0, -120.0));
            for _ in 0..240 {
                s.step(1.0 / 60.0);
            }
            assert!(s.position().distance(s.target()) < 0.5, "{:?}", s.position());
        }
    }

    #[test]
    fn huge_dt_is_clamped() {
        let mut s = SpringFollower::new(SpringConfig::from_array(MAIN_SPRING), Vec2::ZERO);
        s.set_target(Vec2::new(100.0, 0.0));
        s.step(30.0);
        assert!(s.position().is_finite());
        assert!(s.position().x.abs() < 200.0);
    }

    #[test]
    fn trail_lags_main() {
        let mut main = SpringFollower::new(SpringConfig::from_array(MAIN_SPRING), Vec2::ZERO);
        let mut trail = SpringFollower::new(SpringConfig::from_array(TRAIL_SPRING), Vec2::ZERO);
        let t = Vec2::new(100.0, 0.0);
        main.set_target(t);
        trail.set_target(t);
        for _ in 0..3 {
            main.step(1.0 / 60.0);
            trail.step(1.0 / 60.0);
        }
        assert!(main.position().x > trail.position().x);
    }
}
