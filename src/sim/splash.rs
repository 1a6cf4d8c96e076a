//! Splash particles for a cannonball landing in the pool
//!
//! A splash has two parts: a ring of water fanning up and out from the impact
//! (radial drops), then a fast jet shooting straight up moments later (jet
//! drops). Drops use simple per-frame Newtonian integration, unlike the
//! cannonball which follows closed-form kinematics.

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Drops emitted per part of the splash
pub const RADIAL_DROP_COUNT: u32 = 50;
pub const JET_DROP_COUNT: u32 = 50;
/// Jet starts once fewer radial drops than this remain to be emitted
pub const JET_DELAY_REMAINING: u32 = 5;

/// Gravity for drops (per frame², before mass scaling)
pub const DROP_GRAVITY: f64 = 0.02;
pub const DROP_MASS: f64 = 8.0;
pub const DROP_TIME_TO_LIVE: f64 = 255.0;
/// Fade per frame
pub const DROP_DECAY: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropKind {
    /// Part of the ring: small random sideways drift
    Radial,
    /// Part of the jet: straight up, faster
    Jet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterDrop {
    pub kind: DropKind,
    pub position: DVec2,
    pub velocity: DVec2,
    pub acceleration: DVec2,
    /// Counts down from 255; usable as alpha when drawing
    pub time_to_live: f64,
    pub mass: f64,
}

impl WaterDrop {
    pub fn new<R: Rng>(kind: DropKind, origin: DVec2, rng: &mut R) -> Self {
        let velocity = match kind {
            DropKind::Radial => DVec2::new(rng.random_range(-0.2..0.2), -0.6),
            DropKind::Jet => DVec2::new(0.0, -0.9),
        };
        Self {
            kind,
            position: origin,
            velocity,
            acceleration: DVec2::ZERO,
            time_to_live: DROP_TIME_TO_LIVE,
            mass: DROP_MASS,
        }
    }

    /// F = ma
    pub fn apply_force(&mut self, force: DVec2) {
        self.acceleration += force / self.mass;
    }

    pub fn update(&mut self) {
        self.velocity += self.acceleration;
        self.position += self.velocity;
        self.acceleration = DVec2::ZERO;
        self.time_to_live -= DROP_DECAY;
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.time_to_live < 0.0
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Splash {
    pub origin: DVec2,
    pub drops: Vec<WaterDrop>,
    radial_remaining: u32,
    jet_remaining: u32,
}

impl Splash {
    /// Start a splash at the impact point
    pub fn trigger(&mut self, origin: DVec2) {
        self.origin = origin;
        self.radial_remaining = RADIAL_DROP_COUNT;
        self.jet_remaining = JET_DROP_COUNT;
    }

    /// Drop everything, including drops not yet emitted
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True while drops are alive or still waiting to be emitted
    pub fn is_active(&self) -> bool {
        !self.drops.is_empty() || self.radial_remaining > 0 || self.jet_remaining > 0
    }

    /// Advance one animation frame: emit, apply gravity, move, cull
    pub fn step<R: Rng>(&mut self, rng: &mut R) {
        self.emit(rng);

        for drop in &mut self.drops {
            let weight = DVec2::new(0.0, DROP_GRAVITY) * drop.mass;
            drop.apply_force(weight);
        }

        for drop in &mut self.drops {
            drop.update();
        }
        self.drops.retain(|d| !d.is_dead());
    }

    fn emit<R: Rng>(&mut self, rng: &mut R) {
        if self.radial_remaining > 0 {
            self.drops.push(WaterDrop::new(DropKind::Radial, self.origin, rng));
            self.radial_remaining -= 1;
        }
        if self.radial_remaining < JET_DELAY_REMAINING && self.jet_remaining > 0 {
            self.drops.push(WaterDrop::new(DropKind::Jet, self.origin, rng));
            self.jet_remaining -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_idle_splash_does_nothing() {
        let mut splash = Splash::default();
        let mut rng = Pcg32::seed_from_u64(1);
        assert!(!splash.is_active());
        splash.step(&mut rng);
        assert!(splash.drops.is_empty());
    }

    #[test]
    fn test_radial_drops_come_first() {
        let mut splash = Splash::default();
        let mut rng = Pcg32::seed_from_u64(1);
        splash.trigger(DVec2::new(402.0, 345.0));

        for _ in 0..45 {
            splash.step(&mut rng);
        }
        assert_eq!(splash.drops.len(), 45);
        assert!(splash.drops.iter().all(|d| d.kind == DropKind::Radial));

        // 46th frame leaves 4 radial drops to emit, so the jet starts
        splash.step(&mut rng);
        assert_eq!(splash.drops.len(), 47);
        assert_eq!(splash.drops.last().map(|d| d.kind), Some(DropKind::Jet));
    }

    #[test]
    fn test_radial_drift_is_bounded() {
        let mut splash = Splash::default();
        let mut rng = Pcg32::seed_from_u64(9);
        splash.trigger(DVec2::new(0.0, 0.0));
        for _ in 0..RADIAL_DROP_COUNT {
            splash.step(&mut rng);
        }
        for drop in splash.drops.iter().filter(|d| d.kind == DropKind::Radial) {
            assert!(drop.velocity.x >= -0.2 && drop.velocity.x < 0.2);
        }
    }

    #[test]
    fn test_jet_goes_straight_up_then_falls() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut drop = WaterDrop::new(DropKind::Jet, DVec2::new(10.0, 100.0), &mut rng);
        let weight = DVec2::new(0.0, DROP_GRAVITY) * drop.mass;

        drop.apply_force(weight);
        drop.update();
        assert_eq!(drop.position.x, 10.0);
        assert!(drop.position.y < 100.0);
        assert!((drop.velocity.y - (-0.9 + DROP_GRAVITY)).abs() < 1e-12);

        for _ in 0..60 {
            drop.apply_force(weight);
            drop.update();
        }
        assert!(drop.velocity.y > 0.0);
        assert_eq!(drop.acceleration, DVec2::ZERO);
    }

    #[test]
    fn test_drop_dies_after_fading() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut drop = WaterDrop::new(DropKind::Radial, DVec2::ZERO, &mut rng);
        for _ in 0..85 {
            drop.update();
        }
        assert!(!drop.is_dead());
        drop.update();
        assert!(drop.is_dead());
    }

    #[test]
    fn test_splash_runs_out() {
        let mut splash = Splash::default();
        let mut rng = Pcg32::seed_from_u64(5);
        splash.trigger(DVec2::new(402.0, 345.0));
        let mut peak = 0;
        for _ in 0..200 {
            splash.step(&mut rng);
            peak = peak.max(splash.drops.len());
        }
        assert!(peak > 50);
        assert!(!splash.is_active());
        assert!(splash.drops.is_empty());
    }

    #[test]
    fn test_clear_stops_pending_emission() {
        let mut splash = Splash::default();
        let mut rng = Pcg32::seed_from_u64(5);
        splash.trigger(DVec2::new(1.0, 2.0));
        splash.step(&mut rng);
        splash.clear();
        assert!(!splash.is_active());
        splash.step(&mut rng);
        assert!(splash.drops.is_empty());
    }
}
