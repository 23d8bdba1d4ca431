//! Sarcastic confetti particles
//!
//! Pure particle simulation stepped once per animation frame; the canvas
//! stage only draws what lives here.

use glam::DVec2;
use rand::Rng;

/// Particles spawned per burst
pub const BURST_SIZE: usize = 50;
/// Hard cap across overlapping bursts
pub const MAX_CONFETTI: usize = 400;

/// Downward acceleration per frame (pixels/frame²)
const GRAVITY: f64 = 0.1;
/// Life lost per frame
const FADE: f64 = 0.02;

pub const PALETTE: [&str; 5] = ["#ff6b6b", "#4ecdc4", "#ffe66d", "#95e1d3", "#f38181"];

#[derive(Debug, Clone)]
pub struct Confetto {
    pub pos: DVec2,
    pub vel: DVec2,
    pub size: f64,
    /// Index into `PALETTE`
    pub color: usize,
    /// Degrees
    pub rotation: f64,
    pub spin: f64,
    /// 1.0 fresh, 0.0 gone
    pub life: f64,
}

#[derive(Debug, Clone, Default)]
pub struct ConfettiField {
    pub particles: Vec<Confetto>,
}

impl ConfettiField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Drop a burst from just above the top edge of a `width`-wide viewport
    pub fn burst<R: Rng>(&mut self, width: f64, rng: &mut R) {
        let room = MAX_CONFETTI.saturating_sub(self.particles.len());
        for _ in 0..BURST_SIZE.min(room) {
            self.particles.push(Confetto {
                pos: DVec2::new(rng.random::<f64>() * width, -10.0),
                vel: DVec2::new(
                    (rng.random::<f64>() - 0.5) * 4.0,
                    rng.random::<f64>() * 3.0 + 2.0,
                ),
                size: rng.random::<f64>() * 8.0 + 4.0,
                color: rng.random_range(0..PALETTE.len()),
                rotation: rng.random::<f64>() * 360.0,
                spin: (rng.random::<f64>() - 0.5) * 10.0,
                life: 1.0,
            });
        }
    }

    /// Advance one frame, culling faded or fallen particles
    pub fn step(&mut self, height: f64) {
        for p in self.particles.iter_mut() {
            p.pos += p.vel;
            p.vel.y += GRAVITY;
            p.rotation += p.spin;
            p.life -= FADE;
        }
        self.particles.retain(|p| p.life > 0.0 && p.pos.y <= height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_burst_spawns_above_viewport() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut field = ConfettiField::new();
        field.burst(800.0, &mut rng);
        assert_eq!(field.particles.len(), BURST_SIZE);
        for p in &field.particles {
            assert!(p.pos.x >= 0.0 && p.pos.x <= 800.0);
            assert!(p.pos.y < 0.0);
            assert!(p.vel.y >= 2.0);
        }
    }

    #[test]
    fn test_particles_fade_out() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut field = ConfettiField::new();
        field.burst(800.0, &mut rng);
        // Life drains in 50 frames regardless of position
        for _ in 0..51 {
            field.step(1.0e6);
        }
        assert!(field.is_empty());
    }

    #[test]
    fn test_burst_respects_cap() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut field = ConfettiField::new();
        for _ in 0..20 {
            field.burst(100.0, &mut rng);
        }
        assert_eq!(field.particles.len(), MAX_CONFETTI);
    }
}
