//! Decorative background pattern
//!
//! Purely visual: the rings never interact with gameplay.

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::consts::*;
use crate::palette::{BALL_COLORS, Rgb};

/// A single outlined circle in the pattern
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    pub center: Vec2,
    pub radius: u32,
    pub color: Rgb,
}

/// Static pattern of dim rings, regenerated only when a session resets
#[derive(Debug, Clone, PartialEq)]
pub struct Background {
    pub rings: Vec<Ring>,
    /// Bumped on every regeneration so cached geometry can be invalidated
    pub generation: u32,
}

impl Background {
    pub fn generate<R: Rng>(rng: &mut R, generation: u32) -> Self {
        let rings = (0..BACKGROUND_RINGS)
            .map(|_| {
                let center = Vec2::new(
                    rng.random_range(0..=SCREEN_WIDTH as u32) as f32,
                    rng.random_range(0..=SCREEN_HEIGHT as u32) as f32,
                );
                let radius = rng.random_range(BACKGROUND_MIN_RADIUS..=BACKGROUND_MAX_RADIUS);
                let color = *BALL_COLORS.choose(rng).unwrap_or(&BALL_COLORS[0]);
                Ring {
                    center,
                    radius,
                    color,
                }
            })
            .collect();

        Self { rings, generation }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_pattern_shape() {
        let mut rng = Pcg32::seed_from_u64(1);
        let bg = Background::generate(&mut rng, 3);
        assert_eq!(bg.generation, 3);
        assert_eq!(bg.rings.len(), BACKGROUND_RINGS);
        for ring in &bg.rings {
            assert!((BACKGROUND_MIN_RADIUS..=BACKGROUND_MAX_RADIUS).contains(&ring.radius));
            assert!(ring.center.x <= SCREEN_WIDTH && ring.center.y <= SCREEN_HEIGHT);
        }
    }

    #[test]
    fn test_same_seed_same_pattern() {
        let a = Background::generate(&mut Pcg32::seed_from_u64(42), 0);
        let b = Background::generate(&mut Pcg32::seed_from_u64(42), 0);
        assert_eq!(a, b);
    }
}
