//! Frame pacing and wall-clock deltas

use std::time::{Duration, Instant};

/// Paces the loop to a fixed frame rate and measures real time between frames
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_duration: Duration,
    next_frame: Instant,
    last_tick: Instant,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self::starting_at(fps, Instant::now())
    }

    pub fn starting_at(fps: u32, now: Instant) -> Self {
        Self {
            frame_duration: Duration::from_secs_f64(1.0 / fps.max(1) as f64),
            next_frame: now,
            last_tick: now,
        }
    }

    /// When the next frame should run
    pub fn deadline(&self) -> Instant {
        self.next_frame
    }

    pub fn frame_due(&self, now: Instant) -> bool {
        now >= self.next_frame
    }

    /// Mark a frame as started: schedule the next deadline and return the
    /// seconds elapsed since the previous frame.
    pub fn tick(&mut self, now: Instant) -> f32 {
        self.next_frame += self.frame_duration;
        // Fell behind (window drag, breakpoint): don't try to catch up
        if self.next_frame < now {
            self.next_frame = now + self.frame_duration;
        }

        let dt = now.saturating_duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steady_pacing() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(50, start);
        assert!(clock.frame_due(start));

        let dt = clock.tick(start);
        assert_eq!(dt, 0.0);
        assert_eq!(clock.deadline(), start + Duration::from_millis(20));
        assert!(!clock.frame_due(start + Duration::from_millis(19)));
        assert!(clock.frame_due(start + Duration::from_millis(20)));

        let dt = clock.tick(start + Duration::from_millis(20));
        assert!((dt - 0.02).abs() < 1e-6);
        assert_eq!(clock.deadline(), start + Duration::from_millis(40));
    }

    #[test]
    fn test_falling_behind_does_not_burst() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(50, start);
        clock.tick(start);

        let late = start + Duration::from_secs(1);
        let dt = clock.tick(late);
        // Real elapsed time is reported in full
        assert!((dt - 1.0).abs() < 1e-6);
        assert_eq!(clock.deadline(), late + Duration::from_millis(20));
    }
}
