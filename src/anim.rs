//! Easing curves and time-based tweens for the hero overlay.

/// Easing curves used by the entrance animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    Linear,
    Power2Out,
    Power3Out,
    ExpoOut,
    Power2InOut,
}

impl Ease {
    /// Maps linear progress `x ∈ [0, 1]` onto the curve.
    pub fn apply(&self, x: f32) -> f32 {
        let x = x.clamp(0.0, 1.0);
        match self {
            Ease::Linear => x,
            Ease::Power2Out => 1.0 - (1.0 - x).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - x).powi(4),
            Ease::ExpoOut => {
                if x >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f32.powf(-10.0 * x)
                }
            }
            Ease::Power2InOut => {
                if x < 0.5 {
                    4.0 * x * x * x
                } else {
                    1.0 - (-2.0 * x + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// A single eased transition measured from a shared timeline origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    /// Seconds before the tween starts
    pub delay: f32,
    pub duration: f32,
    pub ease: Ease,
}

impl Tween {
    pub const fn new(delay: f32, duration: f32, ease: Ease) -> Self {
        Self {
            delay,
            duration,
            ease,
        }
    }

    /// Eased progress in `[0, 1]` at timeline time `t`.
    pub fn progress(&self, t: f32) -> f32 {
        if self.duration <= 0.0 {
            return if t >= self.delay { 1.0 } else { 0.0 };
        }
        self.ease.apply((t - self.delay) / self.duration)
    }

    /// Interpolates from `from` to `to` at timeline time `t`.
    pub fn lerp(&self, from: f32, to: f32, t: f32) -> f32 {
        from + (to - from) * self.progress(t)
    }
}

/// Builds `count` tweens starting `stagger` seconds apart.
pub fn staggered(count: usize, delay: f32, stagger: f32, duration: f32, ease: Ease) -> Vec<Tween> {
    (0..count)
        .map(|i| Tween::new(delay + i as f32 * stagger, duration, ease))
        .collect()
}

/// A number that counts up to its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Counter {
    pub target: u32,
    pub tween: Tween,
}

impl Counter {
    /// Counts over two seconds with a `power2.out` curve.
    pub const fn new(target: u32, delay: f32) -> Self {
        Self {
            target,
            tween: Tween::new(delay, 2.0, Ease::Power2Out),
        }
    }

    /// Rounded value shown at timeline time `t`.
    pub fn value(&self, t: f32) -> u32 {
        self.tween.lerp(0.0, self.target as f32, t).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 5] = [
        Ease::Linear,
        Ease::Power2Out,
        Ease::Power3Out,
        Ease::ExpoOut,
        Ease::Power2InOut,
    ];

    #[test]
    fn test_curves_hit_endpoints() {
        for ease in ALL {
            assert!(ease.apply(0.0).abs() < 1e-3, "{ease:?}");
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-6, "{ease:?}");
        }
    }

    #[test]
    fn test_curves_are_monotonic() {
        for ease in ALL {
            let mut last = ease.apply(0.0);
            for step in 1..=100 {
                let v = ease.apply(step as f32 / 100.0);
                assert!(v >= last, "{ease:?} decreased at step {step}");
                last = v;
            }
        }
    }

    #[test]
    fn test_out_curves_lead_linear() {
        assert!(Ease::Power2Out.apply(0.3) > 0.3);
        assert!(Ease::ExpoOut.apply(0.3) > Ease::Power3Out.apply(0.3) - 0.2);
        assert!((Ease::Power2InOut.apply(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_tween_respects_delay() {
        let tween = Tween::new(1.0, 2.0, Ease::Linear);
        assert_eq!(tween.progress(0.5), 0.0);
        assert!((tween.progress(2.0) - 0.5).abs() < 1e-6);
        assert_eq!(tween.progress(10.0), 1.0);
        assert!(tween.progress(2.9) < 1.0);
        assert_eq!(tween.progress(3.0), 1.0);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let tween = Tween::new(0.5, 0.0, Ease::ExpoOut);
        assert_eq!(tween.progress(0.4), 0.0);
        assert_eq!(tween.progress(0.5), 1.0);
    }

    #[test]
    fn test_staggered_offsets() {
        let tweens = staggered(3, 0.3, 0.15, 1.2, Ease::ExpoOut);
        let delays: Vec<f32> = tweens.iter().map(|t| t.delay).collect();
        assert_eq!(delays.len(), 3);
        assert!((delays[1] - 0.45).abs() < 1e-6);
        assert!((delays[2] - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_counter_reaches_target() {
        let counter = Counter::new(45, 0.5);
        assert_eq!(counter.value(0.0), 0);
        let mid = counter.value(1.5);
        assert!(mid > 0 && mid < 45);
        assert_eq!(counter.value(2.5), 45);
        assert_eq!(counter.value(100.0), 45);
    }
}
