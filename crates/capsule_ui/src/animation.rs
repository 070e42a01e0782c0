//! Animation for the selector slide and label color blends.
//!
//! A single retargetable scalar: the host advances it with delta time, the
//! control points it at a new target whenever the selection changes. A
//! retarget while a slide is in flight restarts the interpolation from the
//! current value (last-write-wins); nothing is queued.

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation.
    Linear,
    /// Exponential ease-out (fast start, snap to target).
    #[default]
    ExponentialOut,
    /// Exponential ease-in (accelerating).
    ExponentialIn,
    /// Exponential ease-in-out (the selector slide).
    ExponentialInOut,
    /// Instant (no animation).
    Instant,
}

impl Easing {
    /// Applies the easing function to a t value (0-1).
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::ExponentialOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
            Self::ExponentialIn => {
                if t <= 0.0 {
                    0.0
                } else {
                    2.0_f32.powf(10.0 * (t - 1.0))
                }
            }
            Self::ExponentialInOut => {
                if t <= 0.0 {
                    0.0
                } else if t >= 1.0 {
                    1.0
                } else if t < 0.5 {
                    2.0_f32.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2.0_f32.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
            Self::Instant => 1.0,
        }
    }
}

/// A retargetable animated scalar.
///
/// Tracks where the transition started (`from`), where it is heading (`to`),
/// and how much of the duration has elapsed. The eased value is cached on
/// every [`Animation::update`] so reads are free.
#[derive(Debug, Clone)]
pub struct Animation {
    /// Value the current transition started from.
    from: f32,
    /// Value the current transition is heading toward.
    to: f32,
    /// Cached eased value as of the last update.
    value: f32,
    /// Seconds elapsed since the transition started.
    elapsed: f32,
    /// Transition duration in seconds.
    duration: f32,
    /// Easing applied to `elapsed / duration`.
    easing: Easing,
}

impl Animation {
    /// Default animation duration in seconds.
    pub const DEFAULT_DURATION: f32 = 0.15;

    /// Creates a new animation resting at the given value.
    #[must_use]
    pub fn new(value: f32, easing: Easing) -> Self {
        Self {
            from: value,
            to: value,
            value,
            elapsed: Self::DEFAULT_DURATION,
            duration: Self::DEFAULT_DURATION,
            easing,
        }
    }

    /// Creates an animation with custom duration.
    #[must_use]
    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self.elapsed = duration;
        self
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Returns the value the animation is heading toward.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Returns true if the animation is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Points the animation at a new target.
    ///
    /// Interpolation restarts from the current value, so a retarget while a
    /// previous transition is still in flight takes over smoothly. Setting
    /// the target it already has is a no-op.
    pub fn set_target(&mut self, target: f32) {
        if (target - self.to).abs() <= 0.0001 {
            return;
        }
        if self.duration <= 0.0 {
            self.set_immediate(target);
            return;
        }

        self.from = self.value;
        self.to = target;
        self.elapsed = 0.0;
    }

    /// Immediately sets the value without animation.
    pub fn set_immediate(&mut self, value: f32) {
        self.from = value;
        self.to = value;
        self.value = value;
        self.elapsed = self.duration;
    }

    /// Advances the animation by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if self.is_complete() {
            return;
        }

        self.elapsed = (self.elapsed + dt).min(self.duration);

        if self.is_complete() {
            self.value = self.to;
        } else {
            let eased = self.easing.apply(self.elapsed / self.duration);
            self.value = self.from + (self.to - self.from) * eased;
        }
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::new(0.0, Easing::ExponentialOut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_reaches_target() {
        let mut anim = Animation::new(0.0, Easing::ExponentialInOut).with_duration(0.4);
        anim.set_target(100.0);

        for _ in 0..40 {
            anim.update(0.016); // ~60fps
        }

        assert!((anim.value() - 100.0).abs() < 0.01);
        assert!(anim.is_complete());
    }

    #[test]
    fn test_retarget_in_flight_restarts_from_current() {
        let mut anim = Animation::new(0.0, Easing::Linear).with_duration(1.0);
        anim.set_target(100.0);
        anim.update(0.5);

        let midway = anim.value();
        assert!((midway - 50.0).abs() < 0.01);

        // Last write wins: the new slide starts where the old one was.
        anim.set_target(0.0);
        assert!(!anim.is_complete());
        anim.update(1.0);

        assert!((anim.value() - 0.0).abs() < 0.01);
        assert!(anim.is_complete());
    }

    #[test]
    fn test_idempotent_retarget_does_not_restart() {
        let mut anim = Animation::new(25.0, Easing::Linear);
        anim.set_target(25.0);

        assert!(anim.is_complete());
        assert!((anim.value() - 25.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_zero_duration_snaps() {
        let mut anim = Animation::new(0.0, Easing::Instant).with_duration(0.0);
        anim.set_target(10.0);

        assert!(anim.is_complete());
        assert!((anim.value() - 10.0).abs() < f32::EPSILON);
    }
}
