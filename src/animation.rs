// SPDX-License-Identifier: MPL-2.0
//! The toast opacity lifecycle.
//!
//! A toast runs through two animated phases: a fixed-length fade-in to peak
//! opacity, then, after holding for the configured duration, a fixed-length
//! ease-out fade to zero. Phases are chained on completion: each phase's
//! entry instant is its predecessor's entry plus the predecessor's exact
//! length, so the timeline does not drift when ticks arrive late.

use crate::design_tokens::{opacity, timing};
use std::time::{Duration, Instant};

/// Lifecycle stage of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Opacity rising from 0 to peak.
    FadeIn,
    /// Pinned at peak opacity for the configured hold.
    Hold,
    /// Opacity easing from peak back to 0.
    FadeOut,
    /// Finished; the toast should be detached.
    Done,
}

/// Tracks the current phase of one toast's animation.
#[derive(Debug, Clone)]
pub struct Animation {
    phase: Phase,
    /// Instant the current phase was entered.
    entered: Instant,
    /// Hold window at peak opacity.
    hold: Duration,
}

impl Animation {
    /// Starts a new animation in the fade-in phase.
    ///
    /// A zero `hold` is accepted; the hold phase then completes on the next
    /// advance and the toast goes straight into its fade-out.
    #[must_use]
    pub fn new(now: Instant, hold: Duration) -> Self {
        Self {
            phase: Phase::FadeIn,
            entered: now,
            hold,
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns whether the fade-out has completed.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Length of the current phase, or `None` once done.
    fn phase_len(&self) -> Option<Duration> {
        match self.phase {
            Phase::FadeIn => Some(timing::FADE_IN),
            Phase::Hold => Some(self.hold),
            Phase::FadeOut => Some(timing::FADE_OUT),
            Phase::Done => None,
        }
    }

    /// Advances past every phase that has completed by `now`.
    ///
    /// Transitions carry the entry instant forward by the finished phase's
    /// exact length rather than stamping `now`, so a single late call may
    /// cross several boundaries and still land on the correct timeline.
    pub fn advance(&mut self, now: Instant) {
        while let Some(len) = self.phase_len() {
            if now.saturating_duration_since(self.entered) < len {
                break;
            }
            self.entered += len;
            self.phase = match self.phase {
                Phase::FadeIn => Phase::Hold,
                Phase::Hold => Phase::FadeOut,
                Phase::FadeOut | Phase::Done => Phase::Done,
            };
        }
    }

    /// Current opacity as a pure function of the phase timeline and `now`.
    ///
    /// Call [`advance`](Self::advance) first; a stale phase reports the
    /// opacity that phase had at `now`, clamped to its own range.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::FadeIn => opacity::TOAST_PEAK * ease_in_out(self.progress(now, timing::FADE_IN)),
            Phase::Hold => opacity::TOAST_PEAK,
            Phase::FadeOut => {
                opacity::TOAST_PEAK * (1.0 - ease_out(self.progress(now, timing::FADE_OUT)))
            }
            Phase::Done => opacity::TRANSPARENT,
        }
    }

    /// Fraction of the current phase elapsed at `now`, clamped to [0, 1].
    fn progress(&self, now: Instant, len: Duration) -> f32 {
        if len.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.entered).as_secs_f32();
        (elapsed / len.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// Cubic ease-in-out over [0, 1].
fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Cubic ease-out over [0, 1].
fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOLD: Duration = Duration::from_secs(2);

    fn at(start: Instant, millis: u64) -> Instant {
        start + Duration::from_millis(millis)
    }

    #[test]
    fn starts_invisible_in_fade_in() {
        let start = Instant::now();
        let anim = Animation::new(start, HOLD);

        assert_eq!(anim.phase(), Phase::FadeIn);
        assert_eq!(anim.opacity(start), 0.0);
    }

    #[test]
    fn fade_in_completion_enters_hold_at_peak() {
        let start = Instant::now();
        let mut anim = Animation::new(start, HOLD);

        anim.advance(at(start, 100));
        assert_eq!(anim.phase(), Phase::Hold);
        assert_eq!(anim.opacity(at(start, 100)), opacity::TOAST_PEAK);
    }

    #[test]
    fn opacity_rises_monotonically_during_fade_in() {
        let start = Instant::now();
        let anim = Animation::new(start, HOLD);

        let mut last = -1.0;
        for millis in [0, 20, 40, 60, 80, 100] {
            let value = anim.opacity(at(start, millis));
            assert!(value >= last, "opacity regressed at {millis}ms");
            assert!(value <= opacity::TOAST_PEAK);
            last = value;
        }
        assert_eq!(last, opacity::TOAST_PEAK);
    }

    #[test]
    fn holds_peak_for_the_configured_window() {
        let start = Instant::now();
        let mut anim = Animation::new(start, HOLD);

        // Just before the hold ends: still pinned at peak.
        anim.advance(at(start, 2099));
        assert_eq!(anim.phase(), Phase::Hold);
        assert_eq!(anim.opacity(at(start, 2099)), opacity::TOAST_PEAK);

        // Exactly at fade-in + hold: the fade-out begins.
        anim.advance(at(start, 2100));
        assert_eq!(anim.phase(), Phase::FadeOut);
    }

    #[test]
    fn fade_out_onset_tracks_the_hold_length() {
        let start = Instant::now();

        let mut short = Animation::new(start, Duration::from_millis(600));
        let mut long = Animation::new(start, Duration::from_millis(3500));

        // 0.1s fade-in + 0.6s hold has elapsed: short fades, long holds.
        short.advance(at(start, 700));
        long.advance(at(start, 700));
        assert_eq!(short.phase(), Phase::FadeOut);
        assert_eq!(long.phase(), Phase::Hold);

        long.advance(at(start, 3600));
        assert_eq!(long.phase(), Phase::FadeOut);
    }

    #[test]
    fn late_tick_does_not_shift_the_timeline() {
        let start = Instant::now();
        let mut anim = Animation::new(start, HOLD);

        // First observation arrives 600ms into the fade-out. The phase
        // machine must cross fade-in and hold in one call and report the
        // mid-fade opacity, not restart the fade-out at the tick instant.
        anim.advance(at(start, 2700));
        assert_eq!(anim.phase(), Phase::FadeOut);
        let opacity = anim.opacity(at(start, 2700));
        assert!(opacity > 0.0);
        assert!(opacity < opacity::TOAST_PEAK);
    }

    #[test]
    fn completes_after_fade_in_hold_and_fade_out() {
        let start = Instant::now();
        let mut anim = Animation::new(start, HOLD);

        anim.advance(at(start, 3299));
        assert_eq!(anim.phase(), Phase::FadeOut);

        anim.advance(at(start, 3300));
        assert!(anim.is_done());
        assert_eq!(anim.opacity(at(start, 3300)), 0.0);
    }

    #[test]
    fn zero_hold_runs_all_phases() {
        let start = Instant::now();
        let mut anim = Animation::new(start, Duration::ZERO);

        anim.advance(at(start, 100));
        assert_eq!(anim.phase(), Phase::FadeOut);

        anim.advance(at(start, 1300));
        assert!(anim.is_done());
    }

    #[test]
    fn opacity_never_exceeds_peak() {
        let start = Instant::now();
        let mut anim = Animation::new(start, HOLD);

        for millis in (0..3400).step_by(50) {
            anim.advance(at(start, millis));
            assert!(anim.opacity(at(start, millis)) <= opacity::TOAST_PEAK);
        }
    }

    #[test]
    fn easing_curves_hit_their_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
    }

    #[test]
    fn ease_out_decelerates() {
        // An ease-out curve covers more ground in its first half.
        assert!(ease_out(0.5) > 0.5);
    }
}
