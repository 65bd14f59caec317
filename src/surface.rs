// SPDX-License-Identifier: MPL-2.0
//! Per-region toast slot.
//!
//! A `Surface` is the state a host region owns for its toast: at most one
//! toast is attached at a time, and presenting a new one evicts the old one
//! synchronously without playing its fade-out.

use crate::animation::Animation;
use crate::toast::Toast;
use std::time::Instant;

/// A toast together with its running animation and the opacity snapshot the
/// last tick produced for the view.
#[derive(Debug)]
struct ActiveToast {
    toast: Toast,
    animation: Animation,
    opacity: f32,
}

/// Host-owned state for one toast-capable region.
#[derive(Debug, Default)]
pub struct Surface {
    active: Option<ActiveToast>,
}

impl Surface {
    /// Creates an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a toast, starting its animation at opacity 0.
    ///
    /// Any toast already attached is removed immediately, without its
    /// fade-out; overlapping toasts in the same place don't look good.
    /// Returns as soon as the slot is updated; the animation itself runs
    /// on subsequent [`tick`](Self::tick) calls.
    pub fn present(&mut self, toast: Toast) {
        if self.active.is_some() {
            log::debug!("evicting active toast in favor of a newer one");
        }
        let animation = Animation::new(Instant::now(), toast.duration().hold());
        self.active = Some(ActiveToast {
            toast,
            animation,
            opacity: 0.0,
        });
    }

    /// Advances the animation to `now`, detaching the toast once its
    /// fade-out has completed.
    pub fn tick(&mut self, now: Instant) {
        let Some(active) = &mut self.active else {
            return;
        };
        active.animation.advance(now);
        if active.animation.is_done() {
            log::trace!("toast fade-out complete, detaching");
            self.active = None;
        } else {
            active.opacity = active.animation.opacity(now);
        }
    }

    /// Returns the attached toast, if any.
    #[must_use]
    pub fn toast(&self) -> Option<&Toast> {
        self.active.as_ref().map(|active| &active.toast)
    }

    /// Returns the toast's current opacity, or 0 when none is attached.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.active.as_ref().map_or(0.0, |active| active.opacity)
    }

    /// Returns whether a toast is currently attached.
    #[must_use]
    pub fn has_toast(&self) -> bool {
        self.active.is_some()
    }
}
