// SPDX-License-Identifier: MPL-2.0
//! Surface registry and global entry point.
//!
//! The `Presenter` owns every toast-capable surface the host registers,
//! tracks which one is focused, and fans ticks out to all of them. The
//! focused surface is what `present_global` resolves to; without one the
//! call is a silent no-op.

use crate::design_tokens::timing;
use crate::surface::Surface;
use crate::toast::Toast;
use iced::Subscription;
use std::collections::HashMap;
use std::time::Instant;

/// Unique identifier for a registered surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(u64);

impl SurfaceId {
    fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Manages toast surfaces and the focused-surface lookup.
#[derive(Debug, Default)]
pub struct Presenter {
    surfaces: HashMap<SurfaceId, Surface>,
    focused: Option<SurfaceId>,
}

impl Presenter {
    /// Creates a presenter with no surfaces.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new empty surface and focuses it.
    pub fn register(&mut self) -> SurfaceId {
        let id = SurfaceId::next();
        self.surfaces.insert(id, Surface::new());
        self.focused = Some(id);
        id
    }

    /// Removes a surface, dropping any toast it holds.
    ///
    /// If the removed surface was focused, focus is cleared; global
    /// presents then no-op until another surface takes focus.
    pub fn unregister(&mut self, id: SurfaceId) {
        if self.surfaces.remove(&id).is_some() && self.focused == Some(id) {
            self.focused = None;
        }
    }

    /// Focuses a surface. Unknown ids are ignored.
    pub fn focus(&mut self, id: SurfaceId) {
        if self.surfaces.contains_key(&id) {
            self.focused = Some(id);
        }
    }

    /// Returns the focused surface id, if any.
    #[must_use]
    pub fn focused(&self) -> Option<SurfaceId> {
        self.focused
    }

    /// Returns a registered surface.
    #[must_use]
    pub fn surface(&self, id: SurfaceId) -> Option<&Surface> {
        self.surfaces.get(&id)
    }

    /// Presents a toast on the given surface, evicting any prior toast
    /// there synchronously.
    ///
    /// Fire-and-forget: the call returns once the slot is updated. A toast
    /// aimed at an unregistered id is dropped.
    pub fn present(&mut self, id: SurfaceId, toast: Toast) {
        match self.surfaces.get_mut(&id) {
            Some(surface) => surface.present(toast),
            None => log::debug!("present on unregistered surface {id:?}, dropping toast"),
        }
    }

    /// Presents a toast on the focused surface.
    ///
    /// With no focused surface the toast is dropped silently; nothing is
    /// raised and nothing is logged above debug level.
    pub fn present_global(&mut self, toast: Toast) {
        let Some(id) = self.focused else {
            log::debug!("present_global without a focused surface, dropping toast");
            return;
        };
        self.present(id, toast);
    }

    /// Advances every surface's animation, detaching finished toasts.
    pub fn tick(&mut self, now: Instant) {
        for surface in self.surfaces.values_mut() {
            surface.tick(now);
        }
    }

    /// Returns whether any surface currently holds a toast.
    #[must_use]
    pub fn has_toasts(&self) -> bool {
        self.surfaces.values().any(Surface::has_toast)
    }

    /// Periodic tick subscription, gated on activity.
    ///
    /// While no toast is live this is `Subscription::none()`, so an idle
    /// application schedules no wakeups. Map the emitted instants into the
    /// host message type and feed them back through [`tick`](Self::tick).
    pub fn subscription(&self) -> Subscription<Instant> {
        if self.has_toasts() {
            iced::time::every(timing::TICK)
        } else {
            Subscription::none()
        }
    }
}
