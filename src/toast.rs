// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `Toast` struct together with the `ToastSize`
//! and `ToastDuration` enums that select its text scale and hold time.

use crate::design_tokens::typography;
use std::time::Duration;

/// Text scale of a toast message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastSize {
    /// Body-sized text for short confirmations.
    Small,
    /// Medium title text.
    #[default]
    Normal,
    /// Large title text for messages that must not be missed.
    Large,
}

impl ToastSize {
    /// Resolves this size to a point size from the typographic scale.
    ///
    /// The mapping is the crate's single style-resolution point; the widget
    /// never branches on `ToastSize` itself.
    #[must_use]
    pub fn text_size(self) -> f32 {
        match self {
            ToastSize::Small => typography::BODY,
            ToastSize::Normal => typography::TITLE_MD,
            ToastSize::Large => typography::TITLE_LG,
        }
    }
}

/// How long a toast holds at peak opacity before fading out.
///
/// Only the hold window varies; the fade-in and fade-out lengths are fixed
/// (see [`crate::design_tokens::timing`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastDuration {
    /// 0.6 seconds.
    Short,
    /// 2 seconds.
    #[default]
    Normal,
    /// 3.5 seconds.
    Long,
}

impl ToastDuration {
    /// Returns the hold time at peak opacity.
    #[must_use]
    pub fn hold(self) -> Duration {
        match self {
            ToastDuration::Short => Duration::from_millis(600),
            ToastDuration::Normal => Duration::from_millis(2000),
            ToastDuration::Long => Duration::from_millis(3500),
        }
    }
}

/// A toast message to be displayed on a surface.
#[derive(Debug, Clone)]
pub struct Toast {
    /// The text to display. May wrap to multiple lines.
    message: String,
    /// Text scale.
    size: ToastSize,
    /// Hold time before the fade-out begins.
    duration: ToastDuration,
}

impl Toast {
    /// Creates a toast with the default size and duration.
    ///
    /// The message is arbitrary text; the empty string is accepted and
    /// produces a degenerate but non-erroring toast.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            size: ToastSize::default(),
            duration: ToastDuration::default(),
        }
    }

    /// Sets the text scale.
    #[must_use]
    pub fn with_size(mut self, size: ToastSize) -> Self {
        self.size = size;
        self
    }

    /// Sets the hold time before the fade-out begins.
    #[must_use]
    pub fn with_duration(mut self, duration: ToastDuration) -> Self {
        self.duration = duration;
        self
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the text scale.
    #[must_use]
    pub fn size(&self) -> ToastSize {
        self.size
    }

    /// Returns the configured duration.
    #[must_use]
    pub fn duration(&self) -> ToastDuration {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_sizes_are_distinct_and_ordered() {
        let small = ToastSize::Small.text_size();
        let normal = ToastSize::Normal.text_size();
        let large = ToastSize::Large.text_size();

        assert!(small < normal);
        assert!(normal < large);
    }

    #[test]
    fn holds_are_ordered() {
        assert!(ToastDuration::Short.hold() < ToastDuration::Normal.hold());
        assert!(ToastDuration::Normal.hold() < ToastDuration::Long.hold());
    }

    #[test]
    fn hold_values_match_the_documented_seconds() {
        assert_eq!(ToastDuration::Short.hold(), Duration::from_millis(600));
        assert_eq!(ToastDuration::Normal.hold(), Duration::from_secs(2));
        assert_eq!(ToastDuration::Long.hold(), Duration::from_millis(3500));
    }

    #[test]
    fn defaults_are_normal() {
        let toast = Toast::new("saved");
        assert_eq!(toast.size(), ToastSize::Normal);
        assert_eq!(toast.duration(), ToastDuration::Normal);
    }

    #[test]
    fn builder_pattern_works() {
        let toast = Toast::new("uploading finished")
            .with_size(ToastSize::Large)
            .with_duration(ToastDuration::Long);

        assert_eq!(toast.message(), "uploading finished");
        assert_eq!(toast.size(), ToastSize::Large);
        assert_eq!(toast.duration(), ToastDuration::Long);
    }

    #[test]
    fn empty_message_is_accepted() {
        let toast = Toast::new("");
        assert_eq!(toast.message(), "");
    }
}
