// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` displays transient, self-dismissing toast notifications in
//! applications built with the Iced GUI framework.
//!
//! A toast fades in over the host surface, holds at peak opacity for a
//! configurable duration, then fades out and detaches itself. Presenting a
//! new toast replaces any toast already on the surface immediately, so only
//! the newest message is ever shown.
//!
//! # Components
//!
//! - [`toast`] - Core [`Toast`] struct with size and duration selection
//! - [`animation`] - The fade-in / hold / fade-out opacity lifecycle
//! - [`surface`] - [`Surface`], the single-toast slot a host region owns
//! - [`presenter`] - [`Presenter`] for surface registry and global presents
//! - [`widget`] - View construction for the bottom-anchored overlay
//! - [`design_tokens`] - Colors, typography, spacing, and timing constants
//!
//! # Usage
//!
//! ```ignore
//! use iced_toast::{widget, Presenter, Toast, ToastDuration};
//!
//! // In your application state
//! let mut presenter = Presenter::new();
//! let main_surface = presenter.register();
//!
//! // Anywhere in update()
//! presenter.present(main_surface, Toast::new("Saved"));
//! presenter.present_global(Toast::new("Reconnected").with_duration(ToastDuration::Long));
//! presenter.tick(now); // on Message::Tick(now)
//!
//! // In view(), stack the toast over your content
//! let content = widget::overlay(presenter.surface(main_surface).unwrap(), body);
//!
//! // In subscription()
//! presenter.subscription().map(Message::Tick)
//! ```
//!
//! # Design Considerations
//!
//! - One toast per surface; a newer present evicts the older toast
//!   synchronously without its fade-out
//! - Fade-in is fixed at 0.1 s and fade-out at 1.2 s; `ToastDuration` only
//!   varies the hold window (0.6 s / 2 s / 3.5 s)
//! - All state lives in the host's update loop; the crate spawns nothing
//!   and exposes no cancellation beyond replacement

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod animation;
pub mod design_tokens;
pub mod presenter;
pub mod surface;
pub mod toast;
pub mod widget;

pub use presenter::{Presenter, SurfaceId};
pub use surface::Surface;
pub use toast::{Toast, ToastDuration, ToastSize};
