// SPDX-License-Identifier: MPL-2.0
//! Two-pane demo of `iced_toast`.
//!
//! Each pane is its own toast surface. Buttons present toasts of different
//! sizes and durations per pane; the global button targets whichever pane
//! was focused last. Run with `cargo run --example gallery`.

use iced::widget::{button, column, container, row, text, Column};
use iced::{alignment, Element, Length, Subscription, Task, Theme};
use iced_toast::{widget, Presenter, SurfaceId, Toast, ToastDuration, ToastSize};
use std::time::Instant;

fn main() -> iced::Result {
    env_logger::init();

    iced::application(Gallery::new, Gallery::update, Gallery::view)
        .title("iced_toast gallery")
        .theme(Gallery::theme)
        .subscription(Gallery::subscription)
        .run()
}

struct Gallery {
    presenter: Presenter,
    left: SurfaceId,
    right: SurfaceId,
}

#[derive(Debug, Clone)]
enum Message {
    Focus(Pane),
    Present(Pane),
    PresentGlobal,
    Tick(Instant),
}

#[derive(Debug, Clone, Copy)]
enum Pane {
    Left,
    Right,
}

impl Gallery {
    fn new() -> (Self, Task<Message>) {
        let mut presenter = Presenter::new();
        let left = presenter.register();
        let right = presenter.register();

        (
            Self {
                presenter,
                left,
                right,
            },
            Task::none(),
        )
    }

    fn surface_id(&self, pane: Pane) -> SurfaceId {
        match pane {
            Pane::Left => self.left,
            Pane::Right => self.right,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Focus(pane) => {
                let id = self.surface_id(pane);
                self.presenter.focus(id);
            }
            Message::Present(pane) => {
                let toast = match pane {
                    Pane::Left => Toast::new("Saved to library").with_size(ToastSize::Small),
                    Pane::Right => Toast::new("Export finished\nin the background")
                        .with_size(ToastSize::Large)
                        .with_duration(ToastDuration::Long),
                };
                let id = self.surface_id(pane);
                self.presenter.present(id, toast);
            }
            Message::PresentGlobal => self
                .presenter
                .present_global(Toast::new("Reconnected").with_duration(ToastDuration::Short)),
            Message::Tick(now) => self.presenter.tick(now),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let panes = row![
            self.pane(Pane::Left, "Left pane"),
            self.pane(Pane::Right, "Right pane"),
        ]
        .spacing(8.0);

        column![
            panes.height(Length::Fill),
            container(button(text("Global toast")).on_press(Message::PresentGlobal))
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .padding(8.0),
        ]
        .into()
    }

    fn pane(&self, pane: Pane, label: &'static str) -> Element<'_, Message> {
        let controls: Column<'_, Message> = column![
            text(label),
            button(text("Present here")).on_press(Message::Present(pane)),
            button(text("Focus this pane")).on_press(Message::Focus(pane)),
        ]
        .spacing(8.0);

        let body = container(controls)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(16.0);

        let surface = self
            .presenter
            .surface(self.surface_id(pane))
            .expect("panes are registered at boot");

        container(widget::overlay(surface, body))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        self.presenter.subscription().map(Message::Tick)
    }
}
