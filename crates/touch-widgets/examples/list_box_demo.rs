//! Interactive list box demo in an SDL2 simulator window.
//!
//! The mouse stands in for the touch panel: hold the left button to touch,
//! move while held to drag-scroll, click to select. Selection changes are
//! logged through tracing.
//!
//! Run: RUST_LOG=debug cargo run -p touch-widgets --example list_box_demo --features simulator

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::time::Duration;

use embedded_graphics::{pixelcolor::Rgb565, prelude::*, primitives::Rectangle};
use embedded_graphics_simulator::{
    sdl2::MouseButton, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
};
use touch_widgets::{config::TICK_INTERVAL_MS, ListBox, ListBoxStyle, ListItem, Screen, Tag};

const CITIES: [&str; 14] = [
    "Paris", "Tokyo", "New York", "London", "Berlin", "Sydney", "Cairo", "Moscow", "Beijing",
    "Toronto", "Madrid", "Rome", "Lisbon", "Amsterdam",
];

/// Mouse-backed touch state, updated from window events once per tick.
#[derive(Default)]
struct MouseTouch {
    down: bool,
    position: Point,
}

impl MouseTouch {
    /// Apply window events. Returns `false` when the window was closed.
    fn poll(&mut self, window: &mut Window) -> bool {
        for event in window.events() {
            match event {
                SimulatorEvent::Quit => return false,
                SimulatorEvent::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    point,
                } => {
                    self.down = true;
                    self.position = point;
                }
                SimulatorEvent::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    point,
                } => {
                    self.down = false;
                    self.position = point;
                }
                SimulatorEvent::MouseMove { point } if self.down => self.position = point,
                _ => {}
            }
        }
        true
    }

    fn sample(&self) -> Option<Point> {
        self.down.then_some(self.position)
    }
}

fn main() -> Result<(), core::convert::Infallible> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut display = SimulatorDisplay::<Rgb565>::new(Size::new(320, 240));
    let settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("touch-widgets: list box", &settings);

    let mut list = ListBox::new(
        Rectangle::new(Point::new(160, 10), Size::new(150, 220)),
        ListBoxStyle::dark(),
    );
    list.set_items(CITIES.iter().enumerate().map(|(i, city)| {
        let last = u8::try_from(i).unwrap_or(u8::MAX);
        ListItem::with_tag(*city, Tag::new([0x02, 0x00, 0x5E, 0x10, 0x00, last]))
    }));
    list.set_selected_index(Some(2), false);
    list.on_selection_changed(|index, item| match (index, item) {
        (Some(index), Some(item)) => tracing::info!(
            index,
            text = item.text(),
            tag = %item.tag(),
            "list box selection changed"
        ),
        _ => tracing::info!("list box selection cleared"),
    });

    let mut screen = Screen::new();
    let list_id = screen.add(list);
    tracing::info!(widgets = screen.len(), "screen ready");

    display.clear(Rgb565::BLACK)?;
    screen.redraw(&mut display, true)?;

    let mut mouse = MouseTouch::default();
    loop {
        window.update(&display);
        if !mouse.poll(&mut window) {
            break;
        }

        let sample = mouse.sample();
        screen.tick(&mut display, &mut || sample)?;

        std::thread::sleep(Duration::from_millis(TICK_INTERVAL_MS));
    }

    if let Some(list) = screen.get::<ListBox<Rgb565>>(list_id) {
        tracing::info!(selected = list.selected_text(), "exiting");
    }
    Ok(())
}
