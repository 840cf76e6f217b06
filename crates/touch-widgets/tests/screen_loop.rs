//! End-to-end host loop tests: touch samples in, selection / scroll / pixels out.
//! Uses a headless SimulatorDisplay so no SDL2 window is needed.
//!
//! Run: cargo test -p touch-widgets --test screen_loop

#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

use std::cell::RefCell;
use std::rc::Rc;

use embedded_graphics::{pixelcolor::Rgb565, prelude::*, primitives::Rectangle};
use embedded_graphics_simulator::SimulatorDisplay;
use touch_widgets::{ListBox, ListBoxStyle, ListItem, Screen, Tag, Widget, WidgetId};

type Display = SimulatorDisplay<Rgb565>;

const CITIES: [&str; 14] = [
    "Paris", "Tokyo", "New York", "London", "Berlin", "Sydney", "Cairo", "Moscow", "Beijing",
    "Toronto", "Madrid", "Rome", "Lisbon", "Amsterdam",
];

/// Screen with the demo list at (160, 10) 150×220, 22px rows.
fn setup() -> (Screen<Display>, WidgetId, Rc<RefCell<Vec<Option<usize>>>>) {
    let mut list = ListBox::new(
        Rectangle::new(Point::new(160, 10), Size::new(150, 220)),
        ListBoxStyle::dark(),
    );
    list.set_items(
        CITIES
            .iter()
            .enumerate()
            .map(|(i, c)| ListItem::with_tag(*c, Tag::new([0, 0, 0, 0, 0, i as u8]))),
    );
    list.set_selected_index(Some(2), false);

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    list.on_selection_changed(move |index, _| sink.borrow_mut().push(index));

    let mut screen = Screen::new();
    let id = screen.add(list);
    (screen, id, seen)
}

/// Run one tick per sample.
fn run(screen: &mut Screen<Display>, display: &mut Display, samples: &[Option<(i32, i32)>]) {
    for s in samples {
        let point = s.map(|(x, y)| Point::new(x, y));
        let mut input = move || point;
        screen.tick(display, &mut input).unwrap();
    }
}

fn list(screen: &Screen<Display>, id: WidgetId) -> &ListBox<Rgb565> {
    screen.get::<ListBox<Rgb565>>(id).unwrap()
}

#[test]
fn first_tick_paints_initial_selection() {
    let (mut screen, id, _) = setup();
    let mut display = Display::new(Size::new(320, 240));
    run(&mut screen, &mut display, &[None]);

    let style = *list(&screen, id).style();
    // Row 2 spans y 55..77.
    assert_eq!(display.get_pixel(Point::new(162, 60)), style.selected_background);
    assert!(!list(&screen, id).is_dirty());
}

#[test]
fn tap_selects_and_notifies_with_tag() {
    let (mut screen, id, seen) = setup();
    let mut display = Display::new(Size::new(320, 240));
    run(&mut screen, &mut display, &[Some((200, 100)), Some((200, 104)), None]);

    let l = list(&screen, id);
    assert_eq!(l.selected_index(), Some(4));
    assert_eq!(l.selected_text(), "Berlin");
    assert_eq!(l.selected_tag(), Tag::new([0, 0, 0, 0, 0, 4]));
    assert_eq!(*seen.borrow(), vec![Some(4)]);
}

#[test]
fn drag_scrolls_without_selecting() {
    let (mut screen, id, seen) = setup();
    let mut display = Display::new(Size::new(320, 240));
    run(
        &mut screen,
        &mut display,
        &[Some((200, 100)), Some((200, 80)), Some((200, 56)), None],
    );

    let l = list(&screen, id);
    assert_eq!(l.top_index(), 2);
    assert_eq!(l.selected_index(), Some(2));
    assert!(seen.borrow().is_empty());
    assert!(!l.is_dragging());

    // "New York" (index 2) is now the top row: highlight at y 11..33.
    let style = *l.style();
    assert_eq!(display.get_pixel(Point::new(162, 15)), style.selected_background);
}

#[test]
fn press_outside_list_does_nothing() {
    let (mut screen, id, seen) = setup();
    let mut display = Display::new(Size::new(320, 240));
    run(&mut screen, &mut display, &[Some((20, 100)), Some((20, 40)), None]);

    let l = list(&screen, id);
    assert_eq!(l.top_index(), 0);
    assert_eq!(l.selected_index(), Some(2));
    assert!(seen.borrow().is_empty());
}

#[test]
fn disabled_list_ignores_touch() {
    let (mut screen, id, seen) = setup();
    let mut display = Display::new(Size::new(320, 240));
    screen.widget_mut(id).unwrap().set_enabled(false);
    run(&mut screen, &mut display, &[Some((200, 100)), Some((200, 30)), None]);

    let l = list(&screen, id);
    assert_eq!(l.top_index(), 0);
    assert_eq!(l.selected_index(), Some(2));
    assert!(seen.borrow().is_empty());
}

#[test]
fn removal_from_app_code_redraws_next_tick() {
    let (mut screen, id, seen) = setup();
    let mut display = Display::new(Size::new(320, 240));
    run(&mut screen, &mut display, &[None]);

    let l = screen.get_mut::<ListBox<Rgb565>>(id).unwrap();
    assert!(l.remove_item(0));
    assert_eq!(l.selected_index(), Some(1));
    assert!(l.is_dirty());

    run(&mut screen, &mut display, &[None]);
    let style = *list(&screen, id).style();
    // Selection moved up one row: row 1 spans y 33..55.
    assert_eq!(display.get_pixel(Point::new(162, 40)), style.selected_background);
    assert_eq!(display.get_pixel(Point::new(162, 60)), style.background);
    assert!(seen.borrow().is_empty());
}
