//! Touch probing and edge detection.
//!
//! Touch controllers are polled once per tick and only report "down at
//! (x, y)" or "up". [`TouchTracker`] remembers the previous sample and turns
//! the stream into widget events:
//!
//! | previous | current   | events                  |
//! |----------|-----------|-------------------------|
//! | up       | down at p | `Press(p)`, `Drag(p)`   |
//! | down     | down at p | `Drag(p)`               |
//! | down     | up        | `Release(last p)`       |
//! | up       | up        | —                       |
//!
//! A release carries the last position seen while down, because most
//! controllers stop reporting coordinates once the finger lifts.

use embedded_graphics::prelude::Point;
use heapless::Vec;

/// Source of raw touch samples (touch controller driver, simulator, test script).
pub trait TouchInput {
    /// Current touch position, `None` when nothing touches the panel.
    fn sample(&mut self) -> Option<Point>;
}

impl<F> TouchInput for F
where
    F: FnMut() -> Option<Point>,
{
    fn sample(&mut self) -> Option<Point> {
        self()
    }
}

/// Edge-detected touch event dispatched to widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchEvent {
    /// Finger went down.
    Press(Point),
    /// Finger is down (emitted every tick while touching, including the press tick).
    Drag(Point),
    /// Finger lifted; position is the last one seen while down.
    Release(Point),
}

impl TouchEvent {
    /// Position carried by the event.
    pub fn point(&self) -> Point {
        match *self {
            Self::Press(p) | Self::Drag(p) | Self::Release(p) => p,
        }
    }
}

/// Per-tick touch edge detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TouchTracker {
    was_touched: bool,
    last_point: Point,
}

impl TouchTracker {
    /// Tracker in the "not touched" state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the previous sample was a touch.
    pub fn is_touched(&self) -> bool {
        self.was_touched
    }

    /// Feed one sample and get the events it produces, in dispatch order.
    pub fn update(&mut self, sample: Option<Point>) -> Vec<TouchEvent, 2> {
        let mut events = Vec::new();

        // At most two events per tick, so these pushes always fit.
        match (self.was_touched, sample) {
            (false, Some(p)) => {
                events.push(TouchEvent::Press(p)).ok();
                events.push(TouchEvent::Drag(p)).ok();
            }
            (true, Some(p)) => {
                events.push(TouchEvent::Drag(p)).ok();
            }
            (true, None) => {
                events.push(TouchEvent::Release(self.last_point)).ok();
            }
            (false, None) => {}
        }

        if let Some(p) = sample {
            self.last_point = p;
        }
        self.was_touched = sample.is_some();
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_produces_nothing() {
        let mut t = TouchTracker::new();
        assert!(t.update(None).is_empty());
        assert!(!t.is_touched());
    }

    #[test]
    fn test_press_emits_press_then_drag() {
        let mut t = TouchTracker::new();
        let events = t.update(Some(Point::new(5, 6)));
        assert_eq!(
            events.as_slice(),
            &[
                TouchEvent::Press(Point::new(5, 6)),
                TouchEvent::Drag(Point::new(5, 6))
            ]
        );
        assert!(t.is_touched());
    }

    #[test]
    fn test_hold_emits_drag() {
        let mut t = TouchTracker::new();
        t.update(Some(Point::new(5, 6)));
        let events = t.update(Some(Point::new(5, 30)));
        assert_eq!(events.as_slice(), &[TouchEvent::Drag(Point::new(5, 30))]);
    }

    #[test]
    fn test_release_uses_last_point() {
        let mut t = TouchTracker::new();
        t.update(Some(Point::new(5, 6)));
        t.update(Some(Point::new(7, 40)));
        let events = t.update(None);
        assert_eq!(events.as_slice(), &[TouchEvent::Release(Point::new(7, 40))]);
        assert!(!t.is_touched());
        assert!(t.update(None).is_empty());
    }

    #[test]
    fn test_closure_is_touch_input() {
        let mut samples = [Some(Point::new(1, 2)), None].into_iter();
        let mut input = move || samples.next().flatten();
        assert_eq!(input.sample(), Some(Point::new(1, 2)));
        assert_eq!(input.sample(), None);
        assert_eq!(input.sample(), None);
    }

    #[test]
    fn test_event_point() {
        assert_eq!(TouchEvent::Release(Point::new(3, 4)).point(), Point::new(3, 4));
    }
}
