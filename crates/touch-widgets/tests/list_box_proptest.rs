//! Property-based tests for list box bookkeeping.
//! Verifies the selection / scroll invariants hold after ANY sequence of
//! item mutations, selection changes and drags, not just fixed examples.

#![allow(clippy::arithmetic_side_effects, clippy::unwrap_used)]

use embedded_graphics::{pixelcolor::Rgb565, prelude::*, primitives::Rectangle};
use proptest::prelude::*;
use touch_widgets::{ListBox, ListBoxStyle, ListItem};

#[derive(Debug, Clone)]
enum Op {
    Add,
    AddMany(usize),
    Remove(usize),
    SetItems(usize),
    Select(Option<usize>),
    ScrollTo(usize),
    Drag { from: i32, to: i32 },
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Add),
        (0usize..5).prop_map(Op::AddMany),
        (0usize..30).prop_map(Op::Remove),
        (0usize..30).prop_map(Op::SetItems),
        proptest::option::of(0usize..30).prop_map(Op::Select),
        (0usize..30).prop_map(Op::ScrollTo),
        (10i32..230, -50i32..300).prop_map(|(from, to)| Op::Drag { from, to }),
    ]
}

fn items(n: usize) -> Vec<ListItem> {
    (0..n).map(|i| ListItem::new(format!("item {i}"))).collect()
}

/// 10 visible rows of 22px.
fn list() -> ListBox<Rgb565> {
    ListBox::new(
        Rectangle::new(Point::new(160, 10), Size::new(150, 220)),
        ListBoxStyle::dark(),
    )
}

fn assert_invariants(list: &ListBox<Rgb565>) {
    if let Some(sel) = list.selected_index() {
        assert!(sel < list.item_count(), "selection {sel} out of {}", list.item_count());
    }
    let max_top = list.item_count().saturating_sub(list.visible_count());
    assert!(list.top_index() <= max_top, "top {} > max {max_top}", list.top_index());
}

proptest! {
    /// Selection stays in range and top_index stays clamped for any op sequence.
    #[test]
    fn invariants_hold_for_any_op_sequence(ops in proptest::collection::vec(op(), 0..60)) {
        let mut list = list();
        for op in ops {
            match op {
                Op::Add => list.add_item("extra"),
                Op::AddMany(n) => list.add_items(items(n)),
                Op::Remove(i) => {
                    let len = list.item_count();
                    assert_eq!(list.remove_item(i), i < len);
                }
                Op::SetItems(n) => {
                    list.set_items(items(n));
                    assert_eq!(list.selected_index(), None);
                    assert_eq!(list.top_index(), 0);
                }
                Op::Select(i) => list.set_selected_index(i, false),
                Op::ScrollTo(i) => list.scroll_to(i),
                Op::Drag { from, to } => {
                    list.handle_press(Point::new(200, from));
                    list.handle_drag(Point::new(200, to));
                    list.handle_release(Point::new(200, to));
                }
            }
            assert_invariants(&list);
        }
    }

    /// Removing relative to the selection clears, decrements, or keeps it.
    #[test]
    fn remove_adjusts_selection(len in 1usize..30, sel in 0usize..30, remove in 0usize..30) {
        prop_assume!(sel < len && remove < len);
        let mut list = list();
        list.set_items(items(len));
        list.set_selected_index(Some(sel), false);

        assert!(list.remove_item(remove));
        let expected = match remove.cmp(&sel) {
            core::cmp::Ordering::Equal => None,
            core::cmp::Ordering::Less => Some(sel - 1),
            core::cmp::Ordering::Greater => Some(sel),
        };
        prop_assert_eq!(list.selected_index(), expected);
    }

    /// Out-of-range lookups never panic and yield the empty item.
    #[test]
    fn item_lookup_never_panics(len in 0usize..20, index in 0usize..100) {
        let mut list = list();
        list.set_items(items(len));
        let item = list.item(index);
        if index >= len {
            prop_assert_eq!(item.text(), "");
            prop_assert!(item.tag().is_zero());
        }
    }
}
