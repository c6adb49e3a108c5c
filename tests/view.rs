use hashbits::view::{ArrayView, shared_buffer};
use hashbits::Error;

use std::collections::HashSet;

#[test]
fn view_windows_the_requested_range() {
    let buf = shared_buffer(vec![0u8, 1, 2, 3, 4, 5]);
    let view = ArrayView::with_range(buf, 2, 3).unwrap();

    assert_eq!(view.len(), 3);
    assert_eq!(view.offset(), 2);
    assert_eq!(view.get(0).unwrap(), 2);
    assert_eq!(view.get(1).unwrap(), 3);
    assert_eq!(view.get(2).unwrap(), 4);
}

#[test]
fn index_of_is_window_relative() {
    let buf = shared_buffer(vec![0u8, 1, 2, 3, 4, 5]);
    let view = ArrayView::with_range(buf, 2, 3).unwrap();

    assert_eq!(view.index_of(&4).unwrap(), Some(2));
    assert_eq!(view.index_of(&0).unwrap(), None);
    assert!(view.contains(&3).unwrap());
    assert!(!view.contains(&5).unwrap());
}

#[test]
fn out_of_window_index_fails() {
    let buf = shared_buffer(vec![0u8, 1, 2, 3, 4, 5]);
    let view = ArrayView::with_range(buf, 2, 3).unwrap();

    assert!(matches!(view.get(3), Err(Error::OutOfRange { .. })));
    assert!(matches!(view.set(3, 9), Err(Error::OutOfRange { .. })));
}

#[test]
fn construction_rejects_range_past_the_end() {
    let buf = shared_buffer(vec![0u8; 6]);

    let err = ArrayView::with_range(buf, 5, 3).unwrap_err();
    assert_eq!(
        err,
        Error::OutOfRange {
            offset: 5,
            count: 3,
            len: 6
        }
    );
}

#[test]
fn construction_rejects_overflowing_range() {
    let buf = shared_buffer(vec![0u8; 6]);

    assert!(ArrayView::with_range(buf, usize::MAX, 2).is_err());
}

#[test]
fn whole_buffer_view_covers_everything() {
    let buf = shared_buffer(vec![7u8; 16]);
    let view = ArrayView::new(buf);

    assert_eq!(view.offset(), 0);
    assert_eq!(view.len(), 16);
}

#[test]
fn equality_is_buffer_identity_plus_bounds() {
    let buf = shared_buffer(vec![9u8, 9]);
    let a = ArrayView::with_range(buf.clone(), 1, 1).unwrap();
    let b = ArrayView::with_range(buf.clone(), 1, 1).unwrap();

    assert_eq!(a, b);

    // Same contents, different allocation: not equal.
    let other = shared_buffer(vec![9u8, 9]);
    let c = ArrayView::with_range(other, 1, 1).unwrap();
    assert_ne!(a, c);

    // Same buffer, different bounds: not equal.
    let d = ArrayView::with_range(buf, 0, 1).unwrap();
    assert_ne!(a, d);
}

#[test]
fn equality_survives_content_mutation() {
    let buf = shared_buffer(vec![1u8, 2, 3]);
    let a = ArrayView::with_range(buf.clone(), 0, 2).unwrap();
    let b = ArrayView::with_range(buf, 0, 2).unwrap();

    a.set(0, 0xFF).unwrap();

    // Aliasing is intentional: the write is visible through b, and the
    // views still compare equal.
    assert_eq!(b.get(0).unwrap(), 0xFF);
    assert_eq!(a, b);
}

#[test]
fn hash_agrees_with_equality() {
    let buf = shared_buffer(vec![1u8, 2, 3, 4]);
    let a = ArrayView::with_range(buf.clone(), 1, 2).unwrap();
    let b = ArrayView::with_range(buf.clone(), 1, 2).unwrap();
    let c = ArrayView::with_range(buf, 0, 2).unwrap();

    let mut set = HashSet::new();
    set.insert(a);

    assert!(set.contains(&b));
    assert!(!set.contains(&c));
}

#[test]
fn clone_shares_the_buffer() {
    let buf = shared_buffer(vec![1u8, 2, 3]);
    let view = ArrayView::new(buf);
    let copy = view.clone();

    copy.set(1, 9).unwrap();

    assert_eq!(view.get(1).unwrap(), 9);
    assert_eq!(view, copy);
}

#[test]
fn structural_mutation_always_fails_and_leaves_data_intact() {
    let buf = shared_buffer(vec![0u8, 1, 2, 3, 4, 5]);
    let view = ArrayView::with_range(buf.clone(), 2, 3).unwrap();

    assert_eq!(view.push(9), Err(Error::Unsupported { op: "push" }));
    assert_eq!(view.insert(0, 9), Err(Error::Unsupported { op: "insert" }));
    assert!(matches!(view.remove_at(0), Err(Error::Unsupported { .. })));
    assert!(matches!(view.remove(&2), Err(Error::Unsupported { .. })));

    assert_eq!(&**buf.borrow(), &[0, 1, 2, 3, 4, 5]);
    assert_eq!(view.len(), 3);
}

#[test]
fn detached_view_fails_fast() {
    let view: ArrayView<u8> = ArrayView::default();

    assert_eq!(view.get(0), Err(Error::NoBuffer));
    assert_eq!(view.set(0, 1), Err(Error::NoBuffer));
    assert_eq!(view.clear(), Err(Error::NoBuffer));
    assert_eq!(view.index_of(&1), Err(Error::NoBuffer));
    assert!(view.iter().is_err());

    let mut dest = [0u8; 4];
    assert_eq!(view.copy_to(&mut dest, 0), Err(Error::NoBuffer));
}

#[test]
fn two_detached_views_are_equal() {
    let a: ArrayView<u8> = ArrayView::default();
    let b: ArrayView<u8> = ArrayView::default();

    assert_eq!(a, b);
}

#[test]
fn clear_zero_fills_only_the_window() {
    let buf = shared_buffer(vec![1u8, 2, 3, 4, 5, 6]);
    let view = ArrayView::with_range(buf.clone(), 2, 3).unwrap();

    view.clear().unwrap();

    assert_eq!(&**buf.borrow(), &[1, 2, 0, 0, 0, 6]);
}

#[test]
fn copy_to_places_the_window_at_the_destination_offset() {
    let buf = shared_buffer(vec![0u8, 1, 2, 3, 4, 5]);
    let view = ArrayView::with_range(buf, 2, 3).unwrap();

    let mut dest = [0xAAu8; 6];
    view.copy_to(&mut dest, 1).unwrap();

    assert_eq!(dest, [0xAA, 2, 3, 4, 0xAA, 0xAA]);
}

#[test]
fn copy_to_validates_before_writing() {
    let buf = shared_buffer(vec![0u8, 1, 2, 3, 4, 5]);
    let view = ArrayView::with_range(buf, 2, 3).unwrap();

    let mut dest = [0xAAu8; 4];
    let err = view.copy_to(&mut dest, 2).unwrap_err();

    assert!(matches!(err, Error::OutOfRange { .. }));
    assert_eq!(dest, [0xAA; 4]);
}

#[test]
fn iteration_yields_the_window_in_order() {
    let buf = shared_buffer(vec![0u8, 1, 2, 3, 4, 5]);
    let view = ArrayView::with_range(buf, 2, 3).unwrap();

    let collected: Vec<u8> = view.iter().unwrap().collect();
    assert_eq!(collected, vec![2, 3, 4]);
}

#[test]
fn iteration_is_restartable() {
    let buf = shared_buffer(vec![10u8, 20, 30]);
    let view = ArrayView::new(buf);

    let mut iter = view.iter().unwrap();
    assert_eq!(iter.next(), Some(10));
    assert_eq!(iter.next(), Some(20));

    iter.reset();
    assert_eq!(iter.next(), Some(10));

    // A fresh pass is always obtainable while the view is alive.
    let again: Vec<u8> = view.iter().unwrap().collect();
    assert_eq!(again, vec![10, 20, 30]);
}

#[test]
fn iterator_observes_writes_made_before_the_step() {
    let buf = shared_buffer(vec![1u8, 2, 3]);
    let view = ArrayView::new(buf);

    let mut iter = view.iter().unwrap();
    assert_eq!(iter.next(), Some(1));

    view.set(1, 99).unwrap();
    assert_eq!(iter.next(), Some(99));
}

#[test]
fn iterator_reports_its_length() {
    let buf = shared_buffer(vec![0u8; 5]);
    let view = ArrayView::with_range(buf, 1, 3).unwrap();

    let iter = view.iter().unwrap();
    assert_eq!(iter.len(), 3);
}

#[test]
fn empty_window_is_valid() {
    let buf = shared_buffer(Vec::<u8>::new());
    let view = ArrayView::with_range(buf, 0, 0).unwrap();

    assert!(view.is_empty());
    assert_eq!(view.iter().unwrap().count(), 0);
    assert!(view.clear().is_ok());
}

#[test]
fn views_work_over_non_byte_elements() {
    let buf = shared_buffer(vec!["a".to_string(), "b".to_string(), "c".to_string()]);
    let view = ArrayView::with_range(buf, 1, 2).unwrap();

    assert_eq!(view.get(0).unwrap(), "b");
    assert_eq!(view.index_of(&"c".to_string()).unwrap(), Some(1));
}
