use super::*;

type NoKey = fn(usize) -> u64;

fn square(i: usize) -> ItemGeometry {
    ItemGeometry::absolute(i as f32 * 10.0, 0.0, 10.0, 10.0)
}

fn three_intervals() -> LazyPlaneIntervalContent<String> {
    LazyPlaneIntervalContent::build(|scope| {
        scope.item(square(0), Some(1000), Some(7), || "header".to_string());
        scope.items(3, square, None::<NoKey>, None::<NoKey>, |i| format!("a{i}"));
        scope.items(0, square, None::<NoKey>, None::<NoKey>, |_| String::new());
        scope.items(
            5,
            square,
            Some(|i: usize| 2000 + i as u64),
            Some(|_: usize| 9),
            |i| format!("b{i}"),
        );
    })
}

fn locate(content: &LazyPlaneIntervalContent<String>, index: usize) -> (usize, usize) {
    let resolved = content.resolve(index).expect("index in range");
    (resolved.interval_index, resolved.local_index)
}

#[test]
fn resolve_maps_global_to_interval_and_local() {
    let content = three_intervals();

    assert_eq!(content.item_count(), 9);
    assert_eq!(content.intervals().len(), 3);
    assert_eq!(locate(&content, 0), (0, 0));
    assert_eq!(locate(&content, 1), (1, 0));
    assert_eq!(locate(&content, 3), (1, 2));
    assert_eq!(locate(&content, 4), (2, 0));
    assert_eq!(locate(&content, 8), (2, 4));
    assert_eq!(
        content.resolve(9).map(|resolved| resolved.local_index),
        Err(LazyPlaneError::IndexOutOfRange {
            index: 9,
            item_count: 9,
        })
    );
}

#[test]
fn later_intervals_do_not_shift_earlier_items() {
    let mut content = three_intervals();
    let before: Vec<_> = (0..9).map(|i| locate(&content, i)).collect();

    content.items(4, square, None::<NoKey>, None::<NoKey>, |i| format!("c{i}"));

    let after: Vec<_> = (0..9).map(|i| locate(&content, i)).collect();
    assert_eq!(before, after);
    assert_eq!(locate(&content, 12), (3, 3));
}

#[test]
fn keys_default_to_index_and_never_collide_with_user_keys() {
    let content = three_intervals();

    assert_eq!(content.get_key(0), LazyLayoutKey::User(1000));
    assert_eq!(content.get_key(2), LazyLayoutKey::Index(2));
    assert_eq!(content.get_key(5), LazyLayoutKey::User(2001));
    assert_ne!(
        LazyLayoutKey::User(2).to_slot_id(),
        LazyLayoutKey::Index(2).to_slot_id()
    );
    assert_eq!(
        content.get_index_by_key(LazyLayoutKey::User(2003)),
        Some(7)
    );
    assert_eq!(content.get_index_by_key(LazyLayoutKey::Index(2)), Some(2));
    assert_eq!(content.get_index_by_key(LazyLayoutKey::User(2)), None);
}

#[test]
fn oversized_keys_stay_within_value_bits() {
    let slot = LazyLayoutKey::User(u64::MAX).to_slot_id();
    assert_eq!(slot >> 62, 0);
    assert_eq!(LazyLayoutKey::User(u64::MAX).to_slot_id(), slot);
}

#[test]
fn large_registries_find_keys_through_the_cache() {
    let content: LazyPlaneIntervalContent<usize> = LazyPlaneIntervalContent::build(|scope| {
        scope.items(
            500,
            square,
            Some(|i: usize| (i as u64) * 3),
            None::<NoKey>,
            |i| i,
        );
    });

    let index_of = |key| content.get_index_by_key(LazyLayoutKey::User(key));
    assert_eq!(index_of(300), Some(100));
    assert_eq!(index_of(301), None);
    assert_eq!(index_of(1497), Some(499));
}

#[test]
fn content_types_and_content_are_per_interval() {
    let content = three_intervals();

    assert_eq!(content.get_content_type(0), Some(7));
    assert_eq!(content.get_content_type(1), None);
    assert_eq!(content.get_content_type(6), Some(9));
    assert_eq!(content.get_content_type(42), None);
    assert_eq!(content.invoke_content(3).as_deref(), Some("a2"));
    assert_eq!(content.invoke_content(8).as_deref(), Some("b4"));
    assert_eq!(content.invoke_content(9), None);
}

#[test]
fn all_geometry_follows_global_order() {
    let content = three_intervals();
    let geometry = content.all_geometry();

    assert_eq!(geometry.len(), 9);
    assert_eq!(geometry.get(0), Some(&square(0)));
    assert_eq!(geometry.get(3), Some(&square(2)));
    assert_eq!(geometry.get(4), Some(&square(0)));
}

#[test]
fn typed_items_map_factories_through_data() {
    #[derive(Clone)]
    struct Card {
        id: u64,
        x: f32,
    }

    let cards = vec![Card { id: 11, x: 0.0 }, Card { id: 22, x: 300.0 }];
    let content: LazyPlaneIntervalContent<u64> = LazyPlaneIntervalContent::build(|scope| {
        scope.items_slice(
            &cards,
            |card| ItemGeometry::absolute(card.x, 0.0, 50.0, 50.0),
            Some(|card: &Card| card.id),
            |card| card.id * 10,
        );
        scope.items_vec(
            vec![Card { id: 33, x: 600.0 }],
            |card| ItemGeometry::absolute(card.x, 0.0, 50.0, 50.0),
            None::<fn(&Card) -> u64>,
            |card| card.id,
        );
    });

    assert_eq!(content.item_count(), 3);
    assert_eq!(content.get_key(1), LazyLayoutKey::User(22));
    assert_eq!(content.get_key(2), LazyLayoutKey::Index(2));
    assert_eq!(content.invoke_content(1), Some(220));
    assert_eq!(content.all_geometry().get(2).map(|g| g.x), Some(600.0));
}
