use super::*;

fn names(entries: &[Arc<Entry>]) -> Vec<String> {
    entries.iter().map(|e| e.name.to_string()).collect()
}

#[test]
fn filter_splits_default_seed() {
    let store = ListStore::with_default_seed();
    assert_eq!(
        names(&filter(store.entries(), ViewKind::Unselected)),
        ["Carrots", "Potatoes", "Bacon"]
    );
    assert_eq!(names(&filter(store.entries(), ViewKind::Selected)), ["Beans"]);
    let entries = store.entries();
    assert!(is_partition(
        entries,
        &filter(entries, ViewKind::Unselected),
        &filter(entries, ViewKind::Selected),
    ));
}

#[test]
fn move_clicked_flips_only_staged_entries_of_the_source_view() {
    let mut store = ListStore::with_default_seed();
    let carrots = store.entries()[0].id();
    let beans = store.entries()[2].id();
    store.update_entry(carrots, |e| e.clicked = true);
    // Staged in the other view: must not move.
    store.update_entry(beans, |e| e.clicked = true);

    let before = store.entries().to_vec();
    let next = move_clicked(&before, ViewKind::Unselected);

    assert!(next[0].selected);
    assert!(!next[0].clicked);
    assert!(Arc::ptr_eq(&before[1], &next[1]));
    assert!(Arc::ptr_eq(&before[2], &next[2]));
    assert!(next[2].clicked);
    assert!(is_partition(
        &next,
        &filter(&next, ViewKind::Unselected),
        &filter(&next, ViewKind::Selected),
    ));
}

#[test]
fn move_clicked_without_staging_returns_same_allocations() {
    let store = ListStore::with_default_seed();
    let next = move_clicked(store.entries(), ViewKind::Selected);
    assert!(store
        .entries()
        .iter()
        .zip(&next)
        .all(|(a, b)| Arc::ptr_eq(a, b)));
}

#[test]
fn map_clicked_touches_one_view() {
    let store = ListStore::with_default_seed();
    let next = map_clicked(store.entries(), ViewKind::Unselected, |_| true);
    assert_eq!(count_clicked(&next, ViewKind::Unselected), 3);
    assert_eq!(count_clicked(&next, ViewKind::Selected), 0);
    assert!(Arc::ptr_eq(&store.entries()[2], &next[2]));
}

#[test]
fn view_cache_recomputes_only_on_revision_change() {
    let mut store = ListStore::with_default_seed();
    let mut cache = ViewCache::new(ViewKind::Selected);
    assert!(cache.is_stale(&store));
    assert!(cache.refresh(&store));
    assert!(!cache.refresh(&store));
    assert_eq!(cache.revision(), Some(0));
    assert_eq!(names(cache.entries()), ["Beans"]);

    let carrots = store.entries()[0].id();
    store.update_entry(carrots, |e| e.selected = true);
    assert!(cache.is_stale(&store));
    assert!(cache.refresh(&store));
    assert_eq!(names(cache.entries()), ["Carrots", "Beans"]);
    assert_eq!(cache.kind(), ViewKind::Selected);
}

#[test]
fn view_kind_helpers() {
    assert_eq!(ViewKind::Unselected.other(), ViewKind::Selected);
    assert_eq!(ViewKind::Selected.other(), ViewKind::Unselected);
    assert_eq!(ViewKind::default(), ViewKind::Unselected);
    assert_eq!(ViewKind::ALL.map(ViewKind::index), [0, 1]);
}

#[test]
fn is_partition_rejects_stale_or_overlapping_snapshots() {
    let mut store = ListStore::with_default_seed();
    let unselected = filter(store.entries(), ViewKind::Unselected);
    let selected = filter(store.entries(), ViewKind::Selected);

    // Missing entry.
    assert!(!is_partition(store.entries(), &unselected[1..], &selected));
    // Same entry in both views.
    let mut overlapping = selected.clone();
    overlapping.push(Arc::clone(&unselected[0]));
    assert!(!is_partition(store.entries(), &unselected, &overlapping));

    // Snapshots taken before a move no longer describe the store.
    let carrots = store.entries()[0].id();
    store.update_entry(carrots, |e| e.selected = true);
    assert!(!is_partition(store.entries(), &unselected, &selected));

    let entries = store.entries();
    assert!(is_partition(
        entries,
        &filter(entries, ViewKind::Unselected),
        &filter(entries, ViewKind::Selected),
    ));
}
