//! Tests for the dataset descriptor set.

mod common;

use csviewer_ingest::DataPool;
use csviewer_model::{Axis, SourceId};
use csviewer_plot::{
    DatasetDescriptor, DatasetDescriptorSet, InsufficientColumns, MAX_DATASETS, PlotError,
    Staleness,
};
use proptest::prelude::*;

use common::{pool, table};

fn two_sources() -> DataPool {
    pool(vec![
        table(&["t", "v", "w"], &[&["0", "1", "2"]]),
        table(&["a", "b"], &[&["3", "4"]]),
    ])
}

#[test]
fn reset_binds_first_source_and_first_two_columns() {
    let pool = two_sources();
    let set = DatasetDescriptorSet::reset(&pool);

    assert_eq!(set.len(), 1);
    let descriptor = set.get(1).unwrap();
    assert_eq!(descriptor.source, Some(SourceId::new(1)));
    assert_eq!(descriptor.field_x.as_ref().unwrap(), "t");
    assert_eq!(descriptor.field_y.as_ref().unwrap(), "v");
    assert_eq!(descriptor.label, "");
}

#[test]
fn reset_on_empty_pool_is_unbound() {
    let set = DatasetDescriptorSet::reset(&DataPool::new());

    assert_eq!(set.len(), 1);
    assert_eq!(set.get(1), Some(&DatasetDescriptor::unbound()));
    assert_eq!(
        set.stale_indices(&DataPool::new()),
        vec![(1, Staleness::Unbound)]
    );
}

#[test]
fn resize_rejects_out_of_range_targets() {
    let pool = two_sources();
    let mut set = DatasetDescriptorSet::reset(&pool);

    for target in [0, MAX_DATASETS + 1] {
        let err = set.resize(target, &pool).unwrap_err();
        assert!(matches!(
            err,
            PlotError::DatasetCount { requested, max: MAX_DATASETS } if requested == target
        ));
    }
    assert_eq!(set.len(), 1);
}

#[test]
fn growing_appends_first_source_defaults() {
    let pool = two_sources();
    let mut set = DatasetDescriptorSet::reset(&pool);
    set.set_source(1, SourceId::new(2), &pool).unwrap();
    set.set_label(1, "second file").unwrap();

    set.resize(3, &pool).unwrap();

    assert_eq!(set.len(), 3);
    assert_eq!(set.get(1).unwrap().source, Some(SourceId::new(2)));
    assert_eq!(set.get(1).unwrap().label, "second file");
    for index in 2..=3 {
        assert_eq!(
            set.get(index),
            Some(&DatasetDescriptor::defaulted(&pool)),
            "dataset {index}"
        );
    }
}

#[test]
fn shrinking_truncates_the_tail() {
    let pool = two_sources();
    let mut set = DatasetDescriptorSet::reset(&pool);
    set.resize(4, &pool).unwrap();
    for index in 1..=4 {
        set.set_label(index, format!("series {index}")).unwrap();
    }

    set.resize(2, &pool).unwrap();

    let labels: Vec<&str> = set.iter().map(|(_, d)| d.label.as_str()).collect();
    assert_eq!(labels, vec!["series 1", "series 2"]);
    assert!(set.get(3).is_none());
}

#[test]
fn resizing_to_current_length_is_a_no_op() {
    let pool = two_sources();
    let mut set = DatasetDescriptorSet::reset(&pool);
    set.resize(2, &pool).unwrap();
    set.set_label(2, "kept").unwrap();
    let before = set.clone();

    set.resize(2, &pool).unwrap();

    assert_eq!(set, before);
}

#[test]
fn growing_on_an_empty_pool_appends_unbound_descriptors() {
    let empty = DataPool::new();
    let mut set = DatasetDescriptorSet::reset(&empty);

    set.resize(2, &empty).unwrap();

    assert_eq!(set.get(2), Some(&DatasetDescriptor::unbound()));
}

#[test]
fn set_source_rejects_unknown_ids_without_changes() {
    let pool = two_sources();
    let mut set = DatasetDescriptorSet::reset(&pool);
    let before = set.clone();

    let err = set.set_source(1, SourceId::new(9), &pool).unwrap_err();

    assert!(matches!(err, PlotError::UnknownSource { id } if id == SourceId::new(9)));
    assert_eq!(set, before);
}

#[test]
fn set_source_resets_fields_to_new_table() {
    let pool = two_sources();
    let mut set = DatasetDescriptorSet::reset(&pool);
    set.set_field(1, Axis::Y, "w", &pool).unwrap();

    let report = set.set_source(1, SourceId::new(2), &pool).unwrap();

    assert!(report.is_none());
    let descriptor = set.get(1).unwrap();
    assert_eq!(descriptor.field_x.as_ref().unwrap(), "a");
    assert_eq!(descriptor.field_y.as_ref().unwrap(), "b");
}

#[test]
fn narrow_source_is_reported_but_still_selected() {
    let pool = pool(vec![
        table(&["t", "v"], &[&["0", "1"]]),
        table(&["only"], &[&["1"]]),
    ]);
    let mut set = DatasetDescriptorSet::reset(&pool);

    let report = set.set_source(1, SourceId::new(2), &pool).unwrap();

    assert_eq!(
        report,
        Some(InsufficientColumns {
            id: SourceId::new(2),
            columns: 1
        })
    );
    let descriptor = set.get(1).unwrap();
    assert_eq!(descriptor.source, Some(SourceId::new(2)));
    assert!(descriptor.field_x.is_none());
    assert!(descriptor.field_y.is_none());
    assert_eq!(
        descriptor.staleness(&pool),
        Some(Staleness::UnboundField(Axis::X))
    );
}

#[test]
fn set_field_accepts_only_columns_of_the_current_source() {
    let pool = two_sources();
    let mut set = DatasetDescriptorSet::reset(&pool);

    set.set_field(1, Axis::X, "w", &pool).unwrap();
    assert_eq!(set.get(1).unwrap().field_x.as_ref().unwrap(), "w");

    let before = set.clone();
    let err = set.set_field(1, Axis::Y, "a", &pool).unwrap_err();
    assert!(matches!(
        err,
        PlotError::UnknownField { index: 1, id: Some(id), ref field }
            if id == SourceId::new(1) && field == "a"
    ));
    assert_eq!(set, before);
}

#[test]
fn set_field_on_unbound_descriptor_fails() {
    let empty = DataPool::new();
    let mut set = DatasetDescriptorSet::reset(&empty);

    let err = set.set_field(1, Axis::X, "t", &empty).unwrap_err();

    assert!(matches!(err, PlotError::UnknownField { id: None, .. }));
}

#[test]
fn mutations_reject_unknown_indices() {
    let pool = two_sources();
    let mut set = DatasetDescriptorSet::reset(&pool);

    assert!(matches!(
        set.set_label(0, "x"),
        Err(PlotError::UnknownDataset { index: 0, len: 1 })
    ));
    assert!(matches!(
        set.set_source(2, SourceId::new(1), &pool),
        Err(PlotError::UnknownDataset { index: 2, len: 1 })
    ));
    assert!(matches!(
        set.set_field(5, Axis::X, "t", &pool),
        Err(PlotError::UnknownDataset { index: 5, len: 1 })
    ));
}

#[test]
fn clearing_the_pool_makes_descriptors_stale() {
    let mut pool = two_sources();
    let mut set = DatasetDescriptorSet::reset(&pool);
    set.resize(2, &pool).unwrap();

    pool.clear();

    assert_eq!(
        set.stale_indices(&pool),
        vec![
            (1, Staleness::MissingSource(SourceId::new(1))),
            (2, Staleness::MissingSource(SourceId::new(1))),
        ]
    );
    // Stale descriptors are kept until something repairs them.
    assert_eq!(set.len(), 2);
}

proptest! {
    #[test]
    fn resize_preserves_the_surviving_prefix(
        start in 1usize..=MAX_DATASETS,
        target in 1usize..=MAX_DATASETS,
    ) {
        let pool = two_sources();
        let mut set = DatasetDescriptorSet::reset(&pool);
        set.resize(start, &pool).unwrap();
        for index in 1..=start {
            set.set_label(index, format!("#{index}")).unwrap();
        }
        let before = set.clone();

        set.resize(target, &pool).unwrap();

        prop_assert_eq!(set.len(), target);
        let indices: Vec<usize> = set.iter().map(|(index, _)| index).collect();
        prop_assert_eq!(indices, (1..=target).collect::<Vec<_>>());
        for index in 1..=start.min(target) {
            prop_assert_eq!(set.get(index), before.get(index));
        }
        for index in start + 1..=target {
            prop_assert_eq!(set.get(index), Some(&DatasetDescriptor::defaulted(&pool)));
        }
    }
}
