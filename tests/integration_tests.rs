use poset_pairs::{Item, PosetDataset, PosetError, Task, TargetRule};

fn ti_example() -> (Task, PosetDataset) {
    let task = Task::new(
        "ti_example",
        vec![vec![0.0], vec![1.0], vec![2.0], vec![3.0]],
        Some(vec![0, 1, 2, 3]),
        None,
    )
    .unwrap();
    let itemset = task.initialize_itemset().unwrap();
    let ds = task.master_dataset(itemset).unwrap();
    (task, ds)
}

#[test]
fn test_ti_example_itemset() {
    let (task, _) = ti_example();
    let items = task.initialize_itemset().unwrap();
    assert_eq!(items.len(), 4);
    for (rank, item) in items.iter().enumerate() {
        assert_eq!(item.rank(), rank as i64);
        assert_eq!(item.chain_id(), 0);
        assert_eq!(item.unique_id(), rank as i64);
    }
}

#[test]
fn test_ti_example_dataset() {
    let (_, ds) = ti_example();
    assert_eq!(ds.len(), 12);

    let adjacent = ds.pair_to_idx(0, 1).unwrap();
    assert!(ds.train_indices().contains(&adjacent));
    assert!(!ds.test_indices().contains(&adjacent));

    let distant = ds.pair_to_idx(0, 2).unwrap();
    assert!(ds.test_indices().contains(&distant));
    assert!(!ds.train_indices().contains(&distant));
}

#[test]
fn test_ti_example_labels() {
    let (_, ds) = ti_example();

    // (rank 1, rank 0): the left item outranks the right one
    let example = ds.get(ds.pair_to_idx(1, 0).unwrap()).unwrap();
    assert_eq!(example.label, 1);
    assert_eq!(example.features, vec![1.0, 0.0]);

    let example = ds.get(ds.pair_to_idx(0, 1).unwrap()).unwrap();
    assert_eq!(example.label, 0);
    assert_eq!(example.features, vec![0.0, 1.0]);

    let example = ds.get(ds.pair_to_idx(3, 0).unwrap()).unwrap();
    assert_eq!(example.label, 1);
    assert_eq!(example.features, vec![3.0, 0.0]);
}

#[test]
fn test_ti_example_partition_covers_index_space() {
    let (_, ds) = ti_example();
    let (adj, nonadj) = ds.types_of_pairs_partition();
    let mut all: Vec<usize> = adj.iter().chain(nonadj).copied().collect();
    all.sort_unstable();
    assert_eq!(all, (0..ds.len()).collect::<Vec<_>>());
}

#[test]
fn test_lookup_past_the_end() {
    let (_, ds) = ti_example();
    assert!(matches!(
        ds.get(12),
        Err(PosetError::IndexOutOfRange { index: 12, len: 12 })
    ));
}

#[test]
fn test_dataset_source_contract() {
    assert!(matches!(
        PosetDataset::new(TargetRule::default(), None, None),
        Err(PosetError::ContractViolation(_))
    ));
    let items = vec![Item::new(vec![0.0], 0), Item::new(vec![1.0], 1)];
    let chains = vec![items.clone()];
    assert!(matches!(
        PosetDataset::new(TargetRule::default(), Some(items), Some(chains)),
        Err(PosetError::ContractViolation(_))
    ));
}

#[test]
fn test_items_with_custom_ids() {
    let items = vec![
        Item::with_ids(vec![0.1], 2, None, Some(20)),
        Item::with_ids(vec![0.2], 1, None, Some(10)),
        Item::with_ids(vec![0.3], 0, None, Some(30)),
    ];
    let ds = PosetDataset::from_itemset(TargetRule::default(), items).unwrap();
    // sorted by rank: 30, 10, 20
    assert_eq!(ds.idx_to_pair(0), Some((30, 10)));
    let idx = ds.pair_to_idx(20, 30).unwrap();
    let (left, right) = ds.pair(idx).unwrap();
    assert_eq!(left.unique_id(), 20);
    assert_eq!(right.unique_id(), 30);
    assert_eq!(ds.get(idx).unwrap().label, 1);
    assert!(ds.test_indices().contains(&idx));
}
