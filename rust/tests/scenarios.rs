use bptree::{BPTree, BPTreeError, Comparator};

#[test]
fn test_four_keys_with_branching_factor_three() {
    let mut tree = BPTree::new(3).unwrap();
    for key in [5, 10, 15, 20] {
        tree.insert(key, key);
    }

    assert_eq!(tree.get(&15), Some(&15));
    assert_eq!(tree.range_search(&10, ">="), vec![&10, &15, &20]);
    assert_eq!(tree.range_search(&10, "<="), vec![&5, &10]);
    assert_eq!(tree.len(), 4);
    assert!(tree.height() > 1);
    tree.validate().unwrap();
}

#[test]
fn test_duplicate_keys_are_all_kept() {
    let mut tree = BPTree::new(3).unwrap();
    for value in ["a", "b", "c"] {
        tree.insert(7, value);
    }

    let mut found = tree.range_search(&7, "==");
    found.sort();
    assert_eq!(found, vec![&"a", &"b", &"c"]);
    assert_eq!(tree.len(), 3);
    assert!(["a", "b", "c"].contains(tree.get(&7).unwrap()));
}

#[test]
fn test_invalid_comparator_is_not_an_error() {
    let mut tree = BPTree::new(3).unwrap();
    for key in 0..10 {
        tree.insert(key, key);
    }
    assert!(tree.range_search(&5, "!=").is_empty());
    assert!(matches!(
        "!=".parse::<Comparator>(),
        Err(BPTreeError::InvalidComparator(_))
    ));
}

#[test]
fn test_branching_factor_must_exceed_two() {
    assert!(BPTree::<i32, i32>::new(2).unwrap_err().is_branching_factor_error());
    assert!(BPTree::<i32, i32>::new(3).is_ok());
}

#[test]
fn test_string_keys() {
    let mut tree = BPTree::new(4).unwrap();
    for word in ["pear", "apple", "fig", "kiwi", "banana", "cherry", "date"] {
        tree.insert(word.to_string(), word.len());
    }
    assert_eq!(tree.get(&"kiwi".to_string()), Some(&4));
    assert_eq!(
        tree.range_search(&"date".to_string(), "<="),
        vec![&5, &6, &6, &4]
    );
    assert_eq!(
        tree.keys().cloned().collect::<Vec<_>>(),
        vec!["apple", "banana", "cherry", "date", "fig", "kiwi", "pear"]
    );
}

#[test]
fn test_heavily_repeated_keys() {
    // Four distinct keys, each inserted about a hundred times
    let pool = [0, 50, 20, 80];
    let mut tree = BPTree::new(3).unwrap();
    let mut inserted = Vec::new();
    for i in 0..400 {
        let key = pool[(i * 7 + i / 3) % 4];
        inserted.push(key);
        tree.insert(key, key);
    }

    let expected = inserted.iter().filter(|&&key| key >= 20).count();
    let filtered = tree.range_search(&20, ">=");
    assert_eq!(filtered.len(), expected);
    assert!(filtered.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(tree.len(), 400);
    tree.validate().unwrap();
}

#[test]
fn test_display_dump() {
    let mut tree = BPTree::new(3).unwrap();
    for key in [5, 10, 15, 20] {
        tree.insert(key, ());
    }
    assert_eq!(tree.to_string(), "{[15]}\n{[5, 10], [15, 20]}\n");
}

macro_rules! branching_factor_tests {
    ($($bf:literal),*) => {
        $(
            paste::paste! {
                #[test]
                fn [<test_ascending_inserts_bf_ $bf>]() {
                    check_workload($bf, (0..500).collect());
                }

                #[test]
                fn [<test_descending_inserts_bf_ $bf>]() {
                    check_workload($bf, (0..500).rev().collect());
                }

                #[test]
                fn [<test_interleaved_duplicates_bf_ $bf>]() {
                    check_workload($bf, (0..500).map(|i| (i * 31) % 47).collect());
                }
            }
        )*
    };
}

branching_factor_tests!(3, 4, 5, 8, 16);

fn check_workload(branching_factor: usize, keys: Vec<i32>) {
    let mut tree = BPTree::new(branching_factor).unwrap();
    for (i, &key) in keys.iter().enumerate() {
        tree.insert(key, i);
        assert_eq!(tree.len(), i + 1);
    }
    tree.validate().unwrap();
    assert!(tree.leaf_sizes().iter().all(|&size| size <= branching_factor));

    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(tree.keys().copied().collect::<Vec<_>>(), sorted);

    for &key in &keys {
        let value = *tree.get(&key).unwrap();
        assert_eq!(keys[value], key);
    }

    let middle = sorted[sorted.len() / 2];
    let at_least = sorted.iter().filter(|&&k| k >= middle).count();
    let at_most = sorted.iter().filter(|&&k| k <= middle).count();
    let equal = sorted.iter().filter(|&&k| k == middle).count();
    assert_eq!(tree.range_search(&middle, ">=").len(), at_least);
    assert_eq!(tree.range_search(&middle, "<=").len(), at_most);
    assert_eq!(tree.range_search(&middle, "==").len(), equal);
}
