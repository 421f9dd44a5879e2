// HashTable property tests against the public API.
//
// Property 1: put/get round trip with last-write-wins semantics.
//  - Model: std HashMap fed the same writes.
//  - Invariant: every model key reads back its last value; len matches.
//
// Property 2: resize preserves contents.
//  - Operations: writes, deletes, then a resize to an arbitrary capacity.
//  - Invariant: surviving keys keep their last value, deleted keys stay
//    absent, num_slots equals the (clamped) requested capacity.
use chained_hashtable::{Fnv1, HashTable, KeyHash, MIN_CAPACITY};
use proptest::test_runner::TestCaseError;
use proptest::prelude::*;
use std::collections::HashMap;

// Property 1: last write wins.
proptest! {
    #[test]
    fn prop_last_write_wins(writes in proptest::collection::vec(("[a-d]{1,3}", any::<u16>()), 1..200), cap in 0usize..64) {
        let mut ht = HashTable::new(cap);
        let mut model = HashMap::new();
        for (k, v) in writes {
            ht.put(k.as_str(), v);
            model.insert(k, v);
        }
        prop_assert_eq!(ht.len(), model.len());
        for (k, v) in &model {
            prop_assert_eq!(ht.get(k), Some(v));
        }
    }
}

fn resize_round_trip<H: KeyHash>(
    mut ht: HashTable<usize, H>,
    keys: &[String],
    gone: &[String],
    new_cap: usize,
) -> Result<(), TestCaseError> {
    let mut model: HashMap<String, usize> = HashMap::new();
    for (i, k) in keys.iter().enumerate() {
        ht.put(k.as_str(), i);
        model.insert(k.clone(), i);
    }
    for k in gone {
        ht.delete(k);
        model.remove(k);
    }

    ht.resize(new_cap);
    prop_assert_eq!(ht.num_slots(), new_cap.max(MIN_CAPACITY));
    prop_assert_eq!(ht.len(), model.len());
    for (k, v) in &model {
        prop_assert_eq!(ht.get(k), Some(v));
    }
    for k in gone {
        prop_assert!(ht.get(k).is_none());
    }
    Ok(())
}

// Property 2: resize round trip, under both shipped hash strategies.
proptest! {
    #[test]
    fn prop_resize_round_trip(
        keys in proptest::collection::vec("[a-z]{1,8}", 1..100),
        deletes in proptest::collection::vec(any::<proptest::sample::Index>(), 0..30),
        new_cap in 0usize..256,
        use_fnv in any::<bool>(),
    ) {
        let gone: Vec<String> = deletes.iter().map(|ix| ix.get(&keys).clone()).collect();
        if use_fnv {
            resize_round_trip(HashTable::with_capacity_and_hasher(MIN_CAPACITY, Fnv1), &keys, &gone, new_cap)?;
        } else {
            resize_round_trip(HashTable::new(MIN_CAPACITY), &keys, &gone, new_cap)?;
        }
    }
}
