#![cfg(test)]

// Property tests for HashTable kept inside the crate next to the unit tests.

use crate::hash_table::{HashTable, MIN_CAPACITY};
use crate::hashing::{Djb2, Fnv1, KeyHash};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use std::collections::{BTreeSet, HashMap};

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Put(usize, i32),
    Get(usize),
    Delete(usize),
    Probe(String),
    Mutate(usize, i32),
    Resize(usize),
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z_0-9]{0,6}", 1..=12).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            3 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Put(i, v)),
            2 => idx.clone().prop_map(OpI::Get),
            2 => idx.clone().prop_map(OpI::Delete),
            1 => "[a-z_0-9]{0,6}".prop_map(OpI::Probe),
            1 => (idx.clone(), any::<i32>()).prop_map(|(i, d)| OpI::Mutate(i, d)),
            1 => (0usize..40).prop_map(OpI::Resize),
            1 => Just(OpI::Iterate),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

/// Chain lengths per bucket must equal the number of live keys whose
/// index selects that bucket; together with lookups succeeding this pins
/// every entry to its correct bucket.
fn check_placement<H: KeyHash>(sut: &HashTable<i32, H>) -> Result<(), TestCaseError> {
    let mut expected = vec![0usize; sut.num_slots()];
    for (k, _) in sut.iter() {
        expected[sut.bucket_index(k)] += 1;
    }
    prop_assert_eq!(sut.chain_lengths(), expected);
    Ok(())
}

// State-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - `put` inserts or overwrites; `len` only grows for unseen keys.
// - `get`/`contains_key` parity with the model.
// - `delete` returns the owned `(key, value)` on hit and leaves the table
//   untouched on miss.
// - `resize` keeps every entry and sets `num_slots` (clamped to the floor).
// - `load_factor == len / num_slots` after every step.
fn run_scenario<H: KeyHash>(
    mut sut: HashTable<i32, H>,
    pool: &[String],
    ops: Vec<OpI>,
) -> Result<(), TestCaseError> {
    let mut model: HashMap<String, i32> = HashMap::new();

    for op in ops {
        match op {
            OpI::Put(i, v) => {
                let k = &pool[i];
                let before = sut.len();
                let already = model.contains_key(k);
                sut.put(k.as_str(), v);
                model.insert(k.clone(), v);
                prop_assert_eq!(sut.len(), if already { before } else { before + 1 });
                prop_assert_eq!(sut.get(k), Some(&v));
            }
            OpI::Get(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.get(k), model.get(k));
            }
            OpI::Delete(i) => {
                let k = &pool[i];
                let before = sut.len();
                match (sut.delete(k), model.remove(k)) {
                    (Some((kk, vv)), Some(mv)) => {
                        prop_assert_eq!(&kk, k);
                        prop_assert_eq!(vv, mv);
                        prop_assert_eq!(sut.len(), before - 1);
                    }
                    (None, None) => prop_assert_eq!(sut.len(), before),
                    (s, m) => prop_assert!(false, "delete mismatch: {:?} vs {:?}", s, m),
                }
                prop_assert!(sut.get(k).is_none());
            }
            OpI::Probe(s) => {
                prop_assert_eq!(sut.contains_key(&s), model.contains_key(&s));
            }
            OpI::Mutate(i, d) => {
                let k = &pool[i];
                match (sut.get_mut(k), model.get_mut(k)) {
                    (Some(sv), Some(mv)) => {
                        *sv = sv.saturating_add(d);
                        *mv = mv.saturating_add(d);
                    }
                    (None, None) => {}
                    _ => prop_assert!(false, "get_mut presence mismatch for {:?}", k),
                }
            }
            OpI::Resize(cap) => {
                sut.resize(cap);
                prop_assert_eq!(sut.num_slots(), cap.max(MIN_CAPACITY));
                for (k, v) in &model {
                    prop_assert_eq!(sut.get(k), Some(v));
                }
            }
            OpI::Iterate => {
                let s_keys: BTreeSet<String> = sut.iter().map(|(k, _)| k.to_string()).collect();
                let m_keys: BTreeSet<String> = model.keys().cloned().collect();
                prop_assert_eq!(s_keys, m_keys);
            }
        }

        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        let expected_lf = model.len() as f64 / sut.num_slots() as f64;
        prop_assert!((sut.load_factor() - expected_lf).abs() < 1e-12);
        check_placement(&sut)?;
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    #[test]
    fn prop_state_machine_djb2((pool, ops) in arb_scenario(), cap in 0usize..20) {
        run_scenario(HashTable::with_capacity_and_hasher(cap, Djb2), &pool, ops)?;
    }

    #[test]
    fn prop_state_machine_fnv1((pool, ops) in arb_scenario(), cap in 0usize..20) {
        run_scenario(HashTable::with_capacity_and_hasher(cap, Fnv1), &pool, ops)?;
    }

    // Worst-case collisions: every key lands in bucket 0, so every lookup,
    // overwrite and splice walks one long chain.
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario()) {
        let collide = |_: &str| 0u64;
        run_scenario(HashTable::with_capacity_and_hasher(MIN_CAPACITY, collide), &pool, ops)?;
    }
}
