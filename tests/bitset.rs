use bitword::{BitSet, Error, Rejection};
use proptest::prelude::*;
use std::collections::BTreeSet;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

type Model = BTreeSet<usize>;

fn from_word(word: u32) -> BitSet {
    BitSet::from_bits(word).unwrap()
}

fn model_of_word(word: u32) -> Model {
    (0..32).filter(|i| word & (1 << i) != 0).collect()
}

fn from_model(model: &Model) -> BitSet {
    BitSet::from_members(model.iter().copied()).unwrap()
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn assert_matches_model(set: &BitSet, model: &Model) {
    assert_eq!(set.len(), model.len());
    assert_eq!(set.is_empty(), model.is_empty());
    assert_eq!(set.iter().collect::<Vec<_>>(), model.iter().copied().collect::<Vec<_>>());
    assert_eq!(
        set.iter_descending().collect::<Vec<_>>(),
        model.iter().rev().copied().collect::<Vec<_>>()
    );
    assert_eq!(set.first(), model.first().copied());
    assert_eq!(set.last(), model.last().copied());
    assert_eq!(set.bit_len(), model.last().map_or(0, |&max| max + 1));
}

// ============================================
// Exhaustive small words
// ============================================

#[test]
fn relations_over_all_small_words() {
    for a in 0..16u32 {
        for b in 0..16u32 {
            let (sa, sb) = (from_word(a), from_word(b));
            let (ma, mb) = (model_of_word(a), model_of_word(b));

            assert_eq!(sa.is_disjoint(&sb), ma.is_disjoint(&mb), "{a} {b}");
            assert_eq!(sa.is_subset(&sb), ma.is_subset(&mb), "{a} {b}");
            assert_eq!(sa.is_superset(&sb), ma.is_superset(&mb), "{a} {b}");
            assert_eq!(sa.is_proper_subset(&sb), ma.is_subset(&mb) && ma != mb, "{a} {b}");
            assert_eq!(sa.is_proper_superset(&sb), ma.is_superset(&mb) && ma != mb, "{a} {b}");
            assert_eq!(sa.equals(&sb), ma == mb, "{a} {b}");
        }
    }
}

#[test]
fn algebra_over_all_small_words() {
    for a in 0..16u32 {
        for b in 0..16u32 {
            let (sa, sb) = (from_word(a), from_word(b));
            let (ma, mb) = (model_of_word(a), model_of_word(b));

            assert_eq!(sa.union([&sb]), from_model(&ma.union(&mb).copied().collect()));
            assert_eq!(
                sa.intersection([&sb]),
                from_model(&ma.intersection(&mb).copied().collect())
            );
            assert_eq!(
                sa.difference([&sb]),
                from_model(&ma.difference(&mb).copied().collect())
            );
            assert_eq!(
                sa.symmetric_difference(&sb),
                from_model(&ma.symmetric_difference(&mb).copied().collect())
            );
        }
    }
}

// ============================================
// Property-Based Tests
// ============================================

proptest! {
    #[test]
    fn roundtrip_and_cardinality(indexes in prop::collection::vec(0usize..2_048, 0..128)) {
        let set = BitSet::from_members(indexes.iter().copied()).unwrap();
        let model: Model = indexes.iter().copied().collect();
        assert_matches_model(&set, &model);
    }

    #[test]
    fn membership(indexes in prop::collection::hash_set(0usize..1_024, 0..64)) {
        let set = BitSet::from_members(indexes.iter().copied()).unwrap();
        for i in 0..1_100 {
            prop_assert_eq!(set.contains(i), indexes.contains(&i));
        }
    }

    #[test]
    fn variadic_algebra_matches_model(
        sets in prop::collection::vec(prop::collection::btree_set(0usize..700, 0..40), 1..5),
    ) {
        let bitsets: Vec<BitSet> = sets.iter().map(from_model).collect();
        let (head, rest) = bitsets.split_first().unwrap();

        let mut union = sets[0].clone();
        let mut intersection = sets[0].clone();
        let mut difference = sets[0].clone();
        for other in &sets[1..] {
            union.extend(other.iter().copied());
            intersection.retain(|i| other.contains(i));
            difference.retain(|i| !other.contains(i));
        }

        assert_matches_model(&head.union(rest), &union);
        assert_matches_model(&head.intersection(rest), &intersection);
        assert_matches_model(&head.difference(rest), &difference);
    }

    #[test]
    fn hash_consistency(
        a in prop::collection::btree_set(0usize..300, 0..24),
        b in prop::collection::btree_set(0usize..300, 0..24),
    ) {
        let (sa, sb) = (from_model(&a), from_model(&b));
        if sa == sb {
            prop_assert_eq!(hash_of(&sa), hash_of(&sb));
        }

        // Same value reached through algebra instead of construction.
        let rebuilt = sa.union([&sb]).difference([&sb.difference([&sa])]);
        prop_assert_eq!(&rebuilt, &sa);
        prop_assert_eq!(hash_of(&rebuilt), hash_of(&sa));

        // A set hashes exactly like its bit word.
        prop_assert_eq!(hash_of(&sa), hash_of(&sa.bits()));
    }
}

// ============================================
// Model-based random operation sequences
// ============================================

struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        assert!(seed != 0);
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn below(&mut self, bound: u64) -> u64 {
        assert!(bound > 0);
        self.next_u64() % bound
    }
}

fn random_model(rng: &mut XorShift64) -> Model {
    // Mix dense low sets with sparse sets that span many limbs.
    let span = [16, 64, 130, 1_000, 10_000][rng.below(5) as usize];
    let count = rng.below(40);
    (0..count).map(|_| rng.below(span) as usize).collect()
}

#[test]
fn random_operation_sequences() {
    for seed in 1..=64u64 {
        let mut rng = XorShift64::new(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        let mut model = random_model(&mut rng);
        let mut set = from_model(&model);

        for _ in 0..50 {
            let other_model = random_model(&mut rng);
            let other = from_model(&other_model);
            let before = set.clone();

            let (next_set, next_model): (BitSet, Model) = match rng.below(4) {
                0 => (&set | &other, model.union(&other_model).copied().collect()),
                1 => (&set & &other, model.intersection(&other_model).copied().collect()),
                2 => (&set - &other, model.difference(&other_model).copied().collect()),
                _ => (
                    &set ^ &other,
                    model.symmetric_difference(&other_model).copied().collect(),
                ),
            };

            assert_eq!(set, before, "operand mutated (seed {seed})");
            assert_eq!(other, from_model(&other_model), "operand mutated (seed {seed})");
            assert_matches_model(&next_set, &next_model);

            set = next_set;
            model = next_model;
        }
    }
}

// ============================================
// Error boundary
// ============================================

#[test]
fn negative_inputs_are_invalid_arguments() {
    let cases = [
        ("from_index", BitSet::from_index(-1)),
        ("from_members", BitSet::from_members([-1])),
        ("from_bits", BitSet::from_bits(-1)),
    ];
    for (expected_op, result) in cases {
        match result {
            Err(Error::InvalidArgument { op, value, rejection }) => {
                assert_eq!(op, expected_op);
                assert_eq!(value, "-1");
                assert_eq!(rejection, Rejection::Negative);
            }
            Ok(set) => panic!("{expected_op} accepted -1: {set:?}"),
        }
    }
}

#[test]
fn first_bad_member_stops_construction() {
    let err = BitSet::from_members([3i64, -8, -9]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "from_members: invalid argument -8: must be non-negative"
    );
}

// ============================================
// Concrete scenarios
// ============================================

#[test]
fn scenarios() {
    assert_eq!(BitSet::from_members([1, 3]).unwrap().to_u128(), Some(0b1010));

    let set = BitSet::from_bits(0b1010).unwrap();
    assert_eq!(set.len(), 2);
    assert_eq!(set.iter_ascending().collect::<Vec<_>>(), vec![1, 3]);
    assert_eq!(set.iter_descending().collect::<Vec<_>>(), vec![3, 1]);

    assert!(set.is_disjoint(&BitSet::from_bits(0b0101).unwrap()));

    assert_eq!(
        set.difference([&BitSet::from_bits(0b0111).unwrap()]),
        BitSet::from_bits(0b1000).unwrap()
    );

    assert_eq!(BitSet::from_bits(123).unwrap().to_string(), "0b1111011");
}

#[test]
fn identity_elements() {
    let set = BitSet::from_members([0, 9, 64, 4_000]).unwrap();
    let none: Vec<&BitSet> = Vec::new();
    assert_eq!(set.union(none.iter().copied()), set);
    assert_eq!(set.intersection(none.iter().copied()), set);
    assert_eq!(set.difference(none.iter().copied()), set);
}

#[test]
fn usable_as_hash_key() {
    use std::collections::HashMap;

    let mut seen: HashMap<BitSet, &str> = HashMap::new();
    seen.insert(BitSet::from_members([2, 500]).unwrap(), "sparse");
    seen.insert(BitSet::from_bits(0b111).unwrap(), "dense");

    let mut words = vec![0u64; 8];
    words[0] = 1 << 2;
    words[7] = 1 << (500 - 448);
    assert_eq!(seen.get(&BitSet::from_words(words)), Some(&"sparse"));
    assert_eq!(seen.get(&BitSet::from_iter([0usize, 1, 2])), Some(&"dense"));
}

#[test]
fn shared_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BitSet>();

    let set = std::sync::Arc::new(BitSet::from_members(0..200usize).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let set = std::sync::Arc::clone(&set);
            std::thread::spawn(move || set.iter().sum::<usize>())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), (0..200).sum::<usize>());
    }
}
