//! Integration tests for the sequence operations of every ArrayProcessor.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use array_ops::{build_processor, ArrayError, ArrayProcessor, ErrorKind, ProcessorKind, Side};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn processors() -> Vec<Box<dyn ArrayProcessor>> {
    init_logger();
    ProcessorKind::ALL.iter().map(|&kind| build_processor(kind)).collect()
}

fn random_vec(rng: &mut StdRng, len: usize) -> Vec<i32> {
    (0..len).map(|_| rng.gen_range(-200..200)).collect()
}

fn as_set(values: &[i32]) -> HashSet<i32> {
    values.iter().copied().collect()
}

// ---------------------------------------------------------------------------
// Membership tests
// ---------------------------------------------------------------------------

#[test]
fn none_match_without_multiples_of_ten() {
    for p in processors() {
        assert!(p.none_match(&[1, 2, 3, 11, -7, 95]), "{}", p.name());
        assert!(p.none_match(&[]), "{}", p.name());
    }
}

#[test]
fn none_match_detects_multiples_of_ten() {
    for p in processors() {
        assert!(!p.none_match(&[1, 2, 20]), "{}", p.name());
        assert!(!p.none_match(&[0]), "{}", p.name());
        assert!(!p.none_match(&[7, -30, 9]), "{}", p.name());
    }
}

#[test]
fn none_match_flips_when_a_multiple_of_ten_is_inserted() {
    let mut rng = StdRng::seed_from_u64(7);
    for p in processors() {
        for _ in 0..50 {
            let len = rng.gen_range(1..30);
            let mut values: Vec<i32> = random_vec(&mut rng, len)
                .into_iter()
                .filter(|v| v % 10 != 0)
                .collect();
            assert!(p.none_match(&values));

            let at = rng.gen_range(0..=values.len());
            values.insert(at, rng.gen_range(-20..20) * 10);
            assert!(!p.none_match(&values));
        }
    }
}

#[test]
fn some_match_uses_predicate() {
    for p in processors() {
        assert!(p.some_match(&[1, 5, 42, 3], &|v| v > 40));
        assert!(!p.some_match(&[1, 5, 3], &|v| v > 40));
        assert!(!p.some_match(&[], &|_| true));
    }
}

#[test]
fn all_match_transforms_then_tests() {
    for p in processors() {
        let words = ["1", "22", "333"];
        assert!(p.all_match(&words, &|s| s.len() as i32, &|n| n > 0));
        assert!(!p.all_match(&words, &|s| s.len() as i32, &|n| n < 3));

        let parse = |s: &str| s.parse::<i32>().unwrap_or(-1);
        assert!(p.all_match(&["4", "8", "16"], &parse, &|n| n % 2 == 0));
        assert!(!p.all_match(&["4", "x", "16"], &parse, &|n| n % 2 == 0));
        assert!(p.all_match(&[], &parse, &|_| false));
    }
}

// ---------------------------------------------------------------------------
// copy_values
// ---------------------------------------------------------------------------

#[test]
fn copy_values_returns_sub_range() {
    let input = [1, 2, 3, 4, 5, 6];
    for p in processors() {
        assert_eq!(p.copy_values(&input, 0, 3).unwrap(), vec![1, 2, 3]);
        assert_eq!(p.copy_values(&input, 2, 5).unwrap(), vec![3, 4, 5]);
        assert_eq!(p.copy_values(&input, 4, 5).unwrap(), vec![5]);
    }
}

#[test]
fn copy_values_rejects_invalid_bounds() {
    let input = [1, 2, 3, 4, 5, 6];
    for p in processors() {
        for (start, end) in [(-1, 2), (1, 6), (0, 10), (3, 3), (4, 2)] {
            let err = p.copy_values(&input, start, end).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
            assert_eq!(
                err,
                ArrayError::RangeOutOfBounds {
                    start,
                    end,
                    len: input.len()
                }
            );
        }
        assert!(p.copy_values(&[], 0, 0).is_err());
    }
}

#[test]
fn copy_values_matches_slice_for_random_bounds() {
    let mut rng = StdRng::seed_from_u64(11);
    for p in processors() {
        for _ in 0..100 {
            let len = rng.gen_range(2..40);
            let input = random_vec(&mut rng, len);
            let start = rng.gen_range(0..len - 1);
            let end = rng.gen_range(start + 1..len);

            let copied = p.copy_values(&input, start as isize, end as isize).unwrap();
            assert_eq!(copied.len(), end - start);
            assert_eq!(copied.as_slice(), &input[start..end]);
        }
    }
}

// ---------------------------------------------------------------------------
// replace / rearrange / filter
// ---------------------------------------------------------------------------

#[test]
fn replace_doubles_even_and_negates_odd() {
    for p in processors() {
        assert_eq!(
            p.replace(&[0, 31, 24, i32::MAX]),
            vec![0, -31, 48, -i32::MAX]
        );
        assert_eq!(p.replace(&[-3, -3, -3]), vec![-6, 3, -6]);
        assert!(p.replace(&[]).is_empty());
    }
}

#[test]
fn replace_wraps_on_overflow() {
    for p in processors() {
        assert_eq!(p.replace(&[i32::MAX, i32::MIN]), vec![-2, i32::MIN]);
    }
}

#[test]
fn rearrange_matches_documented_example() {
    for p in processors() {
        assert_eq!(p.rearrange(&[3, -5, 4, -7, 2, 9]), vec![-7, -5, 9, 2, 4, 3]);
    }
}

#[test]
fn rearrange_single_sign_reverses() {
    for p in processors() {
        assert_eq!(p.rearrange(&[1, 0, 3]), vec![3, 0, 1]);
        assert_eq!(p.rearrange(&[-1, -2, -3]), vec![-3, -2, -1]);
        assert!(p.rearrange(&[]).is_empty());
    }
}

#[test]
fn filter_uses_length_based_threshold() {
    for p in processors() {
        // 12 elements: threshold is 2
        let input = [5, 1, 2, -3, 10, 0, 2, 3, 4, 1, 7, 8];
        assert_eq!(p.filter(&input), vec![5, 2, 10, 2, 3, 4, 7, 8]);

        // 5 elements: threshold is -5
        assert_eq!(p.filter(&[-6, -5, 0, -10, 3]), vec![-5, 0, 3]);
        assert!(p.filter(&[]).is_empty());
    }
}

// ---------------------------------------------------------------------------
// find_second_max
// ---------------------------------------------------------------------------

#[test]
fn find_second_max_ignores_duplicates() {
    for p in processors() {
        assert_eq!(p.find_second_max(&[3, 9, 1, 9, 7]).unwrap(), 7);
        assert_eq!(p.find_second_max(&[-5, -1]).unwrap(), -5);
        assert_eq!(p.find_second_max(&[2, 2, 1, 1]).unwrap(), 1);
    }
}

#[test]
fn find_second_max_requires_two_distinct_values() {
    for p in processors() {
        assert_eq!(
            p.find_second_max(&[4, 4, 4]),
            Err(ArrayError::TooFewDistinctValues { found: 1 })
        );
        let err = p.find_second_max(&[]).unwrap_err();
        assert_eq!(err, ArrayError::TooFewDistinctValues { found: 0 });
        assert!(err.is_invalid_argument());
    }
}

// ---------------------------------------------------------------------------
// insert_values
// ---------------------------------------------------------------------------

#[test]
fn insert_values_splices_at_index() {
    for p in processors() {
        assert_eq!(
            p.insert_values(&[1, 2, 3], 1, &[9, 8]).unwrap(),
            vec![1, 9, 8, 2, 3]
        );
        assert_eq!(
            p.insert_values(&[1, 2, 3], 0, &[7]).unwrap(),
            vec![7, 1, 2, 3]
        );
        assert_eq!(
            p.insert_values(&[1, 2, 3], 2, &[]).unwrap(),
            vec![1, 2, 3]
        );
    }
}

#[test]
fn insert_values_rejects_out_of_bounds_index() -> anyhow::Result<()> {
    for p in processors() {
        for index in [-1, 3, 10] {
            let err = p.insert_values(&[1, 2, 3], index, &[9]).unwrap_err();
            assert_eq!(err, ArrayError::InsertionOutOfBounds { index, len: 3 });
        }
        assert!(p.insert_values(&[], 0, &[1]).is_err());

        let combined = p.insert_values(&[5, 6], 1, &[0, 0, 0])?;
        assert_eq!(combined.len(), 5);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// merge_sorted_arrays
// ---------------------------------------------------------------------------

#[test]
fn merge_sorted_arrays_matches_documented_example() -> anyhow::Result<()> {
    let first = [-8, 5, 6, 12, 15, 54];
    let second = [-86, -5, -2, 7, 8, 8, 45, 123];
    let expected = vec![-86, -8, -5, -2, 5, 6, 7, 8, 8, 12, 15, 45, 54, 123];

    for p in processors() {
        assert_eq!(p.merge_sorted_arrays(&first, &second)?, expected);
        assert_eq!(p.merge_sorted_arrays(&second, &first)?, expected);
    }
    Ok(())
}

#[test]
fn merge_sorted_arrays_handles_empty_inputs() {
    for p in processors() {
        assert!(p.merge_sorted_arrays(&[], &[]).unwrap().is_empty());
        assert_eq!(p.merge_sorted_arrays(&[1, 1, 2], &[]).unwrap(), vec![1, 1, 2]);
        assert_eq!(p.merge_sorted_arrays(&[], &[-3, 4]).unwrap(), vec![-3, 4]);
    }
}

#[test]
fn merge_sorted_arrays_rejects_descending_input() {
    for p in processors() {
        assert_eq!(
            p.merge_sorted_arrays(&[5, 3, 1], &[2]),
            Err(ArrayError::NotAscending {
                side: Side::Left,
                index: 1
            })
        );
        assert_eq!(
            p.merge_sorted_arrays(&[1, 2], &[10, 4]),
            Err(ArrayError::NotAscending {
                side: Side::Right,
                index: 1
            })
        );
    }
}

#[test]
fn merge_sorted_arrays_is_commutative_on_random_input() {
    let mut rng = StdRng::seed_from_u64(23);
    for p in processors() {
        for _ in 0..100 {
            let (n, m) = (rng.gen_range(0..25), rng.gen_range(0..25));
            let mut first = random_vec(&mut rng, n);
            let mut second = random_vec(&mut rng, m);
            first.sort_unstable();
            second.sort_unstable();

            let mut expected = [first.clone(), second.clone()].concat();
            expected.sort_unstable();

            assert_eq!(p.merge_sorted_arrays(&first, &second).unwrap(), expected);
            assert_eq!(p.merge_sorted_arrays(&second, &first).unwrap(), expected);
        }
    }
}

#[test]
fn merge_sorted_arrays_always_detects_a_descent() {
    let mut rng = StdRng::seed_from_u64(29);
    for p in processors() {
        for _ in 0..100 {
            let n = rng.gen_range(2..25);
            let mut unsorted = random_vec(&mut rng, n);
            unsorted.sort_unstable();
            unsorted.dedup();
            if unsorted.len() < 2 {
                continue;
            }
            unsorted.reverse();

            let mut other = random_vec(&mut rng, 5);
            other.sort_unstable();

            let err = p.merge_sorted_arrays(&unsorted, &other).unwrap_err();
            assert!(matches!(
                err,
                ArrayError::NotAscending {
                    side: Side::Left,
                    ..
                }
            ));
            let err = p.merge_sorted_arrays(&other, &unsorted).unwrap_err();
            assert!(matches!(
                err,
                ArrayError::NotAscending {
                    side: Side::Right,
                    ..
                }
            ));
        }
    }
}

// ---------------------------------------------------------------------------
// distinct
// ---------------------------------------------------------------------------

#[test]
fn distinct_returns_unique_values() {
    for p in processors() {
        let values = p.distinct(&[12, 53, 22, 76, 12, 54, 53, 76, 12]);
        assert_eq!(values.len(), 5);
        assert_eq!(as_set(&values), as_set(&[12, 53, 22, 76, 54]));
        assert!(p.distinct(&[]).is_empty());
    }
}

#[test]
fn distinct_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(31);
    for p in processors() {
        for _ in 0..50 {
            let len = rng.gen_range(0..60);
            let input: Vec<i32> = (0..len).map(|_| rng.gen_range(-10..10)).collect();

            let once = p.distinct(&input);
            let twice = p.distinct(&once);
            assert_eq!(once.len(), as_set(&once).len());
            assert_eq!(as_set(&once), as_set(&input));
            assert_eq!(as_set(&twice), as_set(&once));
            assert_eq!(twice.len(), once.len());
        }
    }
}

// ---------------------------------------------------------------------------
// Implementations agree
// ---------------------------------------------------------------------------

#[test]
fn processors_agree_on_random_input() {
    let loops = build_processor(ProcessorKind::ForLoops);
    let iters = build_processor(ProcessorKind::Iterators);
    let mut rng = StdRng::seed_from_u64(43);

    for _ in 0..200 {
        let len = rng.gen_range(0..30);
        let input = random_vec(&mut rng, len);
        let start = rng.gen_range(-2..len as isize + 2);
        let end = rng.gen_range(-2..len as isize + 2);

        assert_eq!(loops.none_match(&input), iters.none_match(&input));
        assert_eq!(
            loops.some_match(&input, &|v| v > 150),
            iters.some_match(&input, &|v| v > 150)
        );
        assert_eq!(
            loops.copy_values(&input, start, end),
            iters.copy_values(&input, start, end)
        );
        assert_eq!(loops.replace(&input), iters.replace(&input));
        assert_eq!(loops.find_second_max(&input), iters.find_second_max(&input));
        assert_eq!(loops.rearrange(&input), iters.rearrange(&input));
        assert_eq!(loops.filter(&input), iters.filter(&input));
        assert_eq!(
            loops.insert_values(&input, start, &[1, 2]),
            iters.insert_values(&input, start, &[1, 2])
        );
        assert_eq!(
            loops.merge_sorted_arrays(&input, &[0, 100]),
            iters.merge_sorted_arrays(&input, &[0, 100])
        );
        assert_eq!(as_set(&loops.distinct(&input)), as_set(&iters.distinct(&input)));
    }
}
