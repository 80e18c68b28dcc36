use klowest::Selector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn random_values(n: usize, range: u32, seed: u64) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(0..range)).collect()
}

fn lowest(values: &[u32], k: usize) -> Vec<u32> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted.truncate(k);
    sorted
}

/// Feed `values` to `selector` and check its snapshot against a full
/// sort of the observed prefix at each quarter of the stream.
pub fn test_stream<S: Selector<u32>>(mut selector: S, values: &[u32]) {
    let k = selector.capacity();
    let n = values.len();
    let checkpoints = [n / 4, n / 2, 3 * n / 4, n];

    for (i, value) in values.iter().enumerate() {
        let outcome = selector.observe(*value);
        assert_eq!(selector.size(), std::cmp::min(i + 1, k));
        if k == 0 {
            assert!(!outcome.is_kept());
        }
        if checkpoints.contains(&(i + 1)) {
            let expected = lowest(&values[..i + 1], k);
            assert_eq!(selector.snapshot_ascending(), expected);
            assert_eq!(selector.max(), expected.last());
        }
    }
}

pub fn test_selector<S, F>(build: F)
where
    S: Selector<u32>,
    F: Fn(usize) -> S,
{
    let mut seed = 0;
    for n in [0, 1, 200, 400, 800] {
        for k in [0, 1, 10, 50, 100] {
            seed += 1;
            test_stream(build(k), &random_values(n, 1024, seed));
            // Many matching values.
            test_stream(build(k), &random_values(n, 4, seed));
        }
    }

    let ascending: Vec<u32> = (0..1000).collect();
    let descending: Vec<u32> = (0..1000).rev().collect();
    for k in [1, 10, 1000] {
        test_stream(build(k), &ascending);
        test_stream(build(k), &descending);
    }
}
