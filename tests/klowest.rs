mod selector;

use klowest::{KLowest, Observation, Selector};

#[test]
fn klowest_selector_test() {
    selector::test_selector(KLowest::new);
}

#[test]
fn klowest_height_test() {
    let k = 1000;
    let bound = 2.0 * ((k + 1) as f64).log2();
    let mut selector = KLowest::new(k);
    for value in selector::random_values(20 * k, 1 << 20, 42) {
        selector.observe(value);
        assert!(selector.height() as f64 <= bound);
    }

    let mut selector = KLowest::new(k);
    for value in (0..(4 * k) as u32).rev() {
        selector.observe(value);
        assert!(selector.height() as f64 <= bound);
    }
    assert_eq!(
        selector.snapshot_ascending(),
        (0..k as u32).collect::<Vec<u32>>()
    );
}

#[test]
fn klowest_observation_test() {
    let mut selector = KLowest::new(4);
    let outcomes: Vec<Observation<u32>> = [10, 20, 30, 40, 35, 5, 50, 40]
        .iter()
        .map(|v| selector.observe(*v))
        .collect();
    assert_eq!(
        outcomes,
        vec![
            Observation::Kept,
            Observation::Kept,
            Observation::Kept,
            Observation::Kept,
            Observation::Replaced(40),
            Observation::Evicted(35),
            Observation::Rejected(50),
            Observation::Rejected(40),
        ]
    );
    assert_eq!(selector.snapshot_ascending(), vec![5, 10, 20, 30]);
    assert_eq!(
        selector.iter().copied().collect::<Vec<u32>>(),
        vec![5, 10, 20, 30]
    );
}

#[test]
fn klowest_try_from_test() {
    assert!(KLowest::<u32>::try_from(-1i64).is_err());
    let selector = KLowest::<u32>::try_from(3i64).unwrap();
    assert_eq!(selector.capacity(), 3);
}
