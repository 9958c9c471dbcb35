//! Bounded-draw tests
//!
//! Covers the error contract, the exact value mapping on both draw paths
//! (rejection sampling and the power-of-two fast path), the words consumed
//! by rejections, and fixed-seed distribution checks. All pinned values
//! were cross-checked against the reference MT19937 stream.

use dice_roller_core_rs::{MersenneTwister, RngError};

#[test]
fn test_bound_must_exceed_one() {
    let mut rng = MersenneTwister::new(42);
    for n in [1, 0, -5] {
        assert_eq!(rng.next_int(n), Err(RngError::InvalidArgument(n)));
    }
}

#[test]
fn test_invalid_bound_consumes_no_words() {
    let mut rng = MersenneTwister::new(42);
    let _ = rng.next_int(0);
    let _ = rng.next_int(1);
    // The stream still starts at the first word of seed 42
    assert_eq!(rng.next_u32(), 1608637542);
}

#[test]
fn test_dice_mapping_seed_zero() {
    let mut rng = MersenneTwister::new(0);
    let rolls: Vec<i32> = (0..12).map(|_| rng.next_int(6).unwrap()).collect();
    assert_eq!(rolls, vec![5, 2, 3, 1, 4, 2, 4, 4, 1, 2, 3, 2]);
}

#[test]
fn test_dice_mapping_seed_42() {
    let mut rng = MersenneTwister::new(42);
    let rolls: Vec<i32> = (0..12).map(|_| rng.next_int(6).unwrap()).collect();
    assert_eq!(rolls, vec![4, 6, 3, 6, 4, 6, 3, 5, 6, 3, 6, 6]);
}

#[test]
fn test_hundred_sided_mapping() {
    let mut rng = MersenneTwister::new(42);
    let rolls: Vec<i32> = (0..8).map(|_| rng.next_int(100).unwrap()).collect();
    assert_eq!(rolls, vec![72, 34, 39, 8, 14, 68, 11, 63]);
}

#[test]
fn test_power_of_two_mapping_is_zero_based() {
    let mut rng = MersenneTwister::new(42);
    let draws: Vec<i32> = (0..8).map(|_| rng.next_int(1024).unwrap()).collect();
    assert_eq!(draws, vec![383, 815, 973, 187, 749, 798, 613, 611]);

    // The fast path scales the high bits and keeps its 0-based mapping:
    // a 2-sided draw produces 0s and 1s, not 1s and 2s.
    let mut rng = MersenneTwister::new(42);
    let coin: Vec<i32> = (0..8).map(|_| rng.next_int(2).unwrap()).collect();
    assert_eq!(coin, vec![0, 1, 1, 0, 1, 1, 1, 1]);
}

#[test]
fn test_rejection_consumes_extra_words() {
    // 0x6000_0000 is not a power of two and accepts 3 of every 4 words, so
    // rejections are frequent enough to observe in a short run.
    let mut rng = MersenneTwister::new(7);
    let draws: Vec<i32> = (0..12)
        .map(|_| rng.next_int(0x6000_0000).unwrap())
        .collect();
    assert_eq!(
        draws,
        vec![
            163870808, 488206947, 684987644, 941476642, 1553629644, 978361140, 661452381,
            1156411080, 566658316, 1076148005, 186280109, 154728632,
        ]
    );

    // Those 12 draws rejected three words (15 consumed in total); the raw
    // stream therefore continues at reference word 15 of seed 7.
    assert_eq!(rng.next_u32(), 1801189930);
}

#[test]
fn test_range_law_dice() {
    let mut rng = MersenneTwister::new(99);
    for _ in 0..100_000 {
        let v = rng.next_int(6).unwrap();
        assert!((1..=6).contains(&v), "d6 out of range: {}", v);
    }
}

#[test]
fn test_range_law_odd_bounds() {
    // Power-of-two bounds use the 0-based fast path and are pinned above;
    // everything else must stay within the 1-based dice convention.
    let mut rng = MersenneTwister::new(99);
    for n in [3, 5, 6, 7, 10, 100, 1000, 999983] {
        for _ in 0..1_000 {
            let v = rng.next_int(n).unwrap();
            assert!(v >= 1 && v <= n, "n={} out of range: {}", n, v);
        }
    }
}

#[test]
fn test_uniformity_d6() {
    let mut rng = MersenneTwister::new(2026);
    let mut counts = [0u32; 7];
    for _ in 0..1_000_000 {
        counts[rng.next_int(6).unwrap() as usize] += 1;
    }

    assert_eq!(counts[0], 0);
    for face in 1..=6 {
        // Each face within 2% of the expected 1/6
        assert!(
            (163_334..=170_000).contains(&counts[face]),
            "face {} count {}",
            face,
            counts[face]
        );
    }
}

#[test]
fn test_uniformity_power_of_two() {
    let mut rng = MersenneTwister::new(2026);
    let mut counts = vec![0u32; 1024];
    for _ in 0..(1u32 << 20) {
        counts[rng.next_int(1024).unwrap() as usize] += 1;
    }

    for (value, &count) in counts.iter().enumerate() {
        // Each value within 25% of the expected 1024
        assert!(
            (768..=1280).contains(&count),
            "value {} count {}",
            value,
            count
        );
    }
}

#[test]
fn test_bool_balance() {
    let mut rng = MersenneTwister::new(2026);
    let trues = (0..1_000_000).filter(|_| rng.next_bool()).count();
    assert!((495_000..=505_000).contains(&trues), "trues {}", trues);
}
