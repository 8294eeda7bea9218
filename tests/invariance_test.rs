//! Randomized invariance checks for the barcode readers
//!
//! Barcodes are generated with a seeded RNG, rendered to text, then
//! decorated with comments and blank lines.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tda_barcode_io::{parse_gudhi_str, parse_standard_str, ReadOptions};

const TRIALS: usize = 50;

fn random_pairs(rng: &mut StdRng, n: usize) -> Vec<(f64, f64)> {
    (0..n)
        .map(|_| (rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)))
        .collect()
}

/// Randomly interleave comment and blank lines between records
fn decorate(rng: &mut StdRng, records: &[String]) -> String {
    let mut out = String::new();
    for record in records {
        for _ in 0..rng.gen_range(0..3) {
            match rng.gen_range(0..3) {
                0 => out.push('\n'),
                1 => out.push_str("# 1 2 3 inf\n"),
                _ => out.push_str("   \t\n"),
            }
        }
        out.push_str(record);
        out.push('\n');
    }
    out
}

fn sorted(pair: (f64, f64)) -> (f64, f64) {
    if pair.0 > pair.1 { (pair.1, pair.0) } else { pair }
}

#[test]
fn test_standard_comment_and_blank_invariance() {
    let mut rng = StdRng::seed_from_u64(7);
    let options = ReadOptions::default();

    for _ in 0..TRIALS {
        let n = rng.gen_range(0..20);
        let pairs = random_pairs(&mut rng, n);
        let records: Vec<String> = pairs.iter().map(|(a, b)| format!("{} {}", a, b)).collect();

        let plain = parse_standard_str(&(records.join("\n") + "\n"), &options).unwrap();
        let noisy = parse_standard_str(&decorate(&mut rng, &records), &options).unwrap();

        assert_eq!(plain, noisy);
        assert_eq!(plain.len(), n);

        let expected: Vec<_> = pairs.iter().copied().map(sorted).collect();
        assert_eq!(plain.pairs(), expected);
        assert!(plain.iter().all(|i| i.birth <= i.death));
    }
}

#[test]
fn test_gudhi_dimension_filter_matches_model() {
    let mut rng = StdRng::seed_from_u64(11);
    let options = ReadOptions::default();

    for _ in 0..TRIALS {
        let n = rng.gen_range(0..30);
        let mut records = Vec::with_capacity(n);
        let mut classes = Vec::with_capacity(n);

        for _ in 0..n {
            let dim = rng.gen_range(0..3usize);
            let birth: f64 = rng.gen_range(0.0..5.0);
            let infinite = rng.gen_bool(0.2);
            let death: f64 = rng.gen_range(0.0..5.0);

            if infinite {
                records.push(format!("2 {} {} inf", dim, birth));
            } else {
                records.push(format!("2 {} {} {}", dim, birth, death));
                classes.push((dim, sorted((birth, death))));
            }
        }

        let text = decorate(&mut rng, &records);
        for d in 0..3 {
            let barcode = parse_gudhi_str(&text, d, &options).unwrap();
            let expected: Vec<_> = classes.iter()
                .filter(|(dim, _)| *dim == d)
                .map(|(_, pair)| *pair)
                .collect();
            assert_eq!(barcode.pairs(), expected);
        }
    }
}

#[test]
fn test_parsing_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(23);
    let pairs = random_pairs(&mut rng, 40);
    let records: Vec<String> = pairs.iter().map(|(a, b)| format!("{} {}", a, b)).collect();
    let text = decorate(&mut rng, &records);

    for options in [ReadOptions::strict(), ReadOptions::lenient()] {
        let first = parse_standard_str(&text, &options).unwrap();
        let second = parse_standard_str(&text, &options).unwrap();
        assert_eq!(first, second);
    }
}
