//! Input generators for the shared tests and the benchmarks. Every generator yields `i32`.
//!
//! Random values come from a generator seeded once per process, so a failing test run repeats
//! with `OVERRIDE_SEED=<seed>`. Benchmarks call [`use_random_seed_each_time`] to get fresh inputs
//! for every sample.

use std::env;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use zipf::ZipfDistribution;

/// Shape of a generated input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Pattern {
    Random,
    /// Uniform over `0..=max`.
    Dense { max: i32 },
    /// Uniform over `0..=log2(len)`.
    LogDense,
    /// Values in `1..=len`, small ones far more frequent than large ones.
    Zipf { exponent: f64 },
    /// Random values with the leading `percent` percent already sorted.
    PartiallySorted { percent: f64 },
    AllEqual,
    Ascending,
    Descending,
    /// Random values cut into about `log2(len)` runs, each sorted in a random direction.
    Saws,
    /// Ascending first half, descending second half.
    PipeOrgan,
}

impl Pattern {
    pub const ALL: [Pattern; 14] = [
        Pattern::Random,
        Pattern::Dense { max: 1 },
        Pattern::Dense { max: 3 },
        Pattern::Dense { max: 255 },
        Pattern::LogDense,
        Pattern::Zipf { exponent: 1.0 },
        Pattern::Zipf { exponent: 2.0 },
        Pattern::PartiallySorted { percent: 50.0 },
        Pattern::PartiallySorted { percent: 95.0 },
        Pattern::AllEqual,
        Pattern::Ascending,
        Pattern::Descending,
        Pattern::Saws,
        Pattern::PipeOrgan,
    ];

    pub fn generate(self, len: usize) -> Vec<i32> {
        match self {
            Pattern::Random => random(len),
            Pattern::Dense { max } => random_uniform(len, 0..=max),
            Pattern::LogDense => random_uniform(len, 0..=log2_round(len) as i32),
            Pattern::Zipf { exponent } => random_zipf(len, exponent),
            Pattern::PartiallySorted { percent } => random_sorted(len, percent),
            Pattern::AllEqual => all_equal(len),
            Pattern::Ascending => ascending(len),
            Pattern::Descending => descending(len),
            Pattern::Saws => saw_mixed(len, log2_round(len)),
            Pattern::PipeOrgan => pipe_organ(len),
        }
    }
}

impl fmt::Display for Pattern {
    /// Short name used in test messages and benchmark ids, e.g. `dense_3` or `sorted_95`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Random => f.write_str("random"),
            Pattern::Dense { max } => write!(f, "dense_{max}"),
            Pattern::LogDense => f.write_str("log_dense"),
            Pattern::Zipf { exponent } => write!(f, "zipf_{exponent}"),
            Pattern::PartiallySorted { percent } => write!(f, "sorted_{percent}"),
            Pattern::AllEqual => f.write_str("all_equal"),
            Pattern::Ascending => f.write_str("ascending"),
            Pattern::Descending => f.write_str("descending"),
            Pattern::Saws => f.write_str("saws"),
            Pattern::PipeOrgan => f.write_str("pipe_organ"),
        }
    }
}

pub fn random(len: usize) -> Vec<i32> {
    let mut rng = pattern_rng();
    (0..len).map(|_| rng.gen()).collect()
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    let dist: Uniform<i32> = range.into();
    dist.sample_iter(pattern_rng()).take(len).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let dist = ZipfDistribution::new(len, exponent).expect("zipf exponent must be positive");
    dist.sample_iter(pattern_rng())
        .take(len)
        .map(|val| val as i32)
        .collect()
}

/// Random values whose first `percent` percent are sorted ascending.
pub fn random_sorted(len: usize, percent: f64) -> Vec<i32> {
    let mut v = random(len);
    let sorted_len = ((len as f64 * percent / 100.0).round() as usize).min(len);
    v[..sorted_len].sort_unstable();
    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// Random values cut into `runs` runs of equal length, each sorted ascending or descending.
pub fn saw_mixed(len: usize, runs: usize) -> Vec<i32> {
    let mut v = random(len);
    if len == 0 {
        return v;
    }

    let run_len = (len / runs.max(1)).max(1);
    let mut rng = pattern_rng();
    for run in v.chunks_mut(run_len) {
        if rng.gen() {
            run.sort_unstable();
        } else {
            run.sort_unstable_by(|a, b| b.cmp(a));
        }
    }
    v
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mut v = random(len);
    let (rising, falling) = v.split_at_mut(len / 2);
    rising.sort_unstable();
    falling.sort_unstable_by(|a, b| b.cmp(a));
    v
}

fn log2_round(len: usize) -> usize {
    if len < 2 {
        0
    } else {
        (len as f64).log2().round() as usize
    }
}

////////////////////////////////////////////////////////////////////////////////
// Seeding
////////////////////////////////////////////////////////////////////////////////

static FIXED_SEED: AtomicBool = AtomicBool::new(true);

/// Seed shared by every generator in this process. Taken from `OVERRIDE_SEED` when set.
pub fn random_init_seed() -> u64 {
    static SEED: OnceCell<u64> = OnceCell::new();

    *SEED.get_or_init(|| match env::var("OVERRIDE_SEED") {
        Ok(seed) => seed
            .parse()
            .unwrap_or_else(|_| panic!("OVERRIDE_SEED is not a u64: {seed}")),
        Err(_) => rand::thread_rng().gen(),
    })
}

/// Makes every generator call draw a fresh seed. Meant for benchmarks.
pub fn use_random_seed_each_time() {
    assert!(
        env::var("OVERRIDE_SEED").is_err(),
        "OVERRIDE_SEED pins the inputs, it cannot be combined with fresh seeds"
    );
    FIXED_SEED.store(false, Ordering::Relaxed);
}

fn pattern_rng() -> StdRng {
    let seed = if FIXED_SEED.load(Ordering::Relaxed) {
        random_init_seed()
    } else {
        rand::thread_rng().gen()
    };
    StdRng::seed_from_u64(seed)
}
