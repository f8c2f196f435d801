//! Input patterns for testing and benchmarking integer sorts.
//!
//! All random patterns derive from one seed per process, so a failing test can be reproduced by
//! setting `OVERRIDE_SEED` to the seed it printed.

use std::env;
use std::sync::Mutex;

use rand::distributions::Uniform;
use rand::prelude::*;

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    // :.:.:.::

    let dist: Uniform<i32> = range.into();
    new_rng().sample_iter(dist).take(len).collect()
}

/// Random values with the first `sorted_percent` of them already in order, like new data
/// appended to a sorted collection.
pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    //     .:
    //   .:::. :
    // .::::::.::

    let mut v = random(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;
    v[..sorted_len.min(len)].sort_unstable();

    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    single_num(len, 66)
}

pub fn single_num(len: usize, value: i32) -> Vec<i32> {
    vec![value; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

/// `saw_count` runs of random values, each sorted ascending.
pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    saws(len, saw_count, |_| Direction::Ascending)
}

/// `saw_count` runs of random values, each sorted descending.
pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    saws(len, saw_count, |_| Direction::Descending)
}

/// `saw_count` runs of random values, each sorted in a random direction.
pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    let mut rng = new_rng();
    saws(len, saw_count, |_| {
        if rng.gen() {
            Direction::Ascending
        } else {
            Direction::Descending
        }
    })
}

/// Runs sorted in a random direction, each with a random length in `run_len`.
pub fn saw_mixed_range(len: usize, run_len: std::ops::Range<usize>) -> Vec<i32> {
    //     :.
    // :.  :::.    .::.      .:
    // :::.:::::..::::::..:.:::

    let mut v = random(len);
    let mut rng = new_rng();

    let mut start = 0;
    while start < len {
        let end = (start + rng.gen_range(run_len.clone()).max(1)).min(len);
        let direction = if rng.gen() {
            Direction::Ascending
        } else {
            Direction::Descending
        };

        direction.sort(&mut v[start..end]);
        start = end;
    }

    v
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut v = random(len);
    let (first_half, second_half) = v.split_at_mut(len / 2);
    Direction::Ascending.sort(first_half);
    Direction::Descending.sort(second_half);

    v
}

/// Makes every call to a random pattern yield new values, instead of the same values per process.
/// Benchmarks should call this.
///
/// # Panics
///
/// Panics if the seed was overridden with `OVERRIDE_SEED`.
pub fn use_random_seed_each_time() {
    let (mode, _) = seed_mode_and_value();
    if mode == SeedMode::Override {
        panic!("Using use_random_seed_each_time conflicts with the external seed override.");
    }

    *SEED.lock().unwrap() = Some((SeedMode::EachCall, 0));
}

/// Seed used by the random patterns of this process.
pub fn random_init_seed() -> u64 {
    seed_mode_and_value().1
}

// --- Private ---

#[derive(Copy, Clone)]
enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    fn sort(self, v: &mut [i32]) {
        match self {
            Direction::Ascending => v.sort_unstable(),
            Direction::Descending => v.sort_unstable_by(|a, b| b.cmp(a)),
        }
    }
}

fn saws(len: usize, saw_count: usize, mut direction: impl FnMut(usize) -> Direction) -> Vec<i32> {
    let mut v = random(len);
    if len == 0 {
        return v;
    }

    let chunk_size = (len / saw_count.max(1)).max(1);
    for (i, chunk) in v.chunks_mut(chunk_size).enumerate() {
        direction(i).sort(chunk);
    }

    v
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum SeedMode {
    OncePerProcess,
    EachCall,
    Override,
}

static SEED: Mutex<Option<(SeedMode, u64)>> = Mutex::new(None);

fn seed_mode_and_value() -> (SeedMode, u64) {
    let (mode, seed) = *SEED.lock().unwrap().get_or_insert_with(|| {
        match env::var("OVERRIDE_SEED") {
            Ok(seed) => (
                SeedMode::Override,
                seed.parse().expect("OVERRIDE_SEED must be a u64"),
            ),
            Err(_) => (SeedMode::OncePerProcess, thread_rng().gen()),
        }
    });

    match mode {
        SeedMode::EachCall => (mode, thread_rng().gen()),
        _ => (mode, seed),
    }
}

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}
