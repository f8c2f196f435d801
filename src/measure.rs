//! Wall clock and CPU time measurement around a single call.

use std::time::{Duration, Instant};

/// Time spent in one measured call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Times {
    pub wall: Duration,
    pub user: Duration,
    pub system: Duration,
}

/// Runs `f` once and returns how long it took. CPU times are process wide and zero on platforms
/// without `getrusage`.
pub fn measure(f: impl FnOnce()) -> Times {
    let cpu_before = cpu_times();
    let start = Instant::now();

    f();

    let wall = start.elapsed();
    let cpu_after = cpu_times();

    Times {
        wall,
        user: cpu_after.0.saturating_sub(cpu_before.0),
        system: cpu_after.1.saturating_sub(cpu_before.1),
    }
}

/// Returns `(user, system)` CPU time consumed by this process so far.
#[cfg(unix)]
fn cpu_times() -> (Duration, Duration) {
    fn to_duration(tv: libc::timeval) -> Duration {
        Duration::new(tv.tv_sec as u64, tv.tv_usec as u32 * 1_000)
    }

    // SAFETY: rusage is plain old data and getrusage only writes into the passed struct.
    let mut usage: libc::rusage = unsafe { std::mem::zeroed() };
    let ret = unsafe { libc::getrusage(libc::RUSAGE_SELF, &mut usage) };
    if ret != 0 {
        return (Duration::ZERO, Duration::ZERO);
    }

    (to_duration(usage.ru_utime), to_duration(usage.ru_stime))
}

#[cfg(not(unix))]
fn cpu_times() -> (Duration, Duration) {
    (Duration::ZERO, Duration::ZERO)
}
