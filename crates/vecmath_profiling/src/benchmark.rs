//! Running benchmark functions.

#[cfg(feature = "criterion")]
pub mod criterion;

use std::{
    hint::black_box,
    time::{Duration, Instant},
};

/// Something that can repeatedly run and time a function.
pub trait Benchmarker {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T);
}

/// Runs a function repeatedly for a fixed wall-clock duration and logs the
/// average time per call.
#[derive(Clone, Debug)]
pub struct BasicBenchmarker {
    duration: Duration,
    delayer: Delayer,
}

/// Delays a benchmark until a given time has passed since the program
/// started, leaving time to attach a profiler.
#[derive(Clone, Debug)]
pub struct Delayer {
    program_start: Instant,
    delay: Duration,
}

impl BasicBenchmarker {
    pub fn new(duration: Duration, delayer: Delayer) -> Self {
        Self { duration, delayer }
    }
}

impl Benchmarker for BasicBenchmarker {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T) {
        self.delayer.wait();

        let start = Instant::now();
        let mut iterations: u64 = 0;
        loop {
            black_box(f());
            iterations += 1;

            if start.elapsed() > self.duration {
                break;
            }
        }
        let elapsed = start.elapsed();

        log::info!(
            "Ran {} iterations, {:.2} ns per iteration",
            iterations,
            elapsed.as_secs_f64() * 1e9 / iterations as f64
        );
    }
}

impl Delayer {
    pub fn new(program_start: Instant, delay_seconds: f64) -> Self {
        Self {
            program_start,
            delay: Duration::from_secs_f64(delay_seconds),
        }
    }

    fn wait(self) {
        let remaining = self.delay.saturating_sub(self.program_start.elapsed());
        if remaining > Duration::ZERO {
            log::debug!("Waiting {:.2} s before benchmarking", remaining.as_secs_f64());
            std::thread::sleep(remaining);
        }
    }
}

/// Runs the given benchmark for at least `duration` seconds, starting no
/// earlier than `delay` seconds from now. The benchmark is always run at
/// least once.
///
/// # Panics
/// If `duration` or `delay` is negative, infinite or NaN.
pub fn benchmark(execute: impl Fn(BasicBenchmarker), duration: f64, delay: f64) {
    let start = Instant::now();

    let delayer = Delayer::new(start, delay);
    let duration = Duration::from_secs_f64(duration);

    let benchmarker = BasicBenchmarker::new(duration, delayer);

    with_timing_info_logging!("Benchmark"; execute(benchmarker));
}
