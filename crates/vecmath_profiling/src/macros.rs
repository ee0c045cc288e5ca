//! Macros for defining benchmark targets and logging their timing.

/// Evaluates the given expression and logs how long it took at the info
/// level.
#[macro_export]
macro_rules! with_timing_info_logging {
    ($message:expr $(,$arg:expr)*; $expression:expr) => {{
        let _start_time = ::std::time::Instant::now();
        let _result = $expression;
        let _duration = _start_time.elapsed();
        $crate::log::info!(
            concat!($message, " took {:.2} ms")$(,$arg)*,
            _duration.as_secs_f64() * 1e3,
        );
        _result
    }};
}

/// Defines an enum with one variant for each of the given benchmark
/// functions, grouped by the module under `$benchmarks_mod` they live in.
/// The variant for `geometry::normalize_vector3d` is
/// `GeometryNormalizeVector3d`.
///
/// The enum derives `clap::ValueEnum` when the invoking crate has a `cli`
/// feature enabled.
#[macro_export]
macro_rules! define_target_enum {
(
    $name:ident,
    $benchmarks_mod:path,
    $(
        $module:ident => {
            $($func:ident),* $(,)?
        }
    ),* $(,)?
) => {
    $crate::pastey::paste! {
        #[allow(clippy::enum_variant_names)]
        #[cfg_attr(feature = "cli", derive(::clap::ValueEnum))]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
        pub enum $name {
            $(
                $( [<$module:camel $func:camel>] ),*
            ),*
        }

        impl $name {
            /// All benchmark targets.
            pub const ALL: &'static [Self] = &[
                $(
                    $( Self::[<$module:camel $func:camel>], )*
                )*
            ];

            fn execute(&self, benchmarker: impl $crate::benchmark::Benchmarker) {
                match self {
                    $(
                        $( Self::[<$module:camel $func:camel>] => $benchmarks_mod::$module::$func(benchmarker), )*
                    )*
                }
            }
        }
    }};
}

/// Defines a `criterion` benchmark function with the given name that runs
/// the benchmark function of the same name in the given module.
#[cfg(feature = "criterion")]
#[macro_export]
macro_rules! define_criterion_target {
    ($group:ident, $name:ident) => {
        pub fn $name(c: &mut $crate::benchmark::criterion::Criterion) {
            $group::$name(
                $crate::benchmark::criterion::CriterionFunctionBenchmarker::new(
                    c,
                    stringify!($name),
                    None,
                ),
            );
        }
    };
    ($group:ident, $name:ident, $sample_count:expr) => {
        pub fn $name(c: &mut $crate::benchmark::criterion::Criterion) {
            $group::$name(
                $crate::benchmark::criterion::CriterionFunctionBenchmarker::new(
                    c,
                    stringify!($name),
                    Some($sample_count),
                ),
            );
        }
    };
}
