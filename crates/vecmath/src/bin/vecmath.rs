use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use clap::{Parser, Subcommand};

    #[derive(Debug, Parser)]
    #[command(about = "Fixed-size vector math", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        #[cfg(feature = "benchmark")]
        /// Run a benchmarking target
        Benchmark {
            /// Benchmarking target to run
            #[arg(short, long, value_enum)]
            target: vecmath::benchmark::Target,

            /// Number of seconds to run the target for (it will always be run at least
            /// once)
            #[arg(short, long, default_value_t = 0.0)]
            duration: f64,

            /// Minimum number of seconds from the program is started until the target
            /// is run
            #[arg(long, default_value_t = 0.0)]
            delay: f64,
        },
        #[cfg(not(feature = "benchmark"))]
        /// Run a benchmarking target (requires the `benchmark` feature)
        Benchmark,
        /// Parse a vector like `[Vector3D 1.0 2.0 3.0]` and print its magnitude
        Magnitude {
            /// The vector to measure
            vector: String,
        },
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();
        log::debug!("Parsed command line: {cli:?}");

        match cli.command {
            #[cfg(feature = "benchmark")]
            Command::Benchmark {
                target,
                duration,
                delay,
            } => {
                let duration = validated_seconds("duration", duration)?;
                let delay = validated_seconds("delay", delay)?;
                vecmath::benchmark::benchmark(target, duration, delay);
                Ok(())
            }
            #[cfg(not(feature = "benchmark"))]
            Command::Benchmark => {
                anyhow::bail!(
                    "The `benchmark` subcommand requires the `benchmark` feature to be enabled."
                )
            }
            Command::Magnitude { vector } => {
                println!("{}", magnitude_of(&vector)?);
                Ok(())
            }
        }
    }

    #[cfg_attr(not(feature = "benchmark"), allow(dead_code))]
    pub(super) fn validated_seconds(name: &str, seconds: f64) -> Result<f64> {
        if !(seconds.is_finite() && seconds >= 0.0) {
            anyhow::bail!(
                "The {name} must be a finite, non-negative number of seconds, got {seconds}"
            );
        }
        Ok(seconds)
    }

    pub(super) fn magnitude_of(text: &str) -> Result<String> {
        use anyhow::Context as _;
        use vecmath::{geometry::magnitude, vector::*};

        let type_name = text
            .trim()
            .trim_start_matches('[')
            .split_whitespace()
            .next()
            .unwrap_or_default();

        macro_rules! parse_and_measure {
            ($($ty:ident),*) => {
                match type_name {
                    $(
                        stringify!($ty) => {
                            let v: $ty = text
                                .parse()
                                .with_context(|| format!("Invalid vector `{text}`"))?;
                            Ok(magnitude(&v).to_string())
                        }
                    )*
                    _ => anyhow::bail!("Unknown vector type `{type_name}`"),
                }
            };
        }

        parse_and_measure!(
            Vector2D, Vector3D, Vector4D, Vector2F, Vector3F, Vector4F, Vector2I, Vector3I,
            Vector4I, Vector2L, Vector3L, Vector4L
        )
    }
}


#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
