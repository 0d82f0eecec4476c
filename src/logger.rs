use tracing_subscriber::fmt::format;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

/// Installs the global subscriber. `log` records are forwarded to it, so the
/// crate logs through the `log` macros.
///
/// Output goes to stderr without timestamps. `RUST_LOG` refines the filter.
pub fn init() {
    struct NoTime;
    impl FormatTime for NoTime {
        fn format_time(&self, _: &mut format::Writer<'_>) -> std::fmt::Result {
            Ok(())
        }
    }

    let format = format()
        .with_timer(NoTime)
        .with_level(true)
        .with_target(true);

    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    let filter = env_filter(&directives);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .init();
}

/// Filter for the given `RUST_LOG` directives, `info` when there are none.
/// wgpu is capped at `warn` either way.
fn env_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
        .add_directive("wgpu_core=warn".parse().expect("static directive"))
        .add_directive("wgpu_hal=warn".parse().expect("static directive"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_info() {
        let filter = env_filter("").to_string();
        assert!(filter.contains("info"), "{}", filter);
        assert!(filter.contains("wgpu_core=warn"), "{}", filter);
    }

    #[test]
    fn debug_level_is_kept() {
        let filter = env_filter("debug").to_string();
        assert!(filter.contains("debug"), "{}", filter);
        assert!(!filter.contains("info"), "{}", filter);
        assert!(filter.contains("wgpu_hal=warn"), "{}", filter);
    }

    #[test]
    fn target_directives_are_kept() {
        let filter = env_filter("bezier_trace=trace").to_string();
        assert!(filter.contains("bezier_trace=trace"), "{}", filter);
        assert!(!filter.contains("info"), "{}", filter);
    }
}
