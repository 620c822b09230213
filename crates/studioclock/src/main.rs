use studioclock::ClockConfig;
use studioclock_engine::logging::{init_logging, LoggingConfig};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());
    studioclock::run(ClockConfig::default())
}
