#![deny(missing_docs)]
//! Shared logging utilities for the outreach workspace.
//!
//! Every crate logs through the `engine_*` macros below so the backend can be
//! swapped in one place. The binary installs the real logger; tests call
//! [`initialize_for_tests`].

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! engine_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! engine_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! engine_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! engine_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Initializes a terminal logger for integration tests.
///
/// Safe to call from every test: later calls no-op once a logger is set.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, ConfigBuilder, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let config = ConfigBuilder::new()
        .set_target_level(log::LevelFilter::Error)
        .build();

    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        config,
        TerminalMode::Mixed,
        ColorChoice::Never,
    )]);
}

#[cfg(test)]
mod tests {
    #[test]
    fn macros_expand_without_a_logger() {
        engine_trace!("trace {}", 1);
        engine_debug!("debug {}", 2);
        engine_info!("info");
        engine_warn!("warn {:?}", Some(3));
        engine_error!("error");
    }

    #[test]
    fn initializing_twice_is_harmless() {
        super::initialize_for_tests();
        super::initialize_for_tests();
        engine_info!("logger ready");
    }
}
