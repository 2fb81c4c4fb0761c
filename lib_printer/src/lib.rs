use tracing_subscriber::EnvFilter;

/// Writes a line to stdout for the human at the keyboard.
/// Only this crate's own unit tests compile it to a no-op; in every other
/// crate, tests included, it prints (and the test harness captures it).
#[macro_export]
macro_rules! out {
    ($($arg:tt)*) => ($crate::out_impl(format!($($arg)*)))
}

#[cfg(not(test))]
pub fn out_impl(s: String) {
    println!("{}", s);
}

#[cfg(test)]
pub fn out_impl(_s: String) {}

/// Maps a `-v` count onto a tracing level directive.
fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global tracing subscriber.
/// `RUST_LOG`, when set, takes precedence over the verbosity count.
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
