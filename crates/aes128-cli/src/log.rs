/// Writes a timestamped status line to stderr when verbose output is on.
#[macro_export]
macro_rules! log {
    ($verbose:expr, $($arg:tt)*) => {
        if $verbose {
            eprintln!(
                "[{}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                format_args!($($arg)*)
            );
        }
    };
}
