pub mod bloom;
pub mod dbg;
pub mod graph;
pub mod kmer;
pub mod overlap;
pub mod path;
pub mod search;

/// Print a timestamped message to stderr.
#[macro_export]
macro_rules! elog {
    ($($arg:tt)*) => {
        eprintln!("[{}] {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"), format!($($arg)*));
    };
}
