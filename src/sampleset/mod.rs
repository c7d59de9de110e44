pub mod order_stats;
pub mod summary;
pub mod test_helpers;

// Internal building blocks
mod distribution;
mod modal;
mod sample_set;
mod variance;

// Public surface
pub use sample_set::SampleSet;

// Opt-in tracing (cheap unless env var set)
#[macro_export]
macro_rules! sstrace {
    ($($arg:tt)*) => {
        if std::env::var("SAMPLESTATS_TRACE").is_ok() {
            eprintln!($($arg)*);
        }
    }
}
