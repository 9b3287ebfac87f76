// Library module for emoji-scrub
// Re-exports modules for use in integration tests and the binary

pub mod scrub;
