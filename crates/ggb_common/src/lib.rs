//! Utilities shared between the GGB core and its hosts.

pub mod sample_queue;

pub use sample_queue::SampleQueue;
