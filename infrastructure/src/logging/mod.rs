//! Logging infrastructure: structured load-test samples.
//!
//! Provides [`JsonlSampleSink`], a JSONL file writer that implements the
//! [`SampleSink`](votestream_application::SampleSink) port.

mod jsonl_sink;

pub use jsonl_sink::JsonlSampleSink;
