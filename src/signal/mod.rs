// src/signal/mod.rs
// Feeding side: where samples come from and how a period of them is kept.
pub mod buffer;
pub mod pipeline;
pub mod source;
pub use buffer::SampleWindow;
pub use pipeline::StripPipeline;
pub use source::{ManualSource, SampleBatch, SampleSource, SyntheticEcgSource};
