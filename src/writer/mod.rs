//! Output layer: quad conversion and concrete sinks

mod jsonl;
mod memory;
mod nquads;
mod quad;

pub use jsonl::JsonLinesWriter;
pub use memory::{ContextEvent, MemoryQuadSink, MemoryTripleSink};
pub use nquads::NQuadsWriter;
pub use quad::{QuadSink, QuadWriter};
