mod compiled;
mod error;
mod segment;

pub use compiled::{Capture, CaptureList, CompiledPattern};
pub use error::{PatternError, PatternResult};
pub use segment::Segment;
