pub mod escape;
pub mod serializer;

pub use serializer::{build, build_with_options, Writer, WriterOptions};
