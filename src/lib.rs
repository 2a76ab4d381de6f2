//! Registry of text-to-value parsers keyed by type family.
//!
//! A lookup for a type that has no parser of its own resolves to the parser
//! of its nearest registered ancestor, so a `Credentials` type declared as a
//! subtype of `Pair<String, String>` is handled by the pair parser.
//!
//! Set `RUST_LOG=parser_registry=trace` and call [`init_tracing`] to follow
//! each ancestry walk.

// Public API exports
pub mod logging;
pub mod parser;
pub mod types;

// Re-export main types for convenience
pub use logging::init_tracing;

pub use types::{Lineage, Pair, TypeFamily, TypeToken, Typed};

pub use parser::{
    BoolParser, FloatParser, IntegerParser, PairParser, ParseError, Parser, ParserRegistry,
    ParserRegistryBuilder, RegistryError, StringParser, Value,
};
