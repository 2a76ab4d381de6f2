mod error;
mod pair;
mod registry;
mod scalar;
mod value;


pub use error::{ParseError, RegistryError};
pub use pair::PairParser;
pub use registry::{ParserRegistry, ParserRegistryBuilder};
pub use scalar::{BoolParser, FloatParser, IntegerParser, StringParser};
pub use value::Value;

use crate::TypeToken;
use std::fmt;

/// Core trait that all parsers must implement
pub trait Parser: fmt::Debug + Send + Sync {
    /// Convert raw text into a value of the requested type
    ///
    /// # Arguments
    /// * `oracle` - Registry to consult for component types (e.g. the halves of a pair)
    /// * `token` - The type being parsed, possibly a subtype of the family this
    ///   parser was registered for
    /// * `raw` - Input text
    fn parse(
        &self,
        oracle: &ParserRegistry,
        token: &TypeToken,
        raw: &str,
    ) -> Result<Value, ParseError>;
}
