use super::{ParseError, Parser, ParserRegistry, Value};
use crate::TypeToken;

/// Parses `first,second` into a [`Value::Pair`]
///
/// Each half is handed back to the registry, typed by the pair's generic
/// arguments. Subtypes without two arguments of their own (e.g. a
/// `Credentials` extending `Pair<String, String>`) borrow them from the
/// nearest supertype that has two.
#[derive(Debug, Default)]
pub struct PairParser;

impl Parser for PairParser {
    fn parse(
        &self,
        oracle: &ParserRegistry,
        token: &TypeToken,
        raw: &str,
    ) -> Result<Value, ParseError> {
        let params = token
            .lineage()
            .map(TypeToken::params)
            .find(|params| params.len() == 2);

        let Some([first_type, second_type]) = params else {
            return Err(ParseError::MissingTypeParameters {
                family: token.family(),
                expected: 2,
                found: token.params().len(),
            });
        };

        let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
        let [first, second] = parts.as_slice() else {
            return Err(ParseError::invalid(
                token.family(),
                raw,
                format!("expected 2 comma-separated values, found {}", parts.len()),
            ));
        };

        Ok(Value::pair(
            oracle.parse(first_type, first)?,
            oracle.parse(second_type, second)?,
        ))
    }
}
