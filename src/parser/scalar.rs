use super::{ParseError, Parser, ParserRegistry, Value};
use crate::TypeToken;

/// Passes input through unchanged
#[derive(Debug, Default)]
pub struct StringParser;

impl Parser for StringParser {
    fn parse(&self, _: &ParserRegistry, _: &TypeToken, raw: &str) -> Result<Value, ParseError> {
        Ok(Value::String(raw.to_string()))
    }
}

/// Accepts `true` or `false`, ignoring case
#[derive(Debug, Default)]
pub struct BoolParser;

impl Parser for BoolParser {
    fn parse(
        &self,
        _: &ParserRegistry,
        token: &TypeToken,
        raw: &str,
    ) -> Result<Value, ParseError> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("true") {
            Ok(Value::Bool(true))
        } else if trimmed.eq_ignore_ascii_case("false") {
            Ok(Value::Bool(false))
        } else {
            Err(ParseError::invalid(
                token.family(),
                raw,
                "expected `true` or `false`",
            ))
        }
    }
}

#[derive(Debug, Default)]
pub struct IntegerParser;

impl Parser for IntegerParser {
    fn parse(
        &self,
        _: &ParserRegistry,
        token: &TypeToken,
        raw: &str,
    ) -> Result<Value, ParseError> {
        raw.trim()
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|e| ParseError::invalid(token.family(), raw, e))
    }
}

#[derive(Debug, Default)]
pub struct FloatParser;

impl Parser for FloatParser {
    fn parse(
        &self,
        _: &ParserRegistry,
        token: &TypeToken,
        raw: &str,
    ) -> Result<Value, ParseError> {
        raw.trim()
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|e| ParseError::invalid(token.family(), raw, e))
    }
}
