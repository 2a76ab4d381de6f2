use super::{
    BoolParser, FloatParser, IntegerParser, PairParser, ParseError, Parser, RegistryError,
    StringParser, Value,
};
use crate::{TypeFamily, TypeToken};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Immutable lookup table from type family to parser
///
/// Lookups walk the requested type's ancestry, most specific family first,
/// and return the first registered parser. The stored `Arc` is handed back
/// as-is, so two lookups that land on the same family can be compared with
/// [`Arc::ptr_eq`].
pub struct ParserRegistry {
    parsers: HashMap<TypeFamily, Arc<dyn Parser>>,
}

impl ParserRegistry {
    /// Create a registry that owns `parsers` for its whole lifetime
    pub fn new(parsers: HashMap<TypeFamily, Arc<dyn Parser>>) -> Self {
        debug!(count = parsers.len(), "parser registry constructed");
        Self { parsers }
    }

    pub fn builder() -> ParserRegistryBuilder {
        ParserRegistryBuilder::new()
    }

    /// Registry holding the built-in string, bool, integer, float and pair parsers
    pub fn with_defaults() -> Self {
        let defaults: [(TypeFamily, Arc<dyn Parser>); 5] = [
            (TypeFamily::STRING, Arc::new(StringParser)),
            (TypeFamily::BOOL, Arc::new(BoolParser)),
            (TypeFamily::INTEGER, Arc::new(IntegerParser)),
            (TypeFamily::FLOAT, Arc::new(FloatParser)),
            (TypeFamily::PAIR, Arc::new(PairParser)),
        ];
        Self::new(HashMap::from(defaults))
    }

    /// Find the parser responsible for `token` or its nearest registered ancestor
    ///
    /// # Errors
    /// [`RegistryError::NoParserRegistered`] when no family in the ancestry
    /// has a parser.
    pub fn get(&self, token: &TypeToken) -> Result<&Arc<dyn Parser>, RegistryError> {
        for family in token.ancestry() {
            trace!(requested = %token.family(), %family, "checking family");
            if let Some(parser) = self.parsers.get(&family) {
                debug!(requested = %token.family(), resolved = %family, "resolved parser");
                return Ok(parser);
            }
        }

        debug!(requested = %token.family(), "no parser registered");
        Err(RegistryError::NoParserRegistered {
            family: token.family(),
        })
    }

    /// Look up the parser for `token` and run it over `raw`
    pub fn parse(&self, token: &TypeToken, raw: &str) -> Result<Value, ParseError> {
        self.get(token)?.parse(self, token, raw)
    }

    pub fn contains(&self, family: TypeFamily) -> bool {
        self.parsers.contains_key(&family)
    }

    /// Get the number of registered parsers
    pub fn parser_count(&self) -> usize {
        self.parsers.len()
    }

    /// List all registered families, sorted by name
    pub fn registered_families(&self) -> Vec<TypeFamily> {
        let mut families: Vec<_> = self.parsers.keys().copied().collect();
        families.sort();
        families
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserRegistry")
            .field("families", &self.registered_families())
            .finish()
    }
}

/// Mutable builder for constructing a registry
#[derive(Default)]
pub struct ParserRegistryBuilder {
    parsers: HashMap<TypeFamily, Arc<dyn Parser>>,
}

impl ParserRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a parser for a type family
    ///
    /// # Example
    /// ```ignore
    /// builder.register(TypeFamily::STRING, StringParser)?;
    /// builder.register(TypeFamily::PAIR, PairParser)?;
    /// ```
    pub fn register(
        &mut self,
        family: TypeFamily,
        parser: impl Parser + 'static,
    ) -> Result<(), RegistryError> {
        self.register_shared(family, Arc::new(parser))
    }

    /// Register an already shared parser, allowing one instance to serve
    /// several unrelated families
    pub fn register_shared(
        &mut self,
        family: TypeFamily,
        parser: Arc<dyn Parser>,
    ) -> Result<(), RegistryError> {
        match self.parsers.entry(family) {
            Entry::Occupied(_) => Err(RegistryError::DuplicateRegistration { family }),
            Entry::Vacant(slot) => {
                slot.insert(parser);
                Ok(())
            }
        }
    }

    pub fn build(self) -> ParserRegistry {
        ParserRegistry::new(self.parsers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ParserRegistry>();
    }

    #[test]
    fn test_defaults_cover_builtin_families() {
        let registry = ParserRegistry::default();

        assert_eq!(registry.parser_count(), 5);
        assert!(registry.contains(TypeFamily::PAIR));
        assert!(!registry.contains(TypeFamily::OBJECT));
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut builder = ParserRegistry::builder();
        builder.register(TypeFamily::STRING, StringParser).unwrap();

        let err = builder.register(TypeFamily::STRING, StringParser).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateRegistration {
                family: TypeFamily::STRING
            }
        );
        assert_eq!(builder.build().parser_count(), 1);
    }
}
