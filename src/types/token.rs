use super::TypeFamily;
use std::fmt;

/// Descriptor of one concrete type: its family, its supertype and any
/// generic arguments.
///
/// Tokens are declared explicitly (see [`Typed`]) rather than discovered by
/// introspection. Only the root token has no supertype, so every chain
/// terminates at [`TypeFamily::OBJECT`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeToken {
    family: TypeFamily,
    supertype: Option<Box<TypeToken>>,
    params: Vec<TypeToken>,
}

impl TypeToken {
    /// The universal root token
    pub fn object() -> Self {
        Self {
            family: TypeFamily::OBJECT,
            supertype: None,
            params: Vec::new(),
        }
    }

    /// Token for a type whose only ancestor is the root
    pub fn new(family: TypeFamily) -> Self {
        if family.is_root() {
            return Self::object();
        }
        Self::extending(family, Self::object())
    }

    /// Token for a subtype of `supertype`
    ///
    /// # Example
    /// ```ignore
    /// // struct Credentials(Pair<String, String>)
    /// let token = TypeToken::extending(
    ///     TypeFamily::named("credentials"),
    ///     TypeToken::of::<Pair<String, String>>(),
    /// );
    /// ```
    pub fn extending(family: TypeFamily, supertype: TypeToken) -> Self {
        if family.is_root() {
            return Self::object();
        }
        Self {
            family,
            supertype: Some(Box::new(supertype)),
            params: Vec::new(),
        }
    }

    /// Attach generic arguments. They never influence registry lookup.
    pub fn with_params(mut self, params: impl IntoIterator<Item = TypeToken>) -> Self {
        self.params = params.into_iter().collect();
        self
    }

    /// Token declared by `T`
    pub fn of<T: Typed>() -> Self {
        T::type_token()
    }

    pub fn family(&self) -> TypeFamily {
        self.family
    }

    pub fn supertype(&self) -> Option<&TypeToken> {
        self.supertype.as_deref()
    }

    pub fn params(&self) -> &[TypeToken] {
        &self.params
    }

    /// Walk this token and its supertypes, most specific first
    pub fn lineage(&self) -> Lineage<'_> {
        Lineage { next: Some(self) }
    }

    /// Family identities from this type's own family up to the root
    pub fn ancestry(&self) -> impl Iterator<Item = TypeFamily> + '_ {
        self.lineage().map(TypeToken::family)
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.family)?;
        if !self.params.is_empty() {
            f.write_str("<")?;
            for (i, param) in self.params.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", param)?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}

/// Iterator over a token and its supertype chain
pub struct Lineage<'a> {
    next: Option<&'a TypeToken>,
}

impl<'a> Iterator for Lineage<'a> {
    type Item = &'a TypeToken;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.supertype();
        Some(current)
    }
}

/// Static declaration of a type's family and ancestry
pub trait Typed {
    fn type_token() -> TypeToken;
}

impl Typed for String {
    fn type_token() -> TypeToken {
        TypeToken::new(TypeFamily::STRING)
    }
}

impl Typed for bool {
    fn type_token() -> TypeToken {
        TypeToken::new(TypeFamily::BOOL)
    }
}

impl Typed for i64 {
    fn type_token() -> TypeToken {
        TypeToken::new(TypeFamily::INTEGER)
    }
}

impl Typed for f64 {
    fn type_token() -> TypeToken {
        TypeToken::new(TypeFamily::FLOAT)
    }
}
