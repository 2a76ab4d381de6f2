use std::fmt;

/// Erased identity of a type family, used as the registry key.
///
/// All instantiations of a generic type share one family: `Pair<String, i64>`
/// and `Pair<bool, bool>` both belong to [`TypeFamily::PAIR`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeFamily(&'static str);

impl TypeFamily {
    /// Universal root; every ancestry chain ends here
    pub const OBJECT: TypeFamily = TypeFamily("object");
    pub const STRING: TypeFamily = TypeFamily("string");
    pub const BOOL: TypeFamily = TypeFamily("bool");
    pub const INTEGER: TypeFamily = TypeFamily("integer");
    pub const FLOAT: TypeFamily = TypeFamily("float");
    pub const PAIR: TypeFamily = TypeFamily("pair");

    /// Declare a family by name. Families with equal names are the same family.
    pub const fn named(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }

    pub fn is_root(&self) -> bool {
        *self == Self::OBJECT
    }
}

impl fmt::Display for TypeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
