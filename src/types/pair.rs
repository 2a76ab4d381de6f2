use super::{TypeFamily, TypeToken, Typed};

/// Two values of possibly different types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pair<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> Pair<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    pub fn into_inner(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: Typed, B: Typed> Typed for Pair<A, B> {
    fn type_token() -> TypeToken {
        TypeToken::new(TypeFamily::PAIR).with_params([A::type_token(), B::type_token()])
    }
}
