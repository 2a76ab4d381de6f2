mod family;
mod pair;
mod token;


pub use family::TypeFamily;
pub use pair::Pair;
pub use token::{Lineage, TypeToken, Typed};
