//! Defining the representation of types in the AST.

use std::fmt;

use serde::Serialize;

use crate::utils::boxed;

/// Types in our language.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Ty {
    /// Void type, for functions returning nothing.
    VoidT,
    /// A single bit, our boolean type.
    BitT,
    /// A bounded integer.
    IntT,
    /// A character.
    CharT,
    /// A floating-point number.
    DoubleT,
    /// The string type.
    StrT,
    /// Arrays.
    ArrayT(Box<Ty>),
    /// Structures.
    ///
    /// Structures are identified by their names.
    StructT(String),
}

use Ty::*;

/// Shortcut to create an array type of `item`s.
pub fn array_ty(item: Ty) -> Ty {
    ArrayT(boxed(item))
}

impl Default for Ty {
    /// The default type: the void type.
    fn default() -> Self {
        VoidT
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoidT => write!(f, "void"),
            BitT => write!(f, "bit"),
            IntT => write!(f, "int"),
            CharT => write!(f, "char"),
            DoubleT => write!(f, "double"),
            StrT => write!(f, "string"),
            ArrayT(item) => write!(f, "{item}[]"),
            StructT(name) => write!(f, "{name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(IntT.to_string(), "int");
        assert_eq!(array_ty(array_ty(BitT)).to_string(), "bit[][]");
        assert_eq!(StructT("Point".to_string()).to_string(), "Point");
    }
}
