//! Defining variables and variable definitions in the AST.

use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

use super::Ty;

/// A variable in the code.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Var(String);

impl Var {
    /// See the variable as a string.
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }
}

impl AsRef<Var> for Var {
    fn as_ref(&self) -> &Var {
        self
    }
}

impl From<Var> for String {
    fn from(value: Var) -> Self {
        value.0
    }
}

impl AsRef<str> for Var {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Var {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Var {
    fn from(v: &str) -> Self {
        Self(v.to_owned())
    }
}

impl From<String> for Var {
    fn from(v: String) -> Self {
        Self(v)
    }
}

impl fmt::Debug for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        <Self as fmt::Display>::fmt(self, f)
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<str> for Var {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Var {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A variable definition.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct VarDef {
    /// Variable name.
    pub name: Var,
    /// Type of the variable.
    pub ty: Ty,
}

impl fmt::Debug for VarDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.ty, self.name)
    }
}

impl AsRef<Var> for VarDef {
    fn as_ref(&self) -> &Var {
        &self.name
    }
}

impl From<VarDef> for Var {
    fn from(vardef: VarDef) -> Self {
        vardef.name
    }
}

impl From<VarDef> for (Var, Ty) {
    fn from(vardef: VarDef) -> Self {
        (vardef.name, vardef.ty)
    }
}

/// Shortcut to create a new variable definition.
pub fn vardef(name: impl ToString, ty: Ty) -> VarDef {
    let name = name.to_string().into();
    VarDef { name, ty }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Ty::*;

    #[test]
    fn compare_with_str() {
        let var: Var = "test123".into();
        assert_eq!(var, "test123");
        assert!(var != "test");
    }

    #[test]
    fn vardef_debug() {
        let def = vardef("x", IntT);
        assert_eq!(format!("{def:?}"), "int x");
        let (name, ty) = def.into();
        assert_eq!(name, "x");
        assert_eq!(ty, IntT);
    }
}
