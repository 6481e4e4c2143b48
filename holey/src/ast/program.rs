//! Defining programs in the AST.

use super::Fun;
use crate::consts::HoleTable;
use crate::error::IrError;

/// A program: an ordered collection of functions.
///
/// Order matters: holes are numbered function after function.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// Functions defined in the program.
    pub funs: Vec<Fun>,
}

impl Program {
    /// Gets a function by its name.
    pub fn get_fun(&self, name: &str) -> Option<&Fun> {
        self.funs.iter().find(|f| f.name == name)
    }

    /// Sum of the sizes of all functions.
    pub fn size(&self) -> usize {
        self.funs.iter().map(Fun::size).sum()
    }

    /// Replaces every literal constant of the program with a hole, numbered
    /// from `index` onward.
    ///
    /// Each function starts where the previous one ended.
    ///
    /// # Errors
    /// Fails if a function is malformed.
    pub fn replace_const(self, index: usize) -> Result<(Program, HoleTable), IrError> {
        let mut table = HoleTable::new(index);
        let mut funs = Vec::with_capacity(self.funs.len());
        for fun in self.funs {
            let (fun, consts) = fun.replace_const(table.next_index())?;
            table.absorb(consts)?;
            funs.push(fun);
        }
        Ok((Program { funs }, table))
    }
}

impl From<Vec<Fun>> for Program {
    fn from(funs: Vec<Fun>) -> Self {
        Program { funs }
    }
}

impl From<Fun> for Program {
    fn from(f: Fun) -> Self {
        Program::from(vec![f])
    }
}
