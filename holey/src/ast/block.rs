//! Defining blocks, i.e. sequences of statements.

use super::{Stmt, VarMap};
use crate::consts::ConstData;
use crate::error::IrError;
use crate::scope::{ScopeId, Scopes};

/// A block in the AST.
///
/// A block is a list of ordered statements. It opens a new scope: the
/// variables declared in it are visible to the statements that follow them
/// in the block, and nowhere else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    /// List of consecutive statements.
    pub stmts: Vec<Stmt>,
    /// Line of the opening brace.
    pub line: usize,
}

/// Creates a block made of a list of statements.
pub fn stmts(stmts: impl IntoIterator<Item = Stmt>) -> Block {
    Block {
        stmts: stmts.into_iter().collect(),
        line: 0,
    }
}

impl From<Vec<Stmt>> for Block {
    fn from(stmts: Vec<Stmt>) -> Self {
        Block { stmts, line: 0 }
    }
}

impl Block {
    /// Sets the line of this block.
    pub fn at(self, line: usize) -> Self {
        Self { line, ..self }
    }

    /// Sum of the sizes of the statements.
    pub fn size(&self) -> usize {
        self.stmts.iter().map(Stmt::size).sum()
    }

    /// Checks the structure of all the statements.
    ///
    /// # Errors
    /// Returns the first [`IrError::MalformedTree`] met.
    pub fn validate(&self) -> Result<(), IrError> {
        self.stmts.iter().try_for_each(Stmt::validate)
    }

    /// Replaces every literal constant in the block with a hole, numbered
    /// from `index` onward, statement after statement.
    ///
    /// # Errors
    /// Fails if any statement is malformed, before extracting anything.
    pub fn replace_const(self, index: usize) -> Result<(Block, ConstData), IrError> {
        self.validate()?;
        let mut consts = ConstData::new(index);
        let block = self.extract(&mut consts)?;
        Ok((block, consts))
    }

    /// Replaces constants with holes, recording them in `consts`.
    pub(crate) fn extract(self, consts: &mut ConstData) -> Result<Block, IrError> {
        let stmts = self
            .stmts
            .into_iter()
            .map(|stmt| stmt.extract(consts))
            .collect::<Result<_, _>>()?;
        Ok(Block {
            stmts,
            line: self.line,
        })
    }

    /// Returns the scope visible after the block, given the scope `ctx`
    /// visible before it.
    ///
    /// Declarations do not escape the block, so this is `ctx`.
    ///
    /// # Errors
    /// Fails if any statement is malformed.
    pub fn build_context(&self, _scopes: &mut Scopes, ctx: ScopeId) -> Result<ScopeId, IrError> {
        self.validate()?;
        Ok(ctx)
    }

    /// Returns the scope at the end of the block, with all its declarations,
    /// given the scope `ctx` visible before it.
    ///
    /// Each statement sees the scope built by the previous ones.
    ///
    /// # Errors
    /// Fails if any statement is malformed.
    pub fn inner_context(&self, scopes: &mut Scopes, ctx: ScopeId) -> Result<ScopeId, IrError> {
        let scope = scopes.child(ctx);
        self.stmts
            .iter()
            .try_fold(scope, |scope, stmt| stmt.build_context(scopes, scope))
    }

    /// Records the variables declared directly in this block into `m`, in
    /// order.
    ///
    /// Each statement gets this block as its parent, and its own position.
    /// Nested blocks are not entered.
    pub fn add_record_stmt(&self, m: VarMap) -> VarMap {
        self.stmts
            .iter()
            .enumerate()
            .fold(m, |m, (index, stmt)| stmt.add_record_stmt(self, index, m))
    }

    /// Variables declared in this block, in declaration order.
    pub fn declared_vars(&self) -> VarMap {
        self.add_record_stmt(VarMap::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::expr::{binop, bit, chr, hole, int, var};
    use crate::ast::stmt::*;
    use crate::ast::var::vardef;
    use crate::ast::{Ty::*, Var};

    #[test]
    fn size_is_sum() {
        let block = stmts(vec![
            declare(vardef("x", IntT), int(3)),
            while_loop(var("c"), Some(block_stmt(stmts(vec![assign("x", int(1))])))),
            do_while(None, var("c")),
            ret(var("x")),
        ]);
        assert_eq!(block.size(), 3);
        assert_eq!(Block::default().size(), 0);
    }

    #[test]
    fn threads_indices() {
        let block = stmts(vec![
            declare(vardef("x", IntT), int(3)),
            declare(vardef("b", BitT), bit(false)),
            assign("x", binop(var("x"), "*", int(2))),
        ]);
        let (block, consts) = block.replace_const(10).unwrap();
        assert_eq!(consts.indices().collect::<Vec<_>>(), vec![10, 11, 12]);
        assert_eq!(block.stmts[1].as_declare().unwrap().1, Some(&hole(11)));
    }

    #[test]
    fn records_in_declaration_order() {
        let block = stmts(vec![
            declare(vardef("x", IntT), int(1)),
            assign("x", int(2)),
            declare_uninit(vardef("y", BitT)),
        ]);
        let m = block.declared_vars();
        let order: Vec<_> = m.iter().map(|(name, ty)| (name.as_str(), ty)).collect();
        assert_eq!(order, vec![("x", &IntT), ("y", &BitT)]);
    }

    #[test]
    fn records_keep_seed() {
        let block = stmts(vec![declare(vardef("x", IntT), int(1))]);
        let mut seed = VarMap::new();
        seed.insert(Var::from("n"), CharT);
        let m = block.add_record_stmt(seed);
        assert_eq!(m.get("n"), Some(&CharT));
        assert_eq!(m.get_index(1).map(|(name, _)| name.as_str()), Some("x"));
    }

    #[test]
    fn nested_declarations_are_not_recorded() {
        let block = stmts(vec![
            declare(vardef("x", IntT), int(0)),
            block_stmt(stmts(vec![declare(vardef("x", CharT), chr('a'))])),
            if_s(
                bit(true),
                block_stmt(stmts(vec![declare(vardef("y", IntT), int(0))])),
                None,
            ),
        ]);
        let m = block.declared_vars();
        assert_eq!(m.len(), 1);
        assert_eq!(m.get("x"), Some(&IntT));

        let inner = block.stmts[1].as_block().unwrap().declared_vars();
        assert_eq!(inner.get("x"), Some(&CharT));
    }

    #[test]
    fn declarations_do_not_escape() {
        let mut scopes = Scopes::new();
        let root = scopes.root();
        let block = stmts(vec![
            declare(vardef("x", IntT), int(1)),
            declare(vardef("y", IntT), var("x")),
        ]);
        assert_eq!(block.build_context(&mut scopes, root).unwrap(), root);
        assert_eq!(scopes.len(), 1);

        let inner = block.inner_context(&mut scopes, root).unwrap();
        assert_eq!(scopes.get(inner, "x"), Some(&IntT));
        assert_eq!(scopes.get(inner, "y"), Some(&IntT));
        assert!(scopes.names(root).is_empty());
    }
}
