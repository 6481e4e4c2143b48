//! Defining functions in the AST.

use super::{Block, Ty, VarDef, VarMap};
use crate::consts::ConstData;
use crate::error::IrError;
use crate::scope::{ScopeId, Scopes};

/// A function in the AST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fun {
    /// Name of that function.
    pub name: String,
    /// Parameters to that function, with their types.
    pub params: Vec<VarDef>,
    /// Return type.
    pub ret_ty: Ty,
    /// Body of the function.
    pub body: Block,
    /// Line of the signature.
    pub line: usize,
}

impl Default for Fun {
    fn default() -> Self {
        Self {
            name: String::new(),
            params: vec![],
            ret_ty: Ty::VoidT,
            body: Block::default(),
            line: 0,
        }
    }
}

impl Fun {
    /// Size of the body.
    pub fn size(&self) -> usize {
        self.body.size()
    }

    /// Replaces every literal constant of the body with a hole, numbered from
    /// `index` onward.
    ///
    /// # Errors
    /// Fails if the body is malformed.
    pub fn replace_const(self, index: usize) -> Result<(Fun, ConstData), IrError> {
        let (body, consts) = self.body.replace_const(index)?;
        Ok((Fun { body, ..self }, consts))
    }

    /// Scope in which the body runs: the parameters, on top of `ctx`.
    pub fn params_context(&self, scopes: &mut Scopes, ctx: ScopeId) -> ScopeId {
        scopes.extend(ctx, self.params.iter().cloned().map(Into::into))
    }

    /// Scope at the end of the body, given the scope `ctx` in which the
    /// function is defined.
    ///
    /// # Errors
    /// Fails if the body is malformed.
    pub fn build_context(&self, scopes: &mut Scopes, ctx: ScopeId) -> Result<ScopeId, IrError> {
        let params = self.params_context(scopes, ctx);
        self.body.inner_context(scopes, params)
    }

    /// Variables of the function: the parameters, then the variables declared
    /// in the body.
    pub fn declared_vars(&self) -> VarMap {
        let params = self
            .params
            .iter()
            .map(|param| (param.name.clone(), param.ty.clone()))
            .collect();
        self.body.add_record_stmt(params)
    }
}
