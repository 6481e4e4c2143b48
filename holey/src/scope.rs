//! Defining chains of lexical scopes.
//!
//! Scopes are frames stored in an arena, and addressed by [`ScopeId`]s. Each
//! frame knows the handle of its parent frame, and lookups walk that chain.
//!
//! A frame is never modified once created: declaring a variable creates a new
//! frame on top of the current one. Hence a handle can be shared freely
//! between sibling statements.
//!
//! Handles carry the generation of their frame. A handle to a frame discarded
//! by [`Scopes::rewind`] resolves to nothing, even once its slot is reused.

use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use crate::ast::{Ty, Var, VarDef};
use crate::error::IrError;

/// Handle to a scope frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId {
    /// Slot of the frame.
    index: usize,
    /// Generation of the frame in that slot.
    generation: usize,
}

/// Marker of the state of [`Scopes`], to discard the frames created after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark(usize);

/// One frame: the variables it binds, and its parent.
#[derive(Clone)]
struct Frame {
    /// Generation in which it was created.
    generation: usize,
    /// Enclosing frame, `None` for the root.
    parent: Option<ScopeId>,
    /// Variables bound in this frame.
    vars: HashMap<Var, Ty>,
}

/// Arena of scope frames.
///
/// Invariant: always at least the root frame, and parents are always created
/// before their children.
#[derive(Clone)]
pub struct Scopes {
    /// Frames, indexed by their [`ScopeId`].
    frames: Vec<Frame>,
    /// Current generation, bumped by each rewind.
    generation: usize,
}

impl Scopes {
    /// Creates an arena with only an empty root frame.
    pub fn new() -> Self {
        Self {
            frames: vec![Frame {
                generation: 0,
                parent: None,
                vars: HashMap::new(),
            }],
            generation: 0,
        }
    }

    /// The root, outermost frame.
    pub fn root(&self) -> ScopeId {
        ScopeId {
            index: 0,
            generation: 0,
        }
    }

    /// Frame of a handle, if it was not discarded.
    fn frame(&self, id: ScopeId) -> Option<&Frame> {
        self.frames
            .get(id.index)
            .filter(|frame| frame.generation == id.generation)
    }

    /// Is `id` a handle to a live frame.
    pub fn is_live(&self, id: ScopeId) -> bool {
        self.frame(id).is_some()
    }

    /// Allocates a new frame.
    fn push(&mut self, parent: ScopeId, vars: HashMap<Var, Ty>) -> ScopeId {
        debug_assert!(self.is_live(parent), "dangling scope {parent:?}");
        self.frames.push(Frame {
            generation: self.generation,
            parent: Some(parent),
            vars,
        });
        ScopeId {
            index: self.frames.len() - 1,
            generation: self.generation,
        }
    }

    /// Opens a new, empty scope inside `parent`.
    pub fn child(&mut self, parent: ScopeId) -> ScopeId {
        self.push(parent, HashMap::new())
    }

    /// Returns the scope `parent` extended with `vardef`.
    pub fn declare(&mut self, parent: ScopeId, vardef: &VarDef) -> ScopeId {
        self.push(
            parent,
            HashMap::from([(vardef.name.clone(), vardef.ty.clone())]),
        )
    }

    /// Returns the scope `parent` extended with all the given bindings.
    pub fn extend(
        &mut self,
        parent: ScopeId,
        bindings: impl IntoIterator<Item = (Var, Ty)>,
    ) -> ScopeId {
        self.push(parent, bindings.into_iter().collect())
    }

    /// Parent of a scope, `None` for the root or a discarded scope.
    pub fn parent(&self, id: ScopeId) -> Option<ScopeId> {
        self.frame(id).and_then(|frame| frame.parent)
    }

    /// Iterates over a scope and all its ancestors, innermost first.
    ///
    /// Empty for a discarded scope.
    fn chain(&self, id: ScopeId) -> impl Iterator<Item = &Frame> + '_ {
        std::iter::successors(self.frame(id), |frame| {
            frame.parent.and_then(|parent| self.frame(parent))
        })
    }

    /// Gets the type of a variable visible from scope `id`.
    pub fn get<Q>(&self, id: ScopeId, name: &Q) -> Option<&Ty>
    where
        Var: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.chain(id).find_map(|frame| frame.vars.get(name))
    }

    /// Resolves a variable from scope `id`.
    ///
    /// # Errors
    /// Returns [`IrError::UnresolvedName`] if no frame of the chain binds
    /// `name`. `line` is only used for reporting.
    pub fn resolve(&self, id: ScopeId, name: &Var, line: usize) -> Result<&Ty, IrError> {
        self.get(id, name).ok_or_else(|| IrError::UnresolvedName {
            name: name.clone(),
            line,
        })
    }

    /// All the names visible from scope `id`.
    pub fn names(&self, id: ScopeId) -> HashSet<&Var> {
        self.chain(id).flat_map(|frame| frame.vars.keys()).collect()
    }

    /// Number of frames between `id` and the root.
    pub fn depth(&self, id: ScopeId) -> usize {
        self.chain(id).count().saturating_sub(1)
    }

    /// Number of frames in the arena.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Marks the current state of the arena.
    pub fn mark(&self) -> Mark {
        Mark(self.frames.len())
    }

    /// Discards all the frames created since `mark`.
    ///
    /// Handles to these frames resolve to nothing afterward.
    pub fn rewind(&mut self, mark: Mark) {
        debug_assert!(mark.0 >= 1, "cannot discard the root scope");
        if mark.0 < self.frames.len() {
            self.frames.truncate(mark.0);
            self.generation += 1;
        }
    }
}

impl Default for Scopes {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Scopes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.frames
                    .iter()
                    .enumerate()
                    .map(|(i, frame)| ((i, frame.parent.map(|p| p.index)), &frame.vars)),
            )
            .finish()
    }
}
