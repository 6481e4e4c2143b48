//! Records of the constants extracted from the tree.
//!
//! Every literal constant replaced by a synthesis hole is recorded with the
//! index of that hole, so that constraint generation can map each hole back to
//! its original value.

use std::fmt;

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use serde::{Serialize, Serializer};

use crate::ast::Ty;
use crate::error::IrError;

/// Value of a literal constant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Literal {
    /// An integer.
    Int(#[serde(serialize_with = "serialize_bigint")] BigInt),
    /// A bit.
    Bool(bool),
    /// A character.
    Char(char),
}

impl Literal {
    /// Type of the hole that replaces this literal.
    pub fn ty(&self) -> Ty {
        match self {
            Literal::Int(_) => Ty::IntT,
            Literal::Bool(_) => Ty::BitT,
            Literal::Char(_) => Ty::CharT,
        }
    }
}

/// Integers that fit are written as JSON numbers, the others as strings.
fn serialize_bigint<S: Serializer>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
    match value.to_i64() {
        Some(small) => serializer.serialize_i64(small),
        None => serializer.serialize_str(&value.to_string()),
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Int(value.into())
    }
}

impl From<BigInt> for Literal {
    fn from(value: BigInt) -> Self {
        Literal::Int(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Bool(value)
    }
}

impl From<char> for Literal {
    fn from(value: char) -> Self {
        Literal::Char(value)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(value) => write!(f, "{value}"),
            Literal::Bool(value) => write!(f, "{value}"),
            Literal::Char(value) => write!(f, "{value:?}"),
        }
    }
}

/// One extracted constant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Const {
    /// Index of the hole that replaced it.
    pub index: usize,
    /// Original value.
    pub value: Literal,
    /// Type of the hole.
    pub ty: Ty,
    /// Line of the statement it was found in.
    pub line: usize,
}

impl fmt::Display for Const {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "??{} : {} = {} (line {})",
            self.index, self.ty, self.value, self.line
        )
    }
}

/// Constants extracted from one subtree.
///
/// Invariant: the indices are exactly `start, start + 1, ...`, in the order in
/// which the constants were met.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstData {
    /// First index handed out.
    start: usize,
    /// Extracted constants, by increasing index.
    consts: Vec<Const>,
}

impl ConstData {
    /// Creates an empty record whose first index will be `start`.
    pub fn new(start: usize) -> Self {
        Self {
            start,
            consts: vec![],
        }
    }

    /// Records a new constant, and returns the index of its hole.
    pub(crate) fn push(&mut self, value: Literal, line: usize) -> usize {
        let index = self.next_index();
        let ty = value.ty();
        self.consts.push(Const {
            index,
            value,
            ty,
            line,
        });
        index
    }

    /// First index of this record.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Next unused index, to pass on to the next extraction.
    pub fn next_index(&self) -> usize {
        self.start + self.consts.len()
    }

    /// Number of extracted constants.
    pub fn len(&self) -> usize {
        self.consts.len()
    }

    /// Was nothing extracted?
    pub fn is_empty(&self) -> bool {
        self.consts.is_empty()
    }

    /// Gets the constant that was given hole `index`.
    pub fn get(&self, index: usize) -> Option<&Const> {
        index
            .checked_sub(self.start)
            .and_then(|offset| self.consts.get(offset))
    }

    /// Iterates over the constants, by increasing index.
    pub fn iter(&self) -> std::slice::Iter<'_, Const> {
        self.consts.iter()
    }

    /// Indices handed out in this record.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.consts.iter().map(|c| c.index)
    }
}

impl IntoIterator for ConstData {
    type IntoIter = std::vec::IntoIter<Const>;
    type Item = Const;

    fn into_iter(self) -> Self::IntoIter {
        self.consts.into_iter()
    }
}

impl<'a> IntoIterator for &'a ConstData {
    type IntoIter = std::slice::Iter<'a, Const>;
    type Item = &'a Const;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Every hole of a program.
///
/// Collects the [`ConstData`] of successive extractions, and checks that they
/// line up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoleTable {
    /// Index of the first hole.
    first: usize,
    /// All the holes, by increasing index.
    holes: Vec<Const>,
}

impl HoleTable {
    /// Creates an empty table, whose first hole will be `first`.
    pub fn new(first: usize) -> Self {
        Self {
            first,
            holes: vec![],
        }
    }

    /// Next unused index.
    pub fn next_index(&self) -> usize {
        self.first + self.holes.len()
    }

    /// Adds the holes from `data` to the table.
    ///
    /// # Errors
    /// `data` must start exactly at [`HoleTable::next_index`]. If it starts
    /// before, some index would be assigned twice. If it starts after, there
    /// would be indices assigned to no hole.
    pub fn absorb(&mut self, data: ConstData) -> Result<(), IrError> {
        let expected = self.next_index();
        let found = data.start();
        if found < expected {
            return Err(IrError::DuplicateIndex { expected, found });
        }
        if found > expected {
            return Err(IrError::IndexGap { expected, found });
        }
        self.holes.extend(data);
        Ok(())
    }

    /// Gets the hole of index `index`.
    pub fn get(&self, index: usize) -> Option<&Const> {
        index
            .checked_sub(self.first)
            .and_then(|offset| self.holes.get(offset))
    }

    /// Number of holes.
    pub fn len(&self) -> usize {
        self.holes.len()
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.holes.is_empty()
    }

    /// Iterates over the holes, by increasing index.
    pub fn iter(&self) -> std::slice::Iter<'_, Const> {
        self.holes.iter()
    }
}

impl Default for HoleTable {
    fn default() -> Self {
        Self::new(0)
    }
}

impl fmt::Display for HoleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for hole in &self.holes {
            writeln!(f, "{hole}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(start: usize, values: impl IntoIterator<Item = Literal>) -> ConstData {
        let mut data = ConstData::new(start);
        for value in values {
            data.push(value, 1);
        }
        data
    }

    #[test]
    fn contiguous_indices() {
        let data = data(4, [3.into(), true.into(), 'c'.into()]);
        assert_eq!(data.indices().collect::<Vec<_>>(), vec![4, 5, 6]);
        assert_eq!(data.next_index(), 7);
        assert_eq!(data.get(5).map(|c| &c.ty), Some(&Ty::BitT));
        assert_eq!(data.get(3), None);
        assert_eq!(data.get(7), None);
    }

    #[test]
    fn absorb_in_order() {
        let mut table = HoleTable::new(0);
        table.absorb(data(0, [1.into(), 2.into()])).unwrap();
        table.absorb(ConstData::new(2)).unwrap();
        table.absorb(data(2, [3.into()])).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(2).map(|c| &c.value), Some(&Literal::from(3)));
    }

    #[test]
    fn absorb_duplicate() {
        let mut table = HoleTable::new(0);
        table.absorb(data(0, [1.into(), 2.into()])).unwrap();
        assert_eq!(
            table.absorb(data(1, [3.into()])),
            Err(IrError::DuplicateIndex {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn absorb_gap() {
        let mut table = HoleTable::new(0);
        assert_eq!(
            table.absorb(data(3, [3.into()])),
            Err(IrError::IndexGap {
                expected: 0,
                found: 3
            })
        );
        assert!(table.is_empty());
    }

    #[test]
    fn json_output() {
        let mut table = HoleTable::new(0);
        table
            .absorb(data(0, [7.into(), false.into()]))
            .unwrap();
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["holes"][0]["value"], 7);
        assert_eq!(json["holes"][0]["ty"], "IntT");
        assert_eq!(json["holes"][1]["value"], false);
        assert_eq!(json["holes"][1]["index"], 1);
    }
}
