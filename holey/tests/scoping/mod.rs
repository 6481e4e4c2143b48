//! Checking scopes and name resolution.

use super::*;

mod context;
mod resolution;
