//! Checking hole extraction.

use super::*;

mod loops;
mod properties;
mod scenario;
