//! Sample programs, built the way a front-end would build them.

mod arrays;
mod counter;
mod loops;
mod out_of_scope;

pub use arrays::*;
pub use counter::*;
pub use loops::*;
pub use out_of_scope::*;
pub use StmtKind::*;
pub use Ty::*;

pub use crate::ast::block::*;
pub use crate::ast::expr::*;
pub use crate::ast::place::*;
pub use crate::ast::stmt::*;
pub use crate::ast::ty::*;
pub use crate::ast::var::*;
pub use crate::ast::*;

/// All the bundled samples, by name.
pub fn all() -> Vec<(&'static str, fn() -> Program)> {
    let samples: [(&'static str, fn() -> Program); 7] = [
        ("counter", counter),
        ("sum", sum),
        ("nested_loops", nested_loops),
        ("chars", chars),
        ("matrix", matrix),
        ("out_of_scope", out_of_scope),
        ("loop_counter_escapes", loop_counter_escapes),
    ];
    samples.to_vec()
}

/// Finds a sample by name.
pub fn get(name: &str) -> Option<Program> {
    all()
        .into_iter()
        .find_map(|(sample, builder)| (sample == name).then(builder))
}
