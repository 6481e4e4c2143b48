//! Counter incremented in a do-while loop.
#![allow(missing_docs)]

use super::*;

/// The body of [`counter`]:
///
/// ```c
/// {
///     int x = 3;
///     do {
///         x = x + 1;
///     } while (x < 3);
/// }
/// ```
pub fn counter_block() -> Block {
    stmts(vec![
        declare(vardef("x", IntT), int(3)).at(2),
        do_while(
            Some(block_stmt(
                stmts(vec![assign("x", binop(var("x"), "+", int(1))).at(4)]).at(3),
            )),
            binop(var("x"), "<", int(3)),
        )
        .at(5),
    ])
    .at(1)
}

pub fn counter() -> Program {
    Fun {
        name: "main".to_string(),
        body: counter_block(),
        line: 1,
        ..Default::default()
    }
    .into()
}
