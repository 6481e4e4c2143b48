//! Programs referencing variables out of their scope.
#![allow(missing_docs)]

use super::*;

/// Uses a variable of a block after the block ends.
pub fn out_of_scope() -> Program {
    Fun {
        name: "main".to_string(),
        body: stmts(vec![
            block_stmt(stmts(vec![declare(vardef("x", IntT), int(1)).at(3)]).at(2)),
            declare(vardef("y", IntT), var("x")).at(5),
        ])
        .at(1),
        line: 1,
        ..Default::default()
    }
    .into()
}

/// Uses the counter of a for loop after the loop.
pub fn loop_counter_escapes() -> Program {
    Fun {
        name: "main".to_string(),
        body: stmts(vec![
            for_loop(
                Some(declare(vardef("i", IntT), int(0)).at(2)),
                Some(binop(var("i"), "<", int(3))),
                Some(assign("i", binop(var("i"), "+", int(1))).at(2)),
                None,
            )
            .at(2),
            ret(var("i")).at(3),
        ])
        .at(1),
        line: 1,
        ..Default::default()
    }
    .into()
}
