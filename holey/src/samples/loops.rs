//! Programs with loops.
#![allow(missing_docs)]

use super::*;

/// Sums the integers below `n`, skipping multiples of 7.
pub fn sum() -> Program {
    Fun {
        name: "sum".to_string(),
        params: vec![vardef("n", IntT)],
        ret_ty: IntT,
        body: stmts(vec![
            declare(vardef("total", IntT), int(0)).at(2),
            for_loop(
                Some(declare(vardef("i", IntT), int(0)).at(3)),
                Some(binop(var("i"), "<", var("n"))),
                Some(assign("i", binop(var("i"), "+", int(1))).at(3)),
                Some(block_stmt(
                    stmts(vec![
                        if_s(
                            binop(binop(var("i"), "%", int(7)), "==", int(0)),
                            Stmt::from(ContinueS).at(5),
                            None,
                        )
                        .at(4),
                        assign("total", binop(var("total"), "+", var("i"))).at(6),
                    ])
                    .at(3),
                )),
            )
            .at(3),
            assert_s(binop(var("total"), ">=", int(0))).at(8),
            ret(var("total")).at(9),
        ])
        .at(1),
        line: 1,
    }
    .into()
}

/// A while loop nested in a for loop, with a `break`.
pub fn nested_loops() -> Program {
    Fun {
        name: "search".to_string(),
        params: vec![vardef("target", IntT)],
        ret_ty: BitT,
        body: stmts(vec![
            declare(vardef("found", BitT), bit(false)).at(2),
            for_loop(
                Some(declare(vardef("i", IntT), int(1)).at(3)),
                Some(binop(var("i"), "<=", int(16))),
                Some(assign("i", binop(var("i"), "*", int(2))).at(3)),
                Some(block_stmt(
                    stmts(vec![
                        declare(vardef("j", IntT), var("i")).at(4),
                        while_loop(
                            binop(var("j"), ">", int(0)),
                            Some(block_stmt(
                                stmts(vec![
                                    if_s(
                                        binop(var("j"), "==", var("target")),
                                        block_stmt(
                                            stmts(vec![
                                                assign("found", bit(true)).at(7),
                                                Stmt::from(BreakS).at(8),
                                            ])
                                            .at(6),
                                        ),
                                        None,
                                    )
                                    .at(6),
                                    assign("j", binop(var("j"), "-", int(3))).at(10),
                                ])
                                .at(5),
                            )),
                        )
                        .at(5),
                    ])
                    .at(3),
                )),
            )
            .at(3),
            ret(var("found")).at(13),
        ])
        .at(1),
        line: 1,
    }
    .into()
}
