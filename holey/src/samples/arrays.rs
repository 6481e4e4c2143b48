//! Programs with arrays, characters and structures.
#![allow(missing_docs)]

use super::*;

/// Counts the occurrences of a character.
pub fn chars() -> Program {
    Fun {
        name: "count".to_string(),
        params: vec![vardef("s", array_ty(CharT)), vardef("len", IntT)],
        ret_ty: IntT,
        body: stmts(vec![
            declare(vardef("c", CharT), chr('a')).at(2),
            declare(vardef("n", IntT), int(0)).at(3),
            declare(vardef("i", IntT), int(0)).at(4),
            while_loop(
                binop(var("i"), "<", var("len")),
                Some(block_stmt(
                    stmts(vec![
                        if_s(
                            binop(index(var("s"), var("i")), "==", var("c")),
                            assign("n", binop(var("n"), "+", int(1))).at(6),
                            Some(Stmt::from(EmptyS).at(6)),
                        )
                        .at(6),
                        assign("i", binop(var("i"), "+", int(1))).at(7),
                    ])
                    .at(5),
                )),
            )
            .at(5),
            ret(var("n")).at(9),
        ])
        .at(1),
        line: 1,
    }
    .into()
}

/// Fills the diagonal of a square matrix, then flags it.
pub fn matrix() -> Program {
    let grid = || field(var("m"), "cells");
    Fun {
        name: "diagonal".to_string(),
        params: vec![vardef("m", StructT("Matrix".to_string())), vardef("size", IntT)],
        ret_ty: VoidT,
        body: stmts(vec![
            for_loop(
                Some(declare(vardef("k", IntT), int(0)).at(2)),
                Some(binop(var("k"), "<", var("size"))),
                Some(assign("k", binop(var("k"), "+", int(1))).at(2)),
                Some(assign(
                    idx_place(index(grid(), var("k")), var("k")),
                    cond(bit(true), int(1), unop("-", int(1))),
                ).at(3)),
            )
            .at(2),
            assign(field_place(var("m"), "diagonal"), bit(true)).at(4),
            call_stmt("display", vec![var("m"), array(vec![chr('|'), chr('-')])]).at(5),
            ret_void().at(6),
        ])
        .at(1),
        line: 1,
    }
    .into()
}
