//! Extraction order in loops and conditionals.

use super::*;

#[test]
#[extracts(0, 10, 1, 7)]
fn for_loop_reads_init_cond_update_body() -> Program {
    main_fun(vec![for_loop(
        Some(declare(vardef("i", IntT), int(0))),
        Some(binop(var("i"), "<", int(10))),
        Some(assign("i", binop(var("i"), "+", int(1)))),
        Some(call_stmt("f", vec![int(7)])),
    )])
}

#[test]
#[extracts(5, 1)]
fn while_loop_reads_cond_first() -> Program {
    main_fun(vec![
        declare_uninit(vardef("n", IntT)),
        while_loop(
            binop(var("n"), ">", int(5)),
            Some(assign("n", binop(var("n"), "-", int(1)))),
        ),
    ])
}

#[test]
#[extracts('y', 2, 'y', true)]
fn do_while_reads_body_first() -> Program {
    main_fun(vec![
        declare_uninit(vardef("c", CharT)),
        do_while(
            Some(block_stmt(stmts(vec![
                assign("c", chr('y')),
                call_stmt("g", vec![int(2)]),
            ]))),
            binop(var("c"), "!=", chr('y')),
        ),
        assert_s(bit(true)),
    ])
}

#[test]
#[extracts(1, 2, 3)]
fn if_reads_cond_then_else() -> Program {
    main_fun(vec![
        declare_uninit(vardef("x", IntT)),
        if_s(
            binop(var("x"), "==", int(1)),
            assign("x", int(2)),
            Some(assign("x", int(3))),
        ),
    ])
}

#[test]
#[extracts()]
fn empty_loops() -> Program {
    main_fun(vec![
        do_while(None, var("b")),
        while_loop(var("b"), None),
        Stmt::from(EmptyS),
        Stmt::from(BreakS),
        Stmt::from(ContinueS),
        ret_void(),
    ])
}
