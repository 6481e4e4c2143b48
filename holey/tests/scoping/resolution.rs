//! Programs that should not pass name resolution.

use super::*;

#[test]
#[should_fail(UNRESOLVED_NAME_ERROR)]
fn use_after_block() -> Program {
    samples::out_of_scope()
}

#[test]
#[should_fail(UNRESOLVED_NAME_ERROR)]
fn loop_counter_escapes() -> Program {
    samples::loop_counter_escapes()
}

#[test]
#[should_fail(UNRESOLVED_NAME_ERROR)]
fn use_before_declaration() -> Program {
    main_fun(vec![
        assign("x", int(1)).at(2),
        declare(vardef("x", IntT), int(0)).at(3),
    ])
}

#[test]
#[should_fail(UNRESOLVED_NAME_ERROR)]
fn declaration_in_loop_body() -> Program {
    main_fun(vec![
        while_loop(bit(true), Some(declare(vardef("y", IntT), int(0)))),
        ret(var("y")),
    ])
}

#[test]
#[should_fail(UNRESOLVED_NAME_ERROR)]
fn unknown_array_in_place() -> Program {
    main_fun(vec![assign(idx_place(var("xs"), int(0)), int(1))])
}

#[test]
#[should_fail(MALFORMED_TREE_ERROR)]
fn for_loop_without_condition() -> Program {
    main_fun(vec![for_loop(None, None, None, Some(Stmt::from(BreakS)))])
}

#[test]
#[should_fail(MALFORMED_TREE_ERROR, UNRESOLVED_NAME_ERROR)]
fn errors_after_a_malformed_loop() -> Program {
    main_fun(vec![
        for_loop(Some(ret_void()), Some(bit(true)), None, None),
        ret(var("nowhere")),
    ])
}

#[test]
fn samples_resolve() {
    for (name, sample) in samples::all() {
        if name == "out_of_scope" || name == "loop_counter_escapes" {
            continue;
        }
        let mut ctx = holey_lib::Context::new(Default::default());
        let res = holey_lib::check(&mut ctx, &sample()).unwrap();
        assert!(res.is_ok(), "sample {name} does not resolve");
    }
}
