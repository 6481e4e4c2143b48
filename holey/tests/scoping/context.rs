//! Scopes built by the statements.

use super::*;

/// Non-declaring statements of every kind.
fn non_declaring() -> Vec<Stmt> {
    vec![
        assign("x", int(2)),
        expr_stmt(call("f", vec![var("x")])),
        if_s(
            var("x"),
            declare(vardef("a", IntT), int(0)),
            Some(declare(vardef("b", IntT), int(0))),
        ),
        while_loop(var("x"), Some(declare(vardef("c", IntT), int(0)))),
        do_while(Some(declare(vardef("d", IntT), int(0))), var("x")),
        for_loop(
            Some(declare(vardef("i", IntT), int(0))),
            Some(var("x")),
            None,
            Some(declare(vardef("e", IntT), int(0))),
        ),
        block_stmt(stmts(vec![declare(vardef("f", IntT), int(0))])),
        ret(var("x")),
        ret_void(),
        assert_s(var("x")),
        Stmt::from(BreakS),
        Stmt::from(ContinueS),
        Stmt::from(EmptyS),
    ]
}

#[test]
fn non_declaring_statements_leak_nothing() {
    let mut scopes = Scopes::new();
    let root = scopes.root();
    let ctx = scopes.extend(root, [("x".into(), IntT), ("s".into(), CharT)]);
    let before: Vec<_> = {
        let mut names: Vec<_> = scopes.names(ctx).into_iter().cloned().collect();
        names.sort();
        names
    };
    for stmt in non_declaring() {
        let after = stmt.build_context(&mut scopes, ctx).unwrap();
        let mut names: Vec<_> = scopes.names(after).into_iter().cloned().collect();
        names.sort();
        assert_eq!(names, before, "{stmt:?} changed the scope");
    }
}

#[test]
fn declarations_chain() {
    let mut scopes = Scopes::new();
    let root = scopes.root();
    let block = stmts(vec![
        declare(vardef("x", IntT), int(1)),
        declare(vardef("y", BitT), binop(var("x"), ">", int(0))),
        declare_uninit(vardef("x", CharT)),
    ]);
    let inner = block.inner_context(&mut scopes, root).unwrap();
    assert_eq!(scopes.get(inner, "x"), Some(&CharT));
    assert_eq!(scopes.get(inner, "y"), Some(&BitT));
    assert_eq!(scopes.depth(inner), 4);
    assert_eq!(block.build_context(&mut scopes, root).unwrap(), root);
}

#[test]
fn function_scope() {
    let f = &samples::sum().funs[0];
    let mut scopes = Scopes::new();
    let root = scopes.root();
    let end = f.build_context(&mut scopes, root).unwrap();
    assert_eq!(scopes.get(end, "n"), Some(&IntT));
    assert_eq!(scopes.get(end, "total"), Some(&IntT));
    assert_eq!(scopes.get(end, "i"), None);
}

#[test]
fn malformed_loop_in_loop_body() {
    let mut scopes = Scopes::new();
    let root = scopes.root();
    let stmt = while_loop(
        var("c"),
        Some(for_loop(None, None, None, None).at(7)),
    );
    let err = stmt.build_context(&mut scopes, root).unwrap_err();
    assert_eq!(err.code(), MALFORMED_TREE_ERROR);
    assert_eq!(err.line(), Some(7));
    assert_eq!(scopes.len(), 1);
}
