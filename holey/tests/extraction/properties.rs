//! Properties that hold for all the sample programs.

use super::*;

/// Number of literal constants in an expression.
fn count_consts(e: &Expr) -> usize {
    let (_, consts) = e.clone().replace_const(0);
    consts.len()
}

#[test]
fn indices_are_contiguous_from_start() {
    for (name, sample) in samples::all() {
        for start in [0, 1, 17] {
            let (p, table) = sample().replace_const(start).unwrap();
            let indices: Vec<_> = table.iter().map(|hole| hole.index).collect();
            let expected: Vec<_> = (start..start + table.len()).collect();
            assert_eq!(indices, expected, "in sample {name}");
            assert_eq!(table.next_index(), start + table.len());

            let (again, table) = p.clone().replace_const(start + 99).unwrap();
            assert!(table.is_empty(), "sample {name} still has constants");
            assert_eq!(again, p);
        }
    }
}

#[test]
fn extraction_is_deterministic() {
    for (name, sample) in samples::all() {
        let first = sample().replace_const(0).unwrap();
        let second = sample().replace_const(0).unwrap();
        assert_eq!(first, second, "in sample {name}");
    }
}

#[test]
fn extraction_keeps_sizes() {
    for (name, sample) in samples::all() {
        let p = sample();
        let size = p.size();
        let (p, _) = p.replace_const(0).unwrap();
        assert_eq!(p.size(), size, "in sample {name}");
    }
}

#[test]
fn holes_are_typed_after_their_literal() {
    let (_, table) = samples::chars().replace_const(0).unwrap();
    let types: Vec<_> = table.iter().map(|hole| hole.ty.clone()).collect();
    assert_eq!(types, vec![CharT, IntT, IntT, IntT, IntT]);
}

#[test]
fn expression_holes() {
    let e = cond(
        binop(var("x"), "<", int(-4)),
        array(vec![chr('a'), chr('b')]),
        call("f", vec![bit(false), var("y")]),
    );
    assert_eq!(count_consts(&e), 4);
    let (e, consts) = e.replace_const(3);
    assert_eq!(consts.indices().collect::<Vec<_>>(), vec![3, 4, 5, 6]);
    assert_eq!(count_consts(&e), 0);
    assert_eq!(consts.get(3).map(|c| &c.value), Some(&Literal::from(-4)));
}

#[test]
fn sizes() {
    assert_eq!(do_while(None, var("c")).size(), 0);
    assert_eq!(while_loop(var("c"), None).size(), 0);
    assert_eq!(block_stmt(stmts(vec![Stmt::from(EmptyS)])).size(), 0);
    assert_eq!(
        while_loop(var("c"), Some(block_stmt(Block::default()))).size(),
        0
    );
    assert_eq!(samples::counter().size(), 2);
    // `total`, the loop body (if + assignment), the assertion and the return.
    assert_eq!(samples::sum().size(), 5);
}
