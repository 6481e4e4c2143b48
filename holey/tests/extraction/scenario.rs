//! The counter scenario: `{ int x = 3; do { x = x + 1; } while (x < 3); }`.

use super::*;

#[test]
#[extracts(3, 1, 3)]
fn counter() -> Program {
    samples::counter()
}

#[test]
fn counter_holes_in_place() {
    let (block, consts) = samples::counter_block().replace_const(0).unwrap();
    assert_eq!(consts.indices().collect::<Vec<_>>(), vec![0, 1, 2]);
    assert_eq!(
        consts.iter().map(|c| c.line).collect::<Vec<_>>(),
        vec![2, 4, 5]
    );
    assert!(consts.iter().all(|c| c.ty == IntT));

    let init = block.stmts[0].as_declare().unwrap().1.unwrap();
    assert!(!init.is_const());
    assert_eq!(init, &hole(0));
    let (body, cond) = block.stmts[1].as_do_while().unwrap();
    assert_eq!(cond, &binop(var("x"), "<", hole(2)));
    let body = body.unwrap().as_block().unwrap();
    assert_eq!(
        body.stmts[0].as_assign(),
        Some((&Place::from("x"), &binop(var("x"), "+", hole(1))))
    );
}

#[test]
fn counter_from_other_index() {
    let (block, consts) = samples::counter_block().replace_const(40).unwrap();
    assert_eq!(consts.indices().collect::<Vec<_>>(), vec![40, 41, 42]);
    assert_eq!(consts.next_index(), 43);
    let (again, consts) = block.clone().replace_const(consts.next_index()).unwrap();
    assert!(consts.is_empty());
    assert_eq!(again, block);
}
