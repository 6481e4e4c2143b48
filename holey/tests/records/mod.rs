//! Checking the records of declared variables.

use super::*;

#[test]
fn block_records_in_order() {
    let block = stmts(vec![
        declare(vardef("x", IntT), int(0)),
        declare_uninit(vardef("y", BitT)),
    ]);
    let m = block
        .stmts
        .iter()
        .enumerate()
        .fold(VarMap::new(), |m, (index, stmt)| {
            stmt.add_record_stmt(&block, index, m)
        });
    let entries: Vec<_> = m.iter().map(|(name, ty)| (name.as_str(), ty.clone())).collect();
    assert_eq!(entries, vec![("x", IntT), ("y", BitT)]);
    assert_eq!(block.declared_vars(), m);
}

#[test]
fn seed_is_preserved() {
    let block = stmts(vec![
        declare(vardef("x", IntT), int(0)),
        declare_uninit(vardef("y", BitT)),
    ]);
    let mut seed = VarMap::new();
    seed.insert("z".into(), array_ty(CharT));
    let m = block.add_record_stmt(seed);
    let names: Vec<_> = m.keys().map(|name| name.as_str()).collect();
    assert_eq!(names, vec!["z", "x", "y"]);
    assert_eq!(m.get("z"), Some(&array_ty(CharT)));

    let again = block.add_record_stmt(m.clone());
    assert_eq!(again, m);
}

#[test]
fn nested_blocks_keep_their_declarations() {
    let block = stmts(vec![
        declare(vardef("a", IntT), int(0)),
        block_stmt(stmts(vec![declare(vardef("b", CharT), chr('b'))])),
        while_loop(var("a"), Some(declare(vardef("c", IntT), int(0)))),
    ]);
    let names: Vec<_> = block.declared_vars().into_keys().map(String::from).collect();
    assert_eq!(names, vec!["a"]);

    let inner = block.stmts[1].as_block().unwrap();
    let names: Vec<_> = inner.declared_vars().into_keys().map(String::from).collect();
    assert_eq!(names, vec!["b"]);
}

#[test]
fn shadowing_block_keeps_outer_type() {
    let block = stmts(vec![
        declare(vardef("x", IntT), int(0)),
        block_stmt(stmts(vec![declare(vardef("x", CharT), chr('a'))])),
        if_s(
            bit(true),
            block_stmt(stmts(vec![declare(vardef("y", IntT), int(0))])),
            None,
        ),
    ]);
    let m = block.declared_vars();
    assert_eq!(
        m.iter().map(|(name, ty)| (name.as_str(), ty)).collect::<Vec<_>>(),
        vec![("x", &IntT)]
    );
}

#[test]
fn function_records() {
    let vars = holey_lib::declared_vars(&samples::nested_loops());
    let search = &vars["search"];
    assert_eq!(
        search.iter().map(|(name, ty)| (name.as_str(), ty)).collect::<Vec<_>>(),
        vec![("target", &IntT), ("found", &BitT)]
    );
}
