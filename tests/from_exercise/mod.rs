//! The walkthrough every implementation of the clone version system is
//! checked against: two clones sharing a history and diverging from it.

use crate::test;
use clones::{ProgramId, Result, VersionSystem};
use itertools::Itertools;

test!(
    walkthrough,
    r#"
    learn 1 1
    check 1
    learn 1 2
    check 1
    clone 1
    check 2
    learn 2 3
    check 2
    check 1
    rollback 1
    check 1
    relearn 1
    check 1
    rollback 2
    rollback 2
    check 2
    rollback 2
    check 2
    "#,
    r#"
    1
    2
    2
    3
    2
    1
    2
    1
    basic
    "#
);

test!(
    walkthrough_leaves_clone2_with_one_more_rollback,
    r#"
    learn 1 1
    learn 1 2
    clone 1
    learn 2 3
    rollback 2
    rollback 2
    rollback 2
    check 2
    relearn 2
    check 2
    relearn 2
    relearn 2
    check 2
    check 1
    "#,
    r#"
    basic
    1
    3
    2
    "#
);

fn programs(system: &VersionSystem, index: usize) -> Vec<i64> {
    system
        .get(index)
        .map(|clone| clone.programs().map(|p| p.0).collect_vec())
        .unwrap_or_default()
}

#[test]
fn walkthrough_step_by_step() -> Result<()> {
    let mut system = VersionSystem::new();

    system.learn(1, ProgramId(1))?;
    assert_eq!(programs(&system, 1), vec![1]);
    assert_eq!(system.check(1)?.as_deref(), Some("1"));

    system.learn(1, ProgramId(2))?;
    assert_eq!(programs(&system, 1), vec![2, 1]);
    assert_eq!(system.check(1)?.as_deref(), Some("2"));

    system.clone_from_index(1)?;
    assert_eq!(programs(&system, 2), vec![2, 1]);
    assert_eq!(system.check(2)?.as_deref(), Some("2"));

    system.learn(2, ProgramId(3))?;
    assert_eq!(programs(&system, 2), vec![3, 2, 1]);
    assert_eq!(system.check(2)?.as_deref(), Some("3"));
    assert_eq!(system.check(1)?.as_deref(), Some("2"));

    system.rollback(1)?;
    assert_eq!(programs(&system, 1), vec![1]);
    assert_eq!(system.check(1)?.as_deref(), Some("1"));

    system.relearn(1)?;
    assert_eq!(programs(&system, 1), vec![2, 1]);
    assert_eq!(system.check(1)?.as_deref(), Some("2"));

    system.rollback(2)?;
    system.rollback(2)?;
    assert_eq!(programs(&system, 2), vec![1]);
    assert_eq!(system.check(2)?.as_deref(), Some("1"));
    system.rollback(2)?;
    assert_eq!(programs(&system, 2), Vec::<i64>::new());
    assert_eq!(system.check(2)?.as_deref(), Some("basic"));
    Ok(())
}
