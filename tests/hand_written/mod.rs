use crate::test;


test!(
    new_clone_is_basic,
    r#"
    check 1
    clone 1
    check 2
    "#,
    r#"
    basic
    basic
    "#
);

test!(
    fresh_learn_clears_redo,
    r#"
    learn 1 1
    learn 1 2
    rollback 1
    learn 1 7
    relearn 1
    check 1
    rollback 1
    check 1
    relearn 1
    check 1
    "#,
    r#"
    7
    1
    7
    "#
);

test!(
    relearn_replays_in_reverse_rollback_order,
    r#"
    learn 1 10
    learn 1 20
    learn 1 30
    rollback 1
    rollback 1
    check 1
    relearn 1
    check 1
    relearn 1
    check 1
    relearn 1
    check 1
    "#,
    r#"
    10
    20
    30
    30
    "#
);

test!(
    rollback_and_relearn_on_empty_history,
    r#"
    rollback 1
    relearn 1
    check 1
    learn 1 4
    rollback 1
    rollback 1
    relearn 1
    relearn 1
    check 1
    "#,
    r#"
    basic
    4
    "#
);

test!(
    clones_diverge_both_ways,
    r#"
    learn 1 1
    clone 1
    learn 1 2
    rollback 2
    check 1
    check 2
    clone 2
    learn 3 5
    check 2
    check 3
    "#,
    r#"
    2
    basic
    basic
    5
    "#
);

test!(
    copy_keeps_redo_history,
    r#"
    learn 1 1
    learn 1 2
    rollback 1
    clone 1
    relearn 2
    check 2
    check 1
    relearn 1
    check 1
    "#,
    r#"
    2
    1
    2
    "#
);

test!(
    out_of_range_indices_are_ignored,
    r#"
    learn 2 1
    check 2
    check 0
    clone 3
    rollback 9
    relearn 9
    clone 1
    check 2
    check 3
    "#,
    r#"
    basic
    "#
);

test!(
    negative_and_large_programs,
    r#"
    learn 1 -5
    check 1
    learn 1 9223372036854775807
    check 1
    "#,
    r#"
    -5
    9223372036854775807
    "#
);

test!(
    extra_arguments_are_ignored,
    r#"
    learn 1 3 4 5
    check 1 2
    "#,
    r#"
    3
    "#
);

test!(
    strict_accepts_valid_indices,
    strict,
    r#"
    learn 1 1
    clone 1
    check 2
    "#,
    r#"
    1
    "#
);
