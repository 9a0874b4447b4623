use std::error::Error;

use clones::{IndexPolicy, VersionSystem};

/// Runs every line of `script` as a query and compares the `check` results
/// with the lines of `output`. Blank lines are ignored in both.
#[macro_export]
macro_rules! test {
    ($name: ident, strict, $script: expr, $output: expr) => {
        #[test]
        fn $name() -> Result<(), Box<dyn std::error::Error>> {
            $crate::common::run_test(clones::IndexPolicy::Reject, $script, $output)
        }
    };
    ($name: ident, $script: expr, $output: expr) => {
        #[test]
        fn $name() -> Result<(), Box<dyn std::error::Error>> {
            $crate::common::run_test(clones::IndexPolicy::Ignore, $script, $output)
        }
    };
}

fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

pub(crate) fn run_test(
    policy: IndexPolicy,
    script: &str,
    output: &str,
) -> Result<(), Box<dyn Error>> {
    let mut system = VersionSystem::with_policy(policy);
    let mut actual = vec![];
    for query in non_blank_lines(script) {
        if let Some(result) = system.execute(query)? {
            actual.push(result);
        }
    }
    let expected: Vec<_> = non_blank_lines(output).map(String::from).collect();
    if expected != actual {
        eprintln!("{expected:?} {actual:?}");
    }
    assert_eq!(expected, actual);
    Ok(())
}
