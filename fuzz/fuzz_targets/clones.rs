#![no_main]
use clones::VersionSystem;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|script: &str| {
    let mut system = VersionSystem::new();
    for query in script.lines() {
        system.execute(query).ok();
    }
    for index in 1..=system.clone_count() {
        let clone = system.get(index).expect("every index up to the count exists");
        assert_eq!(clone.learned_count(), clone.undo_depth());
        assert_eq!(clone.learned_count(), clone.programs().count());
        assert_eq!(
            system.check(index).ok().flatten(),
            Some(clone.last_program())
        );
    }
});
