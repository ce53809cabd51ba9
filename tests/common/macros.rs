/// Asserts that every border cell of a padded world is dead.
macro_rules! assert_border_dead {
    ($world:expr) => {
        assert!(
            $world.border_is_dead(),
            "border of generation {} holds live cells",
            $world.generation()
        );
    };
}

/// Asserts that a history row renders as the given `0`/`1` string.
macro_rules! assert_row {
    ($history:expr, $i:expr, $expected:expr) => {
        assert_eq!(
            $history.row_string($i),
            $expected,
            "generation {} mismatch",
            $i
        );
    };
}
