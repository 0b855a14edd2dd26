/// Asserts that the visitor with the given id carries exactly `$color`.
#[macro_export]
macro_rules! assert_carrying {
    ($system:expr, $id:expr, $color:expr) => {
        let state = $system
            .visitor($id)
            .expect("Visitor not tracked by the system");
        assert_eq!(
            state.aura.color(),
            Some($color),
            "Visitor {} carries {:?}, expected {:?}",
            $id,
            state.aura.color(),
            $color
        );
    };
}

/// Asserts the number of live dances.
#[macro_export]
macro_rules! assert_dances {
    ($system:expr, $count:expr) => {
        assert_eq!($system.dances().len(), $count, "Dance count mismatch");
    };
}
