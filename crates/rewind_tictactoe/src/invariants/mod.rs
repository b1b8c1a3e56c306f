//! First-class invariants for the move history.
//!
//! Invariants are logical properties that must hold after every history
//! operation. The store checks them in debug builds; each one can also be
//! tested on its own against a hand-corrupted history.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of up to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod alternating_turn;
pub mod bounds;
pub mod monotonic_history;

pub use alternating_turn::AlternatingTurnInvariant;
pub use bounds::{CursorInBoundsInvariant, RootIsEmptyInvariant};
pub use monotonic_history::MonotonicHistoryInvariant;

/// All move-history invariants as a composable set.
pub type HistoryInvariants = (
    RootIsEmptyInvariant,
    CursorInBoundsInvariant,
    MonotonicHistoryInvariant,
    AlternatingTurnInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameHistory;

    #[test]
    fn test_invariant_set_holds_for_new_history() {
        assert!(HistoryInvariants::check_all(&GameHistory::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_jumps() {
        let mut game = GameHistory::new();
        for cell in [4, 0, 8] {
            game.attempt_move_at(cell).unwrap();
        }
        game.jump_to(1);
        game.attempt_move_at(2).unwrap();
        assert!(HistoryInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut game = GameHistory::new();
        game.attempt_move_at(4).unwrap();
        // Point past the end and drop the root.
        game.current = 5;
        game.history.remove(0);

        let violations = HistoryInvariants::check_all(&game).unwrap_err();
        assert!(violations.len() >= 2);
        assert!(violations
            .iter()
            .any(|v| v.description == CursorInBoundsInvariant::description()));
    }

    #[test]
    fn test_two_invariants_as_set() {
        type Bounds = (RootIsEmptyInvariant, CursorInBoundsInvariant);
        assert!(Bounds::check_all(&GameHistory::new()).is_ok());
    }

    #[test]
    fn test_violation_display() {
        let violation = InvariantViolation::new("cursor escaped");
        assert_eq!(violation.to_string(), "Invariant violated: cursor escaped");
    }
}
