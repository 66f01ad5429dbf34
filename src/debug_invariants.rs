//! Consistency checks for loaded meshes.
//!
//! Checks run after every load in debug builds, and in release builds when
//! the `check-invariants` feature is on. They can also be run by hand via
//! [`DebugInvariants::validate_invariants`].

use crate::mesh_error::MeshError;

/// Types that can verify their own structural invariants.
pub trait DebugInvariants {
    /// Panics on the first violated invariant in checked builds; no-op otherwise.
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "mesh invalid");
    }

    /// Returns the first violated invariant as `MeshError::InvariantViolation`.
    fn validate_invariants(&self) -> Result<(), MeshError>;
}

/// Fails with `InvariantViolation` unless `cond` holds.
pub(crate) fn ensure(cond: bool, msg: impl FnOnce() -> String) -> Result<(), MeshError> {
    if cond {
        Ok(())
    } else {
        Err(MeshError::InvariantViolation(msg()))
    }
}

/// Runs a fallible check and panics on error when invariant checking is enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
