// Precondition failures of the region locator.
//
// "Nothing found" is not an error anywhere in this crate; it is `None`.
// These variants cover calls that should never have been made.

/// Why a locator call was rejected before searching.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LocateError {
    #[error("no candidate regions were supplied")]
    NoRegions,

    #[error("world height must be positive, got {0}")]
    InvalidWorldHeight(i32),
}
