use thiserror::Error;

/// Failures surfaced by registry lookups.
///
/// Most plane operations degrade instead of failing; only explicit `try_*`
/// and `resolve` lookups report errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LazyPlaneError {
    #[error("item index {index} is out of range for {item_count} item(s)")]
    IndexOutOfRange { index: usize, item_count: usize },
}

pub type Result<T> = std::result::Result<T, LazyPlaneError>;
