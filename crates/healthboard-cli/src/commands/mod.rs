//! Command handlers grouped by concern.

pub(crate) mod submit;
pub(crate) mod summary;
