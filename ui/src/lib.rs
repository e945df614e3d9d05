//! Presentation primitives shared by the dashboard pages.

mod badge;
mod feedback;
pub mod icons;
mod pagination;
mod photo;

pub use badge::{ExpiryDate, ValidationBadge};
pub use feedback::{EmptyState, Loading};
pub use pagination::Pagination;
pub use photo::Photo;
