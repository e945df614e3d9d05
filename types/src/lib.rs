mod error;
pub mod format;
mod links;
pub mod listing;
pub mod pagination;
pub mod registration;

pub use error::{Error, Result};
pub use links::SiteLinks;
pub use listing::{Listing, LoadTicket, PageLoad};
pub use pagination::{PAGE_SIZE, PageRequest, Viewport};
pub use registration::{Registration, Validation};

// Used by `err!`.
#[doc(hidden)]
pub use eyre::eyre as internal_eyre_dont_use;
