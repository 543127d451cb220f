pub use crate::cli::{command, run_app};
pub use crate::domain::{Contact, ContactStore, SortDirection, SortField};
pub use crate::errors::AppError;
