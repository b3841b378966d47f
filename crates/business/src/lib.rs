//! # Minibank Business
//!
//! Account registry and operation routing. The registry owns every open
//! account and the tariff, and addresses accounts by their 1-based position.

pub mod error;
pub mod month_end;
pub mod registry;
pub mod transfer;

pub use error::{BusinessError, BusinessResult};
pub use month_end::MonthEndEntry;
pub use registry::{AccountSummary, Registry};
pub use transfer::PendingTransfer;
