pub mod copy;
pub mod page;

pub use copy::{CopiedPage, CopyOutcome, CopyRequest};
pub use page::{BannerImageReference, PageFields, PageRecord};
