pub mod page_copy_flow;

pub use page_copy_flow::PageCopyFlow;
