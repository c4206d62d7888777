pub mod page_creator;
pub mod page_reader;
pub mod page_updater;

pub use page_creator::PageCreator;
pub use page_reader::PageReader;
pub use page_updater::PageUpdater;
