pub mod http_executor;

#[cfg(test)]
pub(crate) mod testing;

pub use http_executor::{HttpExecutor, SharedTransport, Transport};
