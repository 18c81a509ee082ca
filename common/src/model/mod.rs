pub mod dataset;
pub mod dispatch;

pub use dataset::{Dataset, Record};
pub use dispatch::{ContactSummary, DispatchRequest, SendStatus};
