//! Core of the contact sender: the editable contact table, CSV import and
//! export, message templates, phone normalization and the per-contact send
//! workflow. Nothing here performs I/O; the host service owns files, HTTP and
//! launching the messaging application.

pub mod codec;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod model;
pub mod phone;
pub mod requests;
pub mod roles;
pub mod session;
pub mod template;

pub use config::{MessagingConfig, RoleBinding};
pub use dispatch::{DispatchController, DispatchSink, SendOutcome};
pub use error::{Error, Result};
pub use model::{ContactSummary, Dataset, DispatchRequest, Record, SendStatus};
pub use phone::PhoneNormalizer;
pub use roles::RoleAssignment;
pub use session::{Session, SessionView};
