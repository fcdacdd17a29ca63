//! Menu Client - HTTP client for the menu backend
//!
//! Provides the network calls behind the customer menu: outlet, catalog and
//! feature-type snapshots (as a [`menu_engine::MenuSource`]), offers, outlet
//! listing, customer registration and feedback. Also owns the locally
//! remembered customer identity.

pub mod api;
pub mod config;
pub mod customer;
pub mod error;
pub mod feedback;
pub mod http;
pub mod store;

pub use api::MenuApi;
pub use config::ClientConfig;
pub use customer::{CustomerRegistry, GreetingDecision, ResolvedCustomer, validate_profile};
pub use error::{ClientError, ClientResult};
pub use feedback::{Attachment, FeedbackForm, MAX_ATTACHMENT_BYTES, read_attachments};
pub use http::{HttpClient, NetworkHttpClient};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
