//! FSS client: HTTP access to the file system server and error funnelling.
mod client;
mod engine;
mod error;
mod handler;
mod settings;
mod transport;
mod types;

pub use client::FssClient;
pub use engine::ClientHandle;
pub use error::ClientError;
pub use handler::{dispatch, BodyErrorHandler, ErrorHandler};
pub use settings::ClientSettings;
pub use transport::{ReqwestTransport, Transport};
pub use types::{ClientEvent, Downloaded};
