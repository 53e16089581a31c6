pub mod request_context;

pub use request_context::{REQUEST_ID_HEADER, RequestContextLayer};
