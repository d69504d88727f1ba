//! Networking: transport, response envelope, endpoint helpers, and wire DTOs.
//!
//! DESIGN
//! ======
//! Every call site sees one uniform [`envelope::Envelope`] shape regardless
//! of how a given backend endpoint structures its response. The transport
//! in `http` is the only module that touches the browser fetch API.

pub mod api;
pub mod envelope;
pub mod http;
pub mod types;
