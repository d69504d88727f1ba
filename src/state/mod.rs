//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `user`, `notify`) and kept pure so
//! transitions can be unit-tested natively. Browser and network side
//! effects live in [`crate::session`] and [`crate::net`], which drive these
//! models through their methods.

pub mod notify;
pub mod session;
pub mod user;
