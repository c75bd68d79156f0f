//! Identifier search against the external literature service
//!
//! [`Paginator`] drives sequential paged requests through a [`Transport`]
//! capability and accumulates the identifier set for a query.
//! [`EutilsTransport`] is the production HTTP transport.

pub mod paginator;
pub mod responses;
pub mod transport;

// Re-export public types
pub use paginator::{Paginator, SearchPolicy};
pub use transport::{EutilsTransport, SearchPage, Transport};
