//! `accredit-gateway` — the REST backend's contract, as pure data.
//!
//! The portal core never performs network I/O itself; the embedder owns the
//! transport. This crate describes everything the core needs to say *about*
//! a request or response: the uniform JSON envelope, request construction
//! (paths, query strings, bearer-token attachment rules), pagination
//! parameters, and the debounced type-ahead search coordinator.

pub mod endpoints;
pub mod envelope;
pub mod error;
pub mod models;
pub mod notice;
pub mod pagination;
pub mod request;
pub mod search;

pub use envelope::{ApiResponse, PagedResult};
pub use error::GatewayError;
pub use notice::{Notice, NoticeKind, NoticeQueue};
pub use pagination::{PaginationParams, UserListParams};
pub use request::{ApiRequest, Method};
pub use search::{DebouncedSearch, SearchQuery};
