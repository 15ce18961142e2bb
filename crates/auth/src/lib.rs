//! `accredit-auth` — session and authorization state machine.
//!
//! This crate owns the single bearer token, derives claims from it, and
//! maps claims to routing decisions. It is intentionally decoupled from
//! HTTP transport and real storage: the token store and the code-exchange
//! call are traits/closures supplied by the embedder.

pub mod claims;
pub mod guards;
pub mod login;
pub mod partnership;
pub mod routing;
pub mod session;

pub use claims::{Claims, decode_token};
pub use guards::{GuardDecision, GuardRequirement, redirect_if_authenticated};
pub use login::{
    AuthError, LoginRedirect, OauthConfig, Provider, TokenResponse, begin_login, complete_login,
};
pub use partnership::{PartnershipSource, partnership_source_guard};
pub use routing::{Destination, route_for_role};
pub use session::{MemoryTokenStore, Session, TokenStore};
