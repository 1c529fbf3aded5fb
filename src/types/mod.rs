//! Record types and their enumerations.
//!
//! `common` hosts the closed enumerations provider records carry;
//! `provider_metadata` hosts the provider catalog record itself.

pub mod common;
pub mod provider_metadata;

pub use common::{ProviderType, RequestAuthenticationMethod};
pub use provider_metadata::ProviderMetadata;
