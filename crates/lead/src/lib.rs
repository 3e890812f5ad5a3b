mod endpoint;
pub mod form;
mod submission;
mod value_object;

#[cfg(feature = "client")]
mod client;

#[cfg(feature = "client")]
pub use client::HttpLeadEndpoint;
pub use endpoint::*;
pub use form::{FormError, FormStatus, LeadFields, LeadForm, Submitted};
pub use submission::*;
pub use value_object::*;
