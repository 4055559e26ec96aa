//! venturecraft: personalized business ideas from a short profile.
//!
//! The upstream model is optional. Without a credential, or when the call
//! fails, ideas come from four deterministic templates.

pub mod archetype;
pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod llm;
pub mod profile;
pub mod scoring;
pub mod search;
pub mod service;
pub mod validation;

pub use archetype::FallbackGenerator;
pub use config::ServiceConfig;
pub use data::{BusinessIdea, FallbackReason, Generation, IdeaSource};
pub use error::{LlmError, ProfileError};
pub use profile::UserProfile;
pub use service::IdeaRequestService;
