//! Will-authoring and registration core.
//!
//! The will side is purely local form state: collections of entities, per-asset
//! share bookkeeping and a section wizard. The registration side sequences the
//! auth API calls behind [`AuthApi`] and persists the returned credential
//! through a [`TokenStore`].

pub mod auth_client;
pub mod collection;
pub mod error;
pub mod fields;
pub mod packages;
pub mod registration;
pub mod share;
pub mod token_store;
pub mod validation;
pub mod will;

pub use auth_client::{AuthApi, HttpAuthClient, DEFAULT_API_BASE};
pub use collection::{Collection, EntityRecord};
pub use error::{AuthError, PackageError, RegistrationError, WillError};
pub use fields::FieldStore;
pub use packages::{catalog, find_package, Package, PackageSelection};
pub use registration::{
    BackOutcome, RegistrationDraft, RegistrationField, RegistrationFlow, RegistrationStep,
    RegistrationWizard, StepOutcome,
};
pub use share::{parse_share, ShareAllocation, ShareStatus};
pub use token_store::{logout, MemoryTokenStore, TokenStore};
pub use will::{PersonRole, WillSession, WillSubmission, WillWizard};
