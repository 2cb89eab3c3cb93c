//! # omnichat-onboarding
//!
//! Channel onboarding state machine: sequences provider selection, external
//! auth, account selection and verification, and yields a
//! [`ConnectedChannel`] on success. The external auth SDK is consumed behind
//! the [`AuthProvider`] trait so the machine never inspects loosely-typed
//! provider payloads.

pub mod machine;
pub mod provider;

pub use machine::{
    ConnectedChannel, OnboardingSession, OnboardingStep, META_LOGIN_SCOPE, WHATSAPP_SIGNUP_SCOPE,
};
pub use provider::{AuthProvider, LoginOutcome, SdkStatus};
