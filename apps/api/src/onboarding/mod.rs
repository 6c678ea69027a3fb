// Profile onboarding: resolve the shared industry insight, then write the
// user's profile fields in one short transaction.

pub mod handlers;
pub mod service;
