//! Pure helpers shared by the card components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeping class naming, markdown rendering, and manifest parsing outside the
//! view code lets them be tested without a renderer.

pub mod class_name;
pub mod manifest;
pub mod markdown;
