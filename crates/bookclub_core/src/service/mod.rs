//! Core use-case services.
//!
//! # Responsibility
//! - Validate user-supplied fields against width, format and key rules.
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep the console layer decoupled from storage details.

pub mod book_club_service;
pub mod validation;
