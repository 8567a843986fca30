//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;
pub mod validation;

mod repo;
pub use repo::make_repository;

mod session;
pub use session::{use_session, SessionProvider, SessionState};

pub mod views;

pub const APP_CSS: Asset = asset!("/assets/main.css");
