//! EcoQuest Community UI Components
//!
//! This crate provides the Dioxus building blocks shared by every post card:
//! buttons, avatars, progress bars and stat tiles, plus the pure formatting
//! helpers they display through.
//!
//! ## Design Language
//!
//! Field-guide palette on a parchment background:
//! - **Leaf (#4CAF50)**: primary actions, flora, progress
//! - **Forest (#2E7D32)**: titles and headings
//! - **Sky (#3b82f6)**: fauna
//! - **Amber (#f59e0b)**: experience and reflections
//! - **Parchment (#F5F5DC)**: page background

pub mod components;
pub mod format;

pub use components::*;
