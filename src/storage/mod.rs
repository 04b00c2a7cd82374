//! Local storage module for the contact submission log
//!
//! This module provides the SeaORM-backed SQLite connection the relay writes
//! submissions to. Queries live in [`crate::repositories`].

pub mod db;

pub use db::LocalStorage;
