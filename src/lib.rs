//! Folio - a portfolio you browse from the terminal
//!
//! This library provides the portfolio viewer, a terminal rendition of a
//! personal portfolio site, together with the small HTTP relay that stores
//! contact form submissions and forwards them by email.
//!
//! # Modules
//!
//! * [`catalog`] - Projects, résumé and home sections
//! * [`navigation`] - Page transitions and overlay state
//! * [`contact`] - Contact form state and relay client
//! * [`relay`] - Contact relay HTTP service
//! * [`ui`] - Terminal user interface components

/// Static portfolio content
pub mod catalog;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Contact form state and the relay client
pub mod contact;

/// SeaORM entity models for database tables
pub mod entities;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Page and overlay navigation state machine
pub mod navigation;

/// Contact relay HTTP service
pub mod relay;

/// Repository layer for database operations
pub mod repositories;

/// Theme and accessibility settings
pub mod settings;

/// Local storage for contact submissions
pub mod storage;

/// Terminal user interface components and rendering
pub mod ui;
