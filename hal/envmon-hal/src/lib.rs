//! envmon Hardware Abstraction Layer
//!
//! This crate defines the persistence interface the monitor core uses to
//! keep user settings across power cycles. Board support code implements
//! [`Storage`] on top of whatever medium the device has (SD card, on-chip
//! flash, EEPROM).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  envmon-core (settings, state machines) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  envmon-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  SD card /    │       │  RamStorage   │
//! │  flash board  │       │  (host, test) │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`storage::Storage`] - Persistent key-value storage

#![no_std]
#![deny(unsafe_code)]

pub mod ram;
pub mod storage;

pub use ram::RamStorage;
pub use storage::{Storage, StorageError, StorageKey};
