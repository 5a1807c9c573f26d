//! Tinct — a theme color store with durable persistence and API sync.
//!
//! This crate mediates reads and writes of a fixed set of theme color roles
//! between a live style-variable surface, a client-durable key-value store,
//! and an optional remote JSON endpoint. Updating `primary` derives hover
//! and active shades automatically; every update is persisted so the next
//! load rehydrates the same palette.
//!
//! # Quick start
//!
//! ```
//! use tinct::storage::MemoryStore;
//! use tinct::store::ThemeStore;
//! use tinct::surface::MemorySurface;
//!
//! let mut store = ThemeStore::new(
//!     Box::new(MemorySurface::new()),
//!     Box::new(MemoryStore::new()),
//! );
//! assert!(store.update_color("primary", "#1612FF"));
//! assert_eq!(store.get_color("primaryHover").as_deref(), Some("#1310e5"));
//! ```

pub mod api;
pub mod build_info;
pub mod color;
pub mod config;
pub mod error;
pub mod role;
pub mod storage;
pub mod store;
pub mod surface;
pub mod tokens;
