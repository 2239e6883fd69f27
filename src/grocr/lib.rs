//! # Grocr Architecture
//!
//! Grocr is a **UI-agnostic grocery list library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, renders the table, colors messages     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  List Layer (list.rs)                                       │
//! │  - GroceryListStore: the mutation rules and the draft/edit  │
//! │    lifecycle; every mutation mirrored to the slot           │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract Slot trait (load/save/clear on a fixed key)     │
//! │  - FileSlot (production), InMemorySlot (testing)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `list.rs` inward, code takes regular Rust arguments, returns regular
//! Rust types, **never** writes to stdout/stderr, **never** calls
//! `std::process::exit`, and **never** assumes a terminal. The same core
//! could sit behind a web page (where this list started life) or any other
//! UI.
//!
//! ## Module Overview
//!
//! - [`list`]: The grocery list store—entry point for all operations
//! - [`store`]: Persistence slot abstraction and implementations
//! - [`model`]: Core data types (`GroceryItem`, `ItemStatus`, `FormMode`)
//! - [`error`]: Error types

pub mod error;
pub mod list;
pub mod model;
pub mod store;
