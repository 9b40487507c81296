//! # Memoz Architecture
//!
//! Memoz is a **UI-agnostic memo board library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client, and that distinction should guide all
//! development.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                    │
//! │  - Parses arguments, renders cards, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes│
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                        │
//! │  - Thin facade over commands                               │
//! │  - Returns structured Result types                         │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                             │
//! │  - Business logic per operation, no I/O assumptions        │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Board + Storage (board.rs, store/)                        │
//! │  - MemoBoard: the single owner of the memo sequence        │
//! │  - MemoSlot trait; FileSlot (production), MemorySlot (test)│
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Hydration Lifecycle
//!
//! A board starts in a Loading phase. [`board::MemoBoard::hydrate`] reads
//! the persistent slot exactly once and moves the board to Ready; every
//! mutation after that point mirrors the whole sequence back to the slot.
//! Mutations before hydration are rejected, so a half-initialized session
//! can never overwrite persisted data.
//!
//! ## Module Overview
//!
//! - [`api`]: the API facade—entry point for all operations
//! - [`commands`]: business logic for each operation
//! - [`board`]: the memo board and its lifecycle
//! - [`store`]: the persistent-slot abstraction and implementations
//! - [`model`]: core data types (`Memo`, `Color`, `Category`)
//! - [`config`]: configuration management
//! - [`error`]: error types

pub mod api;
pub mod board;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
