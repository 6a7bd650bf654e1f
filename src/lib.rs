//! Client-side interaction layer for a static portfolio page.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It drives
//! scroll-triggered reveals, counters and progress bars, the navbar scroll
//! state, scroll-spy, the mobile menu and the theme toggle, and splices the
//! navbar/projects/footer fragments into the page at startup.
//!
//! Every controller is a plain state machine that builds and tests natively;
//! the `web-sys` glue that feeds it DOM events and applies its output is
//! compiled only with the `hydrate` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Startup sequence, keyboard handling and wasm exports |
//! | [`observer`] | Viewport visibility (one-shot / repeat, no-observer fallback) |
//! | [`scroll`] | Frame-coalesced navbar, back-to-top and parallax state; scroll-spy |
//! | [`reveal`] | Reveal classes, eased counters, progress bars, run-once guard |
//! | [`menu`] | Mobile menu open/closed state |
//! | [`theme`] | Light/dark theme persisted in the key-value store |
//! | [`loader`] | Concurrent fragment fetch and splice |
//! | [`language`] | Page language resolution |
//! | [`notify`] | Toast notifications |
//! | [`effects`] | Ripple and hover effects |
//! | [`device`] | User-agent classification and clipboard copy |
//! | [`lazy`] | `img[data-src]` lazy loading |
//! | [`schedule`] | Frame gate and debounce tickets |
//! | [`storage`] | Key-value store trait with browser and in-memory backends |
//! | [`config`] | Runtime configuration with defaults |
//! | [`consts`] | Thresholds, timings, storage keys and DOM hooks |
//! | [`error`] | Crate error type |

pub mod app;
pub mod config;
pub mod consts;
pub mod device;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod effects;
pub mod error;
pub mod language;
pub mod lazy;
pub mod loader;
pub mod menu;
pub mod notify;
pub mod observer;
pub mod reveal;
pub mod schedule;
pub mod scroll;
pub mod storage;
pub mod theme;
