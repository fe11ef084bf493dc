//! Telegram bot for searching BPS infographics.
//!
//! Users send `/infografis <keyword> [halaman] [jumlah]` and receive the
//! matching infographic images back in chat, pulled from the BPS WebAPI.

/// Command routing, argument parsing and reply building
pub mod bot;
/// Configuration and settings management
pub mod config;
/// HTTP client for the infographic search API
pub mod search;
