//! # Capture Chess Server
//!
//! A thin HTTP wrapper around one [`capture_chess::TurnController`].
//!
//! ## Routes
//!
//! - `GET /api/game_state` - current snapshot
//! - `POST /api/new_game` - start over
//! - `POST /api/move` - play `{"move": "e2e4"}`; rejections are `400 {"error": ...}`
//! - `GET /health`

pub mod api;
pub mod cli;
