//! vigil: polls a homework-review API and forwards status changes to Telegram.

pub mod api;
pub mod config;
pub mod error;
pub mod monitor;
pub mod telegram;
