//! Device Assistant - rule-based command backend for ESP32 devices

pub mod api;
pub mod command;
pub mod core;
