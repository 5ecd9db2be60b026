//! Core library for the `gnat` CLI.
//!
//! This crate provides the building blocks used by the binary: CLI argument
//! types, configuration file loading, the HTTP request issuer, and the load
//! engine that drives a worker pool until a deadline and tallies response
//! status codes. The primary user-facing interface is the `gnat`
//! command-line application.
pub mod args;
pub mod config;
pub mod engine;
pub mod error;
pub mod http;
pub mod shutdown;
