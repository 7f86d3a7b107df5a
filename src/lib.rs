//! Block Relay
//!
//! This crate implements a small HTTP gateway that accepts Ethereum
//! JSON-RPC request envelopes on REST-style routes, validates them against
//! a fixed per-method shape, and relays them 1:1 to a single upstream node.
//! The upstream's JSON-RPC response is passed back to the caller verbatim,
//! including JSON-RPC-level errors — the relay never interprets payloads.
//!
//! # Architecture
//!
//! ```text
//! Caller (curl/SDK)
//!     |
//!     | POST /block/number, /block/by-number
//!     v
//! Block Relay (this crate)
//!     |
//!     | eth_* JSON-RPC over HTTP
//!     v
//! Upstream node (e.g. polygon-rpc.com)
//! ```
//!
//! # Modules
//!
//! - `config` - Environment and configuration management
//! - `error` - Request-path failure taxonomy and HTTP mapping
//! - `rpc` - JSON-RPC wire types (envelope, request, response)
//! - `relay` - Per-method validation table and outbound construction
//! - `upstream` - HTTP client wrapper for the upstream node
//! - `server` - HTTP server setup and route registration

pub mod config;
pub mod error;
pub mod relay;
pub mod rpc;
pub mod server;
pub mod upstream;
