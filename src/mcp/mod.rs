//! MCP (Model Context Protocol) server implementation for EduConnect.
//!
//! This module exposes the program catalog to conversational agents as MCP
//! tools, with results rendered by the enrollment widget resource.

mod server;
mod tools;

pub use server::{run_server, EduConnectMcpServer};
