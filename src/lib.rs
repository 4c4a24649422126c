//! dossier - a terminal client for a dual-agent insight report service.
//!
//! The server runs the whole multi-agent job (data ingestion, a
//! quantitative analysis agent, a qualitative research agent, and a final
//! synthesizer) inside one long request; this client triggers that job and
//! renders its partially-structured result across four sections.
//!
//! The binary entry point is in main.rs.

pub mod app;
pub mod client;
pub mod config;
pub mod input;
pub mod lifecycle;
pub mod markdown;
pub mod report;
pub mod sections;
pub mod tabs;
pub mod theme;
pub mod ui;
