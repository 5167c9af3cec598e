// ABOUTME: Re-exports command modules for nutrigap-cli
// ABOUTME: Provides access to patient listing and per-patient analysis commands

pub mod analysis;
pub mod patients;
