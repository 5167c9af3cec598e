// ABOUTME: Helper modules for nutrigap-cli
// ABOUTME: Provides output formatting for command results

pub mod display;
