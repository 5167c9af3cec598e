// ABOUTME: Application constants re-exported from nutrigap-core
// ABOUTME: Recommendation tuning, intake bands, env variable names, and defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use nutrigap_core::constants::*;
