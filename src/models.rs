// ABOUTME: Domain models re-exported from nutrigap-core
// ABOUTME: Patients, standards, foods, recommendations, and consumption ledger types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use nutrigap_core::models::*;
