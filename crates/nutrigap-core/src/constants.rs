// ABOUTME: Named constants for deficiency scoring, recommendation gating, and intake bands
// ABOUTME: Every tunable number in the engine is declared here rather than inlined
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Application constants organized by domain

/// Greedy recommendation defaults
pub mod recommendation {
    /// Default number of selection rounds per run
    pub const DEFAULT_MAX_ITEMS: usize = 3;

    /// Added to a food's calories before dividing the coverage score.
    /// Keeps zero-calorie foods finite and damps the pull toward them.
    pub const EFFICIENCY_CALORIE_OFFSET: f64 = 10.0;

    /// A round's winner is accepted only when its efficiency is strictly above this
    pub const MIN_ACCEPTED_EFFICIENCY: f64 = 0.5;

    /// Contribution percentage a nutrient must exceed to appear in the reason text
    pub const NOTABLE_CONTRIBUTION_PCT: f64 = 15.0;

    /// Maximum nutrients mentioned in one reason string
    pub const MAX_REASON_NUTRIENTS: usize = 3;
}

/// Daily intake report status bands (percent of target)
pub mod intake_bands {
    /// Below this percentage of target a nutrient is deficient
    pub const DEFICIENT_BELOW_PCT: f64 = 90.0;

    /// Above this percentage of target a nutrient is in excess
    pub const EXCESS_ABOVE_PCT: f64 = 110.0;
}

/// Calendar arithmetic
pub mod calendar {
    /// Months per year for age-in-months arithmetic
    pub const MONTHS_PER_YEAR: i32 = 12;
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Data source URL (`sqlite:...`, `json:...`)
    pub const DATA_SOURCE: &str = "NUTRIGAP_DATA_SOURCE";
    /// Log level override
    pub const LOG_LEVEL: &str = "NUTRIGAP_LOG_LEVEL";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Greedy rounds per run
    pub const MAX_ITEMS: &str = "NUTRIGAP_MAX_ITEMS";
    /// Calorie offset in the efficiency denominator
    pub const CALORIE_OFFSET: &str = "NUTRIGAP_CALORIE_OFFSET";
    /// Acceptance gate for a round's winner
    pub const MIN_EFFICIENCY: &str = "NUTRIGAP_MIN_EFFICIENCY";
    /// Notable contribution threshold
    pub const NOTABLE_PCT: &str = "NUTRIGAP_NOTABLE_PCT";
    /// Maximum nutrients in the reason text
    pub const MAX_REASON_NUTRIENTS: &str = "NUTRIGAP_MAX_REASON_NUTRIENTS";
    /// Reason ordering (`contribution` or `gap_order`)
    pub const REASON_ORDER: &str = "NUTRIGAP_REASON_ORDER";
}

/// Defaults for the outer configuration layer
pub mod defaults {
    /// Data source used when `NUTRIGAP_DATA_SOURCE` is unset
    pub const DATA_SOURCE_URL: &str = "sqlite:./data/nutrigap.db";
}

/// Service identity for structured logs
pub mod service_names {
    /// Name reported in log records
    pub const NUTRIGAP: &str = "nutrigap";
}
