// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for nutrigap-cli
// ABOUTME: Renders patients, gaps, recommendations, and intake reports as text or JSON

use nutrigap::{
    errors::AppResult,
    intelligence::{
        DeficiencyMap, IntakeReport, IntakeStatus, RecommendationOutcome, TerminationReason,
    },
    models::{PatientId, PatientRecord},
};
use serde::Serialize;

const NO_ACTION_NEEDED: &str = "No action needed: all tracked nutrient targets are met.";

/// Write any serializable result to stdout as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display the patient list
pub fn display_patients(patients: &[PatientRecord]) {
    if patients.is_empty() {
        println!("No patients found.");
        return;
    }

    println!(
        "{:<8} {:<28} {:<8} {:<12} {:<10}",
        "ID", "Name", "Gender", "Born", "Condition"
    );
    println!("{}", "-".repeat(70));
    for patient in patients {
        let born = patient
            .date_of_birth
            .map_or_else(|| "-".to_owned(), |d| d.format("%Y-%m-%d").to_string());
        let condition = if patient.is_pregnant {
            "pregnant"
        } else if patient.is_lactating {
            "lactating"
        } else {
            "-"
        };
        println!(
            "{:<8} {:<28} {:<8} {:<12} {:<10}",
            patient.patient_id,
            patient.full_name.as_deref().unwrap_or("-"),
            patient.gender.as_str(),
            born,
            condition
        );
    }
}

/// Display the remaining gaps
pub fn display_deficiencies(patient_id: PatientId, gaps: &DeficiencyMap) {
    if gaps.is_empty() {
        println!("Patient {patient_id}: {NO_ACTION_NEEDED}");
        return;
    }

    println!("Nutrient gaps for patient {patient_id}");
    println!("{}", "=".repeat(50));
    for (key, missing) in gaps.iter() {
        println!("   {:<28} {missing:>10.2} {}", key.label(), key.unit());
    }
}

/// Display a recommendation run
pub fn display_recommendations(patient_id: PatientId, outcome: &RecommendationOutcome) {
    if outcome.termination == TerminationReason::NoDeficiencies {
        println!("Patient {patient_id}: {NO_ACTION_NEEDED}");
        return;
    }

    if outcome.recommendations.is_empty() {
        println!("Patient {patient_id}: no food in the pool closes the remaining gaps efficiently.");
    } else {
        println!("Recommended foods for patient {patient_id}");
        println!("{}", "=".repeat(50));
        for (index, rec) in outcome.recommendations.iter().enumerate() {
            println!(
                "{}. {} ({}, {} kcal)",
                index + 1,
                rec.food_name,
                rec.serving,
                rec.calories
            );
            if !rec.reason.is_empty() {
                println!("   Covers: {}", rec.reason);
            }
            if !rec.tags.is_empty() {
                println!("   Tags: {}", rec.tags.join(", "));
            }
        }
    }

    if !outcome.remaining_gaps.is_empty() {
        println!("\nStill open:");
        for (key, missing) in outcome.remaining_gaps.iter() {
            println!("   {:<28} {missing:>10.2} {}", key.label(), key.unit());
        }
    }
}

/// Display a daily intake report
pub fn display_intake_report(patient_id: PatientId, report: &IntakeReport) {
    if report.rows.is_empty() {
        println!("Patient {patient_id}: no reference standards apply.");
        return;
    }

    println!(
        "Daily intake for patient {patient_id} ({} months, {})",
        report.profile.age_months,
        report.profile.gender.as_str()
    );
    println!("{}", "=".repeat(78));
    println!(
        "{:<28} {:>10} {:>10} {:<6} {:>8}  Status",
        "Nutrient", "Consumed", "Target", "Unit", "%"
    );
    for row in &report.rows {
        println!(
            "{:<28} {:>10.2} {:>10.2} {:<6} {:>7.1}%  {}",
            row.nutrient_name,
            row.consumed,
            row.target,
            row.unit,
            row.percent_fulfilled,
            status_label(row.status)
        );
    }

    if report.count(IntakeStatus::Deficient) == 0 {
        println!("\n{NO_ACTION_NEEDED}");
    } else {
        println!(
            "\n{} deficient, {} adequate, {} in excess",
            report.count(IntakeStatus::Deficient),
            report.count(IntakeStatus::Adequate),
            report.count(IntakeStatus::Excess)
        );
    }
}

const fn status_label(status: IntakeStatus) -> &'static str {
    match status {
        IntakeStatus::Deficient => "deficient",
        IntakeStatus::Adequate => "adequate",
        IntakeStatus::Excess => "excess",
    }
}
