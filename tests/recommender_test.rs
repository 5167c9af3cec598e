// ABOUTME: Integration tests for the greedy food recommender through its public interface
// ABOUTME: Covers efficiency ranking, the acceptance gate, round limits, and gap immutability
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{food, init_test_logging, orange, spinach};
use nutrigap::intelligence::{
    DeficiencyMap, GreedyRecommender, ReasonOrdering, RecommenderConfig, TerminationReason,
};
use nutrigap::nutrients::NutrientKey;
use std::collections::HashSet;

fn iron_and_vitamin_c_gaps() -> DeficiencyMap {
    [(NutrientKey::IronMg, 10.0), (NutrientKey::VitaminCMg, 20.0)]
        .into_iter()
        .collect()
}

#[test]
fn test_spinach_then_orange_closes_vitamin_c() {
    init_test_logging();
    let gaps = iron_and_vitamin_c_gaps();
    let pool = vec![spinach(), orange()];

    let outcome = GreedyRecommender::default()
        .recommend_with_outcome(&gaps, &pool, 2)
        .unwrap();

    let names: Vec<&str> = outcome
        .recommendations
        .iter()
        .map(|r| r.food_name.as_str())
        .collect();
    assert_eq!(names, vec!["Spinach", "Orange"]);

    let spinach_rec = &outcome.recommendations[0];
    assert!((spinach_rec.calories - 40.0).abs() < f64::EPSILON);
    assert_eq!(spinach_rec.serving, "100g");
    assert_eq!(spinach_rec.reason, "Iron (+60%), Vitamin C (+50%)");
    assert_eq!(spinach_rec.tags, vec!["leafy", "vegan"]);
    assert_eq!(outcome.recommendations[1].reason, "Vitamin C (+100%)");

    // Iron is only partly covered when the round limit hits
    assert_eq!(outcome.termination, TerminationReason::MaxItemsReached);
    assert_eq!(outcome.remaining_gaps.len(), 1);
    assert!((outcome.remaining_gaps.get(NutrientKey::IronMg).unwrap() - 4.0).abs() < 1e-9);
}

#[test]
fn test_caller_gap_map_is_not_modified() {
    let gaps = iron_and_vitamin_c_gaps();
    let before = gaps.clone();

    let recs = GreedyRecommender::default()
        .recommend(&gaps, &[spinach(), orange()], 3)
        .unwrap();

    assert_eq!(recs.len(), 2);
    assert_eq!(gaps, before);
}

#[test]
fn test_all_candidates_below_gate_yield_empty_list() {
    init_test_logging();
    let gaps = iron_and_vitamin_c_gaps();
    // Best score is 10% iron over 490 kcal: far below the gate
    let pool = vec![
        food("Cake", 480.0, &[(NutrientKey::IronMg, 1.0)]),
        food("Soda", 150.0, &[]),
    ];

    let outcome = GreedyRecommender::default()
        .recommend_with_outcome(&gaps, &pool, 3)
        .unwrap();

    assert!(outcome.recommendations.is_empty());
    assert_eq!(outcome.termination, TerminationReason::BelowEfficiencyThreshold);
    assert_eq!(outcome.remaining_gaps, gaps);
}

#[test]
fn test_efficiency_exactly_at_gate_is_rejected() {
    // 100% coverage over (190 + 10) kcal = 0.5
    let gaps: DeficiencyMap = [(NutrientKey::ZincMg, 5.0)].into_iter().collect();
    let pool = vec![food("Oysters", 190.0, &[(NutrientKey::ZincMg, 5.0)])];

    let recs = GreedyRecommender::default().recommend(&gaps, &pool, 3).unwrap();
    assert!(recs.is_empty());
}

#[test]
fn test_empty_gap_map_returns_empty_without_validating_pool() {
    let mut broken = spinach();
    broken.nutrients.remove(&NutrientKey::ZincMg);

    let outcome = GreedyRecommender::default()
        .recommend_with_outcome(&DeficiencyMap::new(), &[broken], 3)
        .unwrap();

    assert!(outcome.recommendations.is_empty());
    assert_eq!(outcome.termination, TerminationReason::NoDeficiencies);
}

#[test]
fn test_missing_nutrient_field_is_integrity_fault() {
    let mut broken = orange();
    broken.nutrients.remove(&NutrientKey::FolateMcg);

    let err = GreedyRecommender::default()
        .recommend(&iron_and_vitamin_c_gaps(), &[spinach(), broken], 3)
        .unwrap_err();

    assert!(err.is_data_integrity_fault());
    assert_eq!(err.context.resource_id.as_deref(), Some("Orange"));
}

#[test]
fn test_negative_nutrient_amount_is_integrity_fault() {
    let mut broken = spinach();
    broken.nutrients.insert(NutrientKey::IronMg, -1.0);

    let err = GreedyRecommender::default()
        .recommend(&iron_and_vitamin_c_gaps(), &[broken], 3)
        .unwrap_err();
    assert!(err.is_data_integrity_fault());
}

#[test]
fn test_max_items_bounds_result_and_foods_never_repeat() {
    let gaps: DeficiencyMap = [
        (NutrientKey::VitaminAMcg, 900.0),
        (NutrientKey::VitaminCMg, 90.0),
        (NutrientKey::CalciumMg, 1000.0),
        (NutrientKey::IronMg, 18.0),
        (NutrientKey::ZincMg, 11.0),
    ]
    .into_iter()
    .collect();
    let pool = vec![
        food("Carrot", 41.0, &[(NutrientKey::VitaminAMcg, 300.0)]),
        food("Kiwi", 42.0, &[(NutrientKey::VitaminCMg, 30.0)]),
        food("Yogurt", 60.0, &[(NutrientKey::CalciumMg, 250.0)]),
        food("Lentils", 116.0, &[(NutrientKey::IronMg, 6.0), (NutrientKey::ZincMg, 2.0)]),
        food("Pumpkin Seeds", 150.0, &[(NutrientKey::ZincMg, 4.0)]),
    ];
    let recommender = GreedyRecommender::default();

    for max_items in 0..=6 {
        let recs = recommender.recommend(&gaps, &pool, max_items).unwrap();
        assert!(recs.len() <= max_items);
        let unique: HashSet<&str> = recs.iter().map(|r| r.food_name.as_str()).collect();
        assert_eq!(unique.len(), recs.len(), "food repeated with max_items={max_items}");
    }
}

#[test]
fn test_more_rounds_never_change_earlier_picks() {
    let gaps = iron_and_vitamin_c_gaps();
    let pool = vec![
        spinach(),
        orange(),
        food("Beans", 120.0, &[(NutrientKey::IronMg, 4.0)]),
    ];
    let recommender = GreedyRecommender::default();

    let short = recommender.recommend(&gaps, &pool, 1).unwrap();
    let long = recommender.recommend(&gaps, &pool, 3).unwrap();

    assert_eq!(short.len(), 1);
    assert_eq!(long[..short.len()], short[..]);
}

#[test]
fn test_tie_keeps_earliest_food_in_pool() {
    let gaps: DeficiencyMap = [(NutrientKey::IronMg, 10.0)].into_iter().collect();
    let pool = vec![
        food("First", 40.0, &[(NutrientKey::IronMg, 5.0)]),
        food("Second", 40.0, &[(NutrientKey::IronMg, 5.0)]),
    ];

    let recs = GreedyRecommender::default().recommend(&gaps, &pool, 1).unwrap();
    assert_eq!(recs[0].food_name, "First");
}

#[test]
fn test_closing_every_gap_stops_early() {
    let gaps: DeficiencyMap = [(NutrientKey::VitaminCMg, 20.0)].into_iter().collect();
    let pool = vec![orange(), spinach()];

    let outcome = GreedyRecommender::default()
        .recommend_with_outcome(&gaps, &pool, 3)
        .unwrap();

    assert_eq!(outcome.recommendations.len(), 1);
    assert_eq!(outcome.termination, TerminationReason::GapsClosed);
    assert!(outcome.remaining_gaps.is_empty());
}

#[test]
fn test_reason_limits_and_thresholds_follow_config() {
    let gaps: DeficiencyMap = [
        (NutrientKey::VitaminAMcg, 100.0),
        (NutrientKey::VitaminCMg, 100.0),
        (NutrientKey::CalciumMg, 100.0),
        (NutrientKey::IronMg, 100.0),
    ]
    .into_iter()
    .collect();
    let pool = vec![food(
        "Multi",
        10.0,
        &[
            (NutrientKey::VitaminAMcg, 20.0),
            (NutrientKey::VitaminCMg, 40.0),
            (NutrientKey::CalciumMg, 10.0),
            (NutrientKey::IronMg, 80.0),
        ],
    )];

    let default_recs = GreedyRecommender::default().recommend(&gaps, &pool, 1).unwrap();
    // Calcium at 10% is not notable
    assert_eq!(
        default_recs[0].reason,
        "Iron (+80%), Vitamin C (+40%), Vitamin A (+20%)"
    );

    let config = RecommenderConfig {
        max_reason_nutrients: 2,
        reason_ordering: ReasonOrdering::GapOrder,
        ..RecommenderConfig::default()
    };
    let gap_order_recs = GreedyRecommender::new(config)
        .recommend(&gaps, &pool, 1)
        .unwrap();
    assert_eq!(gap_order_recs[0].reason, "Vitamin A (+20%), Vitamin C (+40%)");
}

#[test]
fn test_food_with_no_notable_contribution_has_empty_reason() {
    let gaps: DeficiencyMap = [
        (NutrientKey::IronMg, 100.0),
        (NutrientKey::ZincMg, 100.0),
    ]
    .into_iter()
    .collect();
    // 10% + 10% over 0 + 10 kcal = 2.0: accepted, nothing above 15%
    let pool = vec![food(
        "Broth",
        0.0,
        &[(NutrientKey::IronMg, 10.0), (NutrientKey::ZincMg, 10.0)],
    )];

    let recs = GreedyRecommender::default().recommend(&gaps, &pool, 1).unwrap();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].reason, "");
}
