// Integration tests for Luvlang Match

use luvlang_match::core::{match_insights, Matcher};
use luvlang_match::models::{ScoringWeights, UserProfile};
use std::collections::HashSet;

fn create_test_profile(
    id: &str,
    interests: &[&str],
    values: &str,
    life_goals: &str,
    age: Option<u8>,
    location: Option<&str>,
) -> UserProfile {
    UserProfile {
        user_id: id.to_string(),
        name: Some(format!("User {}", id)),
        bio: "Looking for something real".to_string(),
        interests: interests.iter().map(|s| s.to_string()).collect(),
        values: values.to_string(),
        life_goals: life_goals.to_string(),
        age,
        location: location.map(|s| s.to_string()),
        personality_answers: None,
        is_active: true,
        photo_file_ids: vec![],
        created_at: None,
    }
}

fn subject() -> UserProfile {
    create_test_profile(
        "current_user",
        &["hiking", "chess", "cooking"],
        "honesty kindness adventure",
        "family travel growth",
        Some(30),
        Some("Berlin"),
    )
}

#[test]
fn test_end_to_end_daily_matches() {
    let matcher = Matcher::with_default_weights();

    let candidates = vec![
        create_test_profile(
            "1",
            &["hiking", "chess", "cooking"],
            "honesty kindness adventure",
            "family travel growth",
            Some(30),
            Some("Berlin"),
        ), // near-perfect match
        create_test_profile(
            "2",
            &["hiking", "chess"],
            "honesty kindness",
            "family travel",
            Some(33),
            Some("Berlin"),
        ), // strong match
        create_test_profile(
            "3",
            &["gaming"],
            "spontaneity",
            "startup exit",
            Some(45),
            Some("Munich"),
        ), // weak match
        create_test_profile("4", &[], "", "", None, None), // empty profile
    ];

    let result = matcher.daily_matches(&subject(), &candidates, &HashSet::new(), 10);

    assert_eq!(result.total_candidates, 4);
    assert_eq!(result.matches.len(), 4);

    // Sorted descending by total score
    for i in 1..result.matches.len() {
        assert!(
            result.matches[i - 1].total_score >= result.matches[i].total_score,
            "Matches not sorted by score"
        );
    }

    assert_eq!(result.matches[0].user_id, "1");
    assert_eq!(result.matches[0].total_score, 100);

    // The empty profile carries the zero-score invariant end to end
    let empty = result.matches.iter().find(|m| m.user_id == "4").unwrap();
    assert_eq!(empty.total_score, 0);
}

#[test]
fn test_exclusions_are_never_surfaced() {
    let matcher = Matcher::with_default_weights();

    let candidates = vec![
        create_test_profile("current_user", &["hiking"], "", "", Some(30), None),
        create_test_profile("already_seen", &["hiking", "chess", "cooking"], "", "", Some(30), None),
        create_test_profile("fresh", &["hiking"], "", "", Some(31), None),
    ];

    let excluded: HashSet<String> = ["already_seen".to_string()].into_iter().collect();

    let result = matcher.daily_matches(&subject(), &candidates, &excluded, 10);

    let ids: Vec<&str> = result.matches.iter().map(|m| m.user_id.as_str()).collect();
    assert!(!ids.contains(&"current_user"));
    assert!(!ids.contains(&"already_seen"));
    assert_eq!(ids, vec!["fresh"]);
}

#[test]
fn test_top_n_selection_with_distinct_scores() {
    let matcher = Matcher::with_default_weights();

    // Ages 30..40 give each candidate a distinct proximity score against
    // the 30-year-old subject.
    let candidates: Vec<UserProfile> = (0..10)
        .map(|i| {
            create_test_profile(
                &format!("candidate_{}", i),
                &["hiking"],
                "",
                "",
                Some(30 + i as u8),
                None,
            )
        })
        .collect();

    let result = matcher.daily_matches(&subject(), &candidates, &HashSet::new(), 3);

    assert_eq!(result.matches.len(), 3);
    let ids: Vec<&str> = result.matches.iter().map(|m| m.user_id.as_str()).collect();
    assert_eq!(ids, vec!["candidate_0", "candidate_1", "candidate_2"]);
    assert!(result.matches[0].total_score > result.matches[1].total_score);
    assert!(result.matches[1].total_score > result.matches[2].total_score);
}

#[test]
fn test_empty_pool_and_zero_limit() {
    let matcher = Matcher::with_default_weights();

    let empty = matcher.daily_matches(&subject(), &[], &HashSet::new(), 10);
    assert!(empty.matches.is_empty());

    let candidates = vec![create_test_profile("1", &["hiking"], "", "", Some(30), None)];
    let zero = matcher.daily_matches(&subject(), &candidates, &HashSet::new(), 0);
    assert!(zero.matches.is_empty());
    assert_eq!(zero.total_candidates, 1);
}

#[test]
fn test_deterministic_ordering_across_runs() {
    let matcher = Matcher::with_default_weights();

    // Interleaved identical profiles force tie-breaking.
    let candidates = vec![
        create_test_profile("delta", &["hiking"], "", "", Some(30), None),
        create_test_profile("alpha", &["hiking"], "", "", Some(30), None),
        create_test_profile("echo", &["chess"], "", "", Some(30), None),
        create_test_profile("bravo", &["hiking"], "", "", Some(30), None),
    ];

    let first = matcher.daily_matches(&subject(), &candidates, &HashSet::new(), 10);
    let second = matcher.daily_matches(&subject(), &candidates, &HashSet::new(), 10);

    let first_ids: Vec<&str> = first.matches.iter().map(|m| m.user_id.as_str()).collect();
    let second_ids: Vec<&str> = second.matches.iter().map(|m| m.user_id.as_str()).collect();

    assert_eq!(first_ids, second_ids);
    // Equal-scored candidates come back in id order.
    assert_eq!(first_ids, vec!["alpha", "bravo", "delta", "echo"]);
}

#[test]
fn test_insights_follow_scores_end_to_end() {
    let matcher = Matcher::with_default_weights();

    let candidates = vec![create_test_profile(
        "twin",
        &["hiking", "chess", "cooking"],
        "honesty kindness adventure",
        "family travel growth",
        Some(30),
        Some("Berlin"),
    )];

    let result = matcher.daily_matches(&subject(), &candidates, &HashSet::new(), 10);
    let insights = match_insights(&result.matches[0]);

    assert_eq!(insights.len(), 5);
    assert_eq!(insights[0], "You share many of the same interests");
    assert_eq!(insights.last().unwrap(), "Great match potential");
}

#[test]
fn test_custom_weights_change_ranking() {
    // With proximity weighted to 1.0, the age-aligned candidate must beat
    // the interest-aligned one.
    let matcher = Matcher::new(ScoringWeights {
        interests: 0.0,
        values: 0.0,
        life_goals: 0.0,
        proximity: 1.0,
    });

    let candidates = vec![
        create_test_profile("shared_interests", &["hiking", "chess", "cooking"], "", "", Some(40), None),
        create_test_profile("same_age", &[], "", "", Some(30), None),
    ];

    let result = matcher.daily_matches(&subject(), &candidates, &HashSet::new(), 10);
    assert_eq!(result.matches[0].user_id, "same_age");
    assert_eq!(result.matches[0].total_score, 100);
}
