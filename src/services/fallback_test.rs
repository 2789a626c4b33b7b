use super::*;

#[test]
fn keyword_match_is_case_insensitive() {
    assert_eq!(fallback_response("What SERVICES do you have?"), FALLBACK_RESPONSES[0].1);
}

#[test]
fn keyword_matches_as_substring() {
    assert_eq!(fallback_response("Is it sustainable?"), fallback_response("sustainability"));
    assert_ne!(fallback_response("sustainability"), DEFAULT_FALLBACK);
}

#[test]
fn first_matching_key_in_table_order_wins() {
    // Contains both "demo" and "services"; "services" comes first in the table.
    assert_eq!(fallback_response("demo of your services"), FALLBACK_RESPONSES[0].1);
}

#[test]
fn unmatched_message_gets_default() {
    assert_eq!(fallback_response("hello"), DEFAULT_FALLBACK);
    assert_eq!(fallback_response(""), DEFAULT_FALLBACK);
}

#[test]
fn default_points_to_the_team() {
    assert!(DEFAULT_FALLBACK.contains("connect you with our team"));
}
