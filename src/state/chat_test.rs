use super::*;

// =============================================================
// ChatWidgetState defaults
// =============================================================

#[test]
fn chat_state_default_closed_and_empty() {
    let state = ChatWidgetState::default();
    assert_eq!(state.visibility(), Visibility::Closed);
    assert!(state.transcript().is_empty());
    assert!(!state.has_unseen());
    assert!(!state.is_typing());
}

// =============================================================
// Visibility transitions
// =============================================================

#[test]
fn toggle_flips_between_states() {
    let mut state = ChatWidgetState::default();
    assert_eq!(state.toggle(), Visibility::Open);
    assert_eq!(state.toggle(), Visibility::Closed);
}

#[test]
fn close_twice_is_a_no_op() {
    let mut state = ChatWidgetState::default();
    state.open();
    assert!(state.close());
    assert!(!state.close());
    assert_eq!(state.visibility(), Visibility::Closed);
}

#[test]
fn open_twice_reports_no_change() {
    let mut state = ChatWidgetState::default();
    assert!(state.open());
    assert!(!state.open());
}

// =============================================================
// Unseen badge
// =============================================================

#[test]
fn assistant_reply_while_closed_raises_badge() {
    let mut state = ChatWidgetState::default();
    state.push(ChatMessage::assistant("hi"));
    assert!(state.has_unseen());
}

#[test]
fn user_message_never_raises_badge() {
    let mut state = ChatWidgetState::default();
    state.push(ChatMessage::user("hi"));
    assert!(!state.has_unseen());
}

#[test]
fn opening_clears_badge() {
    let mut state = ChatWidgetState::default();
    state.push(ChatMessage::assistant("hi"));
    state.open();
    assert!(!state.has_unseen());
    state.close();
    assert!(!state.has_unseen());
}

#[test]
fn assistant_reply_while_open_leaves_badge_clear() {
    let mut state = ChatWidgetState::default();
    state.open();
    state.push(ChatMessage::assistant("hi"));
    state.close();
    assert!(!state.has_unseen());
}

// =============================================================
// Transcript and avatars
// =============================================================

#[test]
fn transcript_keeps_append_order_and_duplicates() {
    let mut state = ChatWidgetState::default();
    state.push(ChatMessage::user("same"));
    state.push(ChatMessage::user("same"));
    state.push(ChatMessage::assistant("reply"));
    let contents: Vec<_> = state.transcript().iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, ["same", "same", "reply"]);
}

#[test]
fn avatars_follow_sender() {
    assert_eq!(ChatMessage::user("a").avatar(), Avatar::Glyph(USER_AVATAR_GLYPH));
    assert_eq!(
        ChatMessage::assistant("b").avatar(),
        Avatar::Image { src: ASSISTANT_AVATAR_SRC, alt: ASSISTANT_AVATAR_ALT }
    );
}
