use crate::GroupChat;

#[test]
fn test_group_chat_default() {
    let group = GroupChat::default();

    assert_eq!(group.group_name, "");
    assert_eq!(group.description, "");
}

#[test]
fn test_group_chat_field_round_trip() {
    let mut group = GroupChat::default();

    group.group_name = "general".to_string();
    group.description = "Everything else".to_string();

    assert_eq!(group.group_name, "general");
    assert_eq!(group.description, "Everything else");
}

#[test]
fn test_group_chat_equality_is_by_value() {
    let first = GroupChat::new("general".to_string(), "Everything else".to_string());
    let second = GroupChat::new("general".to_string(), "Everything else".to_string());

    assert_eq!(first, second);

    let mut renamed = second.clone();
    renamed.group_name = "random".to_string();
    assert_ne!(first, renamed);
}

#[test]
fn test_group_chat_display() {
    let group = GroupChat::new("general".to_string(), "Everything else".to_string());

    assert_eq!(group.to_string(), "general: Everything else");
}
