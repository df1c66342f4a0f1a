use crate::User;

#[test]
fn test_user_default() {
    let user = User::default();

    assert_eq!(user.id, 0);
    assert_eq!(user.full_name, "");
    assert_eq!(user.email, "");
    assert_eq!(user.age, 0);
    assert_eq!(user.city, "");
}

#[test]
fn test_user_field_round_trip() {
    let mut user = User::default();

    user.id = 42;
    user.full_name = "Ada Lovelace".to_string();
    user.email = "ada@example.com".to_string();
    user.age = 36;
    user.city = "London".to_string();

    assert_eq!(user.id, 42);
    assert_eq!(user.full_name, "Ada Lovelace");
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.age, 36);
    assert_eq!(user.city, "London");
}

#[test]
fn test_user_new_matches_populated_default() {
    let constructed = User::new(
        42,
        "Ada Lovelace".to_string(),
        "ada@example.com".to_string(),
        36,
        "London".to_string(),
    );

    let mut populated = User::default();
    populated.id = 42;
    populated.full_name = "Ada Lovelace".to_string();
    populated.email = "ada@example.com".to_string();
    populated.age = 36;
    populated.city = "London".to_string();

    assert_eq!(constructed, populated);
}

#[test]
fn test_user_equality_is_by_value() {
    let first = User::new(
        42,
        "Ada Lovelace".to_string(),
        "ada@example.com".to_string(),
        36,
        "London".to_string(),
    );
    let second = first.clone();

    assert_eq!(first, second);

    let mut renamed = second.clone();
    renamed.full_name = "Ada King".to_string();
    assert_ne!(first, renamed);

    let mut aged = second.clone();
    aged.age = 37;
    assert_ne!(first, aged);

    let mut moved = second.clone();
    moved.city = "Paris".to_string();
    assert_ne!(first, moved);
}

#[test]
fn test_user_display_renders_every_field() {
    let user = User::new(
        42,
        "Ada Lovelace".to_string(),
        "ada@example.com".to_string(),
        36,
        "London".to_string(),
    );

    assert_eq!(
        user.to_string(),
        "#42 Ada Lovelace <ada@example.com> age 36, London"
    );
}
