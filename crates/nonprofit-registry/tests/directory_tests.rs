//! Organization directory tests

use nonprofit_registry::*;
use pretty_assertions::assert_eq;

fn org(name: &str, email: &str, city: &str, state: &str) -> Organization {
    Organization::new(name)
        .with_email(email)
        .with_location(city, state)
}

fn form(name: &str, email: &str, city: &str, state: &str) -> RegistrationForm {
    RegistrationForm {
        organization_name: name.into(),
        contact_first_name: "John".into(),
        contact_last_name: "Doe".into(),
        email: email.into(),
        phone: "555-1234".into(),
        address: "123 Main St".into(),
        city: city.into(),
        state: state.into(),
        zip_code: "94102".into(),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Keyed Lookup
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_find_by_email_and_name() {
    let mut directory = OrganizationDirectory::new();
    directory.append(org("Hope Center", "hope@example.com", "Austin", "TX"));
    directory.append(org("Food Bank", "food@example.com", "Tulsa", "OK"));

    let hope = directory.find_by_email("hope@example.com").unwrap();
    assert_eq!(hope.organization_name, "Hope Center");

    let food = directory.find_by_name("Food Bank").unwrap();
    assert_eq!(food.email, "food@example.com");

    assert!(directory.find_by_email("nobody@example.com").is_none());
    assert!(directory.find_by_name("Nobody").is_none());
}

#[test]
fn test_empty_directory_lookups_miss() {
    let directory = OrganizationDirectory::new();
    assert!(directory.is_empty());
    assert!(directory.find_by_email("x").is_none());
    assert!(directory.find_by_name("x").is_none());
}

#[test]
fn test_duplicate_email_first_match_wins() {
    let mut directory = OrganizationDirectory::new();
    directory.append(org("First", "shared@example.com", "A", "AA"));
    directory.append(org("Second", "shared@example.com", "B", "BB"));

    assert_eq!(
        directory
            .find_by_email("shared@example.com")
            .map(|o| o.organization_name.as_str()),
        Some("First")
    );

    assert!(directory.delete_by_email("shared@example.com"));
    assert_eq!(
        directory
            .find_by_email("shared@example.com")
            .map(|o| o.organization_name.as_str()),
        Some("Second")
    );
}

#[test]
fn test_find_by_email_mut() {
    let mut directory = OrganizationDirectory::new();
    directory.append(org("Hope Center", "hope@example.com", "Austin", "TX"));

    if let Some(hope) = directory.find_by_email_mut("hope@example.com") {
        hope.completion = Some(40);
    }
    assert_eq!(directory.to_nonprofit_array()[0].completion, 40);
}

// ═══════════════════════════════════════════════════════════════════════
// Deletion
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_delete_by_email() {
    let mut directory: OrganizationDirectory = vec![
        org("A", "a@example.com", "", ""),
        org("B", "b@example.com", "", ""),
        org("C", "c@example.com", "", ""),
    ]
    .into_iter()
    .collect();

    assert!(directory.delete_by_email("b@example.com"));
    assert_eq!(directory.len(), 2);
    assert!(directory.find_by_email("b@example.com").is_none());

    let names: Vec<_> = directory
        .iter()
        .map(|o| o.organization_name.clone())
        .collect();
    assert_eq!(names, vec!["A", "C"]);
}

#[test]
fn test_delete_by_email_missing() {
    let mut directory = OrganizationDirectory::new();
    assert!(!directory.delete_by_email("a@example.com"));

    directory.append(org("A", "a@example.com", "", ""));
    assert!(!directory.delete_by_email("z@example.com"));
    assert_eq!(directory.len(), 1);
}

// ═══════════════════════════════════════════════════════════════════════
// Registration
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_register_applies_registration_defaults() {
    let mut directory = OrganizationDirectory::new();
    let registered = directory.register(
        form("Hope Education Center", "hope@example.com", "San Francisco", "CA"),
        DEFAULT_CATEGORY,
    );

    assert_eq!(registered.contact_first_name, "John");
    assert_eq!(registered.zip_code, "94102");
    assert_eq!(
        registered.mission.as_deref(),
        Some("Hope Education Center - Making a difference in San Francisco")
    );
    assert_eq!(registered.completion, Some(0));
    assert_eq!(registered.items_needed, Some(0));
    assert_eq!(registered.category.as_deref(), Some("General"));
    assert_eq!(directory.len(), 1);
}

#[test]
fn test_register_appends_at_end() {
    let mut directory = OrganizationDirectory::new();
    directory.prepend(org("Existing", "e@example.com", "Reno", "NV"));
    directory.register(form("New", "n@example.com", "Boise", "ID"), "Community");

    let cards = directory.to_nonprofit_array();
    assert_eq!(cards[1].name, "New");
    assert_eq!(cards[1].category, "Community");
}

// ═══════════════════════════════════════════════════════════════════════
// Projection
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_nonprofit_array_fills_defaults() {
    let mut directory = OrganizationDirectory::new();
    directory.append(org("Hope Center", "hope@example.com", "Austin", "TX"));

    let cards = directory.to_nonprofit_array();
    assert_eq!(
        cards,
        vec![NonprofitCard {
            id: 1,
            name: "Hope Center".into(),
            location: "Austin, TX".into(),
            mission: "Hope Center - Making a difference in Austin".into(),
            completion: 0,
            items_needed: 0,
            category: "General".into(),
            user_type: None,
        }]
    );
}

#[test]
fn test_nonprofit_array_ids_follow_position() {
    let mut directory = OrganizationDirectory::new();
    directory.append(org("A", "a@example.com", "", ""));
    let mut with_id = org("B", "b@example.com", "", "");
    with_id.id = Some(99);
    directory.append(with_id);
    directory.append(org("C", "c@example.com", "", ""));

    let ids: Vec<u64> = directory.to_nonprofit_array().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 99, 3]);
}

#[test]
fn test_nonprofit_array_preserves_order_and_is_repeatable() {
    let mut directory = OrganizationDirectory::new();
    directory.append(org("A", "a@example.com", "", ""));
    directory.append(org("B", "b@example.com", "", ""));
    directory.prepend(org("C", "c@example.com", "", ""));

    let first = directory.to_nonprofit_array();
    let second = directory.to_nonprofit_array();
    assert_eq!(first, second);

    let names: Vec<_> = first.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["C", "A", "B"]);
}

#[test]
fn test_to_cards_uses_custom_default_category() {
    let mut directory = OrganizationDirectory::new();
    directory.append(org("A", "a@example.com", "", "").with_category("Animals"));
    directory.append(org("B", "b@example.com", "", ""));

    let categories: Vec<_> = directory
        .to_cards("Uncategorized")
        .into_iter()
        .map(|c| c.category)
        .collect();
    assert_eq!(categories, vec!["Animals", "Uncategorized"]);
}

#[test]
fn test_to_vec_matches_len() {
    let directory: OrganizationDirectory = (0..5)
        .map(|i| org(&format!("Org {}", i), &format!("{}@example.com", i), "", ""))
        .collect();
    assert_eq!(directory.to_vec().len(), directory.len());
    assert_eq!(directory.records().len(), 5);
}
