use buildbook::matcher::Matcher;
use buildbook_test_utils::prelude::*;

use super::mock_catalog;

/// Expect every catalog item to resolve from its own name
#[test]
fn resolves_every_canonical_name() {
    let catalog = mock_catalog();
    let matcher = Matcher::new(catalog.clone());

    for item in catalog.items() {
        let resolved = matcher.resolve(&item.name).map(|m| m.id());
        assert_eq!(resolved, Some(item.id.as_str()), "name {:?}", item.name);
    }
}

/// Expect every alias to resolve to the item that declares it
#[test]
fn resolves_every_alias() {
    let catalog = mock_catalog();
    let matcher = Matcher::new(catalog.clone());

    for item in catalog.items() {
        for alias in &item.aliases {
            let resolved = matcher.resolve(alias).map(|m| m.id());
            assert_eq!(resolved, Some(item.id.as_str()), "alias {:?}", alias);
        }
    }
}

/// Expect nothing for blank input
#[test]
fn blank_input_is_not_found() {
    let matcher = Matcher::new(mock_catalog());

    assert!(matcher.resolve("").is_none());
    assert!(matcher.resolve("   ").is_none());
}

/// Expect spaced and compact spellings to reach the same item
#[test]
fn resolves_void_staff_spellings() {
    let matcher = Matcher::new(mock_catalog());

    for text in ["Void Staff", "void staff", "voidstaff", "VOID-STAFF"] {
        assert_eq!(matcher.resolve(text).map(|m| m.id()), Some(VOID_STAFF_ID), "{text}");
    }
}

/// Expect items outside the store to be absent
#[test]
fn skips_unpurchasable_items() {
    let matcher = Matcher::new(mock_catalog());

    assert!(matcher.resolve("Your Cut").is_none());
}
