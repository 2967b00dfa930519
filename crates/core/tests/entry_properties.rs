//! Property-based tests for navigation entries and route matching.
//!
//! Uses proptest to validate:
//! - Exactly one style variant per active flag, never both
//! - Label and destination survive into the rendered model
//! - Omitted active flag equals `false`
//! - Prefix matching never leaks across sibling segments

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::collections::HashSet;

use proptest::prelude::*;
use waypost_core::{Icon, Label, NavEntry, RouteDescriptor, RoutePath, StyleVariant};

fn icon_strategy() -> impl Strategy<Value = Icon> {
    prop::sample::select(Icon::ALL.to_vec())
}

proptest! {
    /// Property: the active flag selects exactly one of two disjoint variants
    #[test]
    fn prop_single_variant(active in any::<bool>()) {
        let variant = StyleVariant::from_active(active);
        let other = StyleVariant::from_active(!active);
        prop_assert_ne!(variant, other);

        let mine: HashSet<&str> = variant.style().row.split_whitespace().collect();
        let theirs: HashSet<&str> = other.style().row.split_whitespace().collect();
        prop_assert!(mine.is_disjoint(&theirs));
        prop_assert_eq!(variant == StyleVariant::Selected, active);
    }

    /// Property: label text and destination reach the display model unchanged
    #[test]
    fn prop_label_and_destination_preserved(
        segment in "[a-z][a-z0-9-]{0,20}",
        label in "[A-Za-z][A-Za-z0-9 ]{0,30}",
        icon in icon_strategy(),
        active in any::<bool>(),
    ) {
        let destination = format!("/{segment}");
        let entry = NavEntry::parse(&destination, icon, &label)
            .map_err(|e| TestCaseError::fail(e.to_string()))?
            .with_active(active);

        prop_assert_eq!(entry.destination().as_str(), destination.as_str());
        let request = entry.request();
        prop_assert_eq!(request.target().as_str(), destination.as_str());
        prop_assert_eq!(entry.label().as_str(), label.trim());
        prop_assert_eq!(entry.icon(), icon);
    }

    /// Property: an entry built without an active flag equals one with `false`
    #[test]
    fn prop_default_inactive(segment in "[a-z]{1,12}", icon in icon_strategy()) {
        let path = RoutePath::new(format!("/{segment}"))
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        let label = Label::new(segment.clone())
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        let implicit = NavEntry::new(path, icon, label);
        let explicit = implicit.clone().with_active(false);
        prop_assert_eq!(implicit.variant(), StyleVariant::Idle);
        prop_assert_eq!(implicit, explicit);
    }

    /// Property: `/a` is never active for a sibling `/a<suffix>`
    #[test]
    fn prop_prefix_respects_segments(
        base in "[a-z]{1,10}",
        suffix in "[a-z0-9-]{1,10}",
        child in "[a-z0-9]{1,10}",
    ) {
        let route = RouteDescriptor::new(
            RoutePath::new(format!("/{base}")).map_err(|e| TestCaseError::fail(e.to_string()))?,
            Label::new(base.clone()).map_err(|e| TestCaseError::fail(e.to_string()))?,
            Icon::List,
        );

        let sibling = format!("/{base}{suffix}");
        let nested = format!("/{base}/{child}");
        prop_assert!(!route.is_active(&sibling));
        prop_assert!(route.is_active(&nested));
    }
}
