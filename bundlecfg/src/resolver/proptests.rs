//! Property-based tests for the resolution precedence.

use super::PropertyResolver;
use crate::bundle::MemoryBundles;
use crate::descriptor::PropertyDescriptor;
use crate::error::Error;
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_.]{0,15}"
}

// Arbitrary printable values, including leading/trailing whitespace.
fn value_strategy() -> impl Strategy<Value = String> {
    "[ -~]{0,30}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 2000,
        .. ProptestConfig::default()
    })]

    // An empty key always resolves to the default, whatever the bundle holds.
    #[test]
    fn empty_key_resolves_to_default(
        bundle in name_strategy(),
        mandatory in any::<bool>(),
        default in value_strategy(),
        stored in value_strategy(),
    ) {
        let resolver = PropertyResolver::new(
            MemoryBundles::new().with_entry(bundle.clone(), "", stored),
        );
        let descriptor = PropertyDescriptor::builder("")
            .bundle(bundle)
            .mandatory(mandatory)
            .default_value(default.clone())
            .build();

        let resolved = resolver.resolve_string(&descriptor).unwrap();
        prop_assert_eq!(resolved.unwrap_or_default(), default);
    }

    // A present key resolves to exactly the stored value.
    #[test]
    fn present_key_resolves_verbatim(
        bundle in name_strategy(),
        key in name_strategy(),
        mandatory in any::<bool>(),
        default in value_strategy(),
        stored in value_strategy(),
    ) {
        let resolver = PropertyResolver::new(
            MemoryBundles::new().with_entry(bundle.clone(), key.clone(), stored.clone()),
        );
        let descriptor = PropertyDescriptor::builder(key)
            .bundle(bundle)
            .mandatory(mandatory)
            .default_value(default)
            .build();

        prop_assert_eq!(resolver.resolve_string(&descriptor).unwrap(), Some(stored));
    }

    // An absent optional key resolves to the default.
    #[test]
    fn absent_optional_key_resolves_to_default(
        bundle in name_strategy(),
        key in name_strategy(),
        default in value_strategy(),
    ) {
        let resolver = PropertyResolver::new(MemoryBundles::new());
        let descriptor = PropertyDescriptor::builder(key)
            .bundle(bundle)
            .default_value(default.clone())
            .build();

        let resolved = resolver.resolve_string(&descriptor).unwrap();
        prop_assert_eq!(resolved.unwrap_or_default(), default);
    }

    // An absent mandatory key fails and names its bundle and key.
    #[test]
    fn absent_mandatory_key_fails(
        bundle in name_strategy(),
        key in name_strategy(),
        default in value_strategy(),
    ) {
        let resolver = PropertyResolver::new(MemoryBundles::new());
        let descriptor = PropertyDescriptor::builder(key.clone())
            .bundle(bundle.clone())
            .mandatory(true)
            .default_value(default)
            .build();

        match resolver.resolve_string(&descriptor) {
            Err(Error::MissingMandatoryProperty { bundle: b, key: k }) => {
                prop_assert_eq!(b, bundle);
                prop_assert_eq!(k, key);
            }
            other => prop_assert!(false, "unexpected result: {:?}", other),
        }
    }

    // Integers resolve to the number they were written from.
    #[test]
    fn integer_values_parse(n in any::<i64>()) {
        let resolver = PropertyResolver::new(
            MemoryBundles::new().with_entry("config", "n", n.to_string()),
        );
        prop_assert_eq!(
            resolver.resolve_integer(&PropertyDescriptor::new("n")).unwrap(),
            Some(n)
        );
    }

    // Booleans never fail and are true only for "true" in any case.
    #[test]
    fn boolean_never_fails(stored in value_strategy()) {
        let resolver = PropertyResolver::new(
            MemoryBundles::new().with_entry("config", "b", stored.clone()),
        );
        let resolved = resolver.resolve_boolean(&PropertyDescriptor::new("b")).unwrap();
        prop_assert_eq!(resolved, Some(stored.eq_ignore_ascii_case("true")));
    }
}
