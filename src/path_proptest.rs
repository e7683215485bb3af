//! Property-based tests for value parsing and path storage.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::path::{normalize, relative_path, resolve_path, store_path, ResolvedPath};
    use crate::value::Value;
    use proptest::prelude::*;
    use std::path::{Path, PathBuf};

    // ============================================================================
    // Value::parse property tests
    // ============================================================================

    proptest! {
        /// Property: integers survive a render-then-parse round trip
        #[test]
        fn parse_roundtrips_integers(i in any::<i64>()) {
            prop_assert_eq!(Value::parse(&i.to_string()), Value::Int(i));
        }

        /// Property: finite non-integral floats survive a render-then-parse round trip
        #[test]
        fn parse_roundtrips_floats(f in -1.0e12f64..1.0e12f64) {
            prop_assume!(f.fract() != 0.0);
            prop_assert_eq!(Value::parse(&f.to_string()), Value::Float(f));
        }

        /// Property: the canonical boolean spellings parse in any case
        #[test]
        fn parse_booleans_any_case(
            word in prop::sample::select(vec!["true", "yes", "false", "no"]),
            upper in prop::collection::vec(any::<bool>(), 5),
        ) {
            let token: String = word
                .chars()
                .zip(upper.iter())
                .map(|(c, &u)| if u { c.to_ascii_uppercase() } else { c })
                .collect();
            let expected = word == "true" || word == "yes";
            prop_assert_eq!(Value::parse(&token), Value::Bool(expected));
        }

        /// Property: a one-element list parses to its element
        #[test]
        fn parse_list_collapses_single_element(token in ".*") {
            prop_assert_eq!(Value::parse_list(&[token.as_str()]), Value::parse(&token));
        }

        /// Property: lists of two or more tokens are never collapsed
        #[test]
        fn parse_list_keeps_longer_lists(tokens in prop::collection::vec("[a-z0-9.]{0,6}", 2..6)) {
            match Value::parse_list(&tokens) {
                Value::List(items) => prop_assert_eq!(items.len(), tokens.len()),
                other => prop_assert!(false, "expected a list, got {:?}", other),
            }
        }

        /// Property: parsing never panics and never yields a list for one token
        #[test]
        fn parse_single_token_is_scalar(token in ".*") {
            prop_assert!(!Value::parse(&token).is_list());
        }
    }

    // ============================================================================
    // store_path / resolve_path property tests
    // ============================================================================

    fn component() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_][a-zA-Z0-9_.-]{0,8}".prop_filter("not a dot component", |s| s != "." && s != "..")
    }

    fn abs_path() -> impl Strategy<Value = PathBuf> {
        prop::collection::vec(component(), 1..5).prop_map(|comps| {
            let mut p = PathBuf::from("/");
            for c in comps {
                p.push(c);
            }
            p
        })
    }

    proptest! {
        /// Property: storing an absolute path then resolving it gives it back
        #[test]
        fn store_then_resolve_single(dir in abs_path(), file in abs_path(), cwd in abs_path()) {
            let stored = store_path(&dir, &cwd, &[&file]).unwrap();
            let resolved = resolve_path(&dir, &stored, None).unwrap();
            prop_assert_eq!(resolved, ResolvedPath::Single(file));
        }

        /// Property: storing several paths then resolving gives them back in order
        #[test]
        fn store_then_resolve_list(
            dir in abs_path(),
            files in prop::collection::vec(abs_path(), 2..5),
        ) {
            let stored = store_path(&dir, Path::new("/"), &files).unwrap();
            prop_assert!(stored.is_list());
            let resolved = resolve_path(&dir, &stored, None).unwrap();
            prop_assert_eq!(resolved, ResolvedPath::Many(files));
        }

        /// Property: caller-relative paths round-trip through the working directory
        #[test]
        fn store_relative_then_resolve_relative(
            dir in abs_path(),
            cwd in abs_path(),
            rel in prop::collection::vec(component(), 1..4),
        ) {
            let rel: PathBuf = rel.iter().collect();
            let stored = store_path(&dir, &cwd, &[&rel]).unwrap();
            let resolved = resolve_path(&dir, &stored, Some(&cwd)).unwrap();
            prop_assert_eq!(resolved, ResolvedPath::Single(rel));
        }

        /// Property: joining a relative path back onto its base restores the target
        #[test]
        fn relative_path_inverts_join(base in abs_path(), target in abs_path()) {
            let rel = relative_path(&target, &base);
            prop_assert_eq!(normalize(&base.join(&rel)), target);
        }
    }
}
