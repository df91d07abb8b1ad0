//! Property-based tests for the path algebra.
//!
//! Normalization and relationships carry their own inline properties; this
//! suite checks how the operations compose.

use super::access::{depth, ext, strip_ext, trail};
use super::mutate::{change_ext, hide, increment_base, insert, replace, reveal};
use super::navigate::{bisect, ltrim, rtrim};
use super::normalize::{normalize, ROOT};
use super::relationship::{has_ext, is_hidden, is_in_path, is_subpath};
use super::segment::{concat, join, split};
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,8}(\\.[a-z]{1,3})?"
}

fn path_strategy() -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        prop::collection::vec(segment_strategy(), 0..6),
        any::<bool>(),
    )
        .prop_map(|(absolute, parts, trailing)| {
            let mut path = parts.join("/");
            if absolute {
                path.insert(0, '/');
            }
            if trailing && !path.is_empty() {
                path.push('/');
            }
            path
        })
}

fn messy_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("/".to_string()),
            Just("//".to_string()),
            segment_strategy(),
        ],
        0..10,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // join(split(p)) == normalize(p)
    #[test]
    fn split_join_round_trip(path in messy_path_strategy()) {
        prop_assert_eq!(join(split(&path)), normalize(&path));
    }

    // Splitting never yields empty segments
    #[test]
    fn split_has_no_empty_segments(path in messy_path_strategy()) {
        prop_assert!(split(&path).iter().all(|s| !s.is_empty()));
    }

    // concat(bisect(p, at)) == normalize(p) for every valid position
    #[test]
    fn bisect_composition(path in path_strategy(), raw_at in -6isize..6) {
        let len = isize::try_from(depth(&path)).unwrap();
        let valid = (raw_at >= 0 && raw_at < len) || (raw_at < 0 && -raw_at < len);
        if valid {
            let (head, tail) = bisect(&path, raw_at).unwrap();
            prop_assert_eq!(concat([head, tail]), normalize(&path));
        } else {
            prop_assert!(bisect(&path, raw_at).is_err());
        }
    }

    // depth(trail(p)) == depth(p) - 1 for non-root, non-empty paths
    #[test]
    fn trail_reduces_depth(path in path_strategy()) {
        let normalized = normalize(&path);
        prop_assume!(!normalized.is_empty() && normalized != ROOT);
        let parent = trail(&path).unwrap();
        prop_assert_eq!(depth(&parent), depth(&path) - 1);
    }

    // Rebuilding a path from its stem and extension gives it back
    #[test]
    fn extension_round_trip(path in path_strategy()) {
        prop_assume!(has_ext(&path));
        let extension = ext(&path).unwrap();
        let rebuilt = format!("{}{}", strip_ext(&path), extension);
        prop_assert_eq!(change_ext(&rebuilt, &extension).unwrap(), normalize(&path));
    }

    // ltrim(p, n) and rtrim(p, depth - n) partition the segments
    #[test]
    fn trims_partition_segments(path in path_strategy(), n in 0usize..7) {
        let total = depth(&path);
        prop_assume!(n <= total);
        let left = rtrim(&path, isize::try_from(total - n).unwrap()).unwrap();
        let right = ltrim(&path, isize::try_from(n).unwrap()).unwrap();
        prop_assert_eq!(depth(&left) + depth(&right), total);
    }

    // Replacing a run with itself is the identity
    #[test]
    fn replace_with_self_is_identity(path in path_strategy(), at in 0usize..6) {
        let segments = split(&path);
        prop_assume!(at < segments.len());
        let needle = segments[at].clone();
        prop_assert!(is_in_path(&needle, &path));
        prop_assert_eq!(replace(&needle, &needle, &path).unwrap(), normalize(&path));
    }

    // Inserting at the end of a path makes the original a subpath
    #[test]
    fn insert_at_end_extends(path in path_strategy(), extra in segment_strategy()) {
        prop_assume!(!normalize(&path).is_empty());
        let extended = insert(&extra, isize::MAX, &path).unwrap();
        prop_assert!(is_subpath(&path, &extended));
        prop_assert_eq!(depth(&extended), depth(&path) + 1);
    }

    // Hiding and revealing a visible path gives it back
    #[test]
    fn hide_reveal_round_trip(path in path_strategy()) {
        let normalized = normalize(&path);
        prop_assume!(!normalized.is_empty() && normalized != ROOT && !is_hidden(&path));
        let hidden = hide(&path).unwrap();
        prop_assert!(is_hidden(&hidden));
        prop_assert_eq!(reveal(&hidden), normalized);
    }

    // Incrementing keeps depth and extension
    #[test]
    fn increment_keeps_shape(path in path_strategy()) {
        let normalized = normalize(&path);
        prop_assume!(!normalized.is_empty() && normalized != ROOT);
        let bumped = increment_base(&path).unwrap();
        prop_assert_eq!(depth(&bumped), depth(&path));
        prop_assert_eq!(ext(&bumped), ext(&path));
        prop_assert_ne!(bumped, normalized);
    }
}
