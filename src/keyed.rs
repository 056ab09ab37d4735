use indexmap::IndexMap;
use std::hash::Hash;

/// Items that expose a natural lookup key (parameter name, mime type,
/// status code). Implemented by the raw node types and by the adapted
/// [`Response`](crate::adapt::Response).
pub trait Keyed {
    type Key: Hash + Eq;

    fn key(&self) -> Self::Key;
}

/// Build an ordered map from a sequence of keyed items.
///
/// Items are consumed in a single forward pass. On a duplicate key the
/// later item replaces the earlier one, but the key keeps the position of
/// its first occurrence (`IndexMap::insert` semantics). An empty input
/// yields an empty map.
pub fn keyed_by<I, T>(items: I) -> IndexMap<T::Key, T>
where
    I: IntoIterator<Item = T>,
    T: Keyed,
{
    let mut map = IndexMap::new();
    for item in items {
        map.insert(item.key(), item);
    }
    map
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[derive(Debug, PartialEq)]
    struct Named {
        name: &'static str,
        tag: u32,
    }

    impl Keyed for Named {
        type Key = &'static str;

        fn key(&self) -> &'static str {
            self.name
        }
    }

    #[test]
    fn test_keyed_by_preserves_first_seen_order() {
        let map = keyed_by(vec![
            Named { name: "b", tag: 0 },
            Named { name: "a", tag: 1 },
            Named { name: "c", tag: 2 },
        ]);
        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_keyed_by_last_value_wins_first_position_kept() {
        let map = keyed_by(vec![
            Named { name: "x", tag: 0 },
            Named { name: "y", tag: 1 },
            Named { name: "x", tag: 2 },
        ]);
        assert_eq!(map.len(), 2);
        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, vec!["x", "y"]);
        assert_eq!(map["x"].tag, 2);
    }

    #[test]
    fn test_keyed_by_empty_input() {
        let map = keyed_by(Vec::<Named>::new());
        assert!(map.is_empty());
    }
}
