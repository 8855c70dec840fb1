//! Property-based tests for the storage primitives.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{ContainerError, Vector};

    fn small_vec() -> impl Strategy<Value = Vec<i64>> {
        proptest::collection::vec(-1000i64..1000i64, 0..=16)
    }

    proptest! {
        #[test]
        fn resize_keeps_common_prefix(items in small_vec(), len in 0usize..32) {
            let mut v = Vector::from(items.clone());
            v.resize(len);

            prop_assert_eq!(v.len(), len);
            let keep = items.len().min(len);
            prop_assert_eq!(&v.as_slice()[..keep], &items[..keep]);
            prop_assert!(v.as_slice()[keep..].iter().all(|&x| x == 0));
        }

        #[test]
        fn try_at_matches_bounds(items in small_vec(), i in 0usize..32) {
            let v = Vector::from(items.clone());
            match items.get(i) {
                Some(x) => prop_assert_eq!(v.try_at(i), Ok(x)),
                None => prop_assert_eq!(
                    v.try_at(i),
                    Err(ContainerError::OutOfRange { index: i, len: items.len() })
                ),
            }
        }

        #[test]
        fn collect_preserves_order(items in small_vec()) {
            let v: Vector<i64> = items.iter().copied().collect();
            prop_assert_eq!(v.into_vec(), items);
        }
    }
}
