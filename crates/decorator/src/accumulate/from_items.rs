use crate::error::AccumulateError;

/// A fixed-arity argument tuple assembled from a sequence of items.
///
/// Every item is converted with `From`, so a sequence of `i32` can fill `(i64, f64)`. The whole
/// sequence is consumed: it must produce exactly as many items as the tuple has fields.
pub trait FromItems<T>: Sized {
    fn from_items<Items: Iterator<Item = T>>(items: Items) -> Result<Self, AccumulateError>;
}

macro_rules! impl_from_items_for_tuple ({ $($param:ident)* } => {
    impl<T, $($param,)*> FromItems<T> for ($($param,)*)
    where
        $($param: From<T>,)*
    {
        #[allow(unused_mut, unused_variables, unused_assignments, reason = "the empty tuple takes no items")]
        fn from_items<Items: Iterator<Item = T>>(mut items: Items) -> Result<Self, AccumulateError> {
            let expected = <[&str]>::len(&[$(stringify!($param),)*]);
            let mut taken = 0;
            let tuple = ($(
                match items.next() {
                    Some(item) => {
                        taken += 1;
                        $param::from(item)
                    }
                    None => return Err(AccumulateError::arity_mismatch(expected, taken)),
                },
            )*);

            let surplus = items.count();
            if surplus > 0 {
                return Err(AccumulateError::arity_mismatch(expected, expected + surplus));
            }
            Ok(tuple)
        }
    }
});

impl_from_items_for_tuple! {}
impl_from_items_for_tuple! { A }
impl_from_items_for_tuple! { A B }
impl_from_items_for_tuple! { A B C }
impl_from_items_for_tuple! { A B C D }
impl_from_items_for_tuple! { A B C D E }
impl_from_items_for_tuple! { A B C D E F }
impl_from_items_for_tuple! { A B C D E F G }
impl_from_items_for_tuple! { A B C D E F G H }
impl_from_items_for_tuple! { A B C D E F G H I }
impl_from_items_for_tuple! { A B C D E F G H I J }
impl_from_items_for_tuple! { A B C D E F G H I J K }
impl_from_items_for_tuple! { A B C D E F G H I J K L }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_arity() {
        let tuple: (i64, f64) = FromItems::from_items([3_i32, 4].into_iter()).unwrap();
        assert_eq!(tuple, (3, 4.0));
    }

    #[test]
    fn test_empty_tuple_takes_nothing() {
        assert!(<()>::from_items(std::iter::empty::<u8>()).is_ok());
        assert_eq!(<()>::from_items([1_u8].into_iter()), Err(AccumulateError::arity_mismatch(0, 1)));
    }

    #[test]
    fn test_too_few_items() {
        let result = <(u8, u8, u8)>::from_items([1_u8, 2].into_iter());
        assert_eq!(result, Err(AccumulateError::arity_mismatch(3, 2)));
    }

    #[test]
    fn test_widest_tuple() {
        type Twelve = (u8, u16, u32, u64, i16, i32, i64, u8, u16, u32, u64, i64);

        let tuple = Twelve::from_items(1_u8..=12).unwrap();
        assert_eq!(tuple.0, 1);
        assert_eq!(tuple.8, 9_u16);
        assert_eq!(tuple.11, 12_i64);

        assert_eq!(Twelve::from_items(1_u8..=11), Err(AccumulateError::arity_mismatch(12, 11)));
        assert_eq!(Twelve::from_items(1_u8..=13), Err(AccumulateError::arity_mismatch(12, 13)));
    }

    #[test]
    fn test_too_many_items() {
        let result = <(u8,)>::from_items([1_u8, 2, 3].into_iter());
        assert_eq!(result, Err(AccumulateError::arity_mismatch(1, 3)));
    }
}
