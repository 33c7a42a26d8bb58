use std::borrow::Cow;

/// Represents a synchronous function taking its arguments as a tuple
pub trait FnTrait<Args> {
    type Output;
    fn call(&self, args: Args) -> Self::Output;

    /// The name trace lines show for this function.
    ///
    /// Defaults to the last path segment of the type name, `<closure>` for closures. Wrappers
    /// override it to report the function they wrap.
    fn fn_name(&self) -> Cow<'static, str> {
        Cow::Owned(crate::trace::function_name::<Self>())
    }
}

/// impl `Fn` for `FnTrait`, From 0 parameters to 12 parameters
///
/// for example, it will impl Fn(A, B) like this:
///```ignore
/// impl<Func, Out, A, B> FnTrait<(A, B)> for Func
///    where
///        Func: Fn(A, B) -> Out,
/// {
///    type Output = Out;
///
///    #[inline]
///    #[allow(non_snake_case)]
///    fn call(&self, (A, B): (A, B)) -> Self::Output {
///        (self)(A, B)
///    }
/// }
///```
macro_rules! impl_fn_trait_for_fn ({ $($param:ident)* } => {
    impl<Func, Out, $($param,)*> FnTrait<($($param,)*)> for Func
    where
        Func: Fn($($param),*) -> Out,
    {
        type Output = Out;

        #[inline]
        #[allow(non_snake_case, reason = "tuple fields are named after their type parameters")]
        fn call(&self, ($($param,)*): ($($param,)*)) -> Self::Output {
            (self)($($param,)*)
        }
    }
});

impl_fn_trait_for_fn! {}
impl_fn_trait_for_fn! { A }
impl_fn_trait_for_fn! { A B }
impl_fn_trait_for_fn! { A B C }
impl_fn_trait_for_fn! { A B C D }
impl_fn_trait_for_fn! { A B C D E }
impl_fn_trait_for_fn! { A B C D E F }
impl_fn_trait_for_fn! { A B C D E F G }
impl_fn_trait_for_fn! { A B C D E F G H }
impl_fn_trait_for_fn! { A B C D E F G H I }
impl_fn_trait_for_fn! { A B C D E F G H I J }
impl_fn_trait_for_fn! { A B C D E F G H I J K }
impl_fn_trait_for_fn! { A B C D E F G H I J K L }

#[cfg(test)]
mod tests {
    use crate::fn_trait::FnTrait;

    fn assert_is_fn_trait<Args, F: FnTrait<Args>>(_f: F) {
        //noop
    }
    fn foo0() {}
    fn foo1(_a: ()) {}
    fn foo2(_a1: &str, _a2: u8) {}
    fn foo3(_a1: &str, _a2: u8, _a3: ()) {}
    fn foo6(_a1: (), _a2: u8, _a3: (), _a4: (), _a5: (), _a6: ()) {}
    #[allow(clippy::too_many_arguments, reason = "exercises the widest generated impl")]
    fn foo12(
        _a1: &str,
        _a2: u8,
        _a3: (),
        _a4: (),
        _a5: (),
        _a6: (),
        _a7: (),
        _a8: (),
        _a9: (),
        _a10: (),
        _a11: (),
        _a12: (),
    ) {
    }

    #[test]
    fn test_fn_is_fn_trait() {
        assert_is_fn_trait(foo0);
        assert_is_fn_trait(foo1);
        assert_is_fn_trait(foo2);
        assert_is_fn_trait(foo3);
        assert_is_fn_trait(foo6);
        assert_is_fn_trait(foo12);
    }

    #[test]
    fn test_call_spreads_tuple() {
        let add = |a: i32, b: i32| a + b;
        assert_eq!(FnTrait::call(&add, (2, 3)), 5);

        let unit = || "done";
        assert_eq!(FnTrait::call(&unit, ()), "done");
    }

    fn double(x: u32) -> u32 {
        x * 2
    }

    #[test]
    fn test_default_fn_name() {
        assert_eq!(FnTrait::<(u32,)>::fn_name(&double), "double");
        assert_eq!(FnTrait::<(u32,)>::fn_name(&|x: u32| x), "<closure>");
    }
}
