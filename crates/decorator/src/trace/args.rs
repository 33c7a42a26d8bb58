use std::any::type_name;
use std::fmt::Display;

/// An argument tuple that can render itself for a trace line.
pub trait TraceArgs {
    /// Renders every argument, joined with `", "`; with `show_types` each one reads `value: Type`.
    fn render(&self, show_types: bool) -> String;
}

fn render_arg<T: Display + ?Sized>(arg: &T, show_types: bool) -> String {
    if show_types { format!("{arg}: {}", short_type_name(type_name::<T>())) } else { arg.to_string() }
}

macro_rules! impl_trace_args_for_tuple ({ $($param:ident)* } => {
    impl<$($param,)*> TraceArgs for ($($param,)*)
    where
        $($param: Display,)*
    {
        #[allow(non_snake_case, unused_variables, reason = "tuple fields are named after their type parameters")]
        fn render(&self, show_types: bool) -> String {
            let ($($param,)*) = self;
            let rendered: Vec<String> = vec![$(render_arg($param, show_types),)*];
            rendered.join(", ")
        }
    }
});

impl_trace_args_for_tuple! {}
impl_trace_args_for_tuple! { A }
impl_trace_args_for_tuple! { A B }
impl_trace_args_for_tuple! { A B C }
impl_trace_args_for_tuple! { A B C D }
impl_trace_args_for_tuple! { A B C D E }
impl_trace_args_for_tuple! { A B C D E F }
impl_trace_args_for_tuple! { A B C D E F G }
impl_trace_args_for_tuple! { A B C D E F G H }
impl_trace_args_for_tuple! { A B C D E F G H I }
impl_trace_args_for_tuple! { A B C D E F G H I J }
impl_trace_args_for_tuple! { A B C D E F G H I J K }
impl_trace_args_for_tuple! { A B C D E F G H I J K L }

/// Strips module paths from every path inside a type name:
/// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
pub(crate) fn short_type_name(full: &str) -> String {
    let mut short = String::with_capacity(full.len());
    let mut path = String::new();
    for c in full.chars() {
        if matches!(c, '<' | '>' | ',' | '(' | ')' | '[' | ']' | '&' | '*' | ';' | ' ') {
            short.push_str(last_segment(&path));
            path.clear();
            short.push(c);
        } else {
            path.push(c);
        }
    }
    short.push_str(last_segment(&path));
    short
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

/// The name a function shows in trace lines when none is given explicitly.
pub(crate) fn function_name<F: ?Sized>() -> String {
    let name = short_type_name(type_name::<F>());
    if name.contains("{{closure}}") { "<closure>".to_string() } else { name }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain() {
        assert_eq!((2, 3).render(false), "2, 3");
        assert_eq!(("a", 1.5, 'c').render(false), "a, 1.5, c");
        assert_eq!(().render(false), "");
    }

    #[test]
    fn test_render_with_types() {
        assert_eq!((2_i32, 3_u8).render(true), "2: i32, 3: u8");
        assert_eq!(("hi".to_string(), "there", true).render(true), "hi: String, there: &str, true: bool");
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name("i32"), "i32");
        assert_eq!(short_type_name("alloc::string::String"), "String");
        assert_eq!(short_type_name("alloc::vec::Vec<alloc::string::String>"), "Vec<String>");
        assert_eq!(
            short_type_name("std::collections::hash::map::HashMap<&str, core::option::Option<u8>>"),
            "HashMap<&str, Option<u8>>"
        );
        assert_eq!(short_type_name("[core::time::Duration; 2]"), "[Duration; 2]");
    }

    fn square(x: i32) -> i32 {
        x * x
    }

    #[test]
    fn test_function_name() {
        fn name_of<F>(_f: &F) -> String {
            function_name::<F>()
        }

        assert_eq!(name_of(&square), "square");
        assert_eq!(name_of(&|x: i32| x), "<closure>");
    }
}
