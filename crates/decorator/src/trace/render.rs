use std::fmt::{Debug, Display};

/// Turns a traced function's return value into the text after `->`.
pub trait RenderResult<T: ?Sized> {
    fn render(value: &T) -> String;
}

/// Renders results with [`Display`]; the default.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DisplayResult;

/// Renders results with [`Debug`], for containers such as `Vec` that have no `Display`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DebugResult;

impl<T: Display + ?Sized> RenderResult<T> for DisplayResult {
    fn render(value: &T) -> String {
        value.to_string()
    }
}

impl<T: Debug + ?Sized> RenderResult<T> for DebugResult {
    fn render(value: &T) -> String {
        format!("{value:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_styles() {
        assert_eq!(<DisplayResult as RenderResult<str>>::render("ab"), "ab");
        assert_eq!(<DebugResult as RenderResult<str>>::render("ab"), "\"ab\"");
        assert_eq!(DebugResult::render(&vec![1, 2]), "[1, 2]");
        assert_eq!(DebugResult::render(&Some(3)), "Some(3)");
    }
}
