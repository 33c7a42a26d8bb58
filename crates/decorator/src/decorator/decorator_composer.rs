use crate::decorator::{Decorates, Decorator, IdentityDecorator};

/// Applies `decorator_1`, then feeds its output to `decorator_2`.
#[derive(Debug, Clone, Copy)]
pub struct DecoratorComposer<D1, D2> {
    decorator_1: D1,
    decorator_2: D2,
}

impl<D1, D2> DecoratorComposer<D1, D2> {
    pub fn new(decorator_1: D1, decorator_2: D2) -> Self {
        Self { decorator_1, decorator_2 }
    }
}

impl<D1, D2> Decorates for DecoratorComposer<D1, D2> {}

impl Default for DecoratorComposer<IdentityDecorator, IdentityDecorator> {
    fn default() -> Self {
        Self::new(IdentityDecorator, IdentityDecorator)
    }
}

impl<In, D1, D2> Decorator<In> for DecoratorComposer<D1, D2>
where
    D1: Decorator<In>,
    D2: Decorator<D1::Out>,
{
    type Out = D2::Out;

    fn decorate(&self, raw: In) -> Self::Out {
        let inner = self.decorator_1.decorate(raw);
        self.decorator_2.decorate(inner)
    }
}

#[cfg(test)]
mod tests {
    use crate::decorator::{Decorator, DecoratorComposer, DecoratorExt, IdentityDecorator, decorator_fn};

    #[test]
    fn test_and_then_applies_left_first() {
        let wrap_a = decorator_fn(|s: String| format!("a({s})"));
        let wrap_b = decorator_fn(|s: String| format!("b({s})"));

        let composed = wrap_a.and_then(wrap_b);
        assert_eq!(composed.decorate("f".to_string()), "b(a(f))");
    }

    #[test]
    fn test_compose_applies_right_first() {
        let wrap_a = decorator_fn(|s: String| format!("a({s})"));
        let wrap_b = decorator_fn(|s: String| format!("b({s})"));

        let composed = wrap_a.compose(wrap_b);
        assert_eq!(composed.decorate("f".to_string()), "a(b(f))");
    }

    #[test]
    fn test_default_composer_is_identity() {
        let composer: DecoratorComposer<IdentityDecorator, IdentityDecorator> = DecoratorComposer::default();
        let f = |x: i32| x * 2;
        let decorated = composer.decorate(f);
        assert_eq!(decorated(21), 42);
    }

    #[test]
    fn test_composers_chain_further() {
        let wrap = |tag: &'static str| decorator_fn(move |s: String| format!("{tag}({s})"));

        let composed = wrap("a").and_then(wrap("b")).and_then(IdentityDecorator).compose(wrap("c"));
        assert_eq!(composed.decorate("f".to_string()), "b(a(c(f)))");
    }
}
