use rtable_models::ClassName;

/// Wraps `render` so that it receives `base + suffix` as its class name. The
/// base is always passed explicitly by the enclosing component.
pub fn with_class_name<F, V>(suffix: &'static str, render: F) -> impl FnOnce(&ClassName) -> V
where
    F: FnOnce(String) -> V,
{
    move |base: &ClassName| render(base.suffixed(suffix))
}
