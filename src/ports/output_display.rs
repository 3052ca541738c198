//! Output Display Port - where rendered reports are shown.

/// Port for presenting a rendered report.
///
/// # Contract
///
/// Implementations must:
/// - Replace previously shown content with `text`, verbatim
/// - Mark themselves as having content once `display` has been called
pub trait OutputDisplay: Send + Sync {
    fn display(&self, text: &str);

    /// Returns true once any report has been displayed.
    fn has_content(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_display_is_object_safe() {
        fn check<T: OutputDisplay + ?Sized>() {}
        check::<dyn OutputDisplay>();
    }
}
