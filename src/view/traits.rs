use crate::domain::ListState;

/// The rendering target. Each `render` replaces whatever was shown before.
pub trait View {
    fn render(&mut self, state: &ListState);

    /// Blocking, user-facing message outside the product list
    fn alert(&mut self, message: &str);
}
