pub mod terminal;
pub mod traits;

pub use terminal::TerminalView;
pub use traits::View;
