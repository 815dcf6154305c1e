pub mod panel;
pub mod table;

pub use panel::Panel;
