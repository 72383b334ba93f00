pub mod messages;
pub mod opener;
pub mod terminal;

pub use opener::SystemOpener;
pub use terminal::Terminal;
