mod controls;
pub mod describe;
mod file_loader;
mod messages;

pub use controls::Controls;
pub use file_loader::FileLoader;
pub use messages::messages;
