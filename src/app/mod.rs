// module declaration
pub mod core;
pub mod ui_state;

// export App and related types
pub use self::core::{App, MessageType};
