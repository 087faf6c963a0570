pub mod dark_mode;

pub use dark_mode::DarkModeController;
