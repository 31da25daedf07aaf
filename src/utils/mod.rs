// Utils compartidos

pub mod browser;
pub mod constants;

pub use browser::alert;
