pub mod patient;
pub mod prescription;
pub mod settings;

pub use patient::*;
pub use prescription::*;
pub use settings::*;
