pub mod hover;
pub mod status;
pub mod tools;

#[cfg(feature = "gtk")]
pub mod gtk;
