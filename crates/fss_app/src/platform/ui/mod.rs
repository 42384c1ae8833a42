pub mod constants;
pub mod layout;
pub mod positioner;
pub mod render;
