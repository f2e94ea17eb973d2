pub mod icon;
pub mod number;
pub mod text;
