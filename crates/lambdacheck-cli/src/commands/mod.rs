pub mod check;
pub mod signatures;
