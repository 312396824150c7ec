pub mod check;
pub mod legacy;
