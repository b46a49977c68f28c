pub mod admin;
pub mod f1;
