pub mod convert;
pub mod digest;
