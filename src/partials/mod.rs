pub mod key;
pub(crate) mod segment;
