pub mod impl_fake;
pub mod impl_shared;
pub mod interface;
pub mod label_table;
