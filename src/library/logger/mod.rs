pub mod impl_console;
pub mod impl_silent;
pub mod interface;
