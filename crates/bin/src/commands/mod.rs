pub mod bytes;
pub mod fmt;
pub mod get;
pub mod set;
pub mod show;
