pub mod error;
pub mod node;
pub mod ring;
pub mod source;
pub mod trace;
