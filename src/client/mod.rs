pub mod backend;
pub mod encoder;
pub mod form;
