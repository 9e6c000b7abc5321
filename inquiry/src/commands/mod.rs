pub mod email;
pub mod migrate;
pub mod serve;
pub mod submit;
