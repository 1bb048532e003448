pub mod descriptor;
pub mod markdown;
pub mod operations;
pub mod schema;

pub use descriptor::*;
pub use markdown::*;
pub use operations::*;
pub use schema::*;
