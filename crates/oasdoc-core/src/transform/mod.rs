pub mod operation_normalizer;
pub mod schema_normalizer;
pub mod type_info;

pub use operation_normalizer::build_catalog;
pub use schema_normalizer::normalize;
pub use type_info::describe;
