pub mod parser;
pub mod routes;

pub use routes::routes;
