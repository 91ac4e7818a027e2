pub mod page;
pub mod routes;
pub mod rows;
