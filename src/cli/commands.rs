pub mod initdb;
pub mod resolve;
pub mod serve;

pub use initdb::init_database;
pub use resolve::resolve;
pub use serve::serve;
