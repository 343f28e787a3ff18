pub mod check;
pub mod dispatch;
pub mod query;
pub mod schema;
pub mod serve;
pub mod shared;
pub mod stats;
