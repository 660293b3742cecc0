mod command;
mod query;

pub use self::command::{CustomerCommandService, CustomerCommandServiceDeps};
pub use self::query::CustomerQueryService;
