mod query;

pub use self::query::CartQueryRepository;
