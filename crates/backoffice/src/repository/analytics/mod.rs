mod query;

pub use self::query::AnalyticsRepository;
