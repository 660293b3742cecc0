mod repository;
mod service;

pub use self::repository::{
    CustomerCommandRepositoryTrait, CustomerQueryRepositoryTrait, DynCustomerCommandRepository,
    DynCustomerQueryRepository,
};
pub use self::service::{
    CustomerCommandServiceTrait, CustomerQueryServiceTrait, DynCustomerCommandService,
    DynCustomerQueryService,
};
