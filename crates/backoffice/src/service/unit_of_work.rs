use crate::abstract_trait::unit_of_work::DynUnitOfWork;
use shared::errors::ServiceError;
use tracing::{error, warn};

/// Commits the unit of work when `outcome` succeeded and rolls it back
/// otherwise. A failed commit turns a success into an error.
pub(crate) async fn finish<T>(
    uow: DynUnitOfWork,
    outcome: Result<T, ServiceError>,
) -> Result<T, ServiceError> {
    match outcome {
        Ok(value) => {
            uow.commit().await?;
            Ok(value)
        }
        Err(err) => {
            warn!("↩️ Rolling back: {err}");
            if let Err(rollback_err) = uow.rollback().await {
                error!("❌ Rollback failed: {rollback_err}");
            }
            Err(err)
        }
    }
}
