//! Stock bookkeeping. Every operation runs inside the caller's unit of work,
//! so a reservation made for a failed order disappears with its rollback.

use crate::{abstract_trait::unit_of_work::DynUnitOfWork, model::Product as ProductModel};
use rust_decimal::Decimal;
use shared::errors::ServiceError;
use tracing::info;

pub struct InventoryLedger;

impl InventoryLedger {
    /// Takes `quantity` units out of stock and returns the unit price read
    /// under the same row lock.
    pub async fn reserve(
        uow: &mut DynUnitOfWork,
        product_id: i32,
        quantity: i32,
    ) -> Result<Decimal, ServiceError> {
        ensure_positive(quantity)?;

        let product = uow
            .find_product_for_update(product_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Product ID {product_id} not found")))?;

        if quantity > product.stock_quantity {
            return Err(ServiceError::InsufficientStock {
                product: product.product_name,
                requested: quantity,
                available: product.stock_quantity,
            });
        }

        // the row is locked and checked, so a refused update means it is gone
        if !uow.update_stock(product_id, -quantity).await? {
            return Err(ServiceError::NotFound(format!(
                "Product ID {product_id} not found"
            )));
        }

        info!(
            "📉 Reserved {quantity} x product {product_id}, {} left",
            product.stock_quantity - quantity
        );
        Ok(product.price)
    }

    /// Puts `quantity` units back. Only order deletion releases stock.
    pub(crate) async fn release(
        uow: &mut DynUnitOfWork,
        product_id: i32,
        quantity: i32,
    ) -> Result<(), ServiceError> {
        ensure_positive(quantity)?;

        if !uow.update_stock(product_id, quantity).await? {
            return Err(ServiceError::NotFound(format!(
                "Product ID {product_id} not found"
            )));
        }

        info!("📈 Released {quantity} x product {product_id}");
        Ok(())
    }

    pub async fn adjust_absolute(
        uow: &mut DynUnitOfWork,
        product_id: i32,
        new_stock: i32,
    ) -> Result<ProductModel, ServiceError> {
        if new_stock < 0 {
            return Err(ServiceError::Validation(vec![
                "stock: must not be negative".into(),
            ]));
        }

        let product = uow
            .set_stock(product_id, new_stock)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Product ID {product_id} not found")))?;

        info!("📦 Stock of product {product_id} set to {new_stock}");
        Ok(product)
    }
}

fn ensure_positive(quantity: i32) -> Result<(), ServiceError> {
    if quantity <= 0 {
        return Err(ServiceError::Validation(vec![format!(
            "quantity: must be positive, got {quantity}"
        )]));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{
            product::{ProductCommandRepositoryTrait, ProductQueryRepositoryTrait},
            unit_of_work::TransactionManagerTrait,
        },
        domain::requests::CreateProductRequest,
        repository::memory::{MemoryStore, MemoryTransactionManager},
    };
    use std::str::FromStr;

    async fn store_with_product(stock: i32) -> (MemoryStore, i32) {
        let store = MemoryStore::new();
        let product = store
            .create_product(&CreateProductRequest {
                name: "Laptop".into(),
                description: None,
                price: Decimal::from_str("999.99").unwrap(),
                stock,
            })
            .await
            .unwrap();
        (store, product.product_id)
    }

    async fn stock_of(store: &MemoryStore, product_id: i32) -> i32 {
        store
            .find_by_id(product_id)
            .await
            .unwrap()
            .unwrap()
            .stock_quantity
    }

    #[tokio::test]
    async fn reserve_returns_price_and_decrements() {
        let (store, id) = store_with_product(5).await;
        let transactions = MemoryTransactionManager::new(store.clone());

        let mut uow = transactions.begin().await.unwrap();
        let price = InventoryLedger::reserve(&mut uow, id, 3).await.unwrap();
        uow.commit().await.unwrap();

        assert_eq!(price, Decimal::from_str("999.99").unwrap());
        assert_eq!(stock_of(&store, id).await, 2);
    }

    #[tokio::test]
    async fn reserve_beyond_stock_leaves_it_untouched() {
        let (store, id) = store_with_product(5).await;
        let transactions = MemoryTransactionManager::new(store.clone());

        let mut uow = transactions.begin().await.unwrap();
        let err = InventoryLedger::reserve(&mut uow, id, 6).await.unwrap_err();
        uow.rollback().await.unwrap();

        match err {
            ServiceError::InsufficientStock {
                requested,
                available,
                ..
            } => {
                assert_eq!(requested, 6);
                assert_eq!(available, 5);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(stock_of(&store, id).await, 5);
    }

    #[tokio::test]
    async fn reserve_rejects_unknown_product_and_bad_quantity() {
        let (store, id) = store_with_product(5).await;
        let transactions = MemoryTransactionManager::new(store);

        let mut uow = transactions.begin().await.unwrap();
        assert!(matches!(
            InventoryLedger::reserve(&mut uow, id + 100, 1).await,
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(
            InventoryLedger::reserve(&mut uow, id, 0).await,
            Err(ServiceError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn release_restores_reserved_units() {
        let (store, id) = store_with_product(5).await;
        let transactions = MemoryTransactionManager::new(store.clone());

        let mut uow = transactions.begin().await.unwrap();
        InventoryLedger::reserve(&mut uow, id, 4).await.unwrap();
        InventoryLedger::release(&mut uow, id, 4).await.unwrap();
        uow.commit().await.unwrap();

        assert_eq!(stock_of(&store, id).await, 5);
    }

    #[tokio::test]
    async fn adjust_absolute_rejects_negative_stock() {
        let (store, id) = store_with_product(5).await;
        let transactions = MemoryTransactionManager::new(store.clone());

        let mut uow = transactions.begin().await.unwrap();
        assert!(matches!(
            InventoryLedger::adjust_absolute(&mut uow, id, -1).await,
            Err(ServiceError::Validation(_))
        ));
        let product = InventoryLedger::adjust_absolute(&mut uow, id, 42).await.unwrap();
        uow.commit().await.unwrap();

        assert_eq!(product.stock_quantity, 42);
        assert_eq!(stock_of(&store, id).await, 42);
    }
}
