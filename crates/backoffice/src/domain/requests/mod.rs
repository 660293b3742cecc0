mod analytics;
mod cart;
mod customer;
mod order;
mod product;

pub use self::analytics::{DEFAULT_RANKING_SIZE, ProductRankingQuery};
pub use self::cart::{AddCartItemRequest, RemoveCartItemRequest};
pub use self::customer::{CreateCustomerRequest, UpdateCustomerRecordRequest, UpdateCustomerRequest};
pub use self::order::{
    CreateOrderItemRecordRequest, CreateOrderItemRequest, CreateOrderRecordRequest,
    CreateOrderRequest, DEFAULT_ORDER_STATUS, FindAllOrders, UpdateOrderStatusRequest,
};
pub use self::product::{CreateProductRequest, UpdateStockRequest};

use shared::errors::ServiceError;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

/// Runs the request's validation rules, flattening failures into one message
/// per offending field.
pub fn validate_request<T: Validate>(req: &T) -> Result<(), ServiceError> {
    req.validate()
        .map_err(|errors| ServiceError::Validation(validation_messages(&errors, None)))
}

pub fn validation_messages(errors: &ValidationErrors, prefix: Option<&str>) -> Vec<String> {
    let mut messages = Vec::new();

    for (field, kind) in errors.errors() {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{field}"),
            None => field.to_string(),
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| match error.code.as_ref() {
                            "length" => "Invalid length".to_string(),
                            "range" => "Value out of range".to_string(),
                            _ => format!("Invalid {field}"),
                        });
                    messages.push(format!("{path}: {message}"));
                }
            }
            ValidationErrorsKind::Struct(inner) => {
                messages.extend(validation_messages(inner, Some(&path)));
            }
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    messages.extend(validation_messages(inner, Some(&format!("{path}[{index}]"))));
                }
            }
        }
    }

    messages
}
