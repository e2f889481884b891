//! # Wire types shared with the backend services
//!
//! Every struct here mirrors the JSON the services produce or accept, so all
//! of them rename to `camelCase` on the wire. The dashboard never mutates
//! these in place: collections are replaced wholesale after each fetch.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Identity`] | The claims decoded from the session token. `role` stays a free string here because tokens may be minted for roles the admin UI does not enumerate. |
//! | [`User`] | A platform account as listed by the admin service, with a closed [`Role`]. |
//! | [`Restaurant`] | A restaurant record, `owner` being the owning user's id. |
//! | [`Order`] | One order from the per-user or per-restaurant order feeds. |
//! | [`Transaction`] | An immutable settlement aggregating one user's orders. |
//! | [`NotificationTemplate`] | A stored newsletter/notification template. |
//!
//! Request payloads ([`LoginRequest`], [`NewUser`], [`VerifyChange`], ...)
//! live here too so client code and tests agree on the exact body shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account roles the admin screens know how to manage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Customer,
    Restaurant,
    Delivery,
}

impl Role {
    /// All roles, in the order the role selector shows them.
    pub fn all() -> [Role; 4] {
        [Role::Admin, Role::Customer, Role::Restaurant, Role::Delivery]
    }

    /// Lowercase wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Customer => "customer",
            Role::Restaurant => "restaurant",
            Role::Delivery => "delivery",
        }
    }

    /// Capitalised label for tables and reports.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Customer => "Customer",
            Role::Restaurant => "Restaurant",
            Role::Delivery => "Delivery",
        }
    }

    pub fn from_str(s: &str) -> Option<Role> {
        match s {
            "admin" => Some(Role::Admin),
            "customer" => Some(Role::Customer),
            "restaurant" => Some(Role::Restaurant),
            "delivery" => Some(Role::Delivery),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Claims carried in the session token payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub role: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub verified: bool,
}

/// Body for creating a user through the admin service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub role: Role,
}

impl Default for NewUser {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            password: String::new(),
            role: Role::Customer,
        }
    }
}

/// Minimal user projection returned by the name-search endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    /// Id of the owning user account.
    pub owner: String,
    pub location: String,
    pub rating: f64,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewRestaurant {
    pub name: String,
    pub owner: String,
    pub location: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

impl OrderItem {
    /// Quantity times unit price.
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub total_amount: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
}

/// One order as embedded in a settled transaction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionOrder {
    pub order_id: String,
    pub order_date: DateTime<Utc>,
    pub order_total: f64,
    pub status: String,
    pub items: Vec<OrderItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub total_amount: f64,
    pub transaction_date: DateTime<Utc>,
    pub orders: Vec<TransactionOrder>,
}

impl Transaction {
    /// Line items across every order in the settlement.
    pub fn item_count(&self) -> usize {
        self.orders.iter().map(|o| o.items.len()).sum()
    }
}

/// Body for settling a user's open orders into a transaction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub user_id: String,
    pub user_name: String,
    pub total_amount: f64,
    pub orders: Vec<TransactionOrder>,
}

impl NewTransaction {
    /// Aggregate a user's orders into a transaction payload.
    /// An empty order list yields a zero-amount transaction.
    pub fn from_orders(user_id: &str, user_name: &str, orders: &[Order]) -> Self {
        let total_amount = orders.iter().map(|o| o.total_amount).sum();
        Self {
            user_id: user_id.to_string(),
            user_name: user_name.to_string(),
            total_amount,
            orders: orders
                .iter()
                .map(|o| TransactionOrder {
                    order_id: o.id.clone(),
                    order_date: o.created_at,
                    order_total: o.total_amount,
                    status: o.status.clone(),
                    items: o.items.clone(),
                })
                .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationTemplate {
    pub id: String,
    pub name: String,
    pub subject: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update body for a notification template.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateDraft {
    pub name: String,
    pub subject: String,
    pub content: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub role: Role,
}

/// Body for the verify toggle endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyChange {
    pub is_verified: bool,
}

/// Body for the role change endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoleChange {
    pub role: Role,
}

/// Body for the verification notification endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationNotice {
    pub user_id: String,
}

/// Body for the transaction receipt notification endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptNotice {
    pub user_id: String,
    pub html_content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_lowercase() {
        let json = serde_json::to_string(&Role::Delivery).unwrap();
        assert_eq!(json, "\"delivery\"");
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
        assert!(serde_json::from_str::<Role>("\"Admin\"").is_err());
    }

    #[test]
    fn test_verify_change_uses_camel_case_key() {
        let body = serde_json::to_value(VerifyChange { is_verified: true }).unwrap();
        assert_eq!(body, serde_json::json!({ "isVerified": true }));
    }

    #[test]
    fn test_user_parses_service_json() {
        let user: User = serde_json::from_str(
            r#"{"id":"u1","name":"Asha","email":"asha@example.com","phone":"555-0101","role":"customer","verified":false}"#,
        )
        .unwrap();
        assert_eq!(user.role, Role::Customer);
        assert!(!user.verified);
    }

    #[test]
    fn test_transaction_parses_nested_orders() {
        let tx: Transaction = serde_json::from_str(
            r#"{
                "id": "t1",
                "userId": "u1",
                "userName": "Asha",
                "totalAmount": 31.5,
                "transactionDate": "2024-03-01T12:00:00Z",
                "orders": [{
                    "orderId": "o1",
                    "orderDate": "2024-02-28T18:30:00Z",
                    "orderTotal": 31.5,
                    "status": "DELIVERED",
                    "items": [{"name": "Pad Thai", "quantity": 2, "price": 12.0}]
                }]
            }"#,
        )
        .unwrap();
        assert_eq!(tx.user_name, "Asha");
        assert_eq!(tx.orders.len(), 1);
        assert_eq!(tx.orders[0].items[0].quantity, 2);
    }

    #[test]
    fn test_new_transaction_aggregates_orders() {
        let orders = vec![
            Order {
                id: "o1".into(),
                user_id: "u1".into(),
                total_amount: 10.0,
                status: "DELIVERED".into(),
                created_at: "2024-02-28T18:30:00Z".parse().unwrap(),
                items: vec![OrderItem {
                    name: "Soup".into(),
                    quantity: 1,
                    price: 10.0,
                }],
            },
            Order {
                id: "o2".into(),
                user_id: "u1".into(),
                total_amount: 5.5,
                status: "PENDING".into(),
                created_at: "2024-03-01T09:00:00Z".parse().unwrap(),
                items: vec![],
            },
        ];
        let tx = NewTransaction::from_orders("u1", "Asha", &orders);
        assert_eq!(tx.total_amount, 15.5);
        assert_eq!(tx.orders.len(), 2);
        assert_eq!(tx.orders[0].order_id, "o1");
        assert_eq!(tx.orders[1].order_total, 5.5);
    }

    #[test]
    fn test_line_total_and_item_count() {
        let item = OrderItem {
            name: "Soup".into(),
            quantity: 3,
            price: 4.5,
        };
        assert_eq!(item.line_total(), 13.5);

        let tx: Transaction = serde_json::from_str(
            r#"{
                "id": "t1",
                "userId": "u1",
                "userName": "Asha",
                "totalAmount": 20.0,
                "transactionDate": "2024-03-01T12:00:00Z",
                "orders": [
                    {"orderId": "o1", "orderDate": "2024-02-28T18:30:00Z", "orderTotal": 12.0, "status": "completed",
                     "items": [{"name": "a", "quantity": 1, "price": 6.0}, {"name": "b", "quantity": 1, "price": 6.0}]},
                    {"orderId": "o2", "orderDate": "2024-02-28T19:00:00Z", "orderTotal": 8.0, "status": "pending",
                     "items": [{"name": "c", "quantity": 2, "price": 4.0}]}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(tx.item_count(), 3);
    }

    #[test]
    fn test_new_transaction_from_no_orders_is_zero() {
        let tx = NewTransaction::from_orders("u1", "Asha", &[]);
        assert_eq!(tx.total_amount, 0.0);
        assert!(tx.orders.is_empty());
    }
}
