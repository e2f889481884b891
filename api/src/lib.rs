//! # API crate — models and REST client for the admin dashboard
//!
//! This crate holds everything the frontends need to talk to the platform's
//! backend services: the wire types, the typed HTTP client, session and token
//! handling, report builders, and geocoding. Nothing in here touches the DOM,
//! so the whole crate compiles and tests natively.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Wire types for users, restaurants, orders, transactions and notification templates |
//! | [`client`] | [`ApiClient`] — one typed method per backend endpoint, bearer auth |
//! | [`config`] | [`ApiConfig`] — base URLs for the auth, admin, notification and geocoding services |
//! | [`error`] | [`ApiError`] — status/transport/token error taxonomy |
//! | [`session`] | [`Session`] and the [`TokenStorage`] persistence seam |
//! | [`token`] | Unverified JWT payload decoding into an [`Identity`] |
//! | [`report`] | CSV table reports and the transaction receipt document |
//! | [`geocode`] | Forward geocoding of restaurant locations |

pub mod client;
pub mod config;
pub mod error;
pub mod geocode;
pub mod models;
pub mod report;
pub mod session;
pub mod token;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::{ApiError, TokenError};
pub use geocode::GeoPoint;
pub use models::{
    Identity, LoginRequest, LoginResponse, NewRestaurant, NewTransaction, NewUser,
    NotificationTemplate, Order, OrderItem, RegisterRequest, Restaurant, Role, TemplateDraft,
    Transaction, TransactionOrder, User, UserSummary,
};
pub use report::TableReport;
pub use session::{MemoryStorage, Session, TokenStorage};
pub use token::decode_identity;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use session::BrowserStorage;
