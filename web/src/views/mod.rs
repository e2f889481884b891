use api::ApiError;

mod layout;
pub use layout::DashboardLayout;

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod users;
pub use users::Users;

mod restaurants;
pub use restaurants::Restaurants;

mod transactions;
pub use transactions::Transactions;

mod user_transactions;
pub use user_transactions::UserTransactions;

mod restaurant_transactions;
pub use restaurant_transactions::RestaurantTransactions;

mod newsletter;
pub use newsletter::Newsletter;

/// Prefer the backend-supplied message, falling back to a page default.
pub(crate) fn error_message(err: &ApiError, fallback: &str) -> String {
    match err {
        ApiError::Status { .. } => err.to_string(),
        _ => fallback.to_string(),
    }
}

/// Abbreviated order id for table cells, the last six characters.
pub(crate) fn short_order_id(id: &str) -> String {
    let tail = id.len().saturating_sub(6);
    format!("#{}", &id[tail..])
}
