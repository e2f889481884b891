//! # Typed REST client — [`ApiClient`]
//!
//! One method per backend endpoint. Every method issues a single request,
//! maps non-success responses to [`ApiError::Status`] (carrying the
//! service's own error message) and deserialises success bodies into the
//! [`crate::models`] types. There are no retries and no caching; callers
//! refetch collections after each mutation.
//!
//! When a session token is held it is attached to every request as a
//! `Authorization: Bearer` header. The client never inspects the token.

use reqwest::{Client, RequestBuilder, Response};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{
    LoginRequest, LoginResponse, NewRestaurant, NewTransaction, NewUser, NotificationTemplate,
    Order, ReceiptNotice, RegisterRequest, Restaurant, Role, RoleChange, TemplateDraft,
    Transaction, User, UserSummary, VerificationNotice, VerifyChange,
};

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_token(config, None)
    }

    pub fn with_token(config: ApiConfig, token: Option<String>) -> Self {
        Self {
            http: Client::new(),
            config,
            token,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", format!("Bearer {token}")),
            None => builder,
        }
    }

    pub(crate) fn get(&self, url: String) -> RequestBuilder {
        self.authorize(self.http.get(url))
    }

    /// GET without credentials, for third-party endpoints.
    pub(crate) fn get_public(&self, url: String) -> RequestBuilder {
        self.http.get(url)
    }

    fn post(&self, url: String) -> RequestBuilder {
        self.authorize(self.http.post(url))
    }

    fn put(&self, url: String) -> RequestBuilder {
        self.authorize(self.http.put(url))
    }

    fn delete(&self, url: String) -> RequestBuilder {
        self.authorize(self.http.delete(url))
    }

    pub(crate) async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await?;
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(ApiError::from_response(response).await)
        }
    }

    // --- auth service ---

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let url = format!("{}/api/user/login", self.config.auth_base);
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        Ok(Self::send(self.post(url).json(&body)).await?.json().await?)
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let url = format!("{}/api/user/register", self.config.auth_base);
        Self::send(self.post(url).json(request)).await?;
        Ok(())
    }

    // --- user administration ---

    pub async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        let url = format!("{}/api/admin/users", self.config.admin_base);
        Ok(Self::send(self.get(url)).await?.json().await?)
    }

    pub async fn create_user(&self, user: &NewUser) -> Result<(), ApiError> {
        let url = format!("{}/api/admin/users", self.config.admin_base);
        Self::send(self.post(url).json(user)).await?;
        Ok(())
    }

    pub async fn update_user_role(&self, id: &str, role: Role) -> Result<(), ApiError> {
        let url = format!("{}/api/admin/users/{id}/role", self.config.admin_base);
        Self::send(self.put(url).json(&RoleChange { role })).await?;
        Ok(())
    }

    pub async fn update_user_verified(&self, id: &str, verified: bool) -> Result<(), ApiError> {
        let url = format!("{}/api/admin/users/{id}/verify", self.config.admin_base);
        Self::send(self.put(url).json(&VerifyChange {
            is_verified: verified,
        }))
        .await?;
        Ok(())
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        let url = format!("{}/api/admin/users/{id}", self.config.admin_base);
        Self::send(self.delete(url)).await?;
        Ok(())
    }

    /// Name search used by the restaurant owner picker.
    pub async fn search_users(&self, name: &str) -> Result<Vec<UserSummary>, ApiError> {
        let url = format!("{}/api/admin/users/search", self.config.admin_base);
        Ok(Self::send(self.get(url).query(&[("name", name)]))
            .await?
            .json()
            .await?)
    }

    // --- restaurant administration ---

    pub async fn fetch_restaurants(&self) -> Result<Vec<Restaurant>, ApiError> {
        let url = format!("{}/api/admin/restaurants", self.config.admin_base);
        Ok(Self::send(self.get(url)).await?.json().await?)
    }

    pub async fn create_restaurant(&self, restaurant: &NewRestaurant) -> Result<(), ApiError> {
        let url = format!("{}/api/admin/restaurants", self.config.admin_base);
        Self::send(self.post(url).json(restaurant)).await?;
        Ok(())
    }

    pub async fn update_restaurant_verified(
        &self,
        id: &str,
        verified: bool,
    ) -> Result<(), ApiError> {
        let url = format!("{}/api/admin/restaurants/{id}/verify", self.config.admin_base);
        Self::send(self.put(url).json(&VerifyChange {
            is_verified: verified,
        }))
        .await?;
        Ok(())
    }

    pub async fn delete_restaurant(&self, id: &str) -> Result<(), ApiError> {
        let url = format!("{}/api/admin/restaurants/{id}", self.config.admin_base);
        Self::send(self.delete(url)).await?;
        Ok(())
    }

    // --- orders and transactions ---

    pub async fn fetch_user_orders(&self, user_id: &str) -> Result<Vec<Order>, ApiError> {
        let url = format!("{}/api/orders/user/{user_id}", self.config.admin_base);
        Ok(Self::send(self.get(url)).await?.json().await?)
    }

    pub async fn fetch_restaurant_orders(
        &self,
        restaurant_id: &str,
    ) -> Result<Vec<Order>, ApiError> {
        let url = format!(
            "{}/api/orders/restaurant/{restaurant_id}",
            self.config.admin_base
        );
        Ok(Self::send(self.get(url)).await?.json().await?)
    }

    pub async fn fetch_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        let url = format!("{}/api/transactions", self.config.admin_base);
        Ok(Self::send(self.get(url)).await?.json().await?)
    }

    pub async fn create_transaction(&self, transaction: &NewTransaction) -> Result<(), ApiError> {
        let url = format!("{}/api/transactions", self.config.admin_base);
        Self::send(self.post(url).json(transaction)).await?;
        Ok(())
    }

    // --- notification templates ---

    pub async fn fetch_templates(&self) -> Result<Vec<NotificationTemplate>, ApiError> {
        let url = format!("{}/api/notifications/templates", self.config.admin_base);
        Ok(Self::send(self.get(url)).await?.json().await?)
    }

    pub async fn create_template(&self, draft: &TemplateDraft) -> Result<(), ApiError> {
        let url = format!("{}/api/notifications/templates", self.config.admin_base);
        Self::send(self.post(url).json(draft)).await?;
        Ok(())
    }

    pub async fn update_template(&self, id: &str, draft: &TemplateDraft) -> Result<(), ApiError> {
        let url = format!("{}/api/notifications/templates/{id}", self.config.admin_base);
        Self::send(self.put(url).json(draft)).await?;
        Ok(())
    }

    pub async fn delete_template(&self, id: &str) -> Result<(), ApiError> {
        let url = format!("{}/api/notifications/templates/{id}", self.config.admin_base);
        Self::send(self.delete(url)).await?;
        Ok(())
    }

    // --- notification sending ---

    /// Broadcast a stored template. The template is addressed via query
    /// parameter; the body is empty.
    pub async fn send_template(&self, template_id: &str) -> Result<(), ApiError> {
        let url = format!("{}/api/notifications/send", self.config.notify_base);
        Self::send(self.post(url).query(&[("templateId", template_id)])).await?;
        Ok(())
    }

    /// Notify a restaurant owner that their restaurant was verified.
    pub async fn send_verification(&self, user_id: &str) -> Result<(), ApiError> {
        let url = format!(
            "{}/api/notifications/send-verification",
            self.config.notify_base
        );
        Self::send(self.post(url).json(&VerificationNotice {
            user_id: user_id.to_string(),
        }))
        .await?;
        Ok(())
    }

    /// Email a rendered transaction receipt to its user.
    pub async fn send_receipt(&self, user_id: &str, html_content: &str) -> Result<(), ApiError> {
        let url = format!(
            "{}/api/notifications/send-transaction",
            self.config.notify_base
        );
        Self::send(self.post(url).json(&ReceiptNotice {
            user_id: user_id.to_string(),
            html_content: html_content.to_string(),
        }))
        .await?;
        Ok(())
    }
}
