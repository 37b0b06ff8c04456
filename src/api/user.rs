//! User Endpoints
//!
//! Login and signup. Neither request carries a token.

use reqwest::Method;

use super::client::ApiClient;
use super::error::ApiResult;
use crate::models::{AuthResponse, LoginForm, SignupForm};

impl ApiClient {
    pub async fn login(&self, form: &LoginForm) -> ApiResult<AuthResponse> {
        self.send_json(self.anonymous(Method::POST, "/user/login").json(form)).await
    }

    pub async fn signup(&self, form: &SignupForm) -> ApiResult<AuthResponse> {
        self.send_json(self.anonymous(Method::POST, "/user/signup").json(form)).await
    }
}
