//! Get QQ Login URL Use Case

use std::sync::Arc;

use crate::domain::gateways::QqOAuthClient;
use crate::domain::models::oauth::DEFAULT_LOGIN_STATE;

/// Builds the QQ authorization page URL
pub struct GetQqLoginUrlUseCase {
    qq_client: Arc<dyn QqOAuthClient>,
}

impl GetQqLoginUrlUseCase {
    #[must_use]
    pub fn new(qq_client: Arc<dyn QqOAuthClient>) -> Self {
        Self { qq_client }
    }

    /// `next` is where the browser returns after login; it travels as the OAuth `state`
    #[must_use]
    pub fn execute(&self, next: Option<&str>) -> String {
        let state = next.filter(|n| !n.is_empty()).unwrap_or(DEFAULT_LOGIN_STATE);
        self.qq_client.login_url(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::qq_oauth::MockQqOAuthClient;

    #[test]
    fn should_default_state_to_root() {
        let mut client = MockQqOAuthClient::new();
        client
            .expect_login_url()
            .withf(|state| state == "/")
            .returning(|state| format!("https://graph.qq.com/oauth2.0/authorize?state={state}"));

        let use_case = GetQqLoginUrlUseCase::new(Arc::new(client));
        assert!(use_case.execute(None).ends_with("state=/"));
    }

    #[test]
    fn should_pass_next_as_state() {
        let mut client = MockQqOAuthClient::new();
        client
            .expect_login_url()
            .withf(|state| state == "/user_center_info.html")
            .returning(|state| state.to_string());

        let use_case = GetQqLoginUrlUseCase::new(Arc::new(client));
        assert_eq!(use_case.execute(Some("/user_center_info.html")), "/user_center_info.html");
    }
}
