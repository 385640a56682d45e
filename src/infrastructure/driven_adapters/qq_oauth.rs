//! QQ OAuth HTTP Client
//!
//! Talks to the QQ Connect authorization-code endpoints. The token endpoint
//! answers with a url-encoded body and `/oauth2.0/me` with a JSONP wrapper;
//! both report failures as a JSONP object carrying `error` and
//! `error_description`.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::domain::gateways::QqOAuthClient;
use crate::domain::models::oauth::QqAccessToken;
use crate::shared::errors::ServiceError;

use super::config::QqConfig;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Body of a JSONP response from QQ
#[derive(Debug, Deserialize)]
struct JsonpBody {
    openid: Option<String>,
    error: Option<i64>,
    error_description: Option<String>,
}

/// Extract the JSON object from `callback( {...} );`
fn parse_jsonp(body: &str) -> Result<JsonpBody, ServiceError> {
    let start = body.find('{');
    let end = body.rfind('}');
    match (start, end) {
        (Some(start), Some(end)) if start < end => serde_json::from_str(&body[start..=end])
            .map_err(|e| ServiceError::Provider(format!("Malformed QQ response: {e}"))),
        _ => Err(ServiceError::Provider(format!("Unexpected QQ response: {body}"))),
    }
}

fn provider_error(body: &JsonpBody) -> ServiceError {
    ServiceError::Provider(format!(
        "QQ error {}: {}",
        body.error.unwrap_or_default(),
        body.error_description.as_deref().unwrap_or("unknown")
    ))
}

pub struct HttpQqOAuthClient {
    http: reqwest::Client,
    api_base: Url,
    authorize_url: Url,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
}

impl HttpQqOAuthClient {
    /// # Errors
    ///
    /// Returns `ServiceError::Provider` for an invalid `api_base` and
    /// `ServiceError::Http` if the HTTP client cannot be built.
    pub fn new(config: &QqConfig) -> Result<Self, ServiceError> {
        let api_base =
            Url::parse(&config.api_base).map_err(|e| ServiceError::Provider(format!("Invalid QQ api_base: {e}")))?;
        let authorize_url = api_base
            .join("/oauth2.0/authorize")
            .map_err(|e| ServiceError::Provider(e.to_string()))?;

        // No redirects: every QQ answer is read directly
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            api_base,
            authorize_url,
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            redirect_uri: config.redirect_uri.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ServiceError> {
        self.api_base
            .join(path)
            .map_err(|e| ServiceError::Provider(e.to_string()))
    }

    async fn get_text(&self, url: Url, query: &[(&str, &str)]) -> Result<String, ServiceError> {
        let response = self.http.get(url).query(query).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

#[async_trait]
impl QqOAuthClient for HttpQqOAuthClient {
    fn login_url(&self, state: &str) -> String {
        let mut url = self.authorize_url.clone();
        url.query_pairs_mut()
            .append_pair("response_type", "code")
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &self.redirect_uri)
            .append_pair("state", state);
        url.into()
    }

    async fn exchange_code(&self, code: &str) -> Result<QqAccessToken, ServiceError> {
        let body = self
            .get_text(
                self.endpoint("/oauth2.0/token")?,
                &[
                    ("grant_type", "authorization_code"),
                    ("client_id", self.client_id.as_str()),
                    ("client_secret", self.client_secret.as_str()),
                    ("code", code),
                    ("redirect_uri", self.redirect_uri.as_str()),
                ],
            )
            .await?;

        let token = url::form_urlencoded::parse(body.trim().as_bytes())
            .find(|(key, _)| key == "access_token")
            .map(|(_, value)| value.into_owned());

        match token {
            Some(token) if !token.is_empty() => Ok(QqAccessToken(token)),
            _ => {
                let error = parse_jsonp(&body)?;
                tracing::warn!(error = ?error.error, "QQ code exchange failed");
                Err(provider_error(&error))
            }
        }
    }

    async fn fetch_openid(&self, token: &QqAccessToken) -> Result<String, ServiceError> {
        let body = self
            .get_text(self.endpoint("/oauth2.0/me")?, &[("access_token", token.0.as_str())])
            .await?;

        let parsed = parse_jsonp(&body)?;
        match parsed.openid {
            Some(openid) if parsed.error.is_none() => Ok(openid),
            _ => {
                tracing::warn!(error = ?parsed.error, "QQ openid lookup failed");
                Err(provider_error(&parsed))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(api_base: &str) -> QqConfig {
        QqConfig {
            client_id: "101474184".into(),
            client_secret: "secret".into(),
            redirect_uri: "http://www.meiduo.site:8080/oauth_callback.html".into(),
            api_base: api_base.into(),
        }
    }

    #[test]
    fn test_login_url_carries_state() {
        let client = HttpQqOAuthClient::new(&config("https://graph.qq.com")).unwrap();
        let url = Url::parse(&client.login_url("/orders")).unwrap();

        assert_eq!(url.path(), "/oauth2.0/authorize");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("response_type".into(), "code".into())));
        assert!(pairs.contains(&("client_id".into(), "101474184".into())));
        assert!(pairs.contains(&("state".into(), "/orders".into())));
    }

    #[test]
    fn test_parse_jsonp() {
        let body = parse_jsonp("callback( {\"client_id\":\"101474184\",\"openid\":\"ABC\"} );\n").unwrap();
        assert_eq!(body.openid.as_deref(), Some("ABC"));
        assert!(parse_jsonp("not jsonp").is_err());
    }

    #[tokio::test]
    async fn test_exchange_code_and_fetch_openid() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/oauth2.0/token"))
            .and(query_param("code", "CODE-1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string("access_token=TOKEN-1&expires_in=7776000&refresh_token=R"),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/oauth2.0/me"))
            .and(query_param("access_token", "TOKEN-1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("callback( {\"client_id\":\"101474184\",\"openid\":\"OPENID-1\"} );"),
            )
            .mount(&server)
            .await;

        let client = HttpQqOAuthClient::new(&config(&server.uri())).unwrap();
        let token = client.exchange_code("CODE-1").await.unwrap();
        assert_eq!(token, QqAccessToken("TOKEN-1".into()));

        let openid = client.fetch_openid(&token).await.unwrap();
        assert_eq!(openid, "OPENID-1");
    }

    #[tokio::test]
    async fn test_exchange_code_reports_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/oauth2.0/token"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                "callback( {\"error\":100020,\"error_description\":\"code is reused error\"} );",
            ))
            .mount(&server)
            .await;

        let client = HttpQqOAuthClient::new(&config(&server.uri())).unwrap();
        let result = client.exchange_code("used").await;

        assert!(matches!(result, Err(ServiceError::Provider(msg)) if msg.contains("100020")));
    }

    #[tokio::test]
    async fn test_http_failure_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/oauth2.0/me"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = HttpQqOAuthClient::new(&config(&server.uri())).unwrap();
        let result = client.fetch_openid(&QqAccessToken("T".into())).await;

        assert!(matches!(result, Err(ServiceError::Http(_))));
    }
}
