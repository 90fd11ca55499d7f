// src/oauth.rs
//! Public integration OAuth: the authorize redirect and the code exchange.

use crate::api::parser::interpret;
use crate::api::RawResponse;
use crate::constants::{OAUTH_AUTHORIZE_URL, OAUTH_TOKEN_URL};
use crate::error::{Result, TransportError};
use crate::types::{ApiKey, ValidationError};
use oauth2::basic::BasicClient;
use oauth2::{AuthUrl, ClientId, ClientSecret, CsrfToken, RedirectUrl, TokenUrl};
use serde::{Deserialize, Serialize};
use url::Url;

/// A public integration's OAuth registration.
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    client: BasicClient,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    token_url: Url,
}

/// What the token endpoint returns for a granted authorization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot_id: Option<String>,
}

impl AccessToken {
    /// The token as a credential for [`ClientConfig`](crate::ClientConfig).
    pub fn api_key(&self) -> Result<ApiKey> {
        Ok(ApiKey::from_access_token(self.access_token.clone())?)
    }
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    grant_type: &'static str,
    code: &'a str,
    redirect_uri: &'a str,
}

impl OAuthConfig {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Result<Self> {
        Self::build(
            client_id.into(),
            client_secret.into(),
            redirect_uri.into(),
            parse_endpoint(OAUTH_AUTHORIZE_URL)?,
            parse_endpoint(OAUTH_TOKEN_URL)?,
        )
    }

    /// Points the flow at other endpoints, e.g. a local test server.
    pub fn with_endpoints(self, authorize_url: Url, token_url: Url) -> Result<Self> {
        Self::build(
            self.client_id,
            self.client_secret,
            self.redirect_uri,
            authorize_url,
            token_url,
        )
    }

    fn build(
        client_id: String,
        client_secret: String,
        redirect_uri: String,
        authorize_url: Url,
        token_url: Url,
    ) -> Result<Self> {
        let redirect = RedirectUrl::new(redirect_uri.clone()).map_err(|e| {
            ValidationError::InvalidUrl {
                url: redirect_uri.clone(),
                reason: e.to_string(),
            }
        })?;
        let client = BasicClient::new(
            ClientId::new(client_id.clone()),
            Some(ClientSecret::new(client_secret.clone())),
            AuthUrl::from_url(authorize_url),
            Some(TokenUrl::from_url(token_url.clone())),
        )
        .set_redirect_uri(redirect);

        Ok(Self {
            client,
            client_id,
            client_secret,
            redirect_uri,
            token_url,
        })
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }

    pub fn token_url(&self) -> &Url {
        &self.token_url
    }

    /// Where to send the user to grant access. `state` comes back unchanged
    /// on the redirect.
    pub fn authorization_url(&self, state: &str) -> Url {
        let state = CsrfToken::new(state.to_string());
        let (url, _) = self.client.authorize_url(move || state).url();
        url
    }

    /// Trades the authorization code from the redirect for an access token.
    ///
    /// Notion takes the grant as a JSON body and answers without a
    /// `token_type`, so this request is posted directly rather than through
    /// the generic token exchange.
    pub async fn exchange_code(&self, http: &reqwest::Client, code: &str) -> Result<AccessToken> {
        let outcome = self.post_token_request(http, code).await;
        interpret(outcome, "access_token", "AccessToken")
    }

    async fn post_token_request(
        &self,
        http: &reqwest::Client,
        code: &str,
    ) -> std::result::Result<RawResponse, TransportError> {
        log::debug!("POST {}", self.token_url);
        let response = http
            .post(self.token_url.clone())
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .json(&TokenRequest {
                grant_type: "authorization_code",
                code,
                redirect_uri: &self.redirect_uri,
            })
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}

fn parse_endpoint(raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|e| {
        ValidationError::InvalidUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}
