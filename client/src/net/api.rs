//! REST calls against the content API.
//!
//! Browser (csr): real HTTP via `gloo-net`. Other builds: stubs returning a
//! transport error, since these calls are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. A `401` from any endpoint removes
//! the stored credential before the error is returned, so the next guard
//! check sees the session as gone.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use guardian::error::ApiError;
use guardian::{Role, User};

use super::types::{NewPost, Post};

pub const POSTS_PATH: &str = "/posts";
pub const USERS_PATH: &str = "/auth/users";
pub const PROFILE_PATH: &str = "/auth/profile";

pub fn role_update_path(user_id: &str) -> String {
    format!("/auth/update-role/{}", urlencoding::encode(user_id))
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> ApiError {
    ApiError::Transport("not available outside the browser".to_owned())
}

#[cfg(feature = "csr")]
pub use browser::BrowserApi;

#[cfg(feature = "csr")]
mod browser {
    use std::time::Duration;

    use futures::future::{Either, select};
    use gloo_net::http::{Request, RequestBuilder};
    use guardian::AuthConfig;
    use guardian::api::{
        AuthApi, CURRENT_USER_PATH, LOGIN_PATH, PING_ENDPOINTS, PingOutcome, REGISTER_PATH, Verification, bearer,
        first_found, join_url, ping_status_is_awake, verify_with_fallback, with_base_fallback, with_deadline,
    };
    use guardian::error::{ApiError, extract_message};
    use guardian::token::TokenStore;
    use guardian::types::{
        LoginRequest, RegisterRequest, SessionGrant, User, decode_principal, decode_session_grant,
    };
    use leptos::logging::{log, warn};
    use serde::de::DeserializeOwned;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub(super) enum Verb {
        Get,
        Post,
        Put,
    }

    impl Verb {
        fn builder(self, url: &str) -> RequestBuilder {
            match self {
                Self::Get => Request::get(url),
                Self::Post => Request::post(url),
                Self::Put => Request::put(url),
            }
        }
    }

    fn transport(e: &gloo_net::Error) -> ApiError {
        ApiError::Transport(e.to_string())
    }

    pub struct BrowserApi {
        base_url: String,
        fallback_url: Option<String>,
        ping_timeout: Duration,
        request_timeout: Duration,
        tokens: TokenStore,
    }

    impl BrowserApi {
        pub fn new(config: &AuthConfig, tokens: TokenStore) -> Self {
            Self {
                base_url: config.api_url.clone(),
                fallback_url: config.fallback_api_url.clone(),
                ping_timeout: config.ping_timeout,
                request_timeout: config.request_timeout,
                tokens,
            }
        }

        async fn send(
            &self,
            base: &str,
            verb: Verb,
            path: String,
            body: Option<&serde_json::Value>,
        ) -> Result<String, ApiError> {
            let url = join_url(base, &path);
            let mut builder = verb.builder(&url);
            if let Some(token) = self.tokens.token() {
                builder = builder.header("Authorization", &bearer(&token));
            }
            let request = match body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| transport(&e))?;

            let exchange = async {
                let response = request.send().await.map_err(|e| transport(&e))?;
                let status = response.status();
                let text = response.text().await.map_err(|e| transport(&e))?;
                Ok::<_, ApiError>((status, text))
            };
            let deadline = gloo_timers::future::sleep(self.request_timeout);
            let (status, text) = with_deadline(self.request_timeout, exchange, deadline).await?;

            if status == 401 {
                warn!("[api] credential rejected by {url}, removing stored token");
                self.tokens.remove();
            }
            if !(200..300).contains(&status) {
                return Err(ApiError::from_status(status, extract_message(&text)));
            }
            Ok(text)
        }

        pub(super) async fn call(
            &self,
            verb: Verb,
            path: &str,
            body: Option<&serde_json::Value>,
        ) -> Result<String, ApiError> {
            with_base_fallback(&self.base_url, self.fallback_url.as_deref(), |base| async move {
                first_found(path, |candidate| self.send(&base, verb, candidate, body)).await
            })
            .await
        }

        pub(super) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
            let text = self.call(Verb::Get, path, None).await?;
            serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
        }

        async fn probe(&self) -> PingOutcome {
            for endpoint in PING_ENDPOINTS {
                let url = join_url(&self.base_url, endpoint);
                match Request::get(&url).send().await {
                    Ok(response) if ping_status_is_awake(response.status()) => {
                        return PingOutcome::Awake { endpoint: endpoint.to_owned() };
                    }
                    Ok(_) => {}
                    Err(e) => log!("[api] ping {url} failed: {e}"),
                }
            }
            PingOutcome::Unreachable { reason: "all ping endpoints failed".to_owned() }
        }
    }

    impl AuthApi for BrowserApi {
        async fn ping(&self) -> PingOutcome {
            let probe = Box::pin(self.probe());
            let deadline = Box::pin(gloo_timers::future::sleep(self.ping_timeout));
            match select(probe, deadline).await {
                Either::Left((outcome, _)) => outcome,
                Either::Right(_) => PingOutcome::Unreachable { reason: "ping timed out".to_owned() },
            }
        }

        async fn login(&self, credentials: &LoginRequest) -> Result<SessionGrant, ApiError> {
            let body = serde_json::to_value(credentials).map_err(|e| ApiError::Decode(e.to_string()))?;
            let text = self.call(Verb::Post, LOGIN_PATH, Some(&body)).await?;
            decode_session_grant(&text)
        }

        async fn register(&self, registration: &RegisterRequest) -> Result<(), ApiError> {
            let body = serde_json::to_value(registration).map_err(|e| ApiError::Decode(e.to_string()))?;
            self.call(Verb::Post, REGISTER_PATH, Some(&body)).await?;
            Ok(())
        }

        async fn verify(&self) -> Result<Verification, ApiError> {
            if self.tokens.token().is_none() {
                return Ok(Verification::Invalid);
            }
            verify_with_fallback(|path| async move {
                self.call(Verb::Get, path, None)
                    .await
                    .map(|text| decode_principal(&text))
            })
            .await
        }

        async fn current_user(&self) -> Result<User, ApiError> {
            let text = self.call(Verb::Get, CURRENT_USER_PATH, None).await?;
            decode_principal(&text).ok_or_else(|| ApiError::Decode("response is not a user".to_owned()))
        }
    }
}

#[cfg(feature = "csr")]
fn live_verifier() -> Result<std::rc::Rc<crate::session::Verifier>, ApiError> {
    crate::session::verifier().ok_or_else(|| ApiError::Transport("session not started".to_owned()))
}

/// Fetch every post from `/posts`.
///
/// # Errors
///
/// Returns the transport, status, or decode failure of the request.
pub async fn fetch_posts() -> Result<Vec<Post>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let verifier = live_verifier()?;
        let list: super::types::PostList = verifier.api().get_json(POSTS_PATH).await?;
        Ok(list.into_posts())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(unavailable())
    }
}

/// Create a post as the signed-in author.
///
/// # Errors
///
/// Returns the transport or status failure of the request.
pub async fn create_post(post: &NewPost) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let verifier = live_verifier()?;
        let body = serde_json::to_value(post).map_err(|e| ApiError::Decode(e.to_string()))?;
        verifier.api().call(browser::Verb::Post, POSTS_PATH, Some(&body)).await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = post;
        Err(unavailable())
    }
}

/// Fetch the signed-in user's own profile.
///
/// # Errors
///
/// Returns the transport or status failure of the request, or
/// `ApiError::Decode` when the body is not a user.
pub async fn fetch_profile() -> Result<User, ApiError> {
    #[cfg(feature = "csr")]
    {
        let verifier = live_verifier()?;
        let text = verifier.api().call(browser::Verb::Get, PROFILE_PATH, None).await?;
        guardian::types::decode_principal(&text)
            .ok_or_else(|| ApiError::Decode("response is not a user".to_owned()))
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(unavailable())
    }
}

/// List every account (admin only).
///
/// # Errors
///
/// Returns the transport, status, or decode failure of the request. A `403`
/// surfaces as `ApiError::Forbidden`.
pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let verifier = live_verifier()?;
        let list: super::types::UserList = verifier.api().get_json(USERS_PATH).await?;
        Ok(list.into_users())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(unavailable())
    }
}

/// Change another account's role (admin only).
///
/// # Errors
///
/// Returns the transport or status failure of the request.
pub async fn update_role(user_id: &str, role: Role) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let verifier = live_verifier()?;
        let body = serde_json::json!({ "role": role });
        verifier
            .api()
            .call(browser::Verb::Put, &role_update_path(user_id), Some(&body))
            .await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (user_id, role);
        Err(unavailable())
    }
}
