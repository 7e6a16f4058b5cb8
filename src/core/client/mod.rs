//! Public client surface + builder.
//! Internals are split into `auth` (session start/end) and `constants`
//! (default endpoint, namespace, UA).

mod auth;
pub(crate) mod constants;

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tokio::sync::{Mutex, RwLock};
use url::Url;

use crate::core::error::IressError;
use crate::core::models::Session;
use crate::core::net;
use crate::core::soap::{self, Params, SoapTable};
use constants::{
    DEFAULT_APPLICATION_ID, DEFAULT_ENDPOINT, DEFAULT_INTRADAY_TZ, DEFAULT_SERVICE, USER_AGENT,
};

#[derive(Debug, Clone)]
pub(crate) struct Credentials {
    pub(crate) company: String,
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) application_id: String,
}

#[derive(Debug, Default)]
struct ClientState {
    session: Option<Session>,
}

/// Async client for the Iress Pro Desktop web services.
///
/// Cloning is cheap; clones share the HTTP connection pool and the session
/// state, so one login serves every clone.
#[derive(Debug, Clone)]
pub struct IressClient {
    http: Client,
    endpoint: Url,
    service: String,
    credentials: Option<Credentials>,
    intraday_tz: chrono_tz::Tz,

    state: Arc<RwLock<ClientState>>,
    session_fetch_lock: Arc<Mutex<()>>,
}

impl IressClient {
    /// Create a new builder.
    pub fn builder() -> IressClientBuilder {
        IressClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn intraday_tz(&self) -> chrono_tz::Tz {
        self.intraday_tz
    }

    /// The configured service name (only `IRESS` exists for the desktop
    /// gateway).
    pub fn service(&self) -> &str {
        &self.service
    }

    /// The currently held session, if a login has happened.
    pub async fn session(&self) -> Option<Session> {
        self.state.read().await.session.clone()
    }

    /// Invokes a named operation with the session header attached,
    /// establishing the session first when necessary.
    pub(crate) async fn invoke(
        &self,
        operation: &'static str,
        params: Params,
    ) -> Result<SoapTable, IressError> {
        self.ensure_session().await?;
        let key = self
            .session()
            .await
            .map(|s| s.session_key)
            .ok_or_else(|| IressError::Auth("no session key after login".into()))?;
        self.invoke_with_key(operation, Some(&key), params).await
    }

    /// Invokes a named operation as-is. Used by the session lifecycle calls
    /// which must not recurse into `ensure_session`.
    pub(crate) async fn invoke_with_key(
        &self,
        operation: &'static str,
        session_key: Option<&str>,
        params: Params,
    ) -> Result<SoapTable, IressError> {
        let envelope = soap::build_envelope(operation, session_key, &params)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(operation, request = %envelope, "sending SOAP request");
        let body = net::post_envelope(&self.http, &self.endpoint, operation, envelope).await?;
        soap::decode_response(&body)
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct IressClientBuilder {
    endpoint: Option<Url>,
    service: Option<String>,
    user_agent: Option<String>,

    company: Option<String>,
    username: Option<String>,
    password: Option<String>,
    application_id: Option<String>,

    intraday_tz: Option<chrono_tz::Tz>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,

    #[cfg(feature = "test-mode")]
    preauth: Option<Session>,
}

impl IressClientBuilder {
    /// Override the SOAP endpoint (e.g. `http://127.0.0.1:51234/soap.aspx`).
    pub fn endpoint(mut self, url: Url) -> Self {
        self.endpoint = Some(url);
        self
    }

    /// Override the service name. Default: `IRESS`.
    pub fn service(mut self, svc: impl Into<String>) -> Self {
        self.service = Some(svc.into());
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Account credentials used by `IRESSSessionStart`.
    pub fn credentials(
        mut self,
        company: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.company = Some(company.into());
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Application identifier reported on login. Default: `app`.
    pub fn application_id(mut self, id: impl Into<String>) -> Self {
        self.application_id = Some(id.into());
        self
    }

    /// Timezone intraday timestamps are localized to.
    /// Default: `America/New_York`.
    pub fn intraday_tz(mut self, tz: chrono_tz::Tz) -> Self {
        self.intraday_tz = Some(tz);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    #[cfg(feature = "test-mode")]
    /// Provide a pre-established session (bypass the login call) in tests.
    pub fn preauth(
        mut self,
        session_key: impl Into<String>,
        user_token: impl Into<String>,
    ) -> Self {
        self.preauth = Some(Session {
            session_key: session_key.into(),
            user_token: user_token.into(),
        });
        self
    }

    pub fn build(self) -> Result<IressClient, IressError> {
        let service = self.service.unwrap_or_else(|| DEFAULT_SERVICE.to_string());
        let endpoint = match self.endpoint {
            Some(url) => url,
            None => Url::parse_with_params(DEFAULT_ENDPOINT, [("svc", service.as_str())])?,
        };

        let credentials = match (self.company, self.username, self.password) {
            (Some(company), Some(username), Some(password)) => Some(Credentials {
                company,
                username,
                password,
                application_id: self
                    .application_id
                    .unwrap_or_else(|| DEFAULT_APPLICATION_ID.to_string()),
            }),
            (None, None, None) => None,
            _ => {
                return Err(IressError::Auth(
                    "incomplete credentials: company, username and password are all required"
                        .into(),
                ));
            }
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));
        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }
        let http = httpb.build()?;

        let state = ClientState {
            session: {
                #[cfg(feature = "test-mode")]
                {
                    self.preauth
                }
                #[cfg(not(feature = "test-mode"))]
                {
                    None
                }
            },
        };

        Ok(IressClient {
            http,
            endpoint,
            service,
            credentials,
            intraday_tz: self.intraday_tz.unwrap_or(DEFAULT_INTRADAY_TZ),
            state: Arc::new(RwLock::new(state)),
            session_fetch_lock: Arc::new(Mutex::new(())),
        })
    }
}
