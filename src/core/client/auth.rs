//! Session lifecycle against the IPD gateway.
//!
//! `IRESSSessionStart` returns a single data row carrying the session key
//! (attached to every later call) and a user token. `IRESSSessionEnd`
//! releases the session server-side.

use crate::core::error::IressError;
use crate::core::models::Session;
use crate::core::soap::Params;

impl super::IressClient {
    pub(crate) async fn ensure_session(&self) -> Result<(), IressError> {
        // Fast path: check for an existing session with a read lock.
        if self.state.read().await.session.is_some() {
            return Ok(());
        }

        // Slow path: acquire the dedicated fetch lock so only one task logs in.
        let _guard = self.session_fetch_lock.lock().await;

        // Double-check: another task might have logged in while this one waited.
        if self.state.read().await.session.is_some() {
            return Ok(());
        }

        self.session_start().await
    }

    async fn session_start(&self) -> Result<(), IressError> {
        let creds = self
            .credentials
            .as_ref()
            .ok_or_else(|| IressError::Auth("no credentials configured".into()))?;

        let mut params = Params::new();
        params.push("UserName", &creds.username);
        params.push("CompanyName", &creds.company);
        params.push("Password", &creds.password);
        params.push("ApplicationID", &creds.application_id);

        let table = self
            .invoke_with_key("IRESSSessionStart", None, params)
            .await?;
        let row = table
            .rows
            .first()
            .ok_or_else(|| IressError::Auth("session start returned no rows".into()))?;

        let session = Session {
            session_key: row.require("IRESSSessionKey")?.to_string(),
            user_token: row.require("UserToken")?.to_string(),
        };
        self.state.write().await.session = Some(session);
        Ok(())
    }

    /// Ends the session on the gateway and forgets it locally.
    /// A no-op when no session is held.
    pub async fn session_end(&self) -> Result<(), IressError> {
        let session = self.state.read().await.session.clone();
        let Some(session) = session else {
            return Ok(());
        };

        self.invoke_with_key("IRESSSessionEnd", Some(&session.session_key), Params::new())
            .await?;
        self.state.write().await.session = None;
        Ok(())
    }

    /// Forgets the held session without a network call; the next operation
    /// logs in again.
    pub async fn invalidate_session(&self) {
        self.state.write().await.session = None;
    }
}
