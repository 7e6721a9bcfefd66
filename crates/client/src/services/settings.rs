use invoicr_core::auth::AuthClient;
use invoicr_core::factory::ClientFactory;
use invoicr_core::settings::{
    classify_settings_row, SettingsError, SettingsErrorPolicy, UserSettings, USER_ID_COLUMN,
    USER_SETTINGS_TABLE,
};
use invoicr_core::storage::{DataClient, Filter};

/// Fetches the current user's settings row.
#[derive(Debug, Clone)]
pub struct SettingsService<F> {
    factory: F,
    policy: SettingsErrorPolicy,
}

impl<F: ClientFactory> SettingsService<F> {
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            policy: SettingsErrorPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: SettingsErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the settings row of the authenticated user.
    ///
    /// - anonymous caller: `Ok(None)`, no query issued
    /// - no row: `Ok(None)`
    /// - one row: `Ok(Some(row))`, unchanged
    /// - other query failures: per [`SettingsErrorPolicy`]
    ///
    /// # Errors
    ///
    /// Client construction and user resolution failures are logged and always
    /// returned; query failures only under [`SettingsErrorPolicy::Propagate`].
    pub async fn get_user_settings(&self) -> Result<Option<UserSettings>, SettingsError> {
        let client = self.factory.create().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to create backend client for settings");
            SettingsError::from(e)
        })?;

        let user = client.current_user().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to resolve current user for settings");
            SettingsError::from(e)
        })?;

        let Some(user) = user else {
            tracing::debug!("No authenticated user, skipping settings query");
            return Ok(None);
        };

        let result = client
            .select_single(USER_SETTINGS_TABLE, &Filter::eq(USER_ID_COLUMN, &user.id))
            .await;

        match classify_settings_row(result) {
            Ok(settings) => {
                tracing::debug!(user_id = %user.id, found = settings.is_some(), "Settings fetched");
                Ok(settings)
            }
            Err(e) => match self.policy {
                SettingsErrorPolicy::Propagate => {
                    tracing::error!(user_id = %user.id, error = %e, "Settings query failed");
                    Err(SettingsError::Query(e))
                }
                SettingsErrorPolicy::Ignore => {
                    tracing::warn!(
                        user_id = %user.id,
                        error = %e,
                        "Settings query failed, answering with no settings"
                    );
                    Ok(None)
                }
            },
        }
    }
}
