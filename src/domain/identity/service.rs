use super::{Account, Identity, Plan};
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::IdentityRepository;
use std::sync::Arc;

/// Login/logout and plan changes for the page's single active identity.
pub struct IdentityService {
    identity_repo: Arc<IdentityRepository>,
}

impl IdentityService {
    pub fn new(identity_repo: Arc<IdentityRepository>) -> Self {
        Self { identity_repo }
    }

    pub async fn current(&self) -> Identity {
        Identity::from(self.identity_repo.find_current().await)
    }

    /// Replace whatever account is active with a fresh free-plan account.
    pub async fn login(&self) -> AppResult<Account> {
        let account = Account::new_login();
        self.identity_repo.save(&account).await?;
        tracing::info!(account_id = %account.id, "Account logged in");
        Ok(account)
    }

    pub async fn logout(&self) -> AppResult<()> {
        self.identity_repo.clear().await?;
        tracing::info!("Account logged out");
        Ok(())
    }

    /// Change the active account's plan. Anonymous visitors must log in first.
    pub async fn upgrade_plan(&self, plan: Plan) -> AppResult<Account> {
        if plan == Plan::Anon {
            return Err(AppError::BadRequest(
                "Accounts cannot move to the anonymous plan".to_string(),
            ));
        }

        let mut account = self
            .identity_repo
            .find_current()
            .await
            .ok_or_else(|| AppError::Unauthorized("Log in before choosing a plan".to_string()))?;

        let previous = account.plan;
        account.plan = plan;
        self.identity_repo.save(&account).await?;

        tracing::info!(
            account_id = %account.id,
            from = %previous,
            to = %plan,
            "Plan changed"
        );
        Ok(account)
    }
}
