//! Industry-insight resolution.
//!
//! The find-or-create here is the concurrency-sensitive piece of onboarding:
//! generation runs outside any transaction, the insert relies on the unique
//! industry key, and a lost race falls back to the winner's row.

use tracing::{debug, info};

use crate::errors::AppError;
use crate::insights::generator::InsightGenerator;
use crate::models::insight::IndustryInsight;
use crate::store::{Store, StoreError};

/// Returns the shared insight row for `industry`, creating it if absent.
///
/// No lock is taken and generation happens before any write, so two callers
/// can both observe the row absent and both generate. The unique industry key
/// arbitrates: the loser discards its generated content and re-reads the
/// winner's row.
pub async fn resolve_insight(
    store: &dyn Store,
    generator: &dyn InsightGenerator,
    industry: &str,
) -> Result<IndustryInsight, AppError> {
    if let Some(existing) = store.find_insight(industry).await? {
        return Ok(existing);
    }

    info!("No insight stored for '{industry}' yet, generating");
    let generated = generator.generate(industry).await?;

    match store.insert_insight(&generated.into_row(industry)).await {
        Ok(row) => {
            info!("Created industry insight for '{industry}'");
            Ok(row)
        }
        Err(StoreError::UniqueViolation(_)) => {
            // A concurrent caller created the row between our lookup and
            // insert. Its content wins; ours is discarded.
            debug!("Lost insert race for '{industry}', reading the winner's row");
            store.find_insight(industry).await?.ok_or_else(|| {
                AppError::Internal(anyhow::anyhow!(
                    "insight row for '{industry}' missing after duplicate-key insert"
                ))
            })
        }
        Err(e) => Err(e.into()),
    }
}

/// Returns the calling user's industry insight, creating it on first access
/// the same way onboarding does.
pub async fn get_user_insight(
    store: &dyn Store,
    generator: &dyn InsightGenerator,
    external_id: &str,
) -> Result<IndustryInsight, AppError> {
    let user = store
        .find_user(external_id)
        .await?
        .ok_or(AppError::UserNotFound)?;

    let industry = user
        .industry
        .filter(|industry| !industry.is_empty())
        .ok_or_else(|| AppError::Validation("User has not completed onboarding".to_string()))?;

    resolve_insight(store, generator, &industry).await
}
