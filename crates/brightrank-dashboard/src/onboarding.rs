//! First-run setup and profile edits.

use brightrank_core::{BrandProfile, DateRange, ProfileError};
use brightrank_provider::ResponseProvider;
use brightrank_store::{AppRepository, KeyValueStore};

use crate::analysis::{run_dashboard_analysis, DashboardView};
use crate::error::DashboardError;

/// Save the brand profile and, when it already lists keywords, run the first
/// analysis over the last seven days.
///
/// # Errors
///
/// Returns [`DashboardError::Profile`] for an invalid profile and
/// [`DashboardError::Store`] if it cannot be saved. Errors from the initial
/// analysis are returned as-is; the profile stays saved.
pub async fn complete_onboarding<S: KeyValueStore>(
    provider: &dyn ResponseProvider,
    repo: &AppRepository<S>,
    profile: &BrandProfile,
    history_limit: usize,
) -> Result<Option<DashboardView>, DashboardError> {
    profile.validate()?;
    repo.save_profile(profile)?;
    tracing::info!(brand = %profile.brand_name, "brand profile saved");

    if profile.keyword_list().is_empty() {
        return Ok(None);
    }
    let view =
        run_dashboard_analysis(provider, repo, profile, DateRange::Last7Days, history_limit)
            .await?;
    Ok(Some(view))
}

/// The saved profile.
///
/// # Errors
///
/// Returns [`DashboardError::NotOnboarded`] when nothing has been saved yet.
pub fn load_profile<S: KeyValueStore>(
    repo: &AppRepository<S>,
) -> Result<BrandProfile, DashboardError> {
    repo.load_profile()?.ok_or(DashboardError::NotOnboarded)
}

/// Load the profile, apply `edit`, validate and save it.
///
/// Returns the edit's own result alongside the saved profile. Nothing is
/// written when `edit` fails.
///
/// # Errors
///
/// Returns [`DashboardError::NotOnboarded`], [`DashboardError::Profile`] when
/// the edit or validation fails, or [`DashboardError::Store`].
pub fn edit_profile<S, T>(
    repo: &AppRepository<S>,
    edit: impl FnOnce(&mut BrandProfile) -> Result<T, ProfileError>,
) -> Result<(T, BrandProfile), DashboardError>
where
    S: KeyValueStore,
{
    let mut profile = load_profile(repo)?;
    let outcome = edit(&mut profile)?;
    profile.validate()?;
    repo.save_profile(&profile)?;
    Ok((outcome, profile))
}
