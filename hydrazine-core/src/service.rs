use std::future::Future;

use crate::build::{LoadoutBuild, MissionRequest};

/// Source of recommended builds.
///
/// Implementations may be slow and may fail; the layout engines only ever see
/// the decoded [`LoadoutBuild`].
pub trait RecommendationService: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    fn recommend(
        &self,
        request: &MissionRequest,
    ) -> impl Future<Output = Result<LoadoutBuild, Self::Error>> + Send;
}

impl<S: RecommendationService> RecommendationService for &S {
    type Error = S::Error;

    fn recommend(
        &self,
        request: &MissionRequest,
    ) -> impl Future<Output = Result<LoadoutBuild, Self::Error>> + Send {
        S::recommend(*self, request)
    }
}
