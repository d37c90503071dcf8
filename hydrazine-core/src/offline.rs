//! Pre-generated builds looked up without calling the recommender.

use std::path::Path;

use tracing::{debug, instrument};

use crate::build::{LoadoutBuild, MissionRequest};
use crate::error::OfflineError;
use crate::service::RecommendationService;

#[derive(Debug, Clone, Default)]
pub struct OfflineLibrary {
    builds: Vec<LoadoutBuild>,
}

impl OfflineLibrary {
    pub fn new(builds: Vec<LoadoutBuild>) -> Self {
        Self { builds }
    }

    /// Parses a JSON array of builds.
    pub fn from_json(json: &str) -> Result<Self, OfflineError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, OfflineError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let library = Self::from_json(&content)?;
        debug!(builds = library.len(), "loaded offline library");
        Ok(library)
    }

    pub fn builds(&self) -> &[LoadoutBuild] {
        &self.builds
    }

    pub fn len(&self) -> usize {
        self.builds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builds.is_empty()
    }

    /// First build matching the ship and intent, else the first build.
    ///
    /// A build matches when its ship contains `ship_name` (any ship when
    /// `None`) and its goal contains the intent or any space-separated word
    /// of it. Comparison is case-insensitive.
    pub fn find(&self, ship_name: Option<&str>, intent: &str) -> Option<&LoadoutBuild> {
        let ship_name = ship_name.map(str::to_lowercase);
        let intent = intent.to_lowercase();

        self.builds
            .iter()
            .find(|build| {
                let ship_match = ship_name
                    .as_deref()
                    .is_none_or(|ship| build.ship.to_lowercase().contains(ship));
                let goal = build.goal.to_lowercase();
                let intent_match =
                    goal.contains(&intent) || intent.split(' ').any(|word| goal.contains(word));
                ship_match && intent_match
            })
            .or_else(|| self.builds.first())
    }
}

impl RecommendationService for OfflineLibrary {
    type Error = OfflineError;

    async fn recommend(&self, request: &MissionRequest) -> Result<LoadoutBuild, OfflineError> {
        self.find(request.ship_name.as_deref(), &request.intent)
            .cloned()
            .ok_or(OfflineError::Empty)
    }
}
