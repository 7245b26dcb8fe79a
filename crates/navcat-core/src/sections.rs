//! Description topics and the titled bullet sections produced by the
//! description segmenter.

use serde::{Deserialize, Serialize};

/// One of the nine fixed topics a description sentence is classified into.
/// The variant order here is the canonical emit order for sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    PackageInstallation,
    VehicleIntegration,
    SmartConnectivity,
    DisplayHardware,
    CameraSupport,
    AudioSound,
    Navigation,
    AdvancedFeatures,
    AutoIntegration,
}

impl Topic {
    /// All topics in canonical emit order.
    pub const ALL: [Topic; 9] = [
        Topic::PackageInstallation,
        Topic::VehicleIntegration,
        Topic::SmartConnectivity,
        Topic::DisplayHardware,
        Topic::CameraSupport,
        Topic::AudioSound,
        Topic::Navigation,
        Topic::AdvancedFeatures,
        Topic::AutoIntegration,
    ];
}

/// A titled group of bullet points carved out of the free-form feed
/// description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionSection {
    pub topic: Topic,
    pub title: String,
    pub icon: String,
    pub points: Vec<String>,
}
