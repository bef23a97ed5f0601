//! Pre-rendered plots served by the analysis backend as PNG bytes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ids::{AssignmentId, CourseId, SemesterId};

/// Plots drawn for one assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum AssignmentPlot {
    Similarity,
    Distribution,
    SimilarityInterval,
}

/// Plots drawn across a course offering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum CoursePlot {
    KmeansClusters,
    KmeansPairs,
}

impl AssignmentPlot {
    pub const ALL: [AssignmentPlot; 3] = [
        AssignmentPlot::Similarity,
        AssignmentPlot::Distribution,
        AssignmentPlot::SimilarityInterval,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AssignmentPlot::Similarity => "similarity",
            AssignmentPlot::Distribution => "distribution",
            AssignmentPlot::SimilarityInterval => "similarity-interval",
        }
    }

    /// Backend path, relative to the API root.
    pub fn backend_path(self, assignment: AssignmentId) -> String {
        format!("/api/cheating/{assignment}/{}-plot/", self.as_str())
    }
}

impl CoursePlot {
    pub const ALL: [CoursePlot; 2] = [CoursePlot::KmeansClusters, CoursePlot::KmeansPairs];

    pub fn as_str(self) -> &'static str {
        match self {
            CoursePlot::KmeansClusters => "kmeans-clusters",
            CoursePlot::KmeansPairs => "kmeans-pairs",
        }
    }

    pub fn backend_path(self, course: CourseId, semester: SemesterId) -> String {
        format!("/api/cheating/{course}/{semester}/{}-plot/", self.as_str())
    }
}

impl std::str::FromStr for AssignmentPlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown assignment plot '{s}'"))
    }
}

impl std::str::FromStr for CoursePlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown course plot '{s}'"))
    }
}
