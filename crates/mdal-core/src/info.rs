//! Serializable snapshot of a mesh and everything attached to it.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::extent::BBox;
use crate::location::DataLocation;
use crate::mesh::{Mesh, MeshTopology};
use crate::metadata::Metadata;
use crate::statistics::Statistics;
use crate::view::{DatasetRef, GroupRef};

/// Summary of a mesh, its groups and their datasets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshInfo {
    pub driver_name: String,
    pub uri: String,
    pub crs: String,
    pub topology: MeshTopology,
    pub extent: BBox,
    pub groups: Vec<GroupInfo>,
}

/// Summary of one dataset group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupInfo {
    pub name: String,
    pub driver_name: String,
    pub uri: String,
    pub data_location: DataLocation,
    pub is_scalar: bool,
    pub metadata: Metadata,
    pub statistics: Statistics,
    pub reference_time: String,
    pub datasets: Vec<DatasetInfo>,
}

/// Summary of one dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub time: f64,
    pub is_valid: bool,
    pub values_count: usize,
    pub volumes_count: usize,
    pub statistics: Statistics,
}

impl MeshInfo {
    /// Renders the summary as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a summary previously produced by [`MeshInfo::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<GroupRef<'_>> for GroupInfo {
    fn from(group: GroupRef<'_>) -> Self {
        Self {
            name: group.name().to_string(),
            driver_name: group.driver_name().to_string(),
            uri: group.uri().to_string(),
            data_location: group.data_location(),
            is_scalar: group.is_scalar(),
            metadata: group.metadata().clone(),
            statistics: group.statistics(),
            reference_time: group.reference_time().to_string(),
            datasets: group.datasets().map(DatasetInfo::from).collect(),
        }
    }
}

impl From<DatasetRef<'_>> for DatasetInfo {
    fn from(dataset: DatasetRef<'_>) -> Self {
        Self {
            time: dataset.time(),
            is_valid: dataset.is_valid(),
            values_count: dataset.values_count(),
            volumes_count: dataset.volumes_count(),
            statistics: dataset.statistics(),
        }
    }
}

impl Mesh {
    /// Takes a snapshot of this mesh for reporting.
    pub fn info(&self) -> MeshInfo {
        MeshInfo {
            driver_name: self.driver_name().to_string(),
            uri: self.uri().to_string(),
            crs: self.crs().to_string(),
            topology: self.topology(),
            extent: self.extent(),
            groups: self.dataset_groups().map(GroupInfo::from).collect(),
        }
    }
}
