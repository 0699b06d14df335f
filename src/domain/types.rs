use serde::Serialize;

/// Bounds-checked input. Every field satisfies the ranges in `config::constant`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameters {
    pub scooters: Vec<u32>,
    pub manager_capacity: u32,
    pub engineer_capacity: u32,
}

/// Staff assigned to a single district.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistrictStaffing {
    pub district: usize,
    pub scooters: u32,
    pub managers: u64,
    pub engineers: u64,
}

impl DistrictStaffing {
    pub fn total(&self) -> u64 {
        self.managers + self.engineers
    }
}

/// The single record printed on success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FleetReport {
    pub fleet_engineers: u64,
}
