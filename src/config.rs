pub mod constant {
    // Inclusive bounds checked by the validator.
    pub const MIN_DISTRICTS: i64 = 1;
    pub const MAX_DISTRICTS: i64 = 100;
    pub const MIN_SCOOTERS: i64 = 0;
    pub const MAX_SCOOTERS: i64 = 1000;
    pub const MIN_MANAGER_CAPACITY: i64 = 1;
    pub const MAX_MANAGER_CAPACITY: i64 = 999;
    pub const MIN_ENGINEER_CAPACITY: i64 = 1;
    pub const MAX_ENGINEER_CAPACITY: i64 = 1000;

    /// Filter used when RUST_LOG is unset; keeps stderr quiet on success.
    pub const DEFAULT_LOG_FILTER: &str = "warn";
}
