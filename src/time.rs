use chrono::prelude::*;
use chrono::TimeDelta;

/// The header export timestamp as a point in time.
pub fn export_time(timestamp: u32) -> DateTime<Utc> {
    //u32 seconds always fit the chrono range
    DateTime::from_timestamp(i64::from(timestamp), 0).unwrap()
}

/// When the exporter booted, worked back from the export timestamp and the
/// uptime milliseconds it reported.
pub fn boot_time(timestamp: u32, sys_uptime: u32) -> DateTime<Utc> {
    export_time(timestamp) - TimeDelta::milliseconds(i64::from(sys_uptime))
}
