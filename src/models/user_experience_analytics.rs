//! Endpoint analytics reports.

use super::Entity;

graph_model! {
    /// Tenant-wide Windows 11 hardware readiness. Each percentage is the
    /// share of devices failing that check.
    pub struct UserExperienceAnalyticsWorkFromAnywhereHardwareReadinessMetric: Entity ("#microsoft.graph.userExperienceAnalyticsWorkFromAnywhereHardwareReadinessMetric") {
        os_check_failed_percentage: f64 => "osCheckFailedPercentage",
        processor64_bit_check_failed_percentage: f64 => "processor64BitCheckFailedPercentage",
        processor_core_count_check_failed_percentage: f64 => "processorCoreCountCheckFailedPercentage",
        processor_family_check_failed_percentage: f64 => "processorFamilyCheckFailedPercentage",
        processor_speed_check_failed_percentage: f64 => "processorSpeedCheckFailedPercentage",
        ram_check_failed_percentage: f64 => "ramCheckFailedPercentage",
        secure_boot_check_failed_percentage: f64 => "secureBootCheckFailedPercentage",
        storage_check_failed_percentage: f64 => "storageCheckFailedPercentage",
        total_device_count: i32 => "totalDeviceCount",
        tpm_check_failed_percentage: f64 => "tpmCheckFailedPercentage",
        upgrade_eligible_device_count: i32 => "upgradeEligibleDeviceCount",
    }
}
