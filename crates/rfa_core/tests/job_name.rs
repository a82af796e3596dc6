use chrono::{TimeZone, Utc};
use rfa_core::{generate_default_job_name, Field, JobConfiguration};

#[test]
fn default_job_name_uses_iso_timestamp_with_dashes() {
    let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();

    assert_eq!(
        generate_default_job_name(now),
        "RFantibody_2024-01-02T03-04-05"
    );
}

#[test]
fn default_job_name_drops_fractional_seconds() {
    let now = Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 58).unwrap()
        + chrono::Duration::milliseconds(987);

    assert_eq!(
        generate_default_job_name(now),
        "RFantibody_2025-12-31T23-59-58"
    );
}

#[test]
fn entered_job_name_is_trimmed() {
    let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    let mut config = JobConfiguration::default();
    config.set_field(Field::JobName, "  anti-HER2 run  ");

    assert_eq!(config.effective_job_name(now), "anti-HER2 run");
}

#[test]
fn blank_job_name_falls_back_to_generated_default() {
    let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    let mut config = JobConfiguration::default();
    config.set_field(Field::JobName, "   ");

    assert_eq!(
        config.effective_job_name(now),
        "RFantibody_2024-01-02T03-04-05"
    );
}
