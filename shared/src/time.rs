//! Appointment time conversions.
//!
//! The contract stores unix seconds. The browser supplies the local UTC
//! offset (east positive, in minutes), which keeps these functions pure.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};

use crate::error::{HctError, Result};

const DATETIME_LOCAL_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

fn offset(utc_offset_minutes: i32) -> Result<FixedOffset> {
    FixedOffset::east_opt(utc_offset_minutes * 60)
        .ok_or_else(|| HctError::InvalidInput(format!("Invalid UTC offset {}", utc_offset_minutes)))
}

/// Render a unix timestamp as `M/D/YYYY, h:mm:ss AM` in the given offset.
///
/// Timestamps outside chrono's range fall back to the raw number.
pub fn format_timestamp(secs: u64, utc_offset_minutes: i32) -> String {
    let Ok(tz) = offset(utc_offset_minutes) else {
        return secs.to_string();
    };
    i64::try_from(secs)
        .ok()
        .and_then(|s| DateTime::from_timestamp(s, 0))
        .map(|utc| {
            utc.with_timezone(&tz)
                .format("%-m/%-d/%Y, %-I:%M:%S %p")
                .to_string()
        })
        .unwrap_or_else(|| secs.to_string())
}

/// Convert an `<input type="datetime-local">` value to unix seconds.
pub fn parse_datetime_local(input: &str, utc_offset_minutes: i32) -> Result<u64> {
    let input = input.trim();
    if input.is_empty() {
        return Err(HctError::InvalidInput("Please choose an appointment time".to_string()));
    }

    let naive = DATETIME_LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .ok_or_else(|| HctError::InvalidInput(format!("Invalid appointment time: {}", input)))?;

    let local = offset(utc_offset_minutes)?
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| HctError::InvalidInput(format!("Ambiguous appointment time: {}", input)))?;

    u64::try_from(local.timestamp())
        .map_err(|_| HctError::InvalidInput("Appointment time must be after 1970".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp_utc() {
        // 2024-03-05 14:07:09 UTC
        assert_eq!(format_timestamp(1_709_647_629, 0), "3/5/2024, 2:07:09 PM");
    }

    #[test]
    fn test_format_timestamp_with_offset() {
        assert_eq!(format_timestamp(0, 60), "1/1/1970, 1:00:00 AM");
        assert_eq!(format_timestamp(0, -300), "12/31/1969, 7:00:00 PM");
    }

    #[test]
    fn test_format_timestamp_out_of_range() {
        assert_eq!(format_timestamp(u64::MAX, 0), u64::MAX.to_string());
    }

    #[test]
    fn test_parse_datetime_local() {
        assert_eq!(parse_datetime_local("2024-03-05T14:07", 0).unwrap(), 1_709_647_620);
        assert_eq!(parse_datetime_local("2024-03-05T14:07:09", 0).unwrap(), 1_709_647_629);
        // 15:07 at UTC+1 is 14:07 UTC
        assert_eq!(parse_datetime_local("2024-03-05T15:07", 60).unwrap(), 1_709_647_620);
    }

    #[test]
    fn test_parse_datetime_local_rejects() {
        assert!(matches!(parse_datetime_local("", 0), Err(HctError::InvalidInput(_))));
        assert!(parse_datetime_local("tomorrow", 0).is_err());
        assert!(parse_datetime_local("1960-01-01T00:00", 0).is_err());
    }
}
