use crate::error::{Result, ToolError};
use chrono::{Duration, NaiveTime};
use std::str::FromStr;

const MINUTES_PER_DAY: u64 = 24 * 60;

/// A 24-hour `HH:MM` wall-clock start time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(ClockTime)
            .ok_or_else(|| ToolError::InvalidTime(format!("{hour:02}:{minute:02}")))
    }

    /// `minutes` later, wrapping past midnight
    pub fn plus_minutes(&self, minutes: u64) -> Self {
        let wrapped = (minutes % MINUTES_PER_DAY) as i64;
        ClockTime(self.0 + Duration::minutes(wrapped))
    }

    /// 12-hour format with zero-padded hour and minute, e.g. `09:05AM`
    pub fn format_12h(&self) -> String {
        self.0.format("%I:%M%p").to_string()
    }
}

impl FromStr for ClockTime {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self> {
        NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map(ClockTime)
            .map_err(|_| ToolError::InvalidTime(s.to_string()))
    }
}

/// `count` times starting at `start`, `interval` minutes apart
pub fn generate_time_list(count: usize, start: ClockTime, interval: u32) -> Vec<String> {
    let step = interval as u64 % MINUTES_PER_DAY;
    (0..count as u64)
        .map(|i| start.plus_minutes((i % MINUTES_PER_DAY) * step).format_12h())
        .collect()
}

/// Validated inputs for the time generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSpec {
    pub start: ClockTime,
    pub interval: u32,
    pub count: usize,
}

impl TimeSpec {
    pub fn new(start: &str, interval: u32, count: usize) -> Result<Self> {
        if interval == 0 {
            return Err(ToolError::validation("Interval must be at least 1 minute."));
        }
        if count == 0 {
            return Err(ToolError::validation("Count must be at least 1."));
        }
        Ok(Self {
            start: start.parse()?,
            interval,
            count,
        })
    }

    pub fn generate(&self) -> Vec<String> {
        generate_time_list(self.count, self.start, self.interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn minutes_of_day(formatted: &str) -> u64 {
        let time = NaiveTime::parse_from_str(formatted, "%I:%M%p").unwrap();
        (time.hour() * 60 + time.minute()) as u64
    }

    #[test]
    fn test_wraps_past_midnight() {
        let start: ClockTime = "23:50".parse().unwrap();
        assert_eq!(
            generate_time_list(3, start, 10),
            vec!["11:50PM", "12:00AM", "12:10AM"]
        );
    }

    #[test]
    fn test_zero_padded_hours() {
        let start: ClockTime = "09:05".parse().unwrap();
        assert_eq!(
            generate_time_list(3, start, 180),
            vec!["09:05AM", "12:05PM", "03:05PM"]
        );
    }

    #[test]
    fn test_length_and_step() {
        for &(start, interval, count) in &[("00:00", 1, 5), ("13:37", 47, 40), ("22:15", 1440, 3)] {
            let spec = TimeSpec::new(start, interval, count).unwrap();
            let times = spec.generate();
            assert_eq!(times.len(), count);
            for pair in times.windows(2) {
                let step = (minutes_of_day(&pair[1]) + MINUTES_PER_DAY - minutes_of_day(&pair[0]))
                    % MINUTES_PER_DAY;
                assert_eq!(step, interval as u64 % MINUTES_PER_DAY);
            }
        }
    }

    #[test]
    fn test_large_offsets_do_not_overflow() {
        let start: ClockTime = "00:00".parse().unwrap();
        assert_eq!(
            start.plus_minutes(u64::MAX),
            start.plus_minutes(u64::MAX % MINUTES_PER_DAY)
        );
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!("25:00".parse::<ClockTime>(), Err(ToolError::InvalidTime(_))));
        assert!(matches!("noon".parse::<ClockTime>(), Err(ToolError::InvalidTime(_))));
        assert!(matches!(TimeSpec::new("09:00", 0, 3), Err(ToolError::Validation(_))));
        assert!(matches!(TimeSpec::new("09:00", 5, 0), Err(ToolError::Validation(_))));
        assert!(ClockTime::new(12, 60).is_err());
    }
}
