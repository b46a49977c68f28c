use chrono::{Datelike, Utc};

pub const HOUR_SECS: i64 = 3_600;
pub const DAY_SECS: i64 = 86_400;
pub const WEEK_SECS: i64 = 604_800;

/// TTL for a season's data. Past seasons are settled and keep for a week,
/// the current season changes race to race, future or unparseable years get
/// a day. The seasons listing bypasses this and always uses [`WEEK_SECS`].
pub fn cache_timeout(year: &str) -> i64 {
    let current_year = Utc::now().year();
    match year.parse::<i32>() {
        Ok(year) if year < current_year => WEEK_SECS,
        Ok(year) if year == current_year => HOUR_SECS,
        _ => DAY_SECS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn past_year_keeps_for_a_week() {
        assert_eq!(cache_timeout("2020"), 604_800);
    }

    #[test]
    fn current_year_keeps_for_an_hour() {
        let current = Utc::now().year().to_string();
        assert_eq!(cache_timeout(&current), 3_600);
    }

    #[test]
    fn future_year_keeps_for_a_day() {
        assert_eq!(cache_timeout("2099"), 86_400);
    }

    #[test]
    fn unparseable_year_keeps_for_a_day() {
        assert_eq!(cache_timeout("current"), 86_400);
        assert_eq!(cache_timeout(""), 86_400);
    }
}
