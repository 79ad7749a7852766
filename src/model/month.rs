use chrono::{Datelike, Days, Locale, Months, NaiveDate, Weekday};
use chronoutil::DateRule;
use color_eyre::eyre::{eyre, Result};
use serde::Serialize;
use std::fmt;

/// The days shown by the calendar for one month
///
/// The grid always consists of whole weeks, so it starts and ends with days of the neighbouring
/// months when the month does not line up with the week start.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    first_day: NaiveDate,
    week_start: Weekday,
    weeks: Vec<Vec<NaiveDate>>,
}

impl MonthGrid {
    /// Builds the grid for the month containing `date`
    pub fn new(date: NaiveDate, week_start: Weekday) -> Result<MonthGrid> {
        let first_day = date
            .with_day(1)
            .ok_or(eyre!("could not get the first day of the month"))?;
        let last_day = last_day_of_month(first_day)?;

        let view_start = first_day - Days::new(days_after(first_day.weekday(), week_start));
        let view_end = last_day
            + Days::new(6 - days_after(last_day.weekday(), week_start));
        let day_count = (view_end - view_start).num_days() + 1;

        let days: Vec<NaiveDate> = DateRule::daily(view_start)
            .with_count(day_count as usize)
            .collect();
        let weeks = days.chunks(7).map(|week| week.to_vec()).collect();

        Ok(MonthGrid {
            first_day,
            week_start,
            weeks,
        })
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn weeks(&self) -> &[Vec<NaiveDate>] {
        &self.weeks
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// The weekdays in the order the grid columns are shown
    pub fn weekdays(&self) -> Vec<Weekday> {
        (0..7)
            .scan(self.week_start, |day, _| {
                let current = *day;
                *day = day.succ();
                Some(current)
            })
            .collect()
    }

    /// Generates the template context for the grid, with month and weekday names in `locale`
    pub fn context(
        &self,
        today: NaiveDate,
        selected: Option<NaiveDate>,
        title_format: &str,
        locale: Locale,
    ) -> MonthContext {
        // the first week holds one day of every weekday in column order
        let weekdays = self
            .weeks
            .first()
            .map(|week| {
                week.iter()
                    .map(|date| date.format_localized("%a", locale).to_string())
                    .collect()
            })
            .unwrap_or_default();

        MonthContext {
            title: self.first_day.format_localized(title_format, locale).to_string(),
            year: self.year(),
            month: self.month(),
            weekdays,
            weeks: self
                .weeks
                .iter()
                .map(|week| {
                    week.iter()
                        .map(|date| GridDayContext {
                            date: date.to_string(),
                            day: date.day(),
                            in_month: self.contains(*date),
                            is_today: *date == today,
                            is_selected: Some(*date) == selected,
                            is_weekend: date.weekday().number_from_monday() > 5,
                        })
                        .collect()
                })
                .collect(),
        }
    }
}

impl fmt::Display for MonthGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Month: {}", self.first_day.format("%B %Y"))
    }
}

#[derive(Debug, Serialize)]
pub struct MonthContext {
    title: String,
    year: i32,
    month: u32,
    weekdays: Vec<String>,
    weeks: Vec<Vec<GridDayContext>>,
}

#[derive(Debug, Serialize)]
pub struct GridDayContext {
    date: String,
    day: u32,
    in_month: bool,
    is_today: bool,
    is_selected: bool,
    is_weekend: bool,
}

/// Number of days from `week_start` forward to `day`
fn days_after(day: Weekday, week_start: Weekday) -> u64 {
    ((7 + day.num_days_from_monday() - week_start.num_days_from_monday()) % 7).into()
}

fn last_day_of_month(first_day: NaiveDate) -> Result<NaiveDate> {
    first_day
        .checked_add_months(Months::new(1))
        .and_then(|next_month| next_month.pred_opt())
        .ok_or(eyre!("could not get the last day of the month"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn monday_grid_covers_whole_weeks() {
        // October 2026 starts on a Thursday and ends on a Saturday
        let grid = MonthGrid::new(date(2026, 10, 17), Weekday::Mon).unwrap();

        assert_eq!(grid.first_day(), date(2026, 10, 1));
        assert_eq!(grid.weeks().len(), 5);
        assert_eq!(grid.weeks()[0][0], date(2026, 9, 28));
        assert_eq!(grid.weeks()[4][6], date(2026, 11, 1));
        assert!(grid.weeks().iter().all(|week| week.len() == 7));
    }

    #[test]
    fn sunday_grid() {
        let grid = MonthGrid::new(date(2026, 10, 17), Weekday::Sun).unwrap();

        assert_eq!(grid.weeks()[0][0], date(2026, 9, 27));
        assert_eq!(grid.weeks().last().unwrap()[6], date(2026, 10, 31));
        assert_eq!(grid.weekdays()[0], Weekday::Sun);
        assert_eq!(grid.weekdays()[6], Weekday::Sat);
    }

    #[test]
    fn month_starting_on_the_week_start() {
        // February 2021 starts on a Monday and has exactly four weeks
        let grid = MonthGrid::new(date(2021, 2, 14), Weekday::Mon).unwrap();

        assert_eq!(grid.weeks().len(), 4);
        assert_eq!(grid.weeks()[0][0], date(2021, 2, 1));
        assert_eq!(grid.weeks()[3][6], date(2021, 2, 28));
    }

    #[test]
    fn december_rolls_into_the_next_year() {
        let grid = MonthGrid::new(date(2024, 12, 31), Weekday::Mon).unwrap();

        assert!(grid.contains(date(2024, 12, 1)));
        assert!(!grid.contains(date(2025, 1, 1)));
        assert_eq!(grid.weeks().last().unwrap()[6], date(2025, 1, 5));
    }

    #[test]
    fn context_flags_today_and_selection() {
        let grid = MonthGrid::new(date(2026, 10, 17), Weekday::Mon).unwrap();
        let context = grid.context(
            date(2026, 10, 17),
            Some(date(2026, 10, 20)),
            "%B %Y",
            Locale::en_US,
        );

        assert_eq!(context.title, "October 2026");
        assert_eq!(context.weekdays[0], "Mon");
        assert_eq!(context.weekdays[6], "Sun");
        let days: Vec<&GridDayContext> = context.weeks.iter().flatten().collect();
        assert_eq!(days.iter().filter(|d| d.is_today).count(), 1);
        assert_eq!(days.iter().filter(|d| d.is_selected).count(), 1);
        assert_eq!(days.iter().filter(|d| d.in_month).count(), 31);
        assert!(days.iter().find(|d| d.date == "2026-10-17").unwrap().is_weekend);
    }

    #[test]
    fn weekday_names_follow_the_week_start() {
        let grid = MonthGrid::new(date(2026, 10, 17), Weekday::Sun).unwrap();
        let context = grid.context(date(2026, 10, 17), None, "%m.%Y", Locale::ru_RU);

        assert_eq!(context.title, "10.2026");
        assert_eq!(context.weekdays.len(), 7);
        let sunday = date(2026, 10, 18).format_localized("%a", Locale::ru_RU).to_string();
        assert_eq!(context.weekdays[0], sunday);
        assert!(context.weeks.iter().flatten().all(|d| !d.is_selected));
    }
}
