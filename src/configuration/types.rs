pub mod calendar_tab;
pub mod config_date;
