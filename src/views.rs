pub mod calendar_page;
pub mod events_view;
pub mod main_view;
pub mod planning_view;
pub mod reminders_view;
pub mod settings_view;
