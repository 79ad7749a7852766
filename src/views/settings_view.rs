use chrono::Weekday;
use serde::Serialize;
use tera::Context;

use crate::{configuration::config::Config, model::session::Session};

const SYNC_PROVIDER: &str = "Google Calendar";

/// A switch on the settings tab
///
/// None of them change anything, they are shown in their initial state.
#[derive(Debug, Serialize)]
pub struct SettingToggle {
    title: &'static str,
    description: &'static str,
    enabled: bool,
}

const THEMES: [SettingToggle; 2] = [
    SettingToggle {
        title: "Светлая тема",
        description: "Активна",
        enabled: true,
    },
    SettingToggle {
        title: "Тёмная тема",
        description: "Скоро",
        enabled: false,
    },
];

const NOTIFICATIONS: [SettingToggle; 2] = [
    SettingToggle {
        title: "Напоминания по email",
        description: "Получать уведомления на почту",
        enabled: true,
    },
    SettingToggle {
        title: "Push-уведомления",
        description: "Уведомления в браузере",
        enabled: true,
    },
];

#[derive(Debug, Serialize)]
pub struct ConfigValue {
    name: &'static str,
    value: String,
}

/// The settings tab: the (not yet functional) sync card, appearance and notification switches, and
/// the configuration the session runs with
#[derive(Debug)]
pub struct SettingsView<'a> {
    session: &'a Session,
    config: &'a Config,
}

impl SettingsView<'_> {
    pub fn new<'a>(session: &'a Session, config: &'a Config) -> SettingsView<'a> {
        SettingsView { session, config }
    }

    pub fn config_values(&self) -> Vec<ConfigValue> {
        let week_start = match self.config.week_start() {
            Weekday::Sun => "воскресенье",
            _ => "понедельник",
        };

        vec![
            ConfigValue {
                name: "Сегодня",
                value: self
                    .session
                    .today()
                    .format(&self.config.date_format)
                    .to_string(),
            },
            ConfigValue {
                name: "Вкладка по умолчанию",
                value: self.config.default_tab.title().into(),
            },
            ConfigValue {
                name: "Начало недели",
                value: week_start.into(),
            },
            ConfigValue {
                name: "Формат даты",
                value: self.config.date_format.clone(),
            },
            ConfigValue {
                name: "Каталог для страницы",
                value: self.config.output_dir().to_string_lossy().to_string(),
            },
        ]
    }

    pub fn insert_context(&self, context: &mut Context) {
        context.insert("sync_provider", SYNC_PROVIDER);
        context.insert("sync_connected", &false);
        context.insert("themes", &THEMES);
        context.insert("notifications", &NOTIFICATIONS);
        context.insert("config_values", &self.config_values());
    }
}
