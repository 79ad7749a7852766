use serde::Serialize;
use tera::Context;

const HEADLINE: &str = "Планируйте свои дела";
const SUMMARY: &str = "Создавайте события, задачи и напоминания для эффективной организации времени";

#[derive(Debug, Serialize)]
pub struct PlanningCard {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const CARDS: [PlanningCard; 3] = [
    PlanningCard {
        icon: "◎",
        title: "Цели",
        text: "Ставьте и достигайте целей",
    },
    PlanningCard {
        icon: "☑",
        title: "Задачи",
        text: "Управляйте списком дел",
    },
    PlanningCard {
        icon: "↗",
        title: "Прогресс",
        text: "Отслеживайте достижения",
    },
];

/// The planning tab only shows fixed content
#[derive(Debug, Default)]
pub struct PlanningView;

impl PlanningView {
    pub fn insert_context(&self, context: &mut Context) {
        context.insert("planning_headline", HEADLINE);
        context.insert("planning_summary", SUMMARY);
        context.insert("planning_cards", &CARDS);
    }
}
