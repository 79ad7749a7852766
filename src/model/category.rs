use clap::ValueEnum;
use csscolorparser::Color;
use palette::{FromColor, LinSrgb, Oklch, Srgb};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt};

use super::event::Event;

/// The closed set of event categories
///
/// Every category has a label and a display color, see [`Category::label`] and [`Category::color`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Deserialize,
    Serialize,
    ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Purple,
    Orange,
    Blue,
    Pink,
    Green,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 5] = [
        Category::Purple,
        Category::Orange,
        Category::Blue,
        Category::Pink,
        Category::Green,
    ];

    /// The machine readable key of the category
    pub fn key(&self) -> &'static str {
        match self {
            Category::Purple => "purple",
            Category::Orange => "orange",
            Category::Blue => "blue",
            Category::Pink => "pink",
            Category::Green => "green",
        }
    }

    /// The human readable label shown on badges and in the category overview
    pub fn label(&self) -> &'static str {
        match self {
            Category::Purple => "Работа",
            Category::Orange => "Важное",
            Category::Blue => "Личное",
            Category::Pink => "Встречи",
            Category::Green => "Спорт",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Category::Purple => Color::from_rgba8(0x9b, 0x87, 0xf5, 0xff),
            Category::Orange => Color::from_rgba8(0xf9, 0x73, 0x16, 0xff),
            Category::Blue => Color::from_rgba8(0x0e, 0xa5, 0xe9, 0xff),
            Category::Pink => Color::from_rgba8(0xd9, 0x46, 0xef, 0xff),
            Category::Green => Color::from_rgba8(0x22, 0xc5, 0x5e, 0xff),
        }
    }

    /// Returns the background color used behind text of this category
    ///
    /// Without an adjustment this is just the category color.
    pub fn background(&self, adjustment: Option<&ColorAdjustment>) -> Color {
        match adjustment {
            Some(adjustment) => adjustment.apply(&self.color()),
            None => self.color(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Lightness and chroma targets used to soften category colors so text stays readable on top of them
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorAdjustment {
    pub lightness: f32,
    pub chroma: f32,
}

impl ColorAdjustment {
    /// Moves the color to the configured lightness and chroma in Oklch, keeping its hue
    pub fn apply(&self, color: &Color) -> Color {
        let linear: LinSrgb = Srgb::new(color.r as f32, color.g as f32, color.b as f32).into_linear();
        let mut lch: Oklch = Oklch::from_color(linear);
        lch.l = self.lightness;
        lch.chroma = self.chroma;

        let adjusted: Srgb = Srgb::from_linear(LinSrgb::from_color(lch));
        Color::new(
            adjusted.red as f64,
            adjusted.green as f64,
            adjusted.blue as f64,
            color.a,
        )
    }
}

/// Number of events per category
///
/// Every category is present, categories without events have a count of zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryCounts(BTreeMap<Category, usize>);

impl CategoryCounts {
    pub fn get(&self, category: Category) -> usize {
        self.0.get(&category).copied().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        self.0.iter().map(|(category, count)| (*category, *count))
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn context(&self, adjustment: Option<&ColorAdjustment>) -> Vec<CategoryContext> {
        self.iter()
            .map(|(category, count)| CategoryContext::new(category, count, adjustment))
            .collect()
    }
}

impl<'a> FromIterator<&'a Event> for CategoryCounts {
    fn from_iter<I: IntoIterator<Item = &'a Event>>(events: I) -> Self {
        let mut counts: BTreeMap<Category, usize> =
            Category::ALL.iter().map(|category| (*category, 0)).collect();

        for event in events {
            *counts.entry(event.category()).or_default() += 1;
        }

        CategoryCounts(counts)
    }
}

/// Values describing a category for the templates
#[derive(Debug, Serialize)]
pub struct CategoryContext {
    key: &'static str,
    label: &'static str,
    color: String,
    background: String,
    count: usize,
}

impl CategoryContext {
    pub fn new(
        category: Category,
        count: usize,
        adjustment: Option<&ColorAdjustment>,
    ) -> CategoryContext {
        CategoryContext {
            key: category.key(),
            label: category.label(),
            color: category.color().to_hex_string(),
            background: category.background(adjustment).to_hex_string(),
            count,
        }
    }
}
