use chrono::Weekday;
use serde::Serialize;

/// Én økt i ukeplanen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlannedSession {
    #[serde(serialize_with = "weekday_name")]
    pub weekday: Weekday,
    pub workout: &'static str,
    /// None = hviledag
    pub duration_min: Option<u32>,
    pub focus: &'static str,
}

fn weekday_name<S: serde::Serializer>(d: &Weekday, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&d.to_string())
}

/// Næringsanbefaling etter løp (protein/karbo).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutritionItem {
    pub food: &'static str,
    pub grams: u32,
    pub nutrient: Nutrient,
    pub note: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Nutrient {
    Protein,
    Carbs,
}

const WEEK: [PlannedSession; 7] = [
    PlannedSession { weekday: Weekday::Mon, workout: "Easy Run", duration_min: Some(30), focus: "Warm-up" },
    PlannedSession { weekday: Weekday::Tue, workout: "Interval Run", duration_min: Some(45), focus: "Speed" },
    PlannedSession { weekday: Weekday::Wed, workout: "Recovery", duration_min: Some(20), focus: "Recovery" },
    PlannedSession { weekday: Weekday::Thu, workout: "Long Run", duration_min: Some(60), focus: "Endurance" },
    PlannedSession { weekday: Weekday::Fri, workout: "Cross Training", duration_min: Some(40), focus: "Variety" },
    PlannedSession { weekday: Weekday::Sat, workout: "Tempo Run", duration_min: Some(50), focus: "Consistency" },
    PlannedSession { weekday: Weekday::Sun, workout: "Rest Day", duration_min: None, focus: "Full recovery" },
];

const FOODS: [NutritionItem; 8] = [
    NutritionItem { food: "Chicken breast (100g)", grams: 31, nutrient: Nutrient::Protein, note: "High protein, low fat" },
    NutritionItem { food: "Eggs (2)", grams: 13, nutrient: Nutrient::Protein, note: "Complete protein, easy to digest" },
    NutritionItem { food: "Salmon (100g)", grams: 25, nutrient: Nutrient::Protein, note: "Protein + omega-3" },
    NutritionItem { food: "Tofu (100g)", grams: 8, nutrient: Nutrient::Protein, note: "Plant protein" },
    NutritionItem { food: "Brown rice (100g)", grams: 23, nutrient: Nutrient::Carbs, note: "Complex carbohydrates" },
    NutritionItem { food: "Oatmeal (50g)", grams: 30, nutrient: Nutrient::Carbs, note: "High fibre, lasting energy" },
    NutritionItem { food: "Sweet potato (100g)", grams: 20, nutrient: Nutrient::Carbs, note: "Vitamin A, healthy carbs" },
    NutritionItem { food: "Banana (1)", grams: 27, nutrient: Nutrient::Carbs, note: "Potassium, quick energy" },
];

const TIPS: [&str; 4] = [
    "Protein within 30 minutes after running",
    "Drink 500 ml of water for every 30 minutes of running",
    "Complex carbohydrates before running",
    "Avoid heavy meals 2 hours before running",
];

/// Fast ukeplan, mandag først.
pub fn weekly_plan() -> &'static [PlannedSession; 7] {
    &WEEK
}

pub fn session_for(day: Weekday) -> &'static PlannedSession {
    &WEEK[day.num_days_from_monday() as usize]
}

pub fn nutrition_items() -> &'static [NutritionItem] {
    &FOODS
}

pub fn quick_tips() -> &'static [&'static str] {
    &TIPS
}
