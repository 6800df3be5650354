//! Text lookups for rendering food records.
//!
//! The `*_icon` and `*_label` helpers take raw slugs so records loaded from older blobs
//! still render when they carry a value this build does not know.

use chrono::NaiveDate;

use crate::models::categories::FoodCategory;
use crate::models::storage_locations::StorageLocation;

pub fn category_icon(slug: &str) -> &'static str {
    FoodCategory::from_slug(slug).icon()
}

pub fn category_label(slug: &str) -> String {
    FoodCategory::from_slug(slug).label().to_string()
}

pub fn storage_icon(slug: &str) -> &'static str {
    StorageLocation::from_slug(slug).icon()
}

pub fn storage_label(slug: &str) -> String {
    StorageLocation::from_slug(slug).label().to_string()
}

/// Formats a date as `DD/MM/YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Reformats a stored `YYYY-MM-DD` string, returning it untouched when it does not parse.
pub fn format_date_str(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(format_date)
        .unwrap_or_else(|_| date.to_string())
}

pub fn status_text(days_remaining: i64) -> String {
    match days_remaining {
        days if days < 0 => String::from("VENCIDO"),
        0 => String::from("Vence HOJE"),
        1 => String::from("Vence amanhã"),
        days => format!("{days} dias restantes"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_slugs_use_the_static_tables() {
        assert_eq!(category_icon("laticinio"), "🥛");
        assert_eq!(category_icon("seafood"), "🦐");
        assert_eq!(category_label("graos"), "Grãos");
        assert_eq!(storage_icon("geladeira"), "🧊");
        assert_eq!(storage_label("pantry"), "Despensa");
    }

    #[test]
    fn unknown_slugs_fall_back() {
        assert_eq!(category_icon("pizza"), "📦");
        assert_eq!(category_label("pizza"), "pizza");
        assert_eq!(storage_icon("porão"), "📦");
        assert_eq!(storage_label("porão"), "porão");
    }

    #[test]
    fn dates_render_day_first() {
        let date = NaiveDate::from_ymd_opt(2024, 11, 5).unwrap();
        assert_eq!(format_date(date), "05/11/2024");
        assert_eq!(format_date_str("2024-11-20"), "20/11/2024");
        assert_eq!(format_date_str("amanhã"), "amanhã");
    }

    #[test]
    fn status_text_wording() {
        assert_eq!(status_text(-3), "VENCIDO");
        assert_eq!(status_text(0), "Vence HOJE");
        assert_eq!(status_text(1), "Vence amanhã");
        assert_eq!(status_text(12), "12 dias restantes");
    }
}
