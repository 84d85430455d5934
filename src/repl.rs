//! Interactive command surface
//!
//! Command parsing and screen rendering for the read-eval-print loop. Both
//! sides are plain functions over strings so they are testable without a
//! terminal; the binary owns the actual stdin/stdout plumbing.

use crate::models::FavoriteEntry;
use crate::planner::CitySuggestions;

/// One parsed user interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Look up a city by name
    Lookup(String),
    /// Save the attraction at this zero-based sample index
    Save(usize),
    /// List saved favorites
    Favorites,
    /// Remove the favorite at this zero-based index
    Remove(usize),
    /// Show usage
    Help,
    /// Leave the session
    Quit,
}

impl Command {
    /// Parse one input line; `Ok(None)` for blank lines
    ///
    /// Numbered arguments are 1-based on screen and converted to 0-based
    /// indices here. A malformed argument yields a usage hint, not an error
    /// kind: the command never reached the workflow.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "quit" | "exit" => Self::Quit,
            "help" => Self::Help,
            "favorites" => Self::Favorites,
            "save" => Self::Save(parse_position(rest, "save")?),
            "remove" => Self::Remove(parse_position(rest, "remove")?),
            "go" => Self::Lookup(rest.to_string()),
            _ => Self::Lookup(line.to_string()),
        };

        Ok(Some(command))
    }
}

fn parse_position(arg: &str, command: &str) -> Result<usize, String> {
    arg.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .ok_or_else(|| format!("Usage: {command} <number>"))
}

/// Welcome banner shown at session start
#[must_use]
pub fn render_welcome(supported: &[String]) -> String {
    format!(
        "Welcome to TripMate\n\
         - Real-time weather and 7-day forecasts\n\
         - Random attraction picks you can save as favorites\n\
         - Data source: Open-Meteo Weather API (https://open-meteo.com/)\n\n\
         Supported cities: {}\n\
         Type 'help' for commands.",
        supported.join(" / ")
    )
}

/// Render one successful lookup: conditions, forecast table, sample
#[must_use]
pub fn render_suggestions(suggestions: &CitySuggestions) -> String {
    let mut output = format!(
        "Current Weather in {}\n  {}\n",
        suggestions.city,
        suggestions.forecast.format_current()
    );

    if suggestions.forecast.has_daily() {
        output.push_str(&format!(
            "\n7-Day Forecast\n  {:<10}  {:>8}  {:>8}\n",
            "Date", "Max (\u{00b0}C)", "Min (\u{00b0}C)"
        ));
        for day in &suggestions.forecast.daily {
            output.push_str(&format!("  {}\n", day.format_row()));
        }
    }

    output.push_str("\nRecommended Attractions\n");
    for (i, attraction) in suggestions.attractions.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, attraction));
    }
    output.push_str("\nType 'save <number>' to keep an attraction in your favorites.");

    output
}

/// Render the favorites view
#[must_use]
pub fn render_favorites(favorites: &[FavoriteEntry]) -> String {
    if favorites.is_empty() {
        return "You haven't saved any attractions yet. Go explore a city!".to_string();
    }

    let mut output = String::from("My Favorites\n");
    for (i, entry) in favorites.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, entry.format_entry()));
    }
    output.push_str("\nType 'remove <number>' to delete an entry.");

    output
}

/// Render command usage plus the supported city list
#[must_use]
pub fn render_help(supported: &[String]) -> String {
    format!(
        "Commands:\n\
         \x20 <city> or go <city>   look up weather and attractions\n\
         \x20 save <number>         save an attraction from the last lookup\n\
         \x20 favorites             list saved favorites\n\
         \x20 remove <number>       delete a favorite by its number\n\
         \x20 help                  show this help\n\
         \x20 quit                  end the session\n\n\
         Supported cities: {}",
        supported.join(" / ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DailyForecast, ForecastReport};
    use chrono::NaiveDate;
    use rstest::rstest;

    #[rstest]
    #[case("quit", Command::Quit)]
    #[case("exit", Command::Quit)]
    #[case("help", Command::Help)]
    #[case("favorites", Command::Favorites)]
    #[case("save 1", Command::Save(0))]
    #[case("remove 3", Command::Remove(2))]
    #[case("go New York", Command::Lookup("New York".to_string()))]
    #[case("Beijing", Command::Lookup("Beijing".to_string()))]
    #[case("new york", Command::Lookup("new york".to_string()))]
    fn test_parse_commands(#[case] line: &str, #[case] expected: Command) {
        assert_eq!(Command::parse(line).unwrap(), Some(expected));
    }

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[rstest]
    #[case("save")]
    #[case("save zero")]
    #[case("save 0")]
    #[case("remove -1")]
    fn test_parse_bad_positions(#[case] line: &str) {
        let hint = Command::parse(line).unwrap_err();
        assert!(hint.starts_with("Usage:"));
    }

    #[test]
    fn test_render_suggestions_full() {
        let suggestions = CitySuggestions {
            city: "Beijing".to_string(),
            forecast: ForecastReport {
                current_temperature_c: 20.5,
                current_wind_speed_kph: 10.2,
                daily: vec![DailyForecast {
                    date: NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
                    max_temp_c: 31.2,
                    min_temp_c: 22.4,
                }],
            },
            attractions: vec!["Great Wall".to_string(), "Houhai Lake".to_string()],
        };

        let screen = render_suggestions(&suggestions);
        assert!(screen.contains("Current Weather in Beijing"));
        assert!(screen.contains("Temperature: 20.5\u{00b0}C | Wind Speed: 10.2 km/h"));
        assert!(screen.contains("7-Day Forecast"));
        assert!(screen.contains("2026-08-06"));
        assert!(screen.contains("1. Great Wall"));
        assert!(screen.contains("2. Houhai Lake"));
    }

    #[test]
    fn test_render_suggestions_omits_missing_forecast_table() {
        let suggestions = CitySuggestions {
            city: "Paris".to_string(),
            forecast: ForecastReport {
                current_temperature_c: 18.0,
                current_wind_speed_kph: 5.0,
                daily: Vec::new(),
            },
            attractions: vec!["Seine River".to_string()],
        };

        let screen = render_suggestions(&suggestions);
        assert!(!screen.contains("7-Day Forecast"));
        assert!(screen.contains("Recommended Attractions"));
    }

    #[test]
    fn test_render_favorites_empty_state() {
        let screen = render_favorites(&[]);
        assert!(screen.contains("haven't saved any attractions"));
    }

    #[test]
    fn test_render_favorites_numbered() {
        let favorites = vec![
            FavoriteEntry::new("Paris", "Eiffel Tower"),
            FavoriteEntry::new("London", "Big Ben"),
        ];
        let screen = render_favorites(&favorites);
        assert!(screen.contains("1. Paris - Eiffel Tower"));
        assert!(screen.contains("2. London - Big Ben"));
    }

    #[test]
    fn test_render_help_lists_cities() {
        let screen = render_help(&["Beijing".to_string(), "Tokyo".to_string()]);
        assert!(screen.contains("Supported cities: Beijing / Tokyo"));
        assert!(screen.contains("save <number>"));
    }
}
