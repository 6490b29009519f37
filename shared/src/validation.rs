use once_cell::sync::Lazy;
use regex::Regex;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::WheelError;
use crate::prize::Prize;

pub static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

/// A wedge with neither text nor icon would render blank.
pub fn validate_prize_label(prize: &Prize) -> Result<(), ValidationError> {
    let has_text = prize.text.as_deref().map_or(false, |t| !t.trim().is_empty());
    let has_icon = prize.icon.as_deref().map_or(false, |i| !i.trim().is_empty());
    if !has_text && !has_icon {
        return Err(ValidationError::new("missing_label"));
    }
    Ok(())
}

pub fn validate_prize(prize: &Prize) -> Result<(), WheelError> {
    prize.validate().map_err(|errors| WheelError::InvalidPrize {
        id: prize.id.clone(),
        reason: describe(&errors),
    })
}

// "background: regex, color: regex" -- sorted so messages are stable.
fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter()
                .map(move |e| format!("{}: {}", field, e.code))
                .collect::<Vec<_>>()
        })
        .collect();
    parts.sort();
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color() {
        assert!(HEX_COLOR.is_match("#ffec51"));
        assert!(HEX_COLOR.is_match("#FFF"));
        assert!(!HEX_COLOR.is_match("ffec51"));
        assert!(!HEX_COLOR.is_match("#ffec5"));
        assert!(!HEX_COLOR.is_match("red"));
    }

    #[test]
    fn test_prize_needs_text_or_icon() {
        let blank = Prize::new("blank", "#000", "#fff");
        assert!(validate_prize_label(&blank).is_err());

        let icon_only = Prize::new("icon", "#000", "#fff").with_icon("🤖");
        assert!(validate_prize_label(&icon_only).is_ok());

        let whitespace = Prize::new("ws", "#000", "#fff").with_text("   ");
        assert!(validate_prize_label(&whitespace).is_err());
    }

    #[test]
    fn test_validate_prize_reports_fields() {
        let prize = Prize::new("bad", "orange", "#fff").with_text("Bad");
        match validate_prize(&prize) {
            Err(WheelError::InvalidPrize { id, reason }) => {
                assert_eq!(id, "bad");
                assert!(reason.contains("color"));
                assert!(!reason.contains("background"));
            }
            other => panic!("expected InvalidPrize, got {:?}", other),
        }
    }
}
