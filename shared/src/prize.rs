use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::WheelError;
use crate::validation::validate_prize;

/// One prize on the wheel. Its position in the list decides its wedge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "crate::validation::validate_prize_label"))]
pub struct Prize {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    /// Label colour.
    #[validate(regex = "crate::validation::HEX_COLOR")]
    pub color: String,
    /// Wedge fill.
    #[validate(regex = "crate::validation::HEX_COLOR")]
    pub background: String,
}

impl Prize {
    pub fn new(id: impl Into<String>, color: impl Into<String>, background: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: None,
            icon: None,
            color: color.into(),
            background: background.into(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Text drawn on the wedge: the display text, or the icon when there is none.
    pub fn label(&self) -> &str {
        match self.text.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => self.icon.as_deref().unwrap_or(""),
        }
    }
}

/// The ordered, validated prize list. Never empty, ids unique.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorModel {
    prizes: Vec<Prize>,
}

impl SectorModel {
    pub fn new(prizes: Vec<Prize>) -> Result<Self, WheelError> {
        if prizes.is_empty() {
            return Err(WheelError::EmptyPrizeList);
        }

        let mut seen = HashSet::new();
        for prize in &prizes {
            validate_prize(prize)?;
            if !seen.insert(prize.id.as_str()) {
                return Err(WheelError::DuplicatePrizeId(prize.id.clone()));
            }
        }

        Ok(Self { prizes })
    }

    pub fn resolve_index(&self, id: &str) -> Result<usize, WheelError> {
        self.prizes
            .iter()
            .position(|prize| prize.id == id)
            .ok_or_else(|| WheelError::PrizeNotFound(id.to_string()))
    }

    pub fn sector_count(&self) -> usize {
        self.prizes.len()
    }

    pub fn prize(&self, index: usize) -> Result<&Prize, WheelError> {
        self.prizes.get(index).ok_or(WheelError::InvalidSectorIndex {
            index,
            count: self.prizes.len(),
        })
    }

    pub fn prizes(&self) -> &[Prize] {
        &self.prizes
    }
}

/// Reads a JSON array of prizes. Validation happens when the list is
/// handed to [`SectorModel::new`].
pub fn parse_prize_list(json: &str) -> Result<Vec<Prize>, WheelError> {
    serde_json::from_str(json).map_err(|e| WheelError::InvalidConfig(format!("prize list: {}", e)))
}

/// The eight free-spin prizes of the demo wheel.
pub fn default_prizes() -> Vec<Prize> {
    vec![
        Prize::new("freespin_1", "#b09f16", "#ffec51").with_icon("👽👽👽"),
        Prize::new("freespin_2", "#ba8814", "#ffc133").with_text("2 Freespins"),
        Prize::new("freespin_3", "#a15d15", "#ff982a").with_icon("🤗🤗🤗"),
        Prize::new("freespin_4", "#922a12", "#ff5730").with_text("4 Freespins"),
        Prize::new("freespin_5", "#046a60", "#009688").with_icon("😇😇😇"),
        Prize::new("freespin_6", "#157f2e", "#39af55").with_text("6 Freespins"),
        Prize::new("freespin_7", "#4a801e", "#86c454").with_icon("🤖🤖🤖"),
        Prize::new("freespin_8", "#96a422", "#cddc4c").with_text("8 Freespins"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_index() {
        let model = SectorModel::new(default_prizes()).unwrap();
        assert_eq!(model.sector_count(), 8);
        assert_eq!(model.resolve_index("freespin_1"), Ok(0));
        assert_eq!(model.resolve_index("freespin_8"), Ok(7));
        assert_eq!(
            model.resolve_index("nonexistent-id"),
            Err(WheelError::PrizeNotFound("nonexistent-id".to_string()))
        );
    }

    #[test]
    fn test_empty_list_rejected() {
        assert_eq!(SectorModel::new(vec![]), Err(WheelError::EmptyPrizeList));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut prizes = default_prizes();
        prizes[3].id = "freespin_1".to_string();
        assert_eq!(
            SectorModel::new(prizes),
            Err(WheelError::DuplicatePrizeId("freespin_1".to_string()))
        );
    }

    #[test]
    fn test_invalid_prize_rejected() {
        let prizes = vec![Prize::new("", "#000", "#fff").with_text("nameless")];
        assert!(matches!(
            SectorModel::new(prizes),
            Err(WheelError::InvalidPrize { .. })
        ));
    }

    #[test]
    fn test_label_falls_back_to_icon() {
        let prizes = default_prizes();
        assert_eq!(prizes[0].label(), "👽👽👽");
        assert_eq!(prizes[1].label(), "2 Freespins");

        let empty_text = Prize::new("x", "#000", "#fff").with_text("").with_icon("🎁");
        assert_eq!(empty_text.label(), "🎁");
    }

    #[test]
    fn test_out_of_range_index() {
        let model = SectorModel::new(default_prizes()).unwrap();
        assert_eq!(
            model.prize(8),
            Err(WheelError::InvalidSectorIndex { index: 8, count: 8 })
        );
        assert_eq!(model.prize(7).map(|prize| prize.id.as_str()), Ok("freespin_8"));
    }

    #[test]
    fn test_parse_prize_list() {
        let json = serde_json::to_string(&default_prizes()).unwrap();
        let prizes = parse_prize_list(&json).unwrap();
        assert_eq!(prizes, default_prizes());
        assert!(matches!(
            parse_prize_list("{}"),
            Err(WheelError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_prize_deserializes_without_optional_fields() {
        let prize: Prize = serde_json::from_str(
            r##"{"id":"gold","color":"#000000","background":"#ffd700","icon":"🪙"}"##,
        )
        .unwrap();
        assert_eq!(prize.text, None);
        assert_eq!(prize.label(), "🪙");
    }
}
