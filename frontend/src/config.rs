use prize_wheel::prize::parse_prize_list;
use prize_wheel::{default_prizes, Prize, WheelConfig};
use web_sys::window;

pub const WHEEL_CONFIG_ELEMENT_ID: &str = "wheel-config";
pub const WHEEL_PRIZES_ELEMENT_ID: &str = "wheel-prizes";

// JSON embedded in the host page, e.g. <script id="wheel-config" type="application/json">.
fn embedded_json(element_id: &str) -> Option<String> {
    window()?
        .document()?
        .get_element_by_id(element_id)?
        .text_content()
        .filter(|text| !text.trim().is_empty())
}

/// Wheel tunables from the page, falling back to defaults when missing or invalid.
pub fn load_wheel_config() -> WheelConfig {
    match embedded_json(WHEEL_CONFIG_ELEMENT_ID) {
        Some(json) => WheelConfig::from_json(&json).unwrap_or_else(|e| {
            log::warn!("Ignoring embedded wheel config: {}", e);
            WheelConfig::default()
        }),
        None => WheelConfig::default(),
    }
}

/// Prize list from the page, or the demo free-spin set.
pub fn load_prizes() -> Vec<Prize> {
    match embedded_json(WHEEL_PRIZES_ELEMENT_ID) {
        Some(json) => parse_prize_list(&json).unwrap_or_else(|e| {
            log::warn!("Ignoring embedded prize list: {}", e);
            default_prizes()
        }),
        None => default_prizes(),
    }
}
