use egui::Color32;
use serde::{Deserialize, Serialize};

/// Current paint settings, read whenever a shape is created.
///
/// Existing shapes keep the style they were created with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleState {
    red: u8,
    green: u8,
    blue: u8,
    fill_enabled: bool,
}

impl Default for StyleState {
    fn default() -> Self {
        Self {
            red: 123,
            green: 198,
            blue: 248,
            fill_enabled: false,
        }
    }
}

impl StyleState {
    pub fn new(red: u8, green: u8, blue: u8, fill_enabled: bool) -> Self {
        Self { red, green, blue, fill_enabled }
    }

    pub fn color(&self) -> Color32 {
        Color32::from_rgb(self.red, self.green, self.blue)
    }

    /// The three channels as (red, green, blue)
    pub fn channels(&self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    /// Color-change handler for the three channel sliders
    pub fn set_channels(&mut self, red: u8, green: u8, blue: u8) {
        self.red = red;
        self.green = green;
        self.blue = blue;
    }

    pub fn fill_enabled(&self) -> bool {
        self.fill_enabled
    }

    pub fn set_fill_enabled(&mut self, enabled: bool) {
        self.fill_enabled = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_color() {
        let style = StyleState::default();
        assert_eq!(style.color(), Color32::from_rgb(123, 198, 248));
        assert!(!style.fill_enabled());
    }

    #[test]
    fn test_set_channels() {
        let mut style = StyleState::default();
        style.set_channels(255, 0, 10);
        assert_eq!(style.channels(), (255, 0, 10));
        assert_eq!(style.color(), Color32::from_rgb(255, 0, 10));
    }
}
