use crate::catalog::ParameterSettings;

pub struct ParameterSettingsFactory {
    label: String,
    value: String,
    device_settings: String,
}

impl ParameterSettingsFactory {
    pub fn new() -> Self {
        Self {
            label: "Standard".to_string(),
            value: "100-200 µL/s".to_string(),
            device_settings: "Aspirate Speed: 100-200 µL/s\nDelay Aspirate: 0-50 ms".to_string(),
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn with_device_settings(mut self, device_settings: &str) -> Self {
        self.device_settings = device_settings.to_string();
        self
    }

    pub fn create(self) -> ParameterSettings {
        ParameterSettings {
            label: self.label,
            value: self.value,
            device_settings: self.device_settings,
        }
    }
}
