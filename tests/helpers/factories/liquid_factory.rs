use crate::catalog::Liquid;

pub struct LiquidFactory {
    name: String,
    density: f64,
    viscosity: f64,
    molar_weight: Option<String>,
    liquid_class: String,
    notes: String,
}

impl LiquidFactory {
    pub fn new() -> Self {
        Self {
            name: "Water".to_string(),
            density: 1.0,
            viscosity: 0.89,
            molar_weight: Some("18.02".to_string()),
            liquid_class: "Aqueous".to_string(),
            notes: "Standard reference liquid".to_string(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_class(mut self, liquid_class: &str) -> Self {
        self.liquid_class = liquid_class.to_string();
        self
    }

    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    pub fn with_viscosity(mut self, viscosity: f64) -> Self {
        self.viscosity = viscosity;
        self
    }

    pub fn with_molar_weight(mut self, molar_weight: &str) -> Self {
        self.molar_weight = Some(molar_weight.to_string());
        self
    }

    /// Mixtures and solutions have no single molar mass.
    pub fn as_solution(mut self) -> Self {
        self.molar_weight = None;
        self
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = notes.to_string();
        self
    }

    pub fn create(self) -> Liquid {
        Liquid {
            name: self.name,
            density: self.density,
            viscosity: self.viscosity,
            molar_weight: self.molar_weight,
            liquid_class: self.liquid_class,
            notes: self.notes,
        }
    }
}
