//! Built-in catalog contents: common laboratory liquids and the recommended
//! Hamilton STAR liquid classes with their Venus settings.
//!
//! Order matters. Liquids and classes are listed in the order the browser view
//! presents them.

use crate::catalog::types::{Liquid, LiquidClass, ParameterSettings};

fn liquid(
    name: &str,
    density: f64,
    viscosity: f64,
    molar_weight: Option<&str>,
    liquid_class: &str,
    notes: &str,
) -> Liquid {
    Liquid {
        name: name.to_string(),
        density,
        viscosity,
        molar_weight: molar_weight.map(str::to_string),
        liquid_class: liquid_class.to_string(),
        notes: notes.to_string(),
    }
}

fn settings(label: &str, value: &str, device_settings: &[&str]) -> ParameterSettings {
    ParameterSettings {
        label: label.to_string(),
        value: value.to_string(),
        device_settings: device_settings.join("\n"),
    }
}

pub fn liquids() -> Vec<Liquid> {
    vec![
        liquid("Water", 1.00, 0.89, Some("18.02"), "Aqueous", "Standard reference liquid"),
        liquid("Ethanol", 0.79, 1.07, Some("46.07"), "Organic-Low", "Volatile, adjust for evaporation"),
        liquid("Methanol", 0.79, 0.54, Some("32.04"), "Organic-Low", "Highly volatile"),
        liquid("Acetone", 0.78, 0.31, Some("58.08"), "Organic-Low", "Very volatile, use slower aspiration"),
        liquid(
            "Dimethyl Sulfoxide (DMSO)",
            1.10,
            1.99,
            Some("78.13"),
            "Organic-Medium",
            "Common solvent for compounds",
        ),
        liquid("Glycerol", 1.26, 934.0, Some("92.09"), "Viscous", "Very viscous, requires slow handling"),
        liquid("Isopropanol", 0.78, 2.04, Some("60.10"), "Organic-Low", "Moderate volatility"),
        liquid("Acetonitrile", 0.78, 0.37, Some("41.05"), "Organic-Low", "Common HPLC solvent"),
        liquid("Hexane", 0.66, 0.30, Some("86.18"), "Organic-Low", "Low surface tension, difficult to pipette"),
        liquid("Toluene", 0.87, 0.59, Some("92.14"), "Organic-Low", "May affect plastic labware"),
        liquid(
            "Chloroform",
            1.49,
            0.54,
            Some("119.38"),
            "Organic-High-Density",
            "High density, may affect plastics",
        ),
        liquid(
            "Dichloromethane",
            1.33,
            0.41,
            Some("84.93"),
            "Organic-High-Density",
            "Volatile, high density",
        ),
        liquid("10% Glycerol Solution", 1.02, 1.31, None, "Aqueous-Viscous", "Common buffer additive"),
        liquid("50% Glycerol Solution", 1.13, 6.00, None, "Viscous", "Requires slow aspiration/dispensing"),
        liquid("Serum", 1.02, 1.50, None, "Serum", "Protein-rich, adjust for tip wetting"),
        liquid("Phosphate Buffered Saline", 1.01, 0.90, None, "Aqueous-Buffer", "Common biological buffer"),
        liquid("70% Ethanol", 0.86, 2.43, None, "Aqueous-Organic", "Common disinfectant"),
        liquid("n-Butanol", 0.81, 2.54, Some("74.12"), "Organic-Medium", "Moderate viscosity"),
        liquid(
            "Acetic Acid (Glacial)",
            1.05,
            1.13,
            Some("60.05"),
            "Organic-Corrosive",
            "Corrosive, adjust for volatility",
        ),
        liquid(
            "Diethyl Ether",
            0.71,
            0.22,
            Some("74.12"),
            "Organic-Low-Volatile",
            "Extremely volatile, difficult to pipette",
        ),
    ]
}

pub fn liquid_classes() -> Vec<LiquidClass> {
    vec![
        LiquidClass {
            name: "Aqueous".to_string(),
            description: "For water and water-like solutions".to_string(),
            aspirate_speed: settings(
                "Standard",
                "100-200 µL/s",
                &["Aspirate Speed: 100-200 µL/s", "Delay Aspirate: 0-50 ms", "Mixing Cycles: 3-5"],
            ),
            dispense_speed: settings(
                "Standard",
                "100-200 µL/s",
                &["Dispense Speed: 100-200 µL/s", "Delay Dispense: 0-50 ms", "Empty Speed: 200-400 µL/s"],
            ),
            air_gap: settings(
                "Small",
                "5-10 µL",
                &["Pre-Aspirate Air Gap: 5-10 µL", "Post-Aspirate Air Gap: 0-5 µL", "Empty Air Gap: 0 µL"],
            ),
            blowout: settings(
                "Required",
                "Standard",
                &["Blowout Volume: 5-10 µL", "Blowout Speed: 200-400 µL/s", "Channel Pattern: All enabled"],
            ),
            z_offset: settings(
                "Standard",
                "0.5-1.0 mm",
                &[
                    "Aspiration Immersion Depth: 0.5-1.0 mm",
                    "Dispense Immersion Depth: 0.5-1.0 mm",
                    "Bottom Report Offset: 0 mm",
                ],
            ),
            tips: settings(
                "Standard",
                "Standard",
                &["Tip Type: Standard", "Tip Pattern: Full", "Filter Tips: Optional"],
            ),
        },
        LiquidClass {
            name: "Organic-Low".to_string(),
            description: "For low viscosity organic solvents".to_string(),
            aspirate_speed: settings(
                "Slow",
                "50-100 µL/s",
                &["Aspirate Speed: 50-100 µL/s", "Delay Aspirate: 100-200 ms", "Mixing Cycles: 2-3"],
            ),
            dispense_speed: settings(
                "Slow",
                "50-100 µL/s",
                &["Dispense Speed: 50-100 µL/s", "Delay Dispense: 100-200 ms", "Empty Speed: 100-200 µL/s"],
            ),
            air_gap: settings(
                "Large",
                "15-30 µL",
                &["Pre-Aspirate Air Gap: 5-10 µL", "Post-Aspirate Air Gap: 10-20 µL", "Empty Air Gap: 0 µL"],
            ),
            blowout: settings(
                "Required",
                "Enhanced",
                &["Blowout Volume: 15-20 µL", "Blowout Speed: 100-150 µL/s", "Channel Pattern: All enabled"],
            ),
            z_offset: settings(
                "Low",
                "0.2-0.5 mm",
                &[
                    "Aspiration Immersion Depth: 0.2-0.5 mm",
                    "Dispense Immersion Depth: 0.2-0.5 mm",
                    "Bottom Report Offset: 0.2 mm",
                ],
            ),
            tips: settings(
                "Conductive",
                "Black conductive",
                &[
                    "Tip Type: Conductive",
                    "Tip Pattern: Full",
                    "Filter Tips: Recommended for volatile solvents",
                ],
            ),
        },
        LiquidClass {
            name: "Organic-Medium".to_string(),
            description: "For medium viscosity organic solvents".to_string(),
            aspirate_speed: settings(
                "Slow",
                "40-80 µL/s",
                &["Aspirate Speed: 40-80 µL/s", "Delay Aspirate: 200-300 ms", "Mixing Cycles: 2-3"],
            ),
            dispense_speed: settings(
                "Medium",
                "80-150 µL/s",
                &["Dispense Speed: 80-150 µL/s", "Delay Dispense: 100-200 ms", "Empty Speed: 100-200 µL/s"],
            ),
            air_gap: settings(
                "Medium",
                "10-20 µL",
                &["Pre-Aspirate Air Gap: 5-10 µL", "Post-Aspirate Air Gap: 5-10 µL", "Empty Air Gap: 0 µL"],
            ),
            blowout: settings(
                "Required",
                "Enhanced",
                &["Blowout Volume: 15-20 µL", "Blowout Speed: 100-150 µL/s", "Channel Pattern: All enabled"],
            ),
            z_offset: settings(
                "Low",
                "0.2-0.5 mm",
                &[
                    "Aspiration Immersion Depth: 0.2-0.5 mm",
                    "Dispense Immersion Depth: 0.2-0.5 mm",
                    "Bottom Report Offset: 0.2 mm",
                ],
            ),
            tips: settings(
                "Conductive",
                "Black conductive",
                &["Tip Type: Conductive", "Tip Pattern: Full", "Filter Tips: Recommended"],
            ),
        },
        LiquidClass {
            name: "Organic-High-Density".to_string(),
            description: "For dense organic solvents like chloroform".to_string(),
            aspirate_speed: settings(
                "Very Slow",
                "20-40 µL/s",
                &["Aspirate Speed: 20-40 µL/s", "Delay Aspirate: 300-500 ms", "Mixing Cycles: 1-2"],
            ),
            dispense_speed: settings(
                "Slow",
                "40-80 µL/s",
                &["Dispense Speed: 40-80 µL/s", "Delay Dispense: 200-300 ms", "Empty Speed: 80-120 µL/s"],
            ),
            air_gap: settings(
                "Large",
                "20-30 µL",
                &["Pre-Aspirate Air Gap: 5-10 µL", "Post-Aspirate Air Gap: 15-20 µL", "Empty Air Gap: 0 µL"],
            ),
            blowout: settings(
                "Required",
                "Extended",
                &["Blowout Volume: 20-30 µL", "Blowout Speed: 80-120 µL/s", "Channel Pattern: All enabled"],
            ),
            z_offset: settings(
                "Low",
                "0.1-0.3 mm",
                &[
                    "Aspiration Immersion Depth: 0.1-0.3 mm",
                    "Dispense Immersion Depth: 0.1-0.3 mm",
                    "Bottom Report Offset: 0.2 mm",
                ],
            ),
            tips: settings(
                "Conductive",
                "Chemical-resistant",
                &[
                    "Tip Type: Conductive, Chemical-resistant",
                    "Tip Pattern: Full",
                    "Filter Tips: Required",
                ],
            ),
        },
        LiquidClass {
            name: "Organic-Low-Volatile".to_string(),
            description: "For highly volatile organics".to_string(),
            aspirate_speed: settings(
                "Very Slow",
                "10-30 µL/s",
                &["Aspirate Speed: 10-30 µL/s", "Delay Aspirate: 500-1000 ms", "Mixing Cycles: 0-1"],
            ),
            dispense_speed: settings(
                "Very Slow",
                "10-30 µL/s",
                &["Dispense Speed: 10-30 µL/s", "Delay Dispense: 300-500 ms", "Empty Speed: 50-100 µL/s"],
            ),
            air_gap: settings(
                "Extra Large",
                "30-50 µL",
                &["Pre-Aspirate Air Gap: 10-15 µL", "Post-Aspirate Air Gap: 20-35 µL", "Empty Air Gap: 0 µL"],
            ),
            blowout: settings(
                "Required",
                "Maximum",
                &["Blowout Volume: 25-40 µL", "Blowout Speed: 50-100 µL/s", "Channel Pattern: All enabled"],
            ),
            z_offset: settings(
                "Low",
                "0.1-0.3 mm",
                &[
                    "Aspiration Immersion Depth: 0.1-0.3 mm",
                    "Dispense Immersion Depth: 0.1-0.3 mm",
                    "Bottom Report Offset: 0.3 mm",
                ],
            ),
            tips: settings(
                "Conductive",
                "Chemical-resistant",
                &[
                    "Tip Type: Conductive, Chemical-resistant",
                    "Tip Pattern: Full",
                    "Filter Tips: Required",
                    "Disable Tip Touch: Yes",
                ],
            ),
        },
        LiquidClass {
            name: "Organic-Corrosive".to_string(),
            description: "For corrosive organic solvents".to_string(),
            aspirate_speed: settings(
                "Slow",
                "40-80 µL/s",
                &["Aspirate Speed: 40-80 µL/s", "Delay Aspirate: 200-300 ms", "Mixing Cycles: 1-2"],
            ),
            dispense_speed: settings(
                "Medium",
                "80-120 µL/s",
                &["Dispense Speed: 80-120 µL/s", "Delay Dispense: 100-200 ms", "Empty Speed: 100-150 µL/s"],
            ),
            air_gap: settings(
                "Large",
                "15-25 µL",
                &["Pre-Aspirate Air Gap: 5-10 µL", "Post-Aspirate Air Gap: 10-15 µL", "Empty Air Gap: 0 µL"],
            ),
            blowout: settings(
                "Required",
                "Enhanced",
                &["Blowout Volume: 15-25 µL", "Blowout Speed: 100-150 µL/s", "Channel Pattern: All enabled"],
            ),
            z_offset: settings(
                "Medium",
                "0.5-1.0 mm",
                &[
                    "Aspiration Immersion Depth: 0.5-1.0 mm",
                    "Dispense Immersion Depth: 0.5-1.0 mm",
                    "Bottom Report Offset: 0.2 mm",
                ],
            ),
            tips: settings(
                "Resistant",
                "Chemical-resistant",
                &[
                    "Tip Type: Chemical-resistant",
                    "Tip Pattern: Full",
                    "Filter Tips: Required",
                    "Enable Extra Wash Steps: Yes",
                ],
            ),
        },
        LiquidClass {
            name: "Viscous".to_string(),
            description: "For highly viscous liquids like glycerol".to_string(),
            aspirate_speed: settings(
                "Very Slow",
                "5-20 µL/s",
                &["Aspirate Speed: 5-20 µL/s", "Delay Aspirate: 1000-3000 ms", "Mixing Cycles: 0-1"],
            ),
            dispense_speed: settings(
                "Very Slow",
                "5-20 µL/s",
                &["Dispense Speed: 5-20 µL/s", "Delay Dispense: 1000-3000 ms", "Empty Speed: 20-40 µL/s"],
            ),
            air_gap: settings(
                "Small",
                "5-10 µL",
                &["Pre-Aspirate Air Gap: 0-5 µL", "Post-Aspirate Air Gap: 5-10 µL", "Empty Air Gap: 0 µL"],
            ),
            blowout: settings(
                "Extended",
                "Maximum",
                &[
                    "Blowout Volume: 30-50 µL",
                    "Blowout Speed: 20-40 µL/s",
                    "Channel Pattern: All enabled",
                    "Extend Blowout Time: Yes",
                ],
            ),
            z_offset: settings(
                "High",
                "1.0-2.0 mm",
                &[
                    "Aspiration Immersion Depth: 1.0-2.0 mm",
                    "Dispense Immersion Depth: 1.0-2.0 mm",
                    "Bottom Report Offset: 0 mm",
                ],
            ),
            tips: settings(
                "Wide Bore",
                "Wide Bore",
                &[
                    "Tip Type: Wide Bore",
                    "Tip Pattern: Full",
                    "Filter Tips: Not recommended",
                    "Tip Size: Use larger volume tip if possible",
                ],
            ),
        },
        LiquidClass {
            name: "Aqueous-Viscous".to_string(),
            description: "For moderately viscous aqueous solutions".to_string(),
            aspirate_speed: settings(
                "Medium",
                "50-100 µL/s",
                &["Aspirate Speed: 50-100 µL/s", "Delay Aspirate: 300-500 ms", "Mixing Cycles: 2-3"],
            ),
            dispense_speed: settings(
                "Medium",
                "50-100 µL/s",
                &["Dispense Speed: 50-100 µL/s", "Delay Dispense: 300-500 ms", "Empty Speed: 100-150 µL/s"],
            ),
            air_gap: settings(
                "Small",
                "5-10 µL",
                &["Pre-Aspirate Air Gap: 0-5 µL", "Post-Aspirate Air Gap: 5-10 µL", "Empty Air Gap: 0 µL"],
            ),
            blowout: settings(
                "Extended",
                "Enhanced",
                &[
                    "Blowout Volume: 15-25 µL",
                    "Blowout Speed: 100-150 µL/s",
                    "Channel Pattern: All enabled",
                    "Extend Blowout Time: Yes",
                ],
            ),
            z_offset: settings(
                "Medium",
                "0.5-1.0 mm",
                &[
                    "Aspiration Immersion Depth: 0.5-1.0 mm",
                    "Dispense Immersion Depth: 0.5-1.0 mm",
                    "Bottom Report Offset: 0 mm",
                ],
            ),
            tips: settings(
                "Standard",
                "Standard or Wide Bore",
                &[
                    "Tip Type: Standard or Wide Bore",
                    "Tip Pattern: Full",
                    "Filter Tips: Optional",
                    "Tip Size: Match to volume",
                ],
            ),
        },
        LiquidClass {
            name: "Serum".to_string(),
            description: "For serum and protein-rich solutions".to_string(),
            aspirate_speed: settings(
                "Medium",
                "50-100 µL/s",
                &["Aspirate Speed: 50-100 µL/s", "Delay Aspirate: 200-400 ms", "Mixing Cycles: 3-5"],
            ),
            dispense_speed: settings(
                "Medium",
                "50-100 µL/s",
                &["Dispense Speed: 50-100 µL/s", "Delay Dispense: 200-400 ms", "Empty Speed: 100-200 µL/s"],
            ),
            air_gap: settings(
                "Medium",
                "10-15 µL",
                &["Pre-Aspirate Air Gap: 5 µL", "Post-Aspirate Air Gap: 5-10 µL", "Empty Air Gap: 0 µL"],
            ),
            blowout: settings(
                "Required",
                "Enhanced",
                &[
                    "Blowout Volume: 15-20 µL",
                    "Blowout Speed: 100-150 µL/s",
                    "Channel Pattern: All enabled",
                    "Tip Touch: Enabled",
                ],
            ),
            z_offset: settings(
                "Medium",
                "0.5-1.0 mm",
                &[
                    "Aspiration Immersion Depth: 0.5-1.0 mm",
                    "Dispense Immersion Depth: 0.5-1.0 mm",
                    "Bottom Report Offset: 0 mm",
                ],
            ),
            tips: settings(
                "Low Retention",
                "Low Retention",
                &[
                    "Tip Type: Low Retention",
                    "Tip Pattern: Full",
                    "Filter Tips: Recommended",
                    "Tip Touch Mode: Side wall",
                ],
            ),
        },
        LiquidClass {
            name: "Aqueous-Buffer".to_string(),
            description: "For common laboratory buffers".to_string(),
            aspirate_speed: settings(
                "Standard",
                "100-200 µL/s",
                &["Aspirate Speed: 100-200 µL/s", "Delay Aspirate: 50-100 ms", "Mixing Cycles: 3-5"],
            ),
            dispense_speed: settings(
                "Standard",
                "100-200 µL/s",
                &["Dispense Speed: 100-200 µL/s", "Delay Dispense: 50-100 ms", "Empty Speed: 200-300 µL/s"],
            ),
            air_gap: settings(
                "Small",
                "5-10 µL",
                &["Pre-Aspirate Air Gap: 0-5 µL", "Post-Aspirate Air Gap: 5 µL", "Empty Air Gap: 0 µL"],
            ),
            blowout: settings(
                "Required",
                "Standard",
                &["Blowout Volume: 10-15 µL", "Blowout Speed: 150-250 µL/s", "Channel Pattern: All enabled"],
            ),
            z_offset: settings(
                "Standard",
                "0.5-1.0 mm",
                &[
                    "Aspiration Immersion Depth: 0.5-1.0 mm",
                    "Dispense Immersion Depth: 0.5-1.0 mm",
                    "Bottom Report Offset: 0 mm",
                ],
            ),
            tips: settings(
                "Standard",
                "Standard",
                &[
                    "Tip Type: Standard",
                    "Tip Pattern: Full",
                    "Filter Tips: Optional for sterile applications",
                ],
            ),
        },
        LiquidClass {
            name: "Aqueous-Organic".to_string(),
            description: "For water-organic mixtures".to_string(),
            aspirate_speed: settings(
                "Medium",
                "75-150 µL/s",
                &["Aspirate Speed: 75-150 µL/s", "Delay Aspirate: 100-200 ms", "Mixing Cycles: 3-4"],
            ),
            dispense_speed: settings(
                "Medium",
                "75-150 µL/s",
                &["Dispense Speed: 75-150 µL/s", "Delay Dispense: 100-200 ms", "Empty Speed: 150-250 µL/s"],
            ),
            air_gap: settings(
                "Medium",
                "10-15 µL",
                &["Pre-Aspirate Air Gap: 5 µL", "Post-Aspirate Air Gap: 5-10 µL", "Empty Air Gap: 0 µL"],
            ),
            blowout: settings(
                "Required",
                "Enhanced",
                &["Blowout Volume: 10-20 µL", "Blowout Speed: 150-200 µL/s", "Channel Pattern: All enabled"],
            ),
            z_offset: settings(
                "Low",
                "0.3-0.8 mm",
                &[
                    "Aspiration Immersion Depth: 0.3-0.8 mm",
                    "Dispense Immersion Depth: 0.3-0.8 mm",
                    "Bottom Report Offset: 0.1 mm",
                ],
            ),
            tips: settings(
                "Conductive",
                "Conductive",
                &[
                    "Tip Type: Conductive",
                    "Tip Pattern: Full",
                    "Filter Tips: Recommended",
                    "Enable Tip Touch: Yes",
                ],
            ),
        },
    ]
}
