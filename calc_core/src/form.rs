//! # Design Form
//!
//! The catalogue of labelled input fields and the [`DesignForm`] that holds
//! what the user typed or picked for each of them.
//!
//! Fields are grouped into four [`FormSection`]s. Each field is either free
//! text (a hint describes the typical range) or a choice from a fixed list.
//! The form stores raw strings only; interpretation happens in
//! [`crate::checks`].
//!
//! ## Example
//!
//! ```rust
//! use calc_core::form::{DesignForm, FieldId};
//!
//! let mut form = DesignForm::new();
//! form.set(FieldId::NumberOfBolts, "3");
//! form.set_by_label("Bolt Diameter (mm)", "12").unwrap();
//!
//! let entries = form.selected_entries();
//! assert_eq!(entries.len(), 2);
//! assert_eq!(entries[0], (FieldId::NumberOfBolts, "3"));
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Placeholder shown by an untouched choice field. Never counts as a value.
pub const UNSELECTED: &str = "Select";

const STEEL_GRADES: &[&str] = &["E 250", "E 300", "E 350", "E 410"];

/// Titled group of fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FormSection {
    General,
    Bolt,
    Detailing,
    Plate,
}

impl FormSection {
    /// All sections in display order
    pub const ALL: [FormSection; 4] = [
        FormSection::General,
        FormSection::Bolt,
        FormSection::Detailing,
        FormSection::Plate,
    ];

    /// Heading shown above the group
    pub fn title(&self) -> &'static str {
        match self {
            FormSection::General => "General Input Parameters: ",
            FormSection::Bolt => "Bolt Details - Input and Design Preference: ",
            FormSection::Detailing => "Detailing - Design Preference: ",
            FormSection::Plate => "Plate Details - Input and Design Preference:",
        }
    }

    /// Fields belonging to this section, in display order
    pub fn fields(self) -> impl Iterator<Item = FieldId> {
        FieldId::ALL.into_iter().filter(move |f| f.section() == self)
    }
}

/// How a field is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Typed value; `hint` describes the typical range
    FreeText { hint: &'static str },
    /// One of a fixed list of options
    Choice { options: &'static [&'static str] },
}

impl FieldKind {
    pub fn is_choice(&self) -> bool {
        matches!(self, FieldKind::Choice { .. })
    }
}

/// Every labelled field on the form.
///
/// Declaration order is display order; `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldId {
    AxialLoad,
    Length,
    SectionProfile,
    SectionSize,
    Material,
    UltimateStrength,
    YieldStrength,
    NumberOfBolts,
    BoltDiameter,
    BoltPropertyClass,
    BoltType,
    HoleType,
    EdgePreparation,
    CorrosiveInfluence,
    PlateThickness,
    PlateMaterial,
}

impl FieldId {
    /// All fields in display order
    pub const ALL: [FieldId; 16] = [
        FieldId::AxialLoad,
        FieldId::Length,
        FieldId::SectionProfile,
        FieldId::SectionSize,
        FieldId::Material,
        FieldId::UltimateStrength,
        FieldId::YieldStrength,
        FieldId::NumberOfBolts,
        FieldId::BoltDiameter,
        FieldId::BoltPropertyClass,
        FieldId::BoltType,
        FieldId::HoleType,
        FieldId::EdgePreparation,
        FieldId::CorrosiveInfluence,
        FieldId::PlateThickness,
        FieldId::PlateMaterial,
    ];

    /// Display label, also the key used in JSON input
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::AxialLoad => "Axial Load (kN)",
            FieldId::Length => "Length (mm)",
            FieldId::SectionProfile => "Section Profiles",
            FieldId::SectionSize => "Section Size",
            FieldId::Material => "Material",
            FieldId::UltimateStrength => "Ultimate Strength, Fu (MPa)",
            FieldId::YieldStrength => "Yield Strength, Fy (MPa)",
            FieldId::NumberOfBolts => "Number of Bolts",
            FieldId::BoltDiameter => "Bolt Diameter (mm)",
            FieldId::BoltPropertyClass => "Bolt Property Class",
            FieldId::BoltType => "Bolt Type",
            FieldId::HoleType => "Hole Type",
            FieldId::EdgePreparation => "Edge Preparation",
            FieldId::CorrosiveInfluence => "Corrosive Influence",
            FieldId::PlateThickness => "Thickness (mm)",
            FieldId::PlateMaterial => "Plate Material",
        }
    }

    /// Look a field up by its display label (surrounding whitespace ignored)
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        FieldId::ALL.into_iter().find(|f| f.label() == label)
    }

    pub fn section(&self) -> FormSection {
        match self {
            FieldId::AxialLoad
            | FieldId::Length
            | FieldId::SectionProfile
            | FieldId::SectionSize
            | FieldId::Material
            | FieldId::UltimateStrength
            | FieldId::YieldStrength => FormSection::General,
            FieldId::NumberOfBolts
            | FieldId::BoltDiameter
            | FieldId::BoltPropertyClass
            | FieldId::BoltType
            | FieldId::HoleType => FormSection::Bolt,
            FieldId::EdgePreparation | FieldId::CorrosiveInfluence => FormSection::Detailing,
            FieldId::PlateThickness | FieldId::PlateMaterial => FormSection::Plate,
        }
    }

    pub fn kind(&self) -> FieldKind {
        use FieldKind::{Choice, FreeText};

        match self {
            FieldId::AxialLoad => FreeText { hint: "Typical: 50 - 500 kN" },
            FieldId::Length => FreeText { hint: "Typical: 500 - 5000 mm" },
            FieldId::SectionProfile => Choice {
                options: &["Angles", "Channels", "Beams", "Pipes", "RHS", "CHS"],
            },
            FieldId::SectionSize => Choice {
                options: &["40 x 40 x 5", "50 x 50 x 6", "60 x 60 x 6", "75 x 75 x 8", "100 x 100 x 10"],
            },
            FieldId::Material => Choice { options: STEEL_GRADES },
            FieldId::UltimateStrength => Choice {
                options: &["410", "450", "500", "550", "600"],
            },
            FieldId::YieldStrength => Choice {
                options: &["250", "300", "350", "410", "450", "500"],
            },
            FieldId::NumberOfBolts => FreeText { hint: "Typical: 2 - 20" },
            FieldId::BoltDiameter => Choice {
                options: &["8", "10", "12", "16", "20"],
            },
            FieldId::BoltPropertyClass => Choice {
                options: &["4.6", "5.6", "8.8", "10.9"],
            },
            FieldId::BoltType => Choice {
                options: &["Bearing Bolt", "Friction Grip Bolt"],
            },
            FieldId::HoleType => Choice {
                options: &["Standard", "Oversized", "Slotted", "Long Slotted"],
            },
            FieldId::EdgePreparation => Choice {
                options: &["Sheared Cut", "Machine Cut", "Saw Cut"],
            },
            FieldId::CorrosiveInfluence => Choice { options: &["Yes", "No"] },
            FieldId::PlateThickness => FreeText { hint: "Typical: 8 - 120 mm" },
            FieldId::PlateMaterial => Choice { options: STEEL_GRADES },
        }
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// True when a raw field value counts as "nothing entered".
pub fn is_blank(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value == UNSELECTED
}

/// Raw values for every field on the form.
///
/// Serializes as a JSON object keyed by field label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct DesignForm {
    values: BTreeMap<FieldId, String>,
}

impl Default for DesignForm {
    fn default() -> Self {
        Self::new()
    }
}

impl DesignForm {
    /// Create a form with every field empty
    pub fn new() -> Self {
        DesignForm {
            values: FieldId::ALL.into_iter().map(|f| (f, String::new())).collect(),
        }
    }

    /// Raw value of a field, exactly as entered
    pub fn get(&self, field: FieldId) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Store a raw value. No validation; choice widgets only offer valid options.
    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Store a value addressed by label, checking choice values against the
    /// field's options.
    ///
    /// A blank value (or the `"Select"` placeholder) clears the field.
    pub fn set_by_label(&mut self, label: &str, value: &str) -> CalcResult<FieldId> {
        let field = FieldId::from_label(label).ok_or_else(|| CalcError::unknown_field(label))?;

        if is_blank(value) {
            self.set(field, "");
            return Ok(field);
        }

        if let FieldKind::Choice { options } = field.kind() {
            let value = value.trim();
            if !options.contains(&value) {
                return Err(CalcError::invalid_input(
                    field.label(),
                    value,
                    format!("Expected one of: {}", options.join(", ")),
                ));
            }
            self.set(field, value);
        } else {
            self.set(field, value);
        }

        Ok(field)
    }

    /// Reset every field to empty
    pub fn clear(&mut self) {
        for value in self.values.values_mut() {
            value.clear();
        }
    }

    /// Fields that hold a value, trimmed, in display order.
    ///
    /// Empty values and the `"Select"` placeholder are skipped.
    pub fn selected_entries(&self) -> Vec<(FieldId, &str)> {
        self.values
            .iter()
            .filter(|(_, v)| !is_blank(v))
            .map(|(f, v)| (*f, v.trim()))
            .collect()
    }

    /// True when nothing has been entered yet
    pub fn is_empty(&self) -> bool {
        self.values.values().all(|v| is_blank(v))
    }
}

impl TryFrom<BTreeMap<String, String>> for DesignForm {
    type Error = CalcError;

    fn try_from(map: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        let mut form = DesignForm::new();
        for (label, value) in &map {
            form.set_by_label(label, value)?;
        }
        Ok(form)
    }
}

impl From<DesignForm> for BTreeMap<String, String> {
    fn from(form: DesignForm) -> Self {
        form.values
            .into_iter()
            .map(|(f, v)| (f.label().to_string(), v))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_shape() {
        assert_eq!(FormSection::General.fields().count(), 7);
        assert_eq!(FormSection::Bolt.fields().count(), 5);
        assert_eq!(FormSection::Detailing.fields().count(), 2);
        assert_eq!(FormSection::Plate.fields().count(), 2);

        let free_text: Vec<_> = FieldId::ALL
            .into_iter()
            .filter(|f| !f.kind().is_choice())
            .collect();
        assert_eq!(
            free_text,
            vec![
                FieldId::AxialLoad,
                FieldId::Length,
                FieldId::NumberOfBolts,
                FieldId::PlateThickness
            ]
        );
    }

    #[test]
    fn test_labels_round_trip() {
        for field in FieldId::ALL {
            assert_eq!(FieldId::from_label(field.label()), Some(field));
        }
        assert_eq!(FieldId::from_label("  Bolt Type "), Some(FieldId::BoltType));
        assert_eq!(FieldId::from_label("Bolt Colour"), None);
    }

    #[test]
    fn test_sections_follow_display_order() {
        let flattened: Vec<FieldId> = FormSection::ALL.iter().flat_map(|s| s.fields()).collect();
        assert_eq!(flattened, FieldId::ALL.to_vec());
    }

    #[test]
    fn test_selected_entries_skip_blank_and_placeholder() {
        let mut form = DesignForm::new();
        form.set(FieldId::Length, "  2000 ");
        form.set(FieldId::Material, UNSELECTED);
        form.set(FieldId::AxialLoad, "   ");
        form.set(FieldId::BoltType, "Bearing Bolt");

        let entries = form.selected_entries();
        assert_eq!(
            entries,
            vec![(FieldId::Length, "2000"), (FieldId::BoltType, "Bearing Bolt")]
        );
    }

    #[test]
    fn test_set_by_label_validates_choices() {
        let mut form = DesignForm::new();
        assert!(form.set_by_label("Bolt Diameter (mm)", "16").is_ok());
        assert_eq!(form.get(FieldId::BoltDiameter), "16");

        let err = form.set_by_label("Bolt Diameter (mm)", "14").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let err = form.set_by_label("Paint", "Red").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_FIELD");

        // Free text accepts anything; checks validate later
        assert!(form.set_by_label("Number of Bolts", "lots").is_ok());

        // Placeholder clears
        form.set_by_label("Bolt Diameter (mm)", "Select").unwrap();
        assert_eq!(form.get(FieldId::BoltDiameter), "");
    }

    #[test]
    fn test_clear() {
        let mut form = DesignForm::new();
        form.set(FieldId::PlateThickness, "12");
        assert!(!form.is_empty());
        form.clear();
        assert!(form.is_empty());
        assert_eq!(form.get(FieldId::PlateThickness), "");
    }

    #[test]
    fn test_json_keyed_by_label() {
        let json = r#"{ "Number of Bolts": "2", "Yield Strength, Fy (MPa)": "300" }"#;
        let form: DesignForm = serde_json::from_str(json).unwrap();
        assert_eq!(form.get(FieldId::NumberOfBolts), "2");
        assert_eq!(form.get(FieldId::YieldStrength), "300");

        let out = serde_json::to_value(&form).unwrap();
        assert_eq!(out["Number of Bolts"], "2");
        assert_eq!(out["Plate Material"], "");

        let bad = r#"{ "Yield Strength, Fy (MPa)": "275" }"#;
        assert!(serde_json::from_str::<DesignForm>(bad).is_err());
    }
}
