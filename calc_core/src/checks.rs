//! # Design Checks
//!
//! The four pass/fail checks run against a bolted tension member:
//!
//! | Check          | Quantity                    | Passes when     |
//! |----------------|-----------------------------|-----------------|
//! | Edge Distance  | e_min = 1.5 d0              | e_min < 15      |
//! | Spacing        | depth = 2e + (n - 1) g      | depth <= 29.5   |
//! | Slenderness    | lambda = L / 7.8            | lambda <= 400   |
//! | Tension Member | T_dg = 381 fy / 1100        | T_dg >= 86.59   |
//!
//! with e = 15 mm and g = 20 mm. These are fixed screening formulas, not a
//! design-code implementation.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::checks::{check_design, CheckKind};
//! use calc_core::form::{DesignForm, FieldId};
//!
//! let mut form = DesignForm::new();
//! form.set(FieldId::BoltDiameter, "8");
//! form.set(FieldId::NumberOfBolts, "2");
//! form.set(FieldId::Length, "2000");
//! form.set(FieldId::YieldStrength, "250");
//!
//! let result = check_design(&form).unwrap();
//! assert!(result.get(CheckKind::EdgeDistance).unwrap().passes);
//! assert!(!result.get(CheckKind::Spacing).unwrap().passes);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{CalcError, CalcResult};
use crate::form::{DesignForm, FieldId};

/// Edge distance used by the spacing check (mm)
pub const EDGE_DISTANCE_MM: f64 = 15.0;
/// Gauge between bolt lines used by the spacing check (mm)
pub const GAUGE_MM: f64 = 20.0;

const EDGE_LIMIT_MM: f64 = 15.0;
const DEPTH_LIMIT_MM: f64 = 29.5;
const RADIUS_OF_GYRATION_MM: f64 = 7.8;
const SLENDERNESS_LIMIT: f64 = 400.0;
const GROSS_AREA_MM2: f64 = 381.0;
const TENSION_DIVISOR: f64 = 1100.0;
const TENSION_DEMAND_KN: f64 = 86.59;

/// The four checks, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckKind {
    EdgeDistance,
    Spacing,
    Slenderness,
    TensionMember,
}

impl CheckKind {
    pub const ALL: [CheckKind; 4] = [
        CheckKind::EdgeDistance,
        CheckKind::Spacing,
        CheckKind::Slenderness,
        CheckKind::TensionMember,
    ];

    /// Name used in the results summary
    pub fn name(&self) -> &'static str {
        match self {
            CheckKind::EdgeDistance => "Edge Distance",
            CheckKind::Spacing => "Spacing",
            CheckKind::Slenderness => "Slenderness",
            CheckKind::TensionMember => "Tension Member",
        }
    }
}

impl std::fmt::Display for CheckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parsed numeric inputs for the checks.
///
/// Each value was entered as a whole number. Whole numbers too large for
/// `i64` are kept as their nearest `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignInput {
    /// Bolt diameter d0 in mm
    pub bolt_diameter_mm: f64,
    /// Number of bolts n
    pub bolt_count: f64,
    /// Member length L in mm
    pub length_mm: f64,
    /// Yield strength fy in MPa
    pub fy_mpa: f64,
}

impl DesignInput {
    /// Extract and parse the four check inputs from the form.
    ///
    /// Bolt count and length are typed by the user, so an empty value is
    /// reported as missing. Every value must parse as a whole number, with
    /// an optional sign and `_` between digit groups; an unselected choice
    /// fails the same way.
    pub fn from_form(form: &DesignForm) -> CalcResult<Self> {
        for field in [FieldId::NumberOfBolts, FieldId::Length] {
            if form.get(field).trim().is_empty() {
                return Err(CalcError::missing_field(field.label()));
            }
        }

        Ok(DesignInput {
            bolt_diameter_mm: parse_whole(form, FieldId::BoltDiameter)?,
            bolt_count: parse_whole(form, FieldId::NumberOfBolts)?,
            length_mm: parse_whole(form, FieldId::Length)?,
            fy_mpa: parse_whole(form, FieldId::YieldStrength)?,
        })
    }
}

fn parse_whole(form: &DesignForm, field: FieldId) -> CalcResult<f64> {
    let raw = form.get(field);
    whole_number(raw.trim())
        .ok_or_else(|| CalcError::invalid_input(field.label(), raw, "Expected a whole number"))
}

/// Parse `[+-]digits` where single underscores may separate digit groups.
fn whole_number(text: &str) -> Option<f64> {
    let digits = text.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(text);
    let well_formed = !digits.is_empty()
        && digits
            .split('_')
            .all(|group| !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit()));
    if !well_formed {
        return None;
    }

    let cleaned: String = text.chars().filter(|&c| c != '_').collect();
    match cleaned.parse::<i64>() {
        Ok(value) => Some(value as f64),
        // Too large for i64
        Err(_) => cleaned.parse::<f64>().ok(),
    }
}

/// One evaluated check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub kind: CheckKind,
    /// Computed quantity
    pub value: f64,
    /// Limit it is compared against
    pub limit: f64,
    pub passes: bool,
}

impl CheckOutcome {
    pub fn status(&self) -> &'static str {
        if self.passes { "Pass" } else { "Fail" }
    }
}

/// Outcome of all four checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignCheckResult {
    pub input: DesignInput,
    /// One outcome per [`CheckKind`], in [`CheckKind::ALL`] order
    pub checks: Vec<CheckOutcome>,
}

impl DesignCheckResult {
    /// True when every check passes
    pub fn passes(&self) -> bool {
        self.checks.iter().all(|c| c.passes)
    }

    pub fn failing(&self) -> Vec<CheckKind> {
        self.checks.iter().filter(|c| !c.passes).map(|c| c.kind).collect()
    }

    pub fn get(&self, kind: CheckKind) -> Option<&CheckOutcome> {
        self.checks.iter().find(|c| c.kind == kind)
    }

    /// Four lines, `"<Name> Check: Pass|Fail"`
    pub fn summary_text(&self) -> String {
        self.checks
            .iter()
            .map(|c| format!("{} Check: {}", c.kind.name(), c.status()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Run the four checks on already-parsed input.
pub fn evaluate(input: &DesignInput) -> DesignCheckResult {
    let d0 = input.bolt_diameter_mm;
    let n = input.bolt_count;
    let length = input.length_mm;
    let fy = input.fy_mpa;

    let e_min = 1.5 * d0;
    let depth = 2.0 * EDGE_DISTANCE_MM + (n - 1.0) * GAUGE_MM;
    let slenderness = length / RADIUS_OF_GYRATION_MM;
    let tdg = (GROSS_AREA_MM2 * fy) / TENSION_DIVISOR;

    debug!(e_min, depth, slenderness, tdg, "evaluated design checks");

    let checks = vec![
        CheckOutcome {
            kind: CheckKind::EdgeDistance,
            value: e_min,
            limit: EDGE_LIMIT_MM,
            passes: e_min < EDGE_LIMIT_MM,
        },
        CheckOutcome {
            kind: CheckKind::Spacing,
            value: depth,
            limit: DEPTH_LIMIT_MM,
            passes: depth <= DEPTH_LIMIT_MM,
        },
        CheckOutcome {
            kind: CheckKind::Slenderness,
            value: slenderness,
            limit: SLENDERNESS_LIMIT,
            passes: slenderness <= SLENDERNESS_LIMIT,
        },
        CheckOutcome {
            kind: CheckKind::TensionMember,
            value: tdg,
            limit: TENSION_DEMAND_KN,
            passes: tdg >= TENSION_DEMAND_KN,
        },
    ];

    DesignCheckResult {
        input: *input,
        checks,
    }
}

/// Validate the form and run the checks.
pub fn check_design(form: &DesignForm) -> CalcResult<DesignCheckResult> {
    let input = DesignInput::from_form(form).inspect_err(|e| {
        warn!(error = %e, "design check input rejected");
    })?;
    Ok(evaluate(&input))
}
