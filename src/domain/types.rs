// ==========================================
// Scan-to-BIM CPQ - Domain Type Definitions
// ==========================================
// Responsibility: closed enumerations shared by the pricing engines
// Serialization: wire codes match the quote configurator payloads
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Discipline
// ==========================================
// A professional scope category priced independently per area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Discipline {
    Architecture,
    Structural,
    Mep,
    Site,
}

impl Discipline {
    /// All disciplines, in line-item emission order.
    pub const ALL: [Discipline; 4] = [
        Discipline::Architecture,
        Discipline::Structural,
        Discipline::Mep,
        Discipline::Site,
    ];

    /// Human label used in line items.
    pub fn label(&self) -> &'static str {
        match self {
            Discipline::Architecture => "Architecture",
            Discipline::Structural => "Structural",
            Discipline::Mep => "MEP",
            Discipline::Site => "Site",
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discipline::Architecture => write!(f, "architecture"),
            Discipline::Structural => write!(f, "structural"),
            Discipline::Mep => write!(f, "mep"),
            Discipline::Site => write!(f, "site"),
        }
    }
}

// ==========================================
// Level of Detail (LOD)
// ==========================================
// Higher LOD always implies a higher or equal per-unit rate.
// The rate tables enforce this with a monotonic multiplier ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Lod {
    #[serde(rename = "100")]
    Lod100,
    #[serde(rename = "200")]
    Lod200,
    #[serde(rename = "300")]
    Lod300,
    #[serde(rename = "350")]
    Lod350,
    #[serde(rename = "400")]
    Lod400,
}

impl Lod {
    /// All levels, ascending.
    pub const ALL: [Lod; 5] = [
        Lod::Lod100,
        Lod::Lod200,
        Lod::Lod300,
        Lod::Lod350,
        Lod::Lod400,
    ];

    /// Numeric LOD code.
    pub fn code(&self) -> u16 {
        match self {
            Lod::Lod100 => 100,
            Lod::Lod200 => 200,
            Lod::Lod300 => 300,
            Lod::Lod350 => 350,
            Lod::Lod400 => 400,
        }
    }
}

impl fmt::Display for Lod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LOD {}", self.code())
    }
}

// ==========================================
// Scope
// ==========================================
// Qualifier selecting the rate sub-row for a standard area.
// Absent scope defaults to a full-building assumption.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    #[default]
    Full,
    Interior,
    Exterior,
    Mixed,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Full => write!(f, "full"),
            Scope::Interior => write!(f, "interior"),
            Scope::Exterior => write!(f, "exterior"),
            Scope::Mixed => write!(f, "mixed"),
        }
    }
}

// ==========================================
// Landscape Type
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LandscapeType {
    #[serde(rename = "landscape_natural")]
    Natural,
    #[serde(rename = "landscape_built")]
    Built,
}

impl LandscapeType {
    pub fn label(&self) -> &'static str {
        match self {
            LandscapeType::Natural => "Natural Landscape",
            LandscapeType::Built => "Built Landscape",
        }
    }
}

impl fmt::Display for LandscapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==========================================
// Dispatch Location
// ==========================================
// Closed enumeration: an unsupported origin is rejected at the serde
// parsing boundary, not silently priced at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DispatchLocation {
    Woodstock,
    Brooklyn,
    FlyOut,
}

impl DispatchLocation {
    pub fn label(&self) -> &'static str {
        match self {
            DispatchLocation::Woodstock => "Woodstock, NY",
            DispatchLocation::Brooklyn => "Brooklyn, NY",
            DispatchLocation::FlyOut => "Out of State (Fly-out)",
        }
    }
}

impl fmt::Display for DispatchLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchLocation::Woodstock => write!(f, "WOODSTOCK"),
            DispatchLocation::Brooklyn => write!(f, "BROOKLYN"),
            DispatchLocation::FlyOut => write!(f, "FLY_OUT"),
        }
    }
}

// ==========================================
// Payment Terms
// ==========================================
// Split terms carry deposit-schedule metadata for downstream proposal
// generation; they never adjust price in this engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentTerms {
    #[default]
    #[serde(rename = "standard")]
    Standard,
    #[serde(rename = "net15")]
    Net15,
    #[serde(rename = "net30")]
    Net30,
    #[serde(rename = "net45")]
    Net45,
    #[serde(rename = "net60")]
    Net60,
    #[serde(rename = "prepaid")]
    Prepaid,
    #[serde(rename = "50_50")]
    Split5050,
    #[serde(rename = "25_75")]
    Split2575,
}

impl PaymentTerms {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentTerms::Standard => "Standard",
            PaymentTerms::Net15 => "Net 15",
            PaymentTerms::Net30 => "Net 30",
            PaymentTerms::Net45 => "Net 45",
            PaymentTerms::Net60 => "Net 60",
            PaymentTerms::Prepaid => "Prepaid",
            PaymentTerms::Split5050 => "50% Deposit / 50% on Completion",
            PaymentTerms::Split2575 => "25% Deposit / 75% on Completion",
        }
    }
}

impl fmt::Display for PaymentTerms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==========================================
// Risk Factor
// ==========================================
// Costed site risks. The premium percentage lives in the rate tables;
// premiums are additive and apply to architecture client value only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskFactor {
    #[serde(rename = "occupied")]
    Occupied,
    #[serde(rename = "hazardous")]
    Hazardous,
    #[serde(rename = "noPower")]
    NoPower,
}

impl RiskFactor {
    pub fn label(&self) -> &'static str {
        match self {
            RiskFactor::Occupied => "Occupied Building",
            RiskFactor::Hazardous => "Hazardous Conditions",
            RiskFactor::NoPower => "No Power / HVAC",
        }
    }
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==========================================
// Additional Service
// ==========================================
// Flat catalog items priced per unit, independent of area size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceCode {
    #[serde(rename = "matterport")]
    Matterport,
    #[serde(rename = "georeferencing")]
    Georeferencing,
    #[serde(rename = "actScanning")]
    ActScanning,
    #[serde(rename = "scanRegistrationOnly")]
    ScanRegistrationOnly,
    #[serde(rename = "expedited")]
    Expedited,
}

impl fmt::Display for ServiceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceCode::Matterport => write!(f, "matterport"),
            ServiceCode::Georeferencing => write!(f, "georeferencing"),
            ServiceCode::ActScanning => write!(f, "actScanning"),
            ServiceCode::ScanRegistrationOnly => write!(f, "scanRegistrationOnly"),
            ServiceCode::Expedited => write!(f, "expedited"),
        }
    }
}

// ==========================================
// Tier-A Margin Multiplier
// ==========================================
// Fixed enumerated multipliers for cost-plus-margin pricing.
// `clientPrice = (scanning + modeling) x multiplier`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TierAMargin {
    #[serde(rename = "2.352")]
    Standard,
    #[serde(rename = "2.5")]
    Growth,
    #[serde(rename = "3.0")]
    Premium,
}

impl TierAMargin {
    /// The multiplier applied to the scanning + modeling subtotal.
    pub fn value(&self) -> f64 {
        match self {
            TierAMargin::Standard => 2.352,
            TierAMargin::Growth => 2.5,
            TierAMargin::Premium => 3.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TierAMargin::Standard => "2.352X (Standard)",
            TierAMargin::Growth => "2.5X (Growth)",
            TierAMargin::Premium => "3.0X (Premium)",
        }
    }
}

impl fmt::Display for TierAMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==========================================
// Tier-A Scanning Cost Preset
// ==========================================
// The configurator offers fixed scanning-cost presets (full field days)
// plus a free-form override.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TierAScanningCost {
    #[serde(rename = "3500")]
    HalfDay,
    #[serde(rename = "7000")]
    OneDay,
    #[serde(rename = "10500")]
    DayAndHalf,
    #[serde(rename = "15000")]
    TwoDays,
    #[serde(rename = "18500")]
    TwoDaysAndHalf,
    #[serde(rename = "other")]
    Other,
}

impl TierAScanningCost {
    /// Resolve the preset to dollars; `Other` takes the caller-supplied
    /// override and degrades to 0 when it is absent.
    pub fn resolve(&self, other: Option<f64>) -> f64 {
        match self {
            TierAScanningCost::HalfDay => 3_500.0,
            TierAScanningCost::OneDay => 7_000.0,
            TierAScanningCost::DayAndHalf => 10_500.0,
            TierAScanningCost::TwoDays => 15_000.0,
            TierAScanningCost::TwoDaysAndHalf => 18_500.0,
            TierAScanningCost::Other => other.filter(|v| v.is_finite() && *v > 0.0).unwrap_or(0.0),
        }
    }
}

// ==========================================
// Margin Status
// ==========================================
// Band classification over the computed margin percent.
// Ordering matters: a higher percent never yields a worse status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarginStatus {
    Blocked,
    Healthy,
    Excellent,
}

impl fmt::Display for MarginStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarginStatus::Blocked => write!(f, "blocked"),
            MarginStatus::Healthy => write!(f, "healthy"),
            MarginStatus::Excellent => write!(f, "excellent"),
        }
    }
}
