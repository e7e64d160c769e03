//! Patient roster data types.
//!
//! A `Patient` is identified by its `id` string. Of the whole record, only
//! `vital_signs` (perturbed by the simulation tick) and `is_acknowledged`
//! (flipped once by the acknowledge operation) ever change after seeding.
//! Risk scores are assigned at creation and are never recomputed from vitals.

use serde::{Deserialize, Serialize};

/// Systolic/diastolic pair, mmHg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BloodPressure {
    pub systolic: f64,
    pub diastolic: f64,
}

/// One patient's current vital signs.
///
/// The first six fields fluctuate on every simulation tick; `weight` and
/// `bsa` are measured once at admission and stay fixed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VitalSigns {
    /// Beats per minute.
    pub heart_rate: f64,
    /// Breaths per minute.
    pub respiratory_rate: f64,
    pub blood_pressure: BloodPressure,
    /// Peripheral oxygen saturation, percent.
    pub spo2: f64,
    /// Degrees Celsius.
    pub temperature: f64,
    /// Kilograms. Not perturbed.
    pub weight: f64,
    /// Body surface area, m². Not perturbed.
    pub bsa: f64,
}

/// Seven independent percentage-like risk scores.
///
/// These are display values seeded with the patient. The monitor never
/// derives them from vitals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskScores {
    pub sepsis: f64,
    pub ventilation_weaning: f64,
    pub delirium_risk: f64,
    pub renal_replacement: f64,
    pub mortality: f64,
    pub apache: f64,
    pub sofa: f64,
}

/// Three-way decomposition of where a patient's risk comes from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskBreakdown {
    /// Admission-time contribution (age, comorbidities).
    #[serde(rename = "static")]
    pub static_component: f64,
    /// Contribution from the evolving clinical course.
    pub dynamic: f64,
    /// Contribution from established, documented conditions.
    pub established: f64,
}

/// Overall severity bucket used to order and color the overview list.
///
/// Serialized as a lowercase string (`"critical"`, `"high"`, …).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Critical,
    High,
    Moderate,
    Low,
}

impl RiskLevel {
    /// Display sort rank: critical sorts first, low last.
    pub fn priority(self) -> u8 {
        match self {
            RiskLevel::Critical => 0,
            RiskLevel::High => 1,
            RiskLevel::Moderate => 2,
            RiskLevel::Low => 3,
        }
    }

    /// Lowercase name matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Critical => "critical",
            RiskLevel::High => "high",
            RiskLevel::Moderate => "moderate",
            RiskLevel::Low => "low",
        }
    }
}

/// Before/after risk effect of a recorded intervention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterventionImpact {
    pub before: f64,
    pub after: f64,
}

/// A clinical intervention recorded against a patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intervention {
    pub id: String,
    /// ISO-8601 timestamp string as recorded by the charting system.
    pub timestamp: String,
    pub kind: String,
    pub description: String,
    pub impact: InterventionImpact,
}

/// Priority of a care task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

/// Category of a care task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Medication,
    Assessment,
    Procedure,
    Other,
}

/// A pending or completed item on a patient's care checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareTask {
    pub id: String,
    pub description: String,
    pub priority: TaskPriority,
    pub deadline: String,
    pub completed: bool,
    pub kind: TaskKind,
}

/// One monitored ICU patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    /// Globally unique identifier, e.g. "ICU-2024-001".
    pub id: String,
    pub name: String,
    pub age: u32,
    pub room: String,
    pub bed_number: String,
    /// Admission date, YYYY-MM-DD.
    pub admission_date: String,
    pub diagnosis: String,
    pub doctor_name: String,
    /// Days since admission.
    pub length_of_stay: u32,
    pub vital_signs: VitalSigns,
    pub risk_scores: RiskScores,
    pub risk_breakdown: RiskBreakdown,
    pub risk_level: RiskLevel,
    pub interventions: Vec<Intervention>,
    pub tasks: Vec<CareTask>,
    /// Set once by the acknowledge operation; there is no way to unset it.
    pub is_acknowledged: bool,
}
