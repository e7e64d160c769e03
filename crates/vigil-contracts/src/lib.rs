//! # vigil-contracts
//!
//! Shared data types for the VIGIL patient monitor.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only data definitions and error types.

pub mod error;
pub mod patient;

pub use error::{VigilError, VigilResult};
pub use patient::{
    BloodPressure, CareTask, Intervention, InterventionImpact, Patient, RiskBreakdown, RiskLevel,
    RiskScores, TaskKind, TaskPriority, VitalSigns,
};

#[cfg(test)]
mod tests {
    use super::*;

    // ── RiskLevel ordering ───────────────────────────────────────────────────

    #[test]
    fn risk_level_priority_orders_critical_first() {
        assert!(RiskLevel::Critical.priority() < RiskLevel::High.priority());
        assert!(RiskLevel::High.priority() < RiskLevel::Moderate.priority());
        assert!(RiskLevel::Moderate.priority() < RiskLevel::Low.priority());
    }

    #[test]
    fn risk_level_as_str_matches_wire_form() {
        for level in [
            RiskLevel::Critical,
            RiskLevel::High,
            RiskLevel::Moderate,
            RiskLevel::Low,
        ] {
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(json, format!("\"{}\"", level.as_str()));
        }
    }

    // ── RiskLevel serde round-trip ───────────────────────────────────────────

    #[test]
    fn risk_level_round_trips() {
        let original = RiskLevel::Critical;
        let json = serde_json::to_string(&original).unwrap();
        assert_eq!(json, "\"critical\"");
        let decoded: RiskLevel = serde_json::from_str(&json).unwrap();
        assert_eq!(original, decoded);
    }

    #[test]
    fn risk_breakdown_static_field_keeps_original_name() {
        let breakdown = RiskBreakdown {
            static_component: 35.0,
            dynamic: 45.0,
            established: 20.0,
        };
        let json = serde_json::to_value(&breakdown).unwrap();
        // The charting systems upstream expect the reserved-word key.
        assert_eq!(json["static"], 35.0);
        assert_eq!(json["dynamic"], 45.0);
    }

    // ── VigilError display messages ──────────────────────────────────────────

    #[test]
    fn error_config_display() {
        let err = VigilError::ConfigError {
            reason: "missing monitor.toml".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("missing monitor.toml"));
    }

    #[test]
    fn error_scheduler_display() {
        let err = VigilError::SchedulerError {
            reason: "tick channel closed".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("scheduler error"));
        assert!(msg.contains("tick channel closed"));
    }
}
