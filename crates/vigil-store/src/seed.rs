//! Seeded patient roster for the VIGIL monitor.
//!
//! All data in this module is hardcoded and fictional. No external systems
//! are contacted. This module acts as a stand-in for a real bedside data feed
//! in a production deployment.
//!
//! The roster is seeded once at startup and never grows or shrinks; only
//! `vital_signs` and `is_acknowledged` change over a session.

use vigil_contracts::{
    BloodPressure, Patient, RiskBreakdown, RiskLevel, RiskScores, VitalSigns,
};

/// The four seeded ICU patients.
///
/// One patient (ICU-2024-001, septic shock) starts critical and
/// unacknowledged, so a fresh session always shows an active alert.
pub fn initial_roster() -> Vec<Patient> {
    vec![
        Patient {
            id: "ICU-2024-001".to_string(),
            name: "John Doe".to_string(),
            age: 65,
            room: "ICU-A".to_string(),
            bed_number: "A-101".to_string(),
            admission_date: "2024-02-20".to_string(),
            diagnosis: "Septic Shock".to_string(),
            doctor_name: "Dr. Sarah Chen".to_string(),
            length_of_stay: 5,
            vital_signs: VitalSigns {
                heart_rate: 110.0,
                respiratory_rate: 22.0,
                blood_pressure: BloodPressure {
                    systolic: 95.0,
                    diastolic: 60.0,
                },
                spo2: 92.0,
                temperature: 38.5,
                weight: 82.5,
                bsa: 1.98,
            },
            risk_scores: RiskScores {
                sepsis: 75.0,
                ventilation_weaning: 45.0,
                delirium_risk: 30.0,
                renal_replacement: 60.0,
                mortality: 68.0,
                apache: 85.0,
                sofa: 12.0,
            },
            risk_breakdown: RiskBreakdown {
                static_component: 35.0,
                dynamic: 45.0,
                established: 20.0,
            },
            risk_level: RiskLevel::Critical,
            interventions: vec![],
            tasks: vec![],
            is_acknowledged: false,
        },
        Patient {
            id: "ICU-2024-002".to_string(),
            name: "Maria Garcia".to_string(),
            age: 54,
            room: "ICU-A".to_string(),
            bed_number: "A-102".to_string(),
            admission_date: "2024-02-22".to_string(),
            diagnosis: "Acute Respiratory Failure".to_string(),
            doctor_name: "Dr. James Wilson".to_string(),
            length_of_stay: 3,
            vital_signs: VitalSigns {
                heart_rate: 95.0,
                respiratory_rate: 26.0,
                blood_pressure: BloodPressure {
                    systolic: 135.0,
                    diastolic: 85.0,
                },
                spo2: 89.0,
                temperature: 37.8,
                weight: 65.0,
                bsa: 1.72,
            },
            risk_scores: RiskScores {
                sepsis: 45.0,
                ventilation_weaning: 65.0,
                delirium_risk: 25.0,
                renal_replacement: 30.0,
                mortality: 42.0,
                apache: 65.0,
                sofa: 8.0,
            },
            risk_breakdown: RiskBreakdown {
                static_component: 25.0,
                dynamic: 35.0,
                established: 40.0,
            },
            risk_level: RiskLevel::High,
            interventions: vec![],
            tasks: vec![],
            is_acknowledged: true,
        },
        Patient {
            id: "ICU-2024-003".to_string(),
            name: "Robert Smith".to_string(),
            age: 72,
            room: "ICU-B".to_string(),
            bed_number: "B-101".to_string(),
            admission_date: "2024-02-21".to_string(),
            diagnosis: "Post-CABG Recovery".to_string(),
            doctor_name: "Dr. Michael Chang".to_string(),
            length_of_stay: 4,
            vital_signs: VitalSigns {
                heart_rate: 88.0,
                respiratory_rate: 18.0,
                blood_pressure: BloodPressure {
                    systolic: 128.0,
                    diastolic: 75.0,
                },
                spo2: 95.0,
                temperature: 36.9,
                weight: 78.2,
                bsa: 1.89,
            },
            risk_scores: RiskScores {
                sepsis: 25.0,
                ventilation_weaning: 35.0,
                delirium_risk: 40.0,
                renal_replacement: 20.0,
                mortality: 35.0,
                apache: 45.0,
                sofa: 6.0,
            },
            risk_breakdown: RiskBreakdown {
                static_component: 30.0,
                dynamic: 30.0,
                established: 40.0,
            },
            risk_level: RiskLevel::Moderate,
            interventions: vec![],
            tasks: vec![],
            is_acknowledged: true,
        },
        Patient {
            id: "ICU-2024-004".to_string(),
            name: "Emily Johnson".to_string(),
            age: 28,
            room: "ICU-B".to_string(),
            bed_number: "B-102".to_string(),
            admission_date: "2024-02-23".to_string(),
            diagnosis: "Diabetic Ketoacidosis".to_string(),
            doctor_name: "Dr. Lisa Brown".to_string(),
            length_of_stay: 2,
            vital_signs: VitalSigns {
                heart_rate: 98.0,
                respiratory_rate: 20.0,
                blood_pressure: BloodPressure {
                    systolic: 118.0,
                    diastolic: 72.0,
                },
                spo2: 97.0,
                temperature: 37.2,
                weight: 58.5,
                bsa: 1.62,
            },
            risk_scores: RiskScores {
                sepsis: 15.0,
                ventilation_weaning: 10.0,
                delirium_risk: 20.0,
                renal_replacement: 15.0,
                mortality: 12.0,
                apache: 25.0,
                sofa: 3.0,
            },
            risk_breakdown: RiskBreakdown {
                static_component: 20.0,
                dynamic: 20.0,
                established: 60.0,
            },
            risk_level: RiskLevel::Low,
            interventions: vec![],
            tasks: vec![],
            is_acknowledged: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seeded_ids_are_unique() {
        let roster = initial_roster();
        let ids: HashSet<&str> = roster.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), roster.len());
    }

    #[test]
    fn seeds_the_expected_four_patients() {
        let roster = initial_roster();
        let ids: Vec<&str> = roster.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["ICU-2024-001", "ICU-2024-002", "ICU-2024-003", "ICU-2024-004"]
        );
    }

    #[test]
    fn only_the_critical_patient_starts_unacknowledged() {
        let roster = initial_roster();
        for patient in &roster {
            let expect_unacknowledged = patient.risk_level == RiskLevel::Critical;
            assert_eq!(patient.is_acknowledged, !expect_unacknowledged, "{}", patient.id);
        }
    }

    #[test]
    fn seeded_vitals_match_the_bedside_chart() {
        let roster = initial_roster();
        assert_eq!(roster[0].vital_signs.heart_rate, 110.0);
        assert_eq!(roster[0].vital_signs.temperature, 38.5);
        assert_eq!(roster[1].vital_signs.spo2, 89.0);
        assert_eq!(roster[3].risk_scores.mortality, 12.0);
    }

    #[test]
    fn interventions_and_tasks_start_empty() {
        for patient in initial_roster() {
            assert!(patient.interventions.is_empty());
            assert!(patient.tasks.is_empty());
        }
    }
}
