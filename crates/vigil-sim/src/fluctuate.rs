//! Bounded random fluctuation of vital signs.
//!
//! Every tick replaces each perturbable field with
//! `round1(base + (U(0,1) - 0.5) * range)`, where `range` is fixed per field.
//! The walk is centered on the previous value, so each step moves a field by
//! at most half its range (before rounding to one decimal).
//!
//! Values are not clamped: over a long run SpO2 can drift past 100 and
//! temperature has no physiological floor. The overview renders whatever the
//! walk produces.

use rand::Rng;

use vigil_contracts::{BloodPressure, Patient, VitalSigns};

/// Per-field fluctuation ranges. A field moves by at most `range / 2` per tick.
pub const HEART_RATE_RANGE: f64 = 5.0;
pub const RESPIRATORY_RATE_RANGE: f64 = 2.0;
pub const SYSTOLIC_RANGE: f64 = 4.0;
pub const DIASTOLIC_RANGE: f64 = 3.0;
pub const SPO2_RANGE: f64 = 1.0;
pub const TEMPERATURE_RANGE: f64 = 0.2;

/// Round to one decimal place, matching the precision the monitor displays.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// One bounded random step away from `base`.
fn jitter(base: f64, range: f64, rng: &mut impl Rng) -> f64 {
    round1(base + (rng.gen::<f64>() - 0.5) * range)
}

/// Perturb the six fluctuating fields of one vital-sign record.
///
/// `weight` and `bsa` are admission-time measurements and pass through
/// untouched.
pub fn fluctuate_vitals(vitals: &VitalSigns, rng: &mut impl Rng) -> VitalSigns {
    VitalSigns {
        heart_rate: jitter(vitals.heart_rate, HEART_RATE_RANGE, rng),
        respiratory_rate: jitter(vitals.respiratory_rate, RESPIRATORY_RATE_RANGE, rng),
        blood_pressure: BloodPressure {
            systolic: jitter(vitals.blood_pressure.systolic, SYSTOLIC_RANGE, rng),
            diastolic: jitter(vitals.blood_pressure.diastolic, DIASTOLIC_RANGE, rng),
        },
        spo2: jitter(vitals.spo2, SPO2_RANGE, rng),
        temperature: jitter(vitals.temperature, TEMPERATURE_RANGE, rng),
        weight: vitals.weight,
        bsa: vitals.bsa,
    }
}

/// Produce a new roster with every patient's vitals perturbed.
///
/// Length, order, and identity are preserved; everything except
/// `vital_signs` is carried over unchanged.
pub fn fluctuate_roster(roster: &[Patient], rng: &mut impl Rng) -> Vec<Patient> {
    roster
        .iter()
        .map(|patient| Patient {
            vital_signs: fluctuate_vitals(&patient.vital_signs, rng),
            ..patient.clone()
        })
        .collect()
}
