//! The owning patient store.
//!
//! `PatientStore` holds the roster behind `Arc<Mutex<_>>` and applies exactly
//! two kinds of mutation: the per-tick vitals fluctuation and the one-way
//! acknowledge flag. Every mutation installs a complete new roster — readers
//! only ever see whole snapshots, never a partially updated one.
//!
//! The transforms themselves (`acknowledge_roster`, `sorted_by_risk`, and
//! `vigil_sim::fluctuate_roster`) are pure functions over `&[Patient]` so
//! they can be tested without a store.

use std::sync::{Arc, Mutex};

use rand::Rng;
use tracing::{debug, info};

use vigil_contracts::Patient;
use vigil_sim::fluctuate_roster;

use crate::seed;

// ── Pure roster transforms ────────────────────────────────────────────────────

/// New roster with the patient matching `id` acknowledged.
///
/// Idempotent; an unknown `id` returns the roster unchanged. There is no
/// inverse operation — the flag only ever goes false → true.
pub fn acknowledge_roster(roster: &[Patient], id: &str) -> Vec<Patient> {
    roster
        .iter()
        .map(|patient| {
            if patient.id == id {
                Patient {
                    is_acknowledged: true,
                    ..patient.clone()
                }
            } else {
                patient.clone()
            }
        })
        .collect()
}

/// Roster reordered for display: critical first, then high, moderate, low.
///
/// The sort is stable, so patients sharing a risk level keep their original
/// roster order.
pub fn sorted_by_risk(roster: &[Patient]) -> Vec<Patient> {
    let mut sorted = roster.to_vec();
    sorted.sort_by_key(|patient| patient.risk_level.priority());
    sorted
}

// ── Internal mutable state ────────────────────────────────────────────────────

/// The mutable interior of a `PatientStore`.
struct StoreState {
    /// The current roster snapshot, in seeded order.
    roster: Vec<Patient>,
    /// Id of the patient open in the detail view, if any.
    selected: Option<String>,
}

// ── Public store ──────────────────────────────────────────────────────────────

/// Single owner of the roster and the detail-view selection.
///
/// # Thread safety
///
/// All methods acquire a `Mutex` internally, so a timer thread may call
/// `advance_vitals()` while the view reads `snapshot()` without additional
/// synchronization. Clones share the same underlying state.
#[derive(Clone)]
pub struct PatientStore {
    state: Arc<Mutex<StoreState>>,
}

impl PatientStore {
    /// Create a store over the given roster.
    pub fn new(roster: Vec<Patient>) -> Self {
        Self {
            state: Arc::new(Mutex::new(StoreState {
                roster,
                selected: None,
            })),
        }
    }

    /// Create a store over the seeded four-patient roster.
    pub fn seeded() -> Self {
        Self::new(seed::initial_roster())
    }

    /// The current roster snapshot, in seeded order.
    pub fn snapshot(&self) -> Vec<Patient> {
        let state = self.state.lock().expect("patient store lock poisoned");
        state.roster.clone()
    }

    /// Apply one fluctuation tick to the whole roster.
    ///
    /// Installs a complete new snapshot; identity and order are preserved.
    pub fn advance_vitals(&self, rng: &mut impl Rng) {
        let mut state = self.state.lock().expect("patient store lock poisoned");
        state.roster = fluctuate_roster(&state.roster, rng);
        debug!(patients = state.roster.len(), "vitals tick applied");
    }

    /// Mark the patient matching `id` as acknowledged.
    ///
    /// A repeat acknowledge or an unknown `id` leaves the roster unchanged.
    pub fn acknowledge(&self, id: &str) {
        let mut state = self.state.lock().expect("patient store lock poisoned");
        let known = state.roster.iter().any(|p| p.id == id);
        state.roster = acknowledge_roster(&state.roster, id);
        info!(patient_id = %id, known, "alert acknowledged");
    }

    /// Open the detail view on `id`.
    pub fn select_patient(&self, id: &str) {
        let mut state = self.state.lock().expect("patient store lock poisoned");
        state.selected = Some(id.to_string());
    }

    /// Return to the overview.
    pub fn clear_selection(&self) {
        let mut state = self.state.lock().expect("patient store lock poisoned");
        state.selected = None;
    }

    /// The currently selected patient, resolved against the live roster.
    ///
    /// `None` when nothing is selected or the selected id is not in the
    /// roster.
    pub fn selected_patient(&self) -> Option<Patient> {
        let state = self.state.lock().expect("patient store lock poisoned");
        let id = state.selected.as_deref()?;
        state.roster.iter().find(|p| p.id == id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use vigil_contracts::RiskLevel;

    // ── Acknowledge transform ────────────────────────────────────────────────

    #[test]
    fn acknowledge_sets_only_the_target_patient() {
        let store = PatientStore::seeded();
        let before = store.snapshot();

        store.acknowledge("ICU-2024-001");

        let after = store.snapshot();
        assert!(after[0].is_acknowledged);
        // The other three are untouched, vitals included.
        for (b, a) in before.iter().zip(&after).skip(1) {
            assert_eq!(b, a);
        }
    }

    #[test]
    fn acknowledge_is_idempotent() {
        let store = PatientStore::seeded();

        store.acknowledge("ICU-2024-001");
        let once = store.snapshot();
        store.acknowledge("ICU-2024-001");
        let twice = store.snapshot();

        assert_eq!(once, twice);
    }

    #[test]
    fn acknowledge_unknown_id_is_a_no_op() {
        let store = PatientStore::seeded();
        let before = store.snapshot();

        store.acknowledge("does-not-exist");

        assert_eq!(before, store.snapshot());
    }

    #[test]
    fn acknowledge_never_clears_the_flag() {
        let roster = seed::initial_roster();
        // ICU-2024-002 is already acknowledged in the seed.
        let after = acknowledge_roster(&roster, "ICU-2024-002");
        assert!(after[1].is_acknowledged);
    }

    // ── Fluctuation through the store ────────────────────────────────────────

    #[test]
    fn advance_vitals_keeps_identity_and_order() {
        let store = PatientStore::seeded();
        let before = store.snapshot();
        let mut rng = StdRng::seed_from_u64(1);

        store.advance_vitals(&mut rng);

        let after = store.snapshot();
        assert_eq!(after.len(), before.len());
        for (b, a) in before.iter().zip(&after) {
            assert_eq!(b.id, a.id);
            assert_eq!(b.risk_scores, a.risk_scores);
            assert_eq!(b.is_acknowledged, a.is_acknowledged);
        }
    }

    #[test]
    fn one_tick_moves_the_septic_patient_heart_rate_within_bounds() {
        // Seed heart rate is 110 with a fluctuation range of 5, so a single
        // tick lands in [107.5, 112.5].
        let store = PatientStore::seeded();
        let mut rng = StdRng::seed_from_u64(2024);

        store.advance_vitals(&mut rng);

        let hr = store.snapshot()[0].vital_signs.heart_rate;
        assert!((107.5..=112.5).contains(&hr), "heart rate {}", hr);
    }

    #[test]
    fn snapshot_is_isolated_from_later_mutation() {
        let store = PatientStore::seeded();
        let snapshot = store.snapshot();
        let mut rng = StdRng::seed_from_u64(3);

        store.advance_vitals(&mut rng);
        store.acknowledge("ICU-2024-001");

        // The earlier snapshot still shows the seeded state.
        assert_eq!(snapshot, seed::initial_roster());
    }

    // ── Display ordering ─────────────────────────────────────────────────────

    #[test]
    fn sorted_by_risk_is_stable_within_a_level() {
        let mut roster = seed::initial_roster();
        // [low, critical, critical, high] with distinct ids.
        roster[0].risk_level = RiskLevel::Low;
        roster[1].risk_level = RiskLevel::Critical;
        roster[2].risk_level = RiskLevel::Critical;
        roster[3].risk_level = RiskLevel::High;

        let sorted = sorted_by_risk(&roster);
        let ids: Vec<&str> = sorted.iter().map(|p| p.id.as_str()).collect();

        assert_eq!(
            ids,
            vec!["ICU-2024-002", "ICU-2024-003", "ICU-2024-004", "ICU-2024-001"]
        );
    }

    #[test]
    fn sorted_by_risk_puts_critical_first_on_the_seed() {
        let sorted = sorted_by_risk(&seed::initial_roster());
        let levels: Vec<RiskLevel> = sorted.iter().map(|p| p.risk_level).collect();
        assert_eq!(
            levels,
            vec![
                RiskLevel::Critical,
                RiskLevel::High,
                RiskLevel::Moderate,
                RiskLevel::Low
            ]
        );
    }

    // ── Selection ────────────────────────────────────────────────────────────

    #[test]
    fn selection_resolves_against_the_live_roster() {
        let store = PatientStore::seeded();
        assert!(store.selected_patient().is_none());

        store.select_patient("ICU-2024-003");
        assert_eq!(
            store.selected_patient().map(|p| p.name),
            Some("Robert Smith".to_string())
        );

        store.clear_selection();
        assert!(store.selected_patient().is_none());
    }

    #[test]
    fn selecting_an_unknown_id_resolves_to_none() {
        let store = PatientStore::seeded();
        store.select_patient("ICU-1999-999");
        assert!(store.selected_patient().is_none());
    }

    #[test]
    fn selected_patient_reflects_tick_updates() {
        let store = PatientStore::seeded();
        store.select_patient("ICU-2024-001");
        let mut rng = StdRng::seed_from_u64(4);

        let before = store.selected_patient().unwrap();
        store.advance_vitals(&mut rng);
        let after = store.selected_patient().unwrap();

        assert_eq!(before.id, after.id);
        // The detail view reads live vitals, not a frozen copy.
        assert!((after.vital_signs.heart_rate - before.vital_signs.heart_rate).abs() <= 2.55);
    }
}
