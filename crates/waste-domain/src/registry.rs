//! Bin Registry Operations
//!
//! In-memory list mutations used by the bin management page.

use log::{debug, info};

use super::bin::{Bin, BinDraft, SensorStatus};
use super::entity::{remove_by_id, DomainError, DomainResult, Entity};
use super::fill::ALERT_THRESHOLD;

/// Mock bins the management page starts with
pub fn seed_bins() -> Vec<Bin> {
    vec![
        Bin::new(1, "Central Park", SensorStatus::Active, 20),
        Bin::new(2, "Malviya Nagar", SensorStatus::Active, 85),
        Bin::new(3, "Vashali Nagar", SensorStatus::Inactive, 50),
    ]
}

/// Validate a draft and append the new bin
///
/// The list is left untouched when the draft is invalid.
pub fn add_bin(bins: &mut Vec<Bin>, draft: &BinDraft) -> DomainResult<Bin> {
    let bin = draft.into_bin()
        .inspect_err(|e| debug!("[BINS] Rejected draft {:?}: {}", draft, e))?;
    info!("[BINS] Added bin {} at {}", bin.id, bin.location);
    bins.push(bin.clone());
    Ok(bin)
}

/// Apply an edited copy's location and status to every bin sharing its id
///
/// Returns how many entries were touched.
pub fn update_bin(bins: &mut [Bin], edited: &Bin) -> DomainResult<usize> {
    let mut touched = 0;
    for bin in bins.iter_mut().filter(|bin| bin.id() == edited.id()) {
        *bin = bin.with_edit(&edited.location, edited.sensor_status);
        touched += 1;
    }
    if touched == 0 {
        return Err(DomainError::NotFound(format!("bin {}", edited.id)));
    }
    info!("[BINS] Updated bin {} ({} entries)", edited.id, touched);
    Ok(touched)
}

/// Remove every bin with the given id, returning how many were removed
pub fn remove_bin(bins: &mut Vec<Bin>, id: i32) -> usize {
    let removed = remove_by_id(bins, id);
    info!("[BINS] Removed bin {} ({} entries)", id, removed);
    removed
}

/// Bins at or above the alert threshold, in list order
pub fn alerts(bins: &[Bin]) -> impl Iterator<Item = &Bin> {
    bins.iter().filter(|bin| bin.fill_level >= ALERT_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(id: &str) -> BinDraft {
        BinDraft {
            id: id.to_string(),
            location: "Jawahar Circle".to_string(),
            sensor_status: Some(SensorStatus::Active),
        }
    }

    #[test]
    fn test_add_bin_appends_empty_bin() {
        let mut bins = seed_bins();
        let added = add_bin(&mut bins, &draft("7")).unwrap();

        assert_eq!(bins.len(), 4);
        assert_eq!(bins[3], added);
        assert_eq!(added.id, 7);
        assert_eq!(added.fill_level, 0);
    }

    #[test]
    fn test_add_bin_with_bad_id_leaves_list() {
        let mut bins = seed_bins();
        assert!(add_bin(&mut bins, &draft("seven")).is_err());
        assert_eq!(bins, seed_bins());
    }

    #[test]
    fn test_add_bin_allows_duplicate_id() {
        let mut bins = seed_bins();
        add_bin(&mut bins, &draft("1")).unwrap();
        assert_eq!(bins.iter().filter(|b| b.id == 1).count(), 2);
    }

    #[test]
    fn test_update_bin_targets_only_id() {
        let mut bins = seed_bins();
        let edited = Bin::new(2, "C-Scheme", SensorStatus::Inactive, 0);

        assert_eq!(update_bin(&mut bins, &edited), Ok(1));

        assert_eq!(bins[1], Bin::new(2, "C-Scheme", SensorStatus::Inactive, 85));
        assert_eq!(bins[0], seed_bins()[0]);
        assert_eq!(bins[2], seed_bins()[2]);
    }

    #[test]
    fn test_update_missing_bin() {
        let mut bins = seed_bins();
        let edited = Bin::new(99, "Nowhere", SensorStatus::Active, 0);
        assert!(matches!(update_bin(&mut bins, &edited), Err(DomainError::NotFound(_))));
        assert_eq!(bins, seed_bins());
    }

    #[test]
    fn test_remove_bin() {
        let mut bins = seed_bins();
        assert_eq!(remove_bin(&mut bins, 2), 1);
        assert_eq!(bins.iter().map(|b| b.id).collect::<Vec<_>>(), vec![1, 3]);

        assert_eq!(remove_bin(&mut bins, 2), 0);
        assert_eq!(bins.len(), 2);
    }

    #[test]
    fn test_add_and_remove_negative_id() {
        let mut bins = seed_bins();
        add_bin(&mut bins, &draft("-3")).unwrap();
        assert_eq!(bins.len(), 4);
        assert_eq!(bins[3].id, -3);

        assert_eq!(remove_bin(&mut bins, -3), 1);
        assert_eq!(bins, seed_bins());
    }

    #[test]
    fn test_alerts_subset() {
        let mut bins = seed_bins();
        bins.push(Bin::new(4, "Mansarovar", SensorStatus::Active, 80));
        bins.push(Bin::new(5, "Bani Park", SensorStatus::Active, 79));

        let ids: Vec<i32> = alerts(&bins).map(|b| b.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }
}
