use tracing::debug;

use crate::domain::types::{DistrictStaffing, Parameters};

/// Staff units needed for one district: a manager, plus one engineer per
/// started block of `engineer_capacity` scooters beyond `manager_capacity`.
pub fn staff_for_district(scooters: u32, manager_capacity: u32, engineer_capacity: u32) -> u64 {
    1 + engineers_for_district(scooters, manager_capacity, engineer_capacity)
}

fn engineers_for_district(scooters: u32, manager_capacity: u32, engineer_capacity: u32) -> u64 {
    if scooters <= manager_capacity {
        return 0;
    }
    let overflow = (scooters - manager_capacity) as u64;
    overflow.div_ceil(engineer_capacity as u64)
}

/// Per-district breakdown, in input order.
pub fn district_staffing(params: &Parameters) -> Vec<DistrictStaffing> {
    params
        .scooters
        .iter()
        .enumerate()
        .map(|(district, &scooters)| DistrictStaffing {
            district,
            scooters,
            managers: 1,
            engineers: engineers_for_district(
                scooters,
                params.manager_capacity,
                params.engineer_capacity,
            ),
        })
        .collect()
}

/// Total staff units (managers and engineers) across every district.
pub fn fleet_engineers(params: &Parameters) -> u64 {
    let breakdown = district_staffing(params);
    for staffing in &breakdown {
        debug!(
            "District {}: {} scooters -> {} manager(s), {} engineer(s)",
            staffing.district,
            staffing.scooters,
            staffing.managers,
            staffing.engineers
        );
    }

    let total: u64 = breakdown.iter().map(DistrictStaffing::total).sum();
    debug!("{} districts need {} staff units", breakdown.len(), total);
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(scooters: Vec<u32>, c: u32, p: u32) -> Parameters {
        Parameters {
            scooters,
            manager_capacity: c,
            engineer_capacity: p,
        }
    }

    #[test]
    fn test_empty_district_still_gets_a_manager() {
        assert_eq!(staff_for_district(0, 1, 1), 1);
        assert_eq!(fleet_engineers(&params(vec![0], 999, 1000)), 1);
    }

    #[test]
    fn test_manager_alone_when_under_capacity() {
        assert_eq!(staff_for_district(5, 5, 3), 1);
        assert_eq!(staff_for_district(4, 5, 3), 1);
    }

    #[test]
    fn test_partial_engineer_block_rounds_up() {
        assert_eq!(staff_for_district(6, 5, 3), 2);
        assert_eq!(staff_for_district(8, 5, 3), 2);
        assert_eq!(staff_for_district(9, 5, 3), 3);
    }

    #[test]
    fn test_two_even_districts() {
        assert_eq!(fleet_engineers(&params(vec![10, 10], 5, 5)), 4);
    }

    #[test]
    fn test_largest_single_district() {
        assert_eq!(fleet_engineers(&params(vec![1000], 1, 1)), 1000);
    }

    #[test]
    fn test_mixed_districts() {
        // 15 -> 1 + ceil(3/5) = 2, 10 -> 1
        assert_eq!(fleet_engineers(&params(vec![15, 10], 12, 5)), 3);
    }

    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_breakdown_logged_at_debug() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            fleet_engineers(&params(vec![4, 9], 5, 3));
        });

        let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("District 0: 4 scooters -> 1 manager(s), 0 engineer(s)"));
        assert!(logs.contains("District 1: 9 scooters -> 1 manager(s), 2 engineer(s)"));
    }

    #[test]
    fn test_breakdown_matches_total() {
        let p = params(vec![0, 7, 23, 1000], 6, 4);
        let breakdown = district_staffing(&p);

        assert_eq!(breakdown.len(), 4);
        assert_eq!(breakdown[2].district, 2);
        assert_eq!(breakdown[2].scooters, 23);
        assert_eq!(breakdown[2].engineers, 5);
        assert!(breakdown.iter().all(|d| d.managers == 1));
        assert_eq!(
            breakdown.iter().map(DistrictStaffing::total).sum::<u64>(),
            fleet_engineers(&p)
        );
    }
}
