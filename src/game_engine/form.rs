use super::types::FormSummary;
use crate::world::roster::MatchRecord;

/// Aggregates a team's whole match history into a form signal. Rows that
/// cannot be parsed are skipped, so a missing or malformed history
/// degrades to a neutral form instead of failing the simulation.
pub fn form_summary(log: &[MatchRecord]) -> FormSummary {
    let mut form = FormSummary::default();
    for record in log {
        let Some((scored, received)) = record.score() else {
            log::warn!(
                "Skipping unreadable result '{}' against {}",
                record.result,
                record.opponent
            );
            continue;
        };
        if scored > received {
            form.wins += 1;
        }
        form.point_difference += scored as i32 - received as i32;
    }
    form
}

#[cfg(test)]
mod tests {
    use super::form_summary;
    use crate::game_engine::types::FormSummary;
    use crate::world::roster::MatchRecord;

    #[test]
    fn test_empty_log_is_neutral() {
        assert_eq!(form_summary(&[]), FormSummary::default());
    }

    #[test]
    fn test_form_aggregates_whole_log() {
        let log = vec![
            MatchRecord::new("ESP", 92, 88),
            MatchRecord::new("FRA", 78, 90),
            MatchRecord::new("GER", 85, 80),
        ];
        let form = form_summary(&log);
        assert_eq!(form.wins, 2);
        assert_eq!(form.point_difference, 4 - 12 + 5);
    }

    #[test]
    fn test_malformed_rows_are_skipped() {
        let log = vec![
            MatchRecord {
                opponent: "ESP".into(),
                result: "ninety-eight".into(),
            },
            MatchRecord::new("FRA", 90, 70),
        ];
        let form = form_summary(&log);
        assert_eq!(form.wins, 1);
        assert_eq!(form.point_difference, 20);
    }
}
