//! Simulation report generation.

use crate::collision::Collision;
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of one simulated round.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub score: u32,
    /// Simulated seconds survived.
    pub survival_time: f64,
    /// What ended the round; None if it hit the time cap.
    pub cause: Option<Collision>,
    pub flaps: u32,
    pub pairs_spawned: u32,
}

/// Aggregated results from multiple simulated rounds.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_crashed: u32,
    pub runs_timed_out: u32,

    pub avg_score: f64,
    pub min_score: u32,
    pub max_score: u32,
    pub avg_survival_time: f64,
    pub avg_flaps: f64,

    pub pipe_crashes: u32,
    pub ground_crashes: u32,

    /// Score -> number of runs that ended with it
    pub score_distribution: BTreeMap<u32, u32>,

    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a report from completed runs.
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = num_runs.max(1) as f64;

        let runs_crashed = runs.iter().filter(|r| r.cause.is_some()).count() as u32;
        let pipe_crashes = runs
            .iter()
            .filter(|r| matches!(r.cause, Some(Collision::Pipe(_))))
            .count() as u32;
        let ground_crashes = runs
            .iter()
            .filter(|r| r.cause == Some(Collision::Ground))
            .count() as u32;

        let avg_score = runs.iter().map(|r| r.score as f64).sum::<f64>() / divisor;
        let avg_survival_time = runs.iter().map(|r| r.survival_time).sum::<f64>() / divisor;
        let avg_flaps = runs.iter().map(|r| r.flaps as f64).sum::<f64>() / divisor;
        let min_score = runs.iter().map(|r| r.score).min().unwrap_or(0);
        let max_score = runs.iter().map(|r| r.score).max().unwrap_or(0);

        let mut score_distribution = BTreeMap::new();
        for run in &runs {
            *score_distribution.entry(run.score).or_insert(0) += 1;
        }

        Self {
            num_runs,
            runs_crashed,
            runs_timed_out: num_runs - runs_crashed,
            avg_score,
            min_score,
            max_score,
            avg_survival_time,
            avg_flaps,
            pipe_crashes,
            ground_crashes,
            score_distribution,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} crashed, {} timed out\n\n",
            self.num_runs, self.runs_crashed, self.runs_timed_out
        ));

        report.push_str("── SCORE ────────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Score:         {:.2}\n", self.avg_score));
        report.push_str(&format!(
            "  Min / Max:         {} / {}\n",
            self.min_score, self.max_score
        ));
        report.push_str(&format!(
            "  Avg Survival:      {:.1}s\n",
            self.avg_survival_time
        ));
        report.push_str(&format!("  Avg Flaps:         {:.0}\n\n", self.avg_flaps));

        report.push_str("── CRASHES ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Pipe:              {}\n", self.pipe_crashes));
        report.push_str(&format!("  Ground:            {}\n\n", self.ground_crashes));

        report.push_str("── SCORE DISTRIBUTION ───────────────────────────────────────────\n");
        for (score, count) in &self.score_distribution {
            let pct = (*count as f64 / self.num_runs.max(1) as f64) * 100.0;
            let bar = "█".repeat((pct / 2.0) as usize);
            report.push_str(&format!("  {:4}: {:>5.1}% {}\n", score, pct, bar));
        }

        report
    }

    /// Serialize as pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obstacles::Segment;

    fn run(score: u32, cause: Option<Collision>) -> RunStats {
        RunStats {
            score,
            survival_time: 2.5 * score as f64 + 1.0,
            cause,
            flaps: 10,
            pairs_spawned: score + 1,
        }
    }

    #[test]
    fn test_aggregates() {
        let report = SimReport::from_runs(vec![
            run(2, Some(Collision::Ground)),
            run(4, Some(Collision::Pipe(Segment::Top))),
            run(4, None),
        ]);
        assert_eq!(report.num_runs, 3);
        assert_eq!(report.runs_crashed, 2);
        assert_eq!(report.runs_timed_out, 1);
        assert_eq!(report.pipe_crashes, 1);
        assert_eq!(report.ground_crashes, 1);
        assert_eq!(report.min_score, 2);
        assert_eq!(report.max_score, 4);
        assert!((report.avg_score - 10.0 / 3.0).abs() < 1e-9);
        assert_eq!(report.score_distribution.get(&4), Some(&2));
    }

    #[test]
    fn test_empty_report() {
        let report = SimReport::from_runs(Vec::new());
        assert_eq!(report.num_runs, 0);
        assert_eq!(report.avg_score, 0.0);
        assert!(report.to_text().contains("Runs: 0 total"));
    }

    #[test]
    fn test_json_contains_fields() {
        let report = SimReport::from_runs(vec![run(1, Some(Collision::Ground))]);
        let json = report.to_json().unwrap();
        assert!(json.contains("\"avg_score\""));
        assert!(json.contains("\"Ground\""));
    }
}
