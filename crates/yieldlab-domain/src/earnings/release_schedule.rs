use serde::Serialize;

/// A point in the 100-task streaming bonus ledger where bonus is released
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseMilestone {
    pub task: u32,
    pub claimable_percent: f64,
    pub locked_percent: f64,
    pub description: &'static str,
}

static RELEASE_SCHEDULE: [ReleaseMilestone; 5] = [
    ReleaseMilestone {
        task: 20,
        claimable_percent: 50.0,
        locked_percent: 50.0,
        description: "Cycle 1 complete: half of tasks 1-20 bonus becomes claimable",
    },
    ReleaseMilestone {
        task: 40,
        claimable_percent: 50.0,
        locked_percent: 50.0,
        description: "Cycle 2 complete: half of tasks 21-40 bonus becomes claimable",
    },
    ReleaseMilestone {
        task: 60,
        claimable_percent: 50.0,
        locked_percent: 50.0,
        description: "Cycle 3 complete: half of tasks 41-60 bonus becomes claimable",
    },
    ReleaseMilestone {
        task: 80,
        claimable_percent: 50.0,
        locked_percent: 50.0,
        description: "Cycle 4 complete: half of tasks 61-80 bonus becomes claimable",
    },
    ReleaseMilestone {
        task: 100,
        claimable_percent: 100.0,
        locked_percent: 0.0,
        description: "All tasks complete: every remaining locked bonus becomes claimable",
    },
];

pub fn release_schedule() -> &'static [ReleaseMilestone] {
    &RELEASE_SCHEDULE
}
