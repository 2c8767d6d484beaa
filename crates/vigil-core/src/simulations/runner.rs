use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::siem::types::{Simulation, SimulationStatus};
use crate::simulations::errors::SimulationError;
use crate::simulations::types::SimulationTiming;

type StatusMap = Arc<Mutex<HashMap<String, SimulationStatus>>>;

fn lock(statuses: &StatusMap) -> MutexGuard<'_, HashMap<String, SimulationStatus>> {
    match statuses.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            error!(
                event = "core.simulation.status_lock_poisoned",
                "Mutex poisoned, continuing with last written statuses"
            );
            poisoned.into_inner()
        }
    }
}

/// Tracks the status of every simulation card and drives their transitions.
///
/// Dropping the runner cancels pending transitions.
pub struct SimulationRunner {
    catalogue: Vec<Simulation>,
    statuses: StatusMap,
    timing: SimulationTiming,
    cancel: CancellationToken,
}

impl SimulationRunner {
    pub fn new(simulations: Vec<Simulation>, timing: SimulationTiming) -> Self {
        let statuses = simulations
            .iter()
            .map(|s| (s.id.clone(), s.status))
            .collect();

        Self {
            catalogue: simulations,
            statuses: Arc::new(Mutex::new(statuses)),
            timing,
            cancel: CancellationToken::new(),
        }
    }

    /// All simulations with their current status, in catalogue order.
    pub fn simulations(&self) -> Vec<Simulation> {
        let statuses = lock(&self.statuses);
        self.catalogue
            .iter()
            .map(|s| Simulation {
                status: statuses.get(&s.id).copied().unwrap_or(s.status),
                ..s.clone()
            })
            .collect()
    }

    pub fn status(&self, id: &str) -> Option<SimulationStatus> {
        lock(&self.statuses).get(id).copied()
    }

    /// Start a ready simulation.
    ///
    /// Returns a receiver that observes `running`, then `completed`, then
    /// `ready` again.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id, `NotReady` if the simulation is running
    /// or has not reset yet, `NoRuntime` outside a Tokio runtime.
    pub fn run(&self, id: &str) -> Result<watch::Receiver<SimulationStatus>, SimulationError> {
        let runtime = Handle::try_current().map_err(|_| SimulationError::NoRuntime)?;

        {
            let mut statuses = lock(&self.statuses);
            let status = statuses
                .get_mut(id)
                .ok_or_else(|| SimulationError::NotFound { id: id.to_string() })?;
            if *status != SimulationStatus::Ready {
                return Err(SimulationError::NotReady {
                    id: id.to_string(),
                    status: *status,
                });
            }
            *status = SimulationStatus::Running;
        }

        info!(event = "core.simulation.run_started", simulation_id = id);

        let (tx, rx) = watch::channel(SimulationStatus::Running);
        runtime.spawn(drive(
            id.to_string(),
            Arc::clone(&self.statuses),
            self.timing,
            self.cancel.child_token(),
            tx,
        ));

        Ok(rx)
    }
}

impl Drop for SimulationRunner {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn drive(
    id: String,
    statuses: StatusMap,
    timing: SimulationTiming,
    cancel: CancellationToken,
    tx: watch::Sender<SimulationStatus>,
) {
    let steps = [
        (timing.run_duration, SimulationStatus::Completed),
        (timing.reset_delay, SimulationStatus::Ready),
    ];

    for (delay, next) in steps {
        tokio::select! {
            _ = cancel.cancelled() => return,
            _ = tokio::time::sleep(delay) => {}
        }

        if let Some(status) = lock(&statuses).get_mut(&id) {
            *status = next;
        }
        tx.send_replace(next);

        info!(
            event = "core.simulation.status_changed",
            simulation_id = %id,
            status = %next
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::sleep;

    fn simulation(id: &str) -> Simulation {
        Simulation {
            id: id.to_string(),
            name: format!("Simulation {id}"),
            description: String::new(),
            expected_alerts: Vec::new(),
            status: SimulationStatus::Ready,
        }
    }

    fn runner() -> SimulationRunner {
        SimulationRunner::new(
            vec![simulation("sim-a"), simulation("sim-b")],
            SimulationTiming::default(),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_walks_through_states() {
        let runner = runner();
        runner.run("sim-a").unwrap();
        assert_eq!(runner.status("sim-a"), Some(SimulationStatus::Running));

        sleep(Duration::from_millis(1_900)).await;
        assert_eq!(runner.status("sim-a"), Some(SimulationStatus::Running));

        sleep(Duration::from_millis(200)).await;
        assert_eq!(runner.status("sim-a"), Some(SimulationStatus::Completed));

        sleep(Duration::from_secs(3)).await;
        assert_eq!(runner.status("sim-a"), Some(SimulationStatus::Ready));
        assert_eq!(runner.status("sim-b"), Some(SimulationStatus::Ready));
    }

    #[tokio::test(start_paused = true)]
    async fn test_receiver_observes_transitions() {
        let runner = runner();
        let mut rx = runner.run("sim-b").unwrap();

        let mut seen = vec![*rx.borrow()];
        while rx.changed().await.is_ok() {
            seen.push(*rx.borrow_and_update());
        }

        assert_eq!(
            seen,
            vec![
                SimulationStatus::Running,
                SimulationStatus::Completed,
                SimulationStatus::Ready
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_rejects_unknown_and_busy() {
        let runner = runner();
        assert_eq!(
            runner.run("sim-z").unwrap_err(),
            SimulationError::NotFound {
                id: "sim-z".to_string()
            }
        );

        runner.run("sim-a").unwrap();
        assert_eq!(
            runner.run("sim-a").unwrap_err(),
            SimulationError::NotReady {
                id: "sim-a".to_string(),
                status: SimulationStatus::Running
            }
        );

        sleep(Duration::from_millis(2_500)).await;
        assert!(matches!(
            runner.run("sim-a"),
            Err(SimulationError::NotReady {
                status: SimulationStatus::Completed,
                ..
            })
        ));

        sleep(Duration::from_secs(3)).await;
        assert!(runner.run("sim-a").is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulations_reports_live_status() {
        let runner = runner();
        runner.run("sim-b").unwrap();

        let cards = runner.simulations();
        assert_eq!(cards[0].id, "sim-a");
        assert_eq!(cards[0].status, SimulationStatus::Ready);
        assert_eq!(cards[1].status, SimulationStatus::Running);
    }

    #[test]
    fn test_run_outside_runtime_fails() {
        let runner = runner();
        assert_eq!(runner.run("sim-a").unwrap_err(), SimulationError::NoRuntime);
        assert_eq!(runner.status("sim-a"), Some(SimulationStatus::Ready));
    }
}
