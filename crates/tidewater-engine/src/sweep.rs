//! Attenuation sweeps: independent runs over several factors.
//!
//! Every factor gets a fresh [`FloodEngine`](crate::engine::FloodEngine),
//! so runs share nothing but the read-only inputs. Workers are scoped
//! threads that pull `(index, factor)` jobs from a crossbeam channel and
//! send each outcome back tagged with its index; results are reassembled
//! in input order.

use crossbeam_channel::{unbounded, Receiver, Sender};
use tidewater_core::FloodError;
use tracing::{debug, info};

use crate::config::{FloodConfig, SweepConfig};
use crate::pipeline::{run_flood, FloodInputs, FloodOutcome};

/// One factor's result within a sweep.
#[derive(Clone, Debug)]
pub struct SweepResult {
    /// The attenuation factor this run used.
    pub attenuation: f32,
    /// The run's output.
    pub outcome: FloodOutcome,
}

type Job = (usize, f32);
type Reply = (usize, Result<FloodOutcome, FloodError>);

/// Run `base` once per factor in `sweep`, in parallel.
///
/// Every factor is validated before any worker starts, so a bad factor
/// fails the whole sweep without running anything. Results are ordered
/// like `sweep.factors` and are identical to calling [`run_flood`] for
/// each factor in turn.
pub fn run_sweep(
    inputs: &FloodInputs<'_>,
    base: &FloodConfig,
    sweep: &SweepConfig,
) -> Result<Vec<SweepResult>, FloodError> {
    sweep.validate()?;
    inputs.validate_shapes()?;
    let configs: Vec<FloodConfig> = sweep
        .factors
        .iter()
        .map(|&a| base.with_attenuation(a))
        .collect();
    for config in &configs {
        config.validate()?;
    }

    let workers = sweep.resolved_worker_count();
    debug!(factors = configs.len(), workers, "starting attenuation sweep");

    let (job_tx, job_rx) = unbounded::<Job>();
    let (reply_tx, reply_rx) = unbounded::<Reply>();
    for (index, config) in configs.iter().enumerate() {
        // Receiver is alive until the end of this function.
        let _ = job_tx.send((index, config.attenuation));
    }
    drop(job_tx);

    std::thread::scope(|s| {
        for _ in 0..workers {
            let job_rx = job_rx.clone();
            let reply_tx = reply_tx.clone();
            s.spawn(move || worker_loop(job_rx, reply_tx, inputs, base));
        }
    });
    drop(reply_tx);

    let mut replies: Vec<Reply> = reply_rx.iter().collect();
    replies.sort_by_key(|(index, _)| *index);

    let mut results = Vec::with_capacity(configs.len());
    for (index, result) in replies {
        results.push(SweepResult {
            attenuation: configs[index].attenuation,
            outcome: result?,
        });
    }
    info!(factors = results.len(), "attenuation sweep complete");
    Ok(results)
}

/// Runs until the job channel drains.
fn worker_loop(
    job_rx: Receiver<Job>,
    reply_tx: Sender<Reply>,
    inputs: &FloodInputs<'_>,
    base: &FloodConfig,
) {
    while let Ok((index, attenuation)) = job_rx.recv() {
        let result = run_flood(inputs, &base.with_attenuation(attenuation));
        if reply_tx.send((index, result)).is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidewater_core::{ConfigError, Field2D};

    fn coast() -> (Field2D<f32>, Field2D<f32>, Field2D<f32>) {
        let dem = Field2D::from_rows(&[
            vec![0.0, 0.1, 0.2, 0.3, 0.4],
            vec![0.0, 0.1, 0.2, 0.3, 0.4],
        ])
        .unwrap();
        let mask = Field2D::from_rows(&[
            vec![0.0, 1.0, 1.0, 1.0, 1.0],
            vec![0.0, 1.0, 1.0, 1.0, 1.0],
        ])
        .unwrap();
        let forcing = Field2D::filled(2, 5, 1.0f32).unwrap();
        (dem, mask, forcing)
    }

    #[test]
    fn results_follow_factor_order() {
        let (dem, mask, forcing) = coast();
        let inputs = FloodInputs::new(&dem, &mask, &forcing);
        let sweep = SweepConfig {
            factors: vec![0.3, 0.0, 0.1],
            workers: Some(3),
        };
        let results = run_sweep(&inputs, &FloodConfig::default(), &sweep).unwrap();
        let factors: Vec<f32> = results.iter().map(|r| r.attenuation).collect();
        assert_eq!(factors, vec![0.3, 0.0, 0.1]);
    }

    #[test]
    fn sweep_matches_serial_runs() {
        let (dem, mask, forcing) = coast();
        let inputs = FloodInputs::new(&dem, &mask, &forcing);
        let base = FloodConfig::default();
        let sweep = SweepConfig {
            factors: vec![0.0, 0.05, 0.2, 0.5],
            workers: Some(2),
        };
        let results = run_sweep(&inputs, &base, &sweep).unwrap();
        for r in &results {
            let serial = run_flood(&inputs, &base.with_attenuation(r.attenuation)).unwrap();
            assert_eq!(r.outcome.level, serial.level);
            assert_eq!(
                r.outcome.depth.cells_where(|d| d.is_finite()),
                serial.depth.cells_where(|d| d.is_finite())
            );
        }
    }

    #[test]
    fn invalid_factor_fails_whole_sweep() {
        let (dem, mask, forcing) = coast();
        let inputs = FloodInputs::new(&dem, &mask, &forcing);
        let sweep = SweepConfig::new(vec![0.1, -0.5]);
        let err = run_sweep(&inputs, &FloodConfig::default(), &sweep).unwrap_err();
        assert_eq!(
            err,
            FloodError::Config(ConfigError::InvalidAttenuation { value: -0.5 })
        );
    }

    #[test]
    fn empty_sweep_is_rejected() {
        let (dem, mask, forcing) = coast();
        let inputs = FloodInputs::new(&dem, &mask, &forcing);
        let err = run_sweep(&inputs, &FloodConfig::default(), &SweepConfig::new(vec![]))
            .unwrap_err();
        assert_eq!(err, FloodError::Config(ConfigError::NoFactors));
    }
}
