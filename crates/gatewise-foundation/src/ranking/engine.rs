//! Concurrent gate evaluation and ranking.
//!
//! [`GateRankingEngine`] asks its [`RouteTimeProvider`] for a route to every
//! active gate at once, waits for all of the calls, drops the gates whose call
//! failed, and orders the rest by travel time:
//!
//! 1. **Fan out**: one `tokio` task per gate, spawned on a `JoinSet`. Each
//!    task reports back with the gate's position so its outcome lands in a
//!    pre-sized slot; output order never depends on completion order.
//! 2. **Join**: nothing is ranked until every task has finished or timed out.
//! 3. **Filter**: failed gates are logged and skipped. Only when *every*
//!    gate is skipped does the request fail.
//! 4. **Rank**: a stable sort on duration, so ties keep catalog order.
//!
//! The engine never retries a call.

use gatewise_kernel::{
    Coordinate, Gate, GateEta, RankingError, Recommendation, RecommendedGate, RouteEstimate,
    RouteFailure, RouteTimeProvider, SocietyId, format_duration,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tracing::{debug, info, instrument, warn};

type Outcome = Result<RouteEstimate, RouteFailure>;

pub struct GateRankingEngine {
    provider: Arc<dyn RouteTimeProvider>,
    call_timeout: Option<Duration>,
}

impl GateRankingEngine {
    pub fn new(provider: Arc<dyn RouteTimeProvider>) -> Self {
        Self {
            provider,
            call_timeout: None,
        }
    }

    /// Builder: bound every provider call. A call that exceeds the bound
    /// counts as [`RouteFailure::ProviderUnavailable`].
    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = Some(timeout);
        self
    }

    /// Every successfully evaluated gate, fastest first.
    ///
    /// Gates without a usable duration *and* distance are dropped.
    #[instrument(skip_all, fields(origin = %user_location, gates = gates.len()))]
    pub async fn rank_all(
        &self,
        user_location: Coordinate,
        gates: &[Gate],
    ) -> Result<Vec<GateEta>, RankingError> {
        let active = active_gates(gates)?;
        let outcomes = self.evaluate(user_location, &active).await;

        let mut ranked: Vec<GateEta> = active
            .into_iter()
            .zip(outcomes)
            .filter_map(|(gate, outcome)| match outcome {
                Ok(RouteEstimate {
                    duration_seconds,
                    distance_meters: Some(distance_meters),
                }) => Some(GateEta::new(gate.clone(), duration_seconds, distance_meters)),
                Ok(_) => {
                    warn!(gate_id = %gate.id, gate = %gate.name, "skipping gate: route has no distance");
                    None
                }
                Err(failure) => {
                    warn!(gate_id = %gate.id, gate = %gate.name, reason = %failure, "skipping gate");
                    None
                }
            })
            .collect();

        if ranked.is_empty() {
            return Err(RankingError::NoRouteFound);
        }

        ranked.sort_by_key(|eta| eta.duration_seconds);
        info!(evaluated = ranked.len(), best = %ranked[0].gate.name, "gate ETAs ranked");
        Ok(ranked)
    }

    /// The fastest gate plus the time it saves against the average of the
    /// others.
    #[instrument(skip_all, fields(origin = %user_location, society_id = %society_id, gates = gates.len()))]
    pub async fn recommend(
        &self,
        user_location: Coordinate,
        society_id: SocietyId,
        gates: &[Gate],
    ) -> Result<Recommendation, RankingError> {
        let active = active_gates(gates)?;
        let outcomes = self.evaluate(user_location, &active).await;

        let mut timed: Vec<(&Gate, u64)> = active
            .into_iter()
            .zip(outcomes)
            .filter_map(|(gate, outcome)| match outcome {
                Ok(estimate) => Some((gate, estimate.duration_seconds)),
                Err(failure) => {
                    warn!(gate_id = %gate.id, gate = %gate.name, reason = %failure, "skipping gate");
                    None
                }
            })
            .collect();

        if timed.is_empty() {
            return Err(RankingError::NoValidRoutes);
        }

        timed.sort_by_key(|&(_, secs)| secs);
        let durations: Vec<u64> = timed.iter().map(|&(_, secs)| secs).collect();
        let saved = time_saved_seconds(&durations);
        let (best, best_secs) = timed[0];

        info!(
            gate_id = %best.id,
            gate = %best.name,
            duration_s = best_secs,
            time_saved_s = saved,
            evaluated = timed.len(),
            "optimal gate selected"
        );

        Ok(Recommendation {
            recommended_gate: RecommendedGate::from(best),
            estimated_time: format_duration(best_secs as f64),
            time_saved: format_duration(saved as f64),
            estimated_seconds: best_secs,
            time_saved_seconds: saved,
        })
    }

    /// Query the provider for every gate concurrently. The returned vector is
    /// index-aligned with `gates`.
    async fn evaluate(&self, origin: Coordinate, gates: &[&Gate]) -> Vec<Outcome> {
        let mut slots: Vec<Option<Outcome>> = vec![None; gates.len()];
        let mut join_set: JoinSet<(usize, Outcome)> = JoinSet::new();

        debug!(provider = self.provider.name(), calls = gates.len(), "fanning out route requests");
        for (idx, gate) in gates.iter().enumerate() {
            let provider = Arc::clone(&self.provider);
            let destination = gate.location;
            let call_timeout = self.call_timeout;

            join_set.spawn(async move {
                let call = provider.estimate(origin, destination);
                let outcome = match call_timeout {
                    Some(limit) => match tokio::time::timeout(limit, call).await {
                        Ok(outcome) => outcome,
                        Err(_) => Err(RouteFailure::ProviderUnavailable(format!(
                            "no response within {} ms",
                            limit.as_millis()
                        ))),
                    },
                    None => call.await,
                };
                (idx, outcome)
            });
        }

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((idx, outcome)) => slots[idx] = Some(outcome),
                Err(e) => warn!(error = %e, "route evaluation task failed"),
            }
        }

        slots
            .into_iter()
            .map(|slot| {
                slot.unwrap_or_else(|| {
                    Err(RouteFailure::ProviderUnavailable(
                        "route evaluation task did not complete".to_string(),
                    ))
                })
            })
            .collect()
    }
}

fn active_gates(gates: &[Gate]) -> Result<Vec<&Gate>, RankingError> {
    let active: Vec<&Gate> = gates.iter().filter(|g| g.is_active).collect();
    if active.is_empty() {
        return Err(RankingError::NoActiveGates);
    }
    Ok(active)
}

/// Seconds saved by the fastest gate against the mean of all the others.
///
/// `sorted` must be ascending. With a single entry there is nothing to
/// compare against and the result is zero.
pub fn time_saved_seconds(sorted: &[u64]) -> u64 {
    let Some((&best, rest)) = sorted.split_first() else {
        return 0;
    };
    if rest.is_empty() {
        return 0;
    }
    let average = rest.iter().map(|&s| s as f64).sum::<f64>() / rest.len() as f64;
    (average - best as f64).round().max(0.0) as u64
}
