//! Algorithm registry
//!
//! Maps each `AlgorithmId` to a constructed engine or to the reason it is
//! unavailable. One engine failing to construct never affects the others.

use std::collections::BTreeMap;
use std::time::Instant;

use crate::algos::{AStar, BellmanFord, Bfs, Dfs, Dijkstra, Kruskal, Prim};
use crate::config::EngineConfig;
use crate::engine::{AlgorithmId, CancelToken, Engine, RunRequest, RunResult};
use crate::error::{Result, StepGraphError};
use crate::graph::Graph;
use crate::{bail_usage, trace_time};

/// Registration state of one algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    Available,
    Unavailable { reason: String },
}

impl Availability {
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available)
    }
}

/// Engines by identifier
#[derive(Default)]
pub struct Registry {
    engines: BTreeMap<AlgorithmId, Box<dyn Engine>>,
    failures: BTreeMap<AlgorithmId, String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of constructing an engine
    pub fn register(&mut self, id: AlgorithmId, engine: Result<Box<dyn Engine>>) {
        match engine {
            Ok(engine) => {
                self.failures.remove(&id);
                self.engines.insert(id, engine);
            }
            Err(e) => {
                tracing::warn!(algorithm = %id, error = %e, "engine_unavailable");
                self.engines.remove(&id);
                self.failures.insert(id, e.to_string());
            }
        }
    }

    /// Mark an engine unavailable without constructing it
    pub fn disable(&mut self, id: AlgorithmId, reason: impl Into<String>) {
        self.engines.remove(&id);
        self.failures.insert(id, reason.into());
    }

    /// All seven engines with default options
    pub fn with_defaults() -> Self {
        Self::from_config(&EngineConfig::default())
    }

    /// Register every engine, applying per-engine options and the disabled list
    pub fn from_config(config: &EngineConfig) -> Self {
        let mut registry = Self::new();
        for id in AlgorithmId::ALL {
            if config.registry.disabled.contains(&id) {
                registry.disable(id, "disabled by configuration");
                continue;
            }
            registry.register(id, build_engine(id, config));
        }
        tracing::debug!(
            available = registry.engines.len(),
            unavailable = registry.failures.len(),
            "registry_built"
        );
        registry
    }

    /// Find an engine by identifier or alias
    pub fn lookup(&self, name: &str) -> Result<&dyn Engine> {
        if name.trim().is_empty() {
            bail_usage!("algorithm name is empty");
        }
        let id: AlgorithmId = name.parse()?;
        self.get(id)
    }

    pub fn get(&self, id: AlgorithmId) -> Result<&dyn Engine> {
        if let Some(engine) = self.engines.get(&id) {
            return Ok(engine.as_ref());
        }
        let reason = self
            .failures
            .get(&id)
            .map(String::as_str)
            .unwrap_or("not registered");
        Err(StepGraphError::unavailable(id, reason))
    }

    /// Status of every known algorithm, in identifier order
    pub fn availability(&self) -> Vec<(AlgorithmId, Availability)> {
        AlgorithmId::ALL
            .into_iter()
            .map(|id| {
                let status = match self.failures.get(&id) {
                    Some(reason) => Availability::Unavailable {
                        reason: reason.clone(),
                    },
                    None if self.engines.contains_key(&id) => Availability::Available,
                    None => Availability::Unavailable {
                        reason: "not registered".to_string(),
                    },
                };
                (id, status)
            })
            .collect()
    }

    /// Look up `name` and run it
    pub fn run(
        &self,
        name: &str,
        graph: &Graph,
        request: &RunRequest,
        cancel: &CancelToken,
    ) -> Result<RunResult> {
        let engine = self.lookup(name)?;
        let start = Instant::now();
        let result = engine.run(graph, request, cancel)?;
        trace_time!(start, "engine_run", steps = result.steps.len());
        Ok(result)
    }
}

fn build_engine(id: AlgorithmId, config: &EngineConfig) -> Result<Box<dyn Engine>> {
    let engine: Box<dyn Engine> = match id {
        AlgorithmId::Bfs => Box::new(Bfs),
        AlgorithmId::Dfs => Box::new(Dfs),
        AlgorithmId::Dijkstra => Box::new(Dijkstra {
            stop_at_goal: config.dijkstra.stop_at_goal,
        }),
        AlgorithmId::Astar => Box::new(AStar::new(config.astar.grid_width)?),
        AlgorithmId::BellmanFord => Box::new(BellmanFord {
            detect_negative_cycles: config.bellman_ford.detect_negative_cycles,
        }),
        AlgorithmId::Kruskal => Box::new(Kruskal),
        AlgorithmId::Prim => Box::new(Prim),
    };
    Ok(engine)
}
