use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use qlnum::{NumericConfig, Result, Scalar};

#[derive(Debug, Clone, PartialEq)]
pub enum TaskResult {
    Success(Vec<Scalar>),
    Error(String),
}

#[derive(Debug)]
pub struct ConcurrencyMetrics {
    pub total_tasks: u64,
    pub successful_tasks: u64,
    pub failed_tasks: u64,
    pub max_concurrent_observed: u64,
    pub divergent_results: bool,
}

/// Runs the same evaluation on many threads released together by a barrier.
pub struct ConcurrentTestHarness {
    config: Arc<NumericConfig>,
    concurrency: usize,
    current_concurrent: Arc<AtomicU64>,
    max_concurrent_observed: Arc<AtomicU64>,
}

impl ConcurrentTestHarness {
    pub fn new(concurrency: usize) -> Self {
        Self::with_config(NumericConfig::default(), concurrency)
    }

    pub fn with_config(config: NumericConfig, concurrency: usize) -> Self {
        Self {
            config: Arc::new(config),
            concurrency,
            current_concurrent: Arc::new(AtomicU64::new(0)),
            max_concurrent_observed: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    pub fn run_concurrent<F>(&self, task: F) -> Vec<TaskResult>
    where
        F: Fn(&NumericConfig) -> Result<Vec<Scalar>> + Send + Sync + 'static,
    {
        let task = Arc::new(task);
        let barrier = Arc::new(Barrier::new(self.concurrency));
        let mut handles = Vec::with_capacity(self.concurrency);

        for _ in 0..self.concurrency {
            let task = Arc::clone(&task);
            let config = Arc::clone(&self.config);
            let barrier = Arc::clone(&barrier);
            let current_concurrent = Arc::clone(&self.current_concurrent);
            let max_concurrent_observed = Arc::clone(&self.max_concurrent_observed);

            handles.push(thread::spawn(move || {
                barrier.wait();

                let concurrent = current_concurrent.fetch_add(1, Ordering::SeqCst) + 1;
                max_concurrent_observed.fetch_max(concurrent, Ordering::SeqCst);

                let result = task(&config);

                current_concurrent.fetch_sub(1, Ordering::SeqCst);

                match result {
                    Ok(values) => TaskResult::Success(values),
                    Err(e) => TaskResult::Error(e.to_string()),
                }
            }));
        }

        handles
            .into_iter()
            .map(|h| match h.join() {
                Ok(result) => result,
                Err(_) => TaskResult::Error("Join error: worker panicked".to_string()),
            })
            .collect()
    }

    pub fn metrics(&self, results: &[TaskResult]) -> ConcurrencyMetrics {
        let total_tasks = results.len() as u64;
        let successful_tasks = results
            .iter()
            .filter(|r| matches!(r, TaskResult::Success(_)))
            .count() as u64;
        let divergent_results = results.windows(2).any(|w| w[0] != w[1]);

        ConcurrencyMetrics {
            total_tasks,
            successful_tasks,
            failed_tasks: total_tasks - successful_tasks,
            max_concurrent_observed: self.max_concurrent_observed.load(Ordering::SeqCst),
            divergent_results,
        }
    }
}
