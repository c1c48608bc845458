#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Worker threads for the indexing pool.
    pub workers: usize,
    /// Capacity of the worker → merger channel.
    pub queue_capacity: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            workers: num_cpus::get(),
            queue_capacity: 64,
        }
    }
}

impl BuildConfig {
    pub fn with_workers(workers: usize) -> Self {
        BuildConfig {
            workers: workers.max(1),
            ..BuildConfig::default()
        }
    }
}
