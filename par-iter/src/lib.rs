use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

mod chunks;
pub use self::chunks::ChunksMut;
mod enumerate;
pub use self::enumerate::Enumerate;

mod for_each;
use self::for_each::ForEach;

/// A parallel iterator over items handed out by a [`ParallelProducer`].
///
/// Work is split into chunks of consecutive indices which worker threads claim from a shared
/// counter, so uneven per-item costs are balanced dynamically. Short workloads (below the
/// configured minimum length) are processed on the calling thread without spawning workers.
pub struct ParIter<P> {
    producer: P,
    config: ExecutionConfig,
}

impl<P> ParIter<P> {
    pub fn new(producer: P) -> Self {
        Self {
            producer,
            config: ExecutionConfig::default(),
        }
    }

    /// Sets the number of threads to use for the parallel computation.
    pub fn with_threads(mut self, num_threads: usize) -> Self {
        self.config.num_threads = Some(num_threads.max(1));
        self
    }

    /// Sets the chunk size for distributing work to threads.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.config.chunk_size = Some(chunk_size.max(1));
        self
    }

    /// Sets the minimum number of items required before work is dispatched to threads.
    /// Anything shorter runs sequentially on the caller's thread.
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.config.min_len = min_len;
        self
    }
}

impl<P: ParallelProducer> ParIter<P> {
    pub fn enumerate(self) -> ParIter<Enumerate<P>> {
        ParIter {
            producer: Enumerate::new(self.producer),
            config: self.config,
        }
    }

    /// Executes the parallel iteration.
    pub fn for_each<F>(self, f: F)
    where
        F: Fn(P::Item) + Send + Sync,
    {
        ForEach::new(self.producer, self.config).for_each(f);
    }
}

/// Configuration for parallel execution.
#[derive(Debug, Default, Clone)]
struct ExecutionConfig {
    num_threads: Option<usize>,
    chunk_size: Option<usize>,
    min_len: usize,
}

impl ExecutionConfig {
    fn get_num_threads(&self) -> usize {
        self.num_threads
            .unwrap_or_else(|| thread::available_parallelism().map_or(4, |n| n.get()))
    }

    fn get_chunk_size(&self, total_items: usize) -> usize {
        let num_threads = self.get_num_threads();
        self.chunk_size
            .unwrap_or_else(|| total_items.div_ceil(num_threads).max(1))
    }

    /// Returns true when the workload should not leave the calling thread.
    fn is_sequential(&self, total_items: usize) -> bool {
        total_items < self.min_len || total_items == 1 || self.get_num_threads() == 1
    }
}

/// Trait for parallel producers that can be used with `ParIter`.
pub trait ParallelProducer: Send + Sync {
    type Item;

    /// Returns the total number of items to be processed.
    fn len(&self) -> usize;

    /// Gets a single item by its index. Every index is requested at most once.
    fn get_item(&self, index: usize) -> Option<Self::Item>;
}

/// Trait for slices that can be iterated in parallel.
#[doc(hidden)]
pub trait ParallelSlice<T: Send + Sync> {
    fn par_chunks_mut(&mut self, chunk_size: usize) -> ParIter<ChunksMut<'_, T>>;
}

impl<T: Send + Sync> ParallelSlice<T> for [T] {
    fn par_chunks_mut(&mut self, chunk_size: usize) -> ParIter<ChunksMut<'_, T>> {
        ParIter::new(ChunksMut::new(self, chunk_size))
    }
}

impl<T: Send + Sync> ParallelSlice<T> for Vec<T> {
    fn par_chunks_mut(&mut self, chunk_size: usize) -> ParIter<ChunksMut<'_, T>> {
        self.as_mut_slice().par_chunks_mut(chunk_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_work_distribution_stable() {
        let num_cores = thread::available_parallelism().unwrap().get();
        if num_cores <= 1 {
            println!("Skipping work distribution test on single-core machine.");
            return;
        }

        let workers = Arc::new(Mutex::new(HashSet::new()));
        let mut data = vec![0; 100_000];

        data.par_chunks_mut(100).for_each(|chunk| {
            workers.lock().unwrap().insert(thread::current().id());
            chunk.iter_mut().for_each(|v| *v += 1);
        });

        assert!(
            workers.lock().unwrap().len() > 1,
            "Work was not distributed to more than one thread."
        );
        assert!(data.iter().all(|&v| v == 1));
    }

    #[test]
    fn test_threads_config() {
        let mut data = (0..1000).collect::<Vec<usize>>();

        let workers = Arc::new(Mutex::new(HashSet::new()));
        let sum = Arc::new(AtomicUsize::new(0));

        data.par_chunks_mut(7).with_threads(2).for_each(|chunk| {
            workers.lock().unwrap().insert(thread::current().id());
            sum.fetch_add(chunk.iter().sum::<usize>(), Ordering::Relaxed);
        });

        assert_eq!(sum.load(Ordering::Relaxed), 499500);
        assert!(workers.lock().unwrap().len() <= 2);
    }

    #[test]
    fn test_min_len_keeps_work_on_caller() {
        let caller = thread::current().id();
        let workers = Arc::new(Mutex::new(HashSet::new()));
        let mut data = vec![0; 64];

        data.par_chunks_mut(4).with_min_len(17).for_each(|chunk| {
            workers.lock().unwrap().insert(thread::current().id());
            chunk.fill(7);
        });

        let workers = workers.lock().unwrap();
        assert_eq!(workers.len(), 1);
        assert!(workers.contains(&caller));
        assert_eq!(data, vec![7; 64]);
    }
}
