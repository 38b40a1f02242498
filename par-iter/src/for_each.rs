use super::*;
use std::sync::Mutex;

#[doc(hidden)]
pub(super) struct ForEach<P> {
    producer: P,
    config: ExecutionConfig,
}

impl<P> ForEach<P>
where
    P: ParallelProducer,
{
    pub fn new(producer: P, config: ExecutionConfig) -> Self {
        Self { producer, config }
    }

    /// Executes the parallel iteration.
    pub fn for_each<F>(self, f: F)
    where
        F: Fn(P::Item) + Send + Sync,
    {
        let _ = self.try_for_each::<_, ()>(|item| {
            f(item);
            Ok(())
        });
    }

    /// Executes the parallel iteration, returning early on error.
    pub fn try_for_each<F, E>(self, f: F) -> Result<(), E>
    where
        F: Fn(P::Item) -> Result<(), E> + Send + Sync,
        E: Send + Sync + 'static,
    {
        let total_items = self.producer.len();
        if total_items == 0 {
            return Ok(());
        }

        if self.config.is_sequential(total_items) {
            return (0..total_items)
                .filter_map(|i| self.producer.get_item(i))
                .try_for_each(&f);
        }

        let num_threads = self.config.get_num_threads().min(total_items);
        let chunk_size = self.config.get_chunk_size(total_items);

        let counter = AtomicUsize::new(0);
        let error: Mutex<Option<E>> = Mutex::new(None);
        let (producer, f, counter, error) = (&self.producer, &f, &counter, &error);

        thread::scope(|s| {
            for _ in 0..num_threads {
                s.spawn(move || {
                    loop {
                        if error.lock().map_or(true, |e| e.is_some()) {
                            break;
                        }
                        let start = counter.fetch_add(chunk_size, Ordering::Relaxed);
                        if start >= total_items {
                            break;
                        }
                        let end = (start + chunk_size).min(total_items);
                        for item in (start..end).filter_map(|i| producer.get_item(i)) {
                            if let Err(e) = f(item) {
                                if let Ok(mut slot) = error.lock() {
                                    slot.get_or_insert(e);
                                }
                                return;
                            }
                        }
                    }
                });
            }
        });

        match error.lock().ok().and_then(|mut slot| slot.take()) {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
