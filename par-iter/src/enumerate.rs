use super::*;

/// Pairs every produced item with its index.
#[doc(hidden)]
pub struct Enumerate<P> {
    inner: P,
}

impl<P> Enumerate<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<P: ParallelProducer> ParallelProducer for Enumerate<P> {
    type Item = (usize, P::Item);

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn get_item(&self, index: usize) -> Option<Self::Item> {
        self.inner.get_item(index).map(|item| (index, item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumerate_keeps_config() {
        let mut data = vec![0; 20];

        data.par_chunks_mut(5)
            .with_min_len(usize::MAX)
            .enumerate()
            .for_each(|(i, chunk)| chunk.fill(i));

        for (i, &val) in data.iter().enumerate() {
            assert_eq!(val, i / 5);
        }
    }
}
