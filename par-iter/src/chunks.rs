use super::*;

/// Producer for mutable, non-overlapping chunks of a slice. The last chunk may be shorter.
#[doc(hidden)]
pub struct ChunksMut<'a, T: 'a> {
    ptr: *mut T,
    len: usize,
    chunk_size: usize,
    _phantom: PhantomData<&'a mut T>,
}

impl<'a, T: Send + Sync> ChunksMut<'a, T> {
    pub fn new(slice: &'a mut [T], chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "chunk size must be positive");
        Self {
            ptr: slice.as_mut_ptr(),
            len: slice.len(),
            chunk_size,
            _phantom: PhantomData,
        }
    }
}

impl<'a, T: Send + Sync> ParallelProducer for ChunksMut<'a, T> {
    type Item = &'a mut [T];

    fn len(&self) -> usize {
        self.len.div_ceil(self.chunk_size)
    }

    fn get_item(&self, index: usize) -> Option<Self::Item> {
        let start = index.checked_mul(self.chunk_size)?;
        if start >= self.len {
            return None;
        }
        let end = (start + self.chunk_size).min(self.len);
        Some(unsafe { std::slice::from_raw_parts_mut(self.ptr.add(start), end - start) })
    }
}

unsafe impl<T: Send + Sync> Send for ChunksMut<'_, T> {}
unsafe impl<T: Send + Sync> Sync for ChunksMut<'_, T> {}
