//! Fixed-length attribute buffers with dirty tracking.
//!
//! An [`AttributeBuffer`] holds one densely packed value per element (a
//! colour, a position, an instance transform) in element order. Its length
//! is fixed at construction: animators rewrite slots in place and flag the
//! buffer dirty so the consumer re-uploads it on the next render.

/// Per-element values uploaded to a renderer whenever they change.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeBuffer<T> {
    data: Vec<T>,
    dirty: bool,
}

impl<T: bytemuck::Pod> AttributeBuffer<T> {
    /// Buffer over the given values. Starts dirty so the first frame
    /// uploads it.
    #[must_use]
    pub fn new(data: Vec<T>) -> Self {
        Self { data, dirty: true }
    }

    /// `len` copies of `value`.
    #[must_use]
    pub fn filled(value: T, len: usize) -> Self {
        Self::new(vec![value; len])
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Values in element order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Raw bytes for a GPU upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// Value at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<T> {
        self.data.get(index).copied()
    }

    /// Overwrite a single slot. Returns `false` (and leaves the buffer
    /// untouched) when `index` is out of range.
    pub fn set(&mut self, index: usize, value: T) -> bool {
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    /// Rewrite slots in place through `f` and mark the buffer dirty.
    ///
    /// The slice cannot grow or shrink, which keeps the length pinned to the
    /// element count.
    pub fn update<F: FnOnce(&mut [T])>(&mut self, f: F) {
        f(&mut self.data);
        self.dirty = true;
    }

    /// Whether the contents changed since the last [`take_dirty`].
    ///
    /// [`take_dirty`]: Self::take_dirty
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Force a re-upload on the next render.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Consumer side of the dirty handshake: returns whether the buffer
    /// needs uploading and clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}
