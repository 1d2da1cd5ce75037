//! Arena allocation for syntax trees.
//!
//! Every node of a tree is allocated from one bump arena. The tree is
//! built once, read many times and dropped as a whole.

use bumpalo::Bump;

/// The AST arena wraps a bump allocator for all node allocations.
///
/// Nodes, node lists and names live as long as the arena. Dropping the
/// arena frees the whole tree at once.
pub struct AstArena {
    bump: Bump,
}

impl AstArena {
    /// Create a new arena with default capacity.
    pub fn new() -> Self {
        Self {
            bump: Bump::new(),
        }
    }

    /// Create a new arena with the specified initial capacity in bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bump: Bump::with_capacity(capacity),
        }
    }

    /// Get a reference to the underlying bump allocator.
    #[inline]
    pub fn bump(&self) -> &Bump {
        &self.bump
    }

    /// Allocate a value in the arena and return a reference to it.
    #[inline]
    pub fn alloc<T>(&self, val: T) -> &T {
        self.bump.alloc(val)
    }

    /// Move the items of a vector into the arena as a slice.
    ///
    /// The arena never runs destructors, so node types stored here must not
    /// own heap data.
    #[inline]
    pub fn alloc_vec<T>(&self, items: Vec<T>) -> &[T] {
        self.bump.alloc_slice_fill_iter(items)
    }

    /// Allocate a slice of copyable values in the arena.
    #[inline]
    pub fn alloc_slice_copy<T: Copy>(&self, src: &[T]) -> &[T] {
        self.bump.alloc_slice_copy(src)
    }

    /// Returns the total bytes allocated in this arena.
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }
}

impl Default for AstArena {
    fn default() -> Self {
        Self::new()
    }
}
