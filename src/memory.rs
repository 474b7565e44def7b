//! Memory-space tags and buffer sources
//!
//! Views never allocate or transfer memory. The owner of the backing arrays
//! (a host `Vec`, an Arrow buffer, an accelerator allocation) stays outside
//! this crate; a view only records where the arrays live through the `S`
//! type parameter and borrows them through [`BufferSource`].

use core::fmt::Debug;

/// Where a view's backing arrays live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Space {
    /// General-purpose processor memory
    Host,
    /// Accelerator memory
    Device,
}

/// Compile-time memory-space tag carried by every view
pub trait MemorySpace: Copy + Default + Debug + Send + Sync + 'static {
    /// Runtime value of this tag
    const SPACE: Space;
}

/// Host memory tag (the default)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Host;

/// Accelerator memory tag
///
/// A `Device` view must only be queried from code running in the
/// accelerator's execution domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Device;

impl MemorySpace for Host {
    const SPACE: Space = Space::Host;
}

impl MemorySpace for Device {
    const SPACE: Space = Space::Device;
}

/// Externally owned, contiguous buffer a view can borrow from
pub trait BufferSource<T> {
    /// Memory space the buffer lives in
    type Space: MemorySpace;

    /// Borrow the buffer contents
    fn data(&self) -> &[T];
}

impl<T> BufferSource<T> for [T] {
    type Space = Host;

    #[inline]
    fn data(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> BufferSource<T> for [T; N] {
    type Space = Host;

    #[inline]
    fn data(&self) -> &[T] {
        self
    }
}

impl<T> BufferSource<T> for Vec<T> {
    type Space = Host;

    #[inline]
    fn data(&self) -> &[T] {
        self
    }
}

impl<T> BufferSource<T> for Box<[T]> {
    type Space = Host;

    #[inline]
    fn data(&self) -> &[T] {
        self
    }
}
