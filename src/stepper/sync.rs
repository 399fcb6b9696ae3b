//! Send/Sync wrappers for sharing raw buffer pointers with workers.
//!
//! The concurrent steppers hand every worker the same `current`/`next`
//! pointers; safety rests on the partition ranges being pairwise disjoint,
//! so no two workers ever write the same cell of `next`, and on `current`
//! being read-only for the duration of the step.

pub(crate) struct SendPtr<T> {
    inner: *mut T,
}
unsafe impl<T> Send for SendPtr<T> {}
unsafe impl<T> Sync for SendPtr<T> {}
impl<T> Copy for SendPtr<T> {}
impl<T> Clone for SendPtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> SendPtr<T> {
    #[inline(always)]
    pub(crate) fn new(ptr: *mut T) -> Self {
        Self { inner: ptr }
    }
    #[inline(always)]
    pub(crate) fn get(&self) -> *mut T {
        self.inner
    }
}

pub(crate) struct SendConstPtr<T> {
    inner: *const T,
}
unsafe impl<T> Send for SendConstPtr<T> {}
unsafe impl<T> Sync for SendConstPtr<T> {}
impl<T> Copy for SendConstPtr<T> {}
impl<T> Clone for SendConstPtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> SendConstPtr<T> {
    #[inline(always)]
    pub(crate) fn new(ptr: *const T) -> Self {
        Self { inner: ptr }
    }
    #[inline(always)]
    pub(crate) fn get(&self) -> *const T {
        self.inner
    }
}
