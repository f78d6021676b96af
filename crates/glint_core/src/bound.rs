//! Bound entry points
//!
//! A `BoundFn` is a resolved native address plus the signature tag of the
//! slot it was resolved for. Identity is the address: two `BoundFn`s built
//! separately around the same address refer to the same target.

use crate::catalog::Signature;
use std::ffi::c_void;
use std::fmt;
use std::ptr::NonNull;

#[derive(Clone, Copy)]
pub struct BoundFn {
    address: NonNull<c_void>,
    signature: Signature,
}

impl BoundFn {
    pub fn new(address: NonNull<c_void>, signature: Signature) -> Self {
        Self { address, signature }
    }

    pub fn address(&self) -> NonNull<c_void> {
        self.address
    }

    pub fn signature(&self) -> Signature {
        self.signature
    }

    /// True when both point at the same native function.
    pub fn same_target(&self, other: &BoundFn) -> bool {
        self.address == other.address
    }

    /// Reinterpret the address as a function pointer type.
    ///
    /// # Safety
    /// `F` must be an `unsafe extern "system" fn(..)` type matching the
    /// native prototype described by [`BoundFn::signature`], and the GL
    /// context the address came from must be current on this thread when
    /// the result is called.
    pub unsafe fn cast<F: Copy>(&self) -> F {
        debug_assert_eq!(
            std::mem::size_of::<F>(),
            std::mem::size_of::<*const c_void>(),
            "cast target must be a plain function pointer"
        );
        std::mem::transmute_copy(&self.address.as_ptr())
    }
}

impl fmt::Debug for BoundFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundFn")
            .field("address", &self.address)
            .field("signature", &self.signature.as_str())
            .finish()
    }
}
