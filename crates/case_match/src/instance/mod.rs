//! Runtime type capability for `of_type` cases.
//!
//! Rust has no subclassing, so "is an instance of" is expressed as a
//! capability: a value can hand out a `&dyn Any` view of itself as some
//! target type. Every value can be viewed as its own concrete type. A type
//! that derives from another (by embedding it) overrides `Instance::view` to
//! also expose the embedded parent, which makes it an instance of the parent
//! for dispatch purposes.
//!
//! ```
//! use std::any::{Any, TypeId};
//!
//! use case_match::{impl_instance, Instance};
//!
//! #[derive(Debug)]
//! struct Shape { sides: u32 }
//!
//! #[derive(Debug)]
//! struct Square { shape: Shape, side: f64 }
//!
//! impl_instance!(Shape);
//!
//! impl Instance for Square {
//!     fn as_any(&self) -> &dyn Any { self }
//!
//!     fn view(&self, target: TypeId) -> Option<&dyn Any> {
//!         if target == TypeId::of::<Self>() {
//!             Some(self)
//!         } else {
//!             self.shape.view(target)
//!         }
//!     }
//! }
//!
//! let square = Square { shape: Shape { sides: 4 }, side: 2.0 };
//! assert!(square.is_instance_of::<Square>());
//! assert!(square.is_instance_of::<Shape>());
//! assert!(!Shape { sides: 3 }.is_instance_of::<Square>());
//! ```

use std::any::{Any, TypeId};
use std::fmt;

/// A value whose runtime type can be queried and narrowed.
///
/// `Debug` is a supertrait so that `dyn Instance` values can be rendered in
/// a `MatchError`.
pub trait Instance: Any + fmt::Debug {
    /// The value as its own concrete type.
    fn as_any(&self) -> &dyn Any;

    /// View this value as the type identified by `target`.
    ///
    /// Returns `None` when the value is not an instance of `target`. The
    /// returned reference must downcast to the type `target` names.
    fn view(&self, target: TypeId) -> Option<&dyn Any> {
        let any = self.as_any();
        (any.type_id() == target).then_some(any)
    }

    /// Whether this value is an instance of `U` (or derives from it).
    fn is_instance_of<U: Any>(&self) -> bool
    where
        Self: Sized,
    {
        self.view(TypeId::of::<U>()).is_some()
    }
}

/// Implement `Instance` for leaf types that derive from nothing.
///
/// Each listed type must be `Debug + 'static`.
#[macro_export]
macro_rules! impl_instance {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Instance for $ty {
                fn as_any(&self) -> &dyn ::std::any::Any {
                    self
                }
            }
        )*
    };
}

impl_instance!(
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    bool,
    char,
    (),
    String,
    &'static str,
);

impl<T: fmt::Debug + 'static> Instance for Vec<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<T: fmt::Debug + 'static> Instance for Option<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

// `dyn Any` values are instances of exactly their concrete type.
impl Instance for dyn Any {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

// Boxes are transparent: a boxed value is an instance of whatever it holds.
impl Instance for Box<dyn Instance> {
    fn as_any(&self) -> &dyn Any {
        (**self).as_any()
    }

    fn view(&self, target: TypeId) -> Option<&dyn Any> {
        (**self).view(target)
    }
}

/// Narrow `value` to `&U`, if it is an instance of `U`.
pub fn narrow<U: Any, S: Instance + ?Sized>(value: &S) -> Option<&U> {
    value
        .view(TypeId::of::<U>())
        .and_then(|any| any.downcast_ref::<U>())
}

#[cfg(test)]
mod tests;
