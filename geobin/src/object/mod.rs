//! The geobin object types.
//!
//! [`Object`] owns its bytes, [`ObjectRef`] borrows them. Every accessor re-derives the
//! structure from the bytes on demand; nothing is cached.

mod components;
mod object_ref;
mod owned;

pub use components::Components;
pub use object_ref::ObjectRef;
pub use owned::Object;

/// Borrowing access to the bytes of a geobin object.
pub trait AsObjectRef {
	fn as_object_ref(&self) -> ObjectRef<'_>;
}

impl AsObjectRef for Object {
	fn as_object_ref(&self) -> ObjectRef<'_> {
		ObjectRef::wrap(self.as_binary())
	}
}

impl AsObjectRef for ObjectRef<'_> {
	fn as_object_ref(&self) -> ObjectRef<'_> {
		*self
	}
}
