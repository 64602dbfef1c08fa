//! Module containing the APIs for encoding JVM type descriptors.
//!
//! A [`TypeDescriptor`] describes the type of a single value. It is assembled into a
//! [`FieldDescriptor`] or a [`MethodDescriptor`] with the corresponding builder, and then
//! encoded into the canonical descriptor string with [`Descriptor::descriptor`].
//!
//! ```
//! use castle_toolkit::types::{
//!     Descriptor, MethodDescriptorBuilder, PrimitiveType, TypeDescriptor,
//! };
//!
//! # fn main() -> Result<(), castle_toolkit::types::DescriptorError> {
//! let descriptor = MethodDescriptorBuilder::new()
//!     .add_parameter(PrimitiveType::Int.into())?
//!     .add_parameter(TypeDescriptor::reference("java.lang.Thread"))?
//!     .set_return_type(TypeDescriptor::reference("java.lang.Object"))
//!     .build();
//! assert_eq!(descriptor.descriptor(), "(ILjava/lang/Thread;)Ljava/lang/Object;");
//! # Ok(())
//! # }
//! ```
pub mod field_descriptor;
pub mod method_descriptor;
pub mod native;
pub mod type_descriptor;

pub use field_descriptor::{FieldDescriptor, FieldDescriptorBuilder};
pub use method_descriptor::{MethodDescriptor, MethodDescriptorBuilder};
pub use native::{ClassName, HandleKind, TypeHandle};
pub use type_descriptor::{ArrayType, ClassRef, PrimitiveType, TypeDescriptor};

/// Trait for types that have a descriptor.
pub trait Descriptor {
    /// Returns the descriptor of the type.
    fn descriptor(&self) -> String;
}

/// Encodes anything that has a descriptor into its canonical string form.
#[must_use]
pub fn encode<D: Descriptor + ?Sized>(item: &D) -> String {
    item.descriptor()
}

/// An error raised while constructing or assembling descriptors.
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum DescriptorError {
    /// A host type handle could not be classified.
    #[error("Unsupported type kind: {0}")]
    UnsupportedTypeKind(String),
    /// An array dimension increment of zero was requested.
    #[error("Array dimensions must be increased by at least one")]
    InvalidDimension,
    /// The type of a field resolved to `void`.
    #[error("A field cannot have type void")]
    VoidFieldType,
    /// A `void` parameter was added to a method.
    #[error("A method parameter cannot have type void")]
    VoidParameterType,
    /// An array of `void` was requested.
    #[error("The element type of an array cannot be void")]
    VoidArrayElement,
    /// The resulting array type has more dimensions than the JVM allows.
    #[error("Array type with {0} dimensions exceeds the limit of {max}", max = TypeDescriptor::MAX_ARRAY_DIMENSIONS)]
    TooManyDimensions(u32),
}

/// An error indicating that the descriptor string is invalid.
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
#[error("Invalid descriptor: {0}")]
pub struct InvalidDescriptor(pub String);
