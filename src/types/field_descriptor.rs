//! JVM field descriptors.

use std::{fmt::Display, str::FromStr};

use crate::macros::see_jvm_spec;

use super::{Descriptor, DescriptorError, InvalidDescriptor, TypeDescriptor, TypeHandle};

/// The descriptor of a field, i.e. the type of a class, instance or local variable.
/// The type is never `void`.
#[doc = see_jvm_spec!(4, 3, 2)]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct FieldDescriptor {
    field_type: TypeDescriptor,
}

impl FieldDescriptor {
    /// Creates a field descriptor of the given type.
    ///
    /// # Errors
    /// [`DescriptorError::VoidFieldType`] if `field_type` is `void`.
    pub fn new(field_type: TypeDescriptor) -> Result<Self, DescriptorError> {
        if field_type.is_void() {
            Err(DescriptorError::VoidFieldType)
        } else {
            Ok(Self { field_type })
        }
    }

    /// Creates a field descriptor by reflecting on a host type handle.
    ///
    /// # Errors
    /// See [`TypeDescriptor::from_native`] and [`FieldDescriptor::new`].
    pub fn from_native<H: TypeHandle>(handle: &H) -> Result<Self, DescriptorError> {
        TypeDescriptor::from_native(handle).and_then(Self::new)
    }

    /// The type of the field.
    #[must_use]
    pub fn field_type(&self) -> &TypeDescriptor {
        &self.field_type
    }

    /// Consumes the descriptor and returns the type of the field.
    #[must_use]
    pub fn into_field_type(self) -> TypeDescriptor {
        self.field_type
    }
}

impl Descriptor for FieldDescriptor {
    fn descriptor(&self) -> String {
        self.field_type.descriptor()
    }
}

impl Display for FieldDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.descriptor())
    }
}

impl FromStr for FieldDescriptor {
    type Err = InvalidDescriptor;

    fn from_str(descriptor: &str) -> Result<Self, Self::Err> {
        let field_type = TypeDescriptor::from_str(descriptor)?;
        Self::new(field_type).map_err(|_| InvalidDescriptor(descriptor.to_owned()))
    }
}

/// A builder for [`FieldDescriptor`].
///
/// The builder is reusable: [`build`](Self::build) does not consume it, so calling it twice
/// without mutation in between yields equal descriptors. It is not synchronized; use one
/// builder per thread.
#[derive(Debug, Clone)]
pub struct FieldDescriptorBuilder {
    field_type: TypeDescriptor,
}

impl FieldDescriptorBuilder {
    /// Creates a builder with `base_type` as the type of the field.
    #[must_use]
    pub fn new(base_type: TypeDescriptor) -> Self {
        Self {
            field_type: base_type,
        }
    }

    /// Increases the array dimension of the field by `count`.
    /// The builder is left unchanged on error.
    ///
    /// # Errors
    /// - [`DescriptorError::InvalidDimension`] if `count` is zero.
    /// - [`DescriptorError::VoidArrayElement`] if the base type is `void`.
    /// - [`DescriptorError::TooManyDimensions`] if the total exceeds
    ///   [`TypeDescriptor::MAX_ARRAY_DIMENSIONS`].
    pub fn increase_array_dimension(&mut self, count: u32) -> Result<&mut Self, DescriptorError> {
        self.field_type = TypeDescriptor::array_of(self.field_type.clone(), count)?;
        Ok(self)
    }

    /// Builds the field descriptor.
    ///
    /// # Errors
    /// [`DescriptorError::VoidFieldType`] if the type of the field is `void`.
    pub fn build(&self) -> Result<FieldDescriptor, DescriptorError> {
        FieldDescriptor::new(self.field_type.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use crate::{
        tests::{arb_field_type, arb_non_array_type},
        types::PrimitiveType,
    };

    #[test]
    fn primitive_field() {
        let descriptor = FieldDescriptorBuilder::new(PrimitiveType::Int.into())
            .build()
            .unwrap();
        assert_eq!(descriptor.descriptor(), "I");
    }

    #[test]
    fn multi_dimensional_array() {
        let descriptor = FieldDescriptorBuilder::new(PrimitiveType::Double.into())
            .increase_array_dimension(3)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(descriptor.to_string(), "[[[D");
    }

    #[test]
    fn zero_dimension_increment() {
        let mut builder = FieldDescriptorBuilder::new(PrimitiveType::Int.into());
        let result = builder.increase_array_dimension(0).map(|_| ());
        assert_eq!(result, Err(DescriptorError::InvalidDimension));
        assert_eq!(builder.build().unwrap().descriptor(), "I");
    }

    #[test]
    fn void_field() {
        let builder = FieldDescriptorBuilder::new(TypeDescriptor::Void);
        assert_eq!(builder.build(), Err(DescriptorError::VoidFieldType));
        assert!(FieldDescriptor::from_str("V").is_err());
    }

    #[test]
    fn void_array_field() {
        let mut builder = FieldDescriptorBuilder::new(TypeDescriptor::Void);
        let result = builder.increase_array_dimension(1).map(|_| ());
        assert_eq!(result, Err(DescriptorError::VoidArrayElement));
    }

    proptest! {
        #[test]
        fn dimensions_are_additive(
            base in arb_non_array_type(),
            first in 1..=127u32,
            second in 1..=128u32,
        ) {
            let mut stepwise = FieldDescriptorBuilder::new(base.clone());
            stepwise.increase_array_dimension(first).unwrap();
            stepwise.increase_array_dimension(second).unwrap();
            let mut at_once = FieldDescriptorBuilder::new(base);
            at_once.increase_array_dimension(first + second).unwrap();
            prop_assert_eq!(stepwise.build(), at_once.build());
        }

        #[test]
        fn build_is_repeatable(field_type in arb_field_type()) {
            let builder = FieldDescriptorBuilder::new(field_type);
            prop_assert_eq!(builder.build(), builder.build());
        }

        #[test]
        fn field_desc_from_str(field_type in arb_field_type()) {
            let descriptor = FieldDescriptor::new(field_type).unwrap();
            let parsed = FieldDescriptor::from_str(&descriptor.to_string());
            prop_assert_eq!(parsed, Ok(descriptor));
        }
    }
}
