//! Non-generic JVM method descriptors.

use std::{fmt::Display, str::FromStr};

use crate::macros::see_jvm_spec;

use super::{Descriptor, DescriptorError, InvalidDescriptor, TypeDescriptor};

/// The descriptor of a method.
/// Consists of the parameters types and the return type.
///
/// Two descriptors are equal only if their parameters are equal in the same order.
#[doc = see_jvm_spec!(4, 3, 3)]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct MethodDescriptor {
    parameters_types: Vec<TypeDescriptor>,
    return_type: TypeDescriptor,
}

impl MethodDescriptor {
    /// The types of the parameters, in declaration order.
    #[must_use]
    pub fn parameters_types(&self) -> &[TypeDescriptor] {
        &self.parameters_types
    }

    /// The return type, [`TypeDescriptor::Void`] if the method returns no value.
    #[must_use]
    pub fn return_type(&self) -> &TypeDescriptor {
        &self.return_type
    }
}

impl Descriptor for MethodDescriptor {
    fn descriptor(&self) -> String {
        self.to_string()
    }
}

impl Display for MethodDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for param in &self.parameters_types {
            write!(f, "{}", param.descriptor())?;
        }
        write!(f, ")")?;
        write!(f, "{}", self.return_type.descriptor())
    }
}

impl FromStr for MethodDescriptor {
    type Err = InvalidDescriptor;

    fn from_str(descriptor: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidDescriptor(descriptor.to_owned());
        let mut chars = descriptor.chars();
        if chars.next() != Some('(') {
            return Err(invalid());
        }
        let mut parameters_types = Vec::new();
        let return_type = loop {
            match chars.next() {
                Some(')') => {
                    break TypeDescriptor::from_str(chars.as_str()).map_err(|_| invalid())?;
                }
                Some(prefix) => {
                    let param =
                        TypeDescriptor::parse_prefixed(prefix, &mut chars).ok_or_else(invalid)?;
                    parameters_types.push(param);
                }
                None => return Err(invalid()),
            }
        };
        Ok(Self {
            parameters_types,
            return_type,
        })
    }
}

/// A builder for [`MethodDescriptor`].
///
/// The return type defaults to `void`. The builder is reusable: [`build`](Self::build) copies
/// the current state, so later mutations do not affect descriptors built earlier. It is not
/// synchronized; use one builder per thread.
#[derive(Debug, Clone, Default)]
pub struct MethodDescriptorBuilder {
    parameters_types: Vec<TypeDescriptor>,
    return_type: TypeDescriptor,
}

impl MethodDescriptorBuilder {
    /// Creates a builder for a method without parameters returning `void`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter.
    ///
    /// # Errors
    /// [`DescriptorError::VoidParameterType`] if `parameter_type` is `void`.
    pub fn add_parameter(
        &mut self,
        parameter_type: TypeDescriptor,
    ) -> Result<&mut Self, DescriptorError> {
        if parameter_type.is_void() {
            return Err(DescriptorError::VoidParameterType);
        }
        self.parameters_types.push(parameter_type);
        Ok(self)
    }

    /// Appends all the parameters in order.
    /// Nothing is appended if any of them is `void`.
    ///
    /// # Errors
    /// [`DescriptorError::VoidParameterType`] if any of the parameters is `void`.
    pub fn add_parameters<I>(&mut self, parameters_types: I) -> Result<&mut Self, DescriptorError>
    where
        I: IntoIterator<Item = TypeDescriptor>,
    {
        let parameters_types: Vec<_> = parameters_types.into_iter().collect();
        if parameters_types.iter().any(TypeDescriptor::is_void) {
            return Err(DescriptorError::VoidParameterType);
        }
        self.parameters_types.extend(parameters_types);
        Ok(self)
    }

    /// Sets the return type, replacing any previous one.
    pub fn set_return_type(&mut self, return_type: TypeDescriptor) -> &mut Self {
        self.return_type = return_type;
        self
    }

    /// Sets the return type to `void`.
    pub fn set_void_return_type(&mut self) -> &mut Self {
        self.set_return_type(TypeDescriptor::Void)
    }

    /// Builds the method descriptor.
    #[must_use]
    pub fn build(&self) -> MethodDescriptor {
        MethodDescriptor {
            parameters_types: self.parameters_types.clone(),
            return_type: self.return_type.clone(),
        }
    }
}
