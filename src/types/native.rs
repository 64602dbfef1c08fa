//! Deriving descriptors from host type handles.
//!
//! A host environment, such as a running JVM or a class-file reader, exposes its types through
//! [`TypeHandle`]. [`ClassName`] is a handle over the names returned by
//! `java.lang.Class#getName()`, such as `int`, `java.lang.String`, `[[D` or
//! `[Ljava.lang.String;`.

use super::{ClassRef, DescriptorError, PrimitiveType, TypeDescriptor};

/// The classification of a host type.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum HandleKind<H> {
    /// The `void` placeholder type.
    Void,
    /// A primitive type.
    Primitive(PrimitiveType),
    /// An array type, with the handle of its component type.
    Array(H),
    /// A class or interface type, with its `.`-separated binary name.
    Reference(String),
    /// A type that could not be classified, with a description for diagnostics.
    Unclassified(String),
}

/// A handle to a type of the host environment.
pub trait TypeHandle: Sized {
    /// Classifies the type.
    fn kind(&self) -> HandleKind<Self>;
}

impl TypeDescriptor {
    /// Derives the descriptor of a host type.
    /// Nested array handles are flattened, so an array of arrays of `X` becomes an array of `X`
    /// with two dimensions.
    ///
    /// # Errors
    /// - [`DescriptorError::UnsupportedTypeKind`] if the handle or one of its component handles
    ///   cannot be classified.
    /// - See [`TypeDescriptor::array_of`] for malformed array handles.
    pub fn from_native<H: TypeHandle>(handle: &H) -> Result<Self, DescriptorError> {
        let mut dimensions: u32 = 0;
        let mut kind = handle.kind();
        let element = loop {
            match kind {
                HandleKind::Array(component) => {
                    dimensions = dimensions.saturating_add(1);
                    kind = component.kind();
                }
                HandleKind::Void => break Self::Void,
                HandleKind::Primitive(it) => break Self::Primitive(it),
                HandleKind::Reference(name) => break Self::Reference(ClassRef::new(name)),
                HandleKind::Unclassified(description) => {
                    log::debug!("Cannot classify host type {description}");
                    return Err(DescriptorError::UnsupportedTypeKind(description));
                }
            }
        };
        if dimensions == 0 {
            Ok(element)
        } else {
            Self::array_of(element, dimensions)
        }
    }
}

/// A type named the way `java.lang.Class#getName()` names it.
#[derive(Debug, PartialEq, Eq, Hash, Clone, derive_more::Display, derive_more::From)]
#[display("{_0}")]
pub struct ClassName(String);

impl ClassName {
    /// Creates a handle from a class name.
    #[must_use]
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    /// The wrapped name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_binary_name(name: &str) -> bool {
        name.split('.')
            .all(|segment| !segment.is_empty() && !segment.contains([';', '[', '/']))
    }

    /// Whether `name` is `void` or a primitive keyword, which never appear inside `L...;`.
    fn is_keyword(name: &str) -> bool {
        name == "void" || PrimitiveType::from_keyword(name).is_some()
    }

    /// Classifies the component of an array name, i.e. the name without its leading `[`.
    fn component_kind(&self, component: &str) -> HandleKind<Self> {
        let mut chars = component.chars();
        match (chars.next(), chars.as_str()) {
            (Some('['), _) => HandleKind::Array(Self::new(component)),
            (Some('L'), rest) => match rest.strip_suffix(';') {
                Some(name) if Self::is_binary_name(name) && !Self::is_keyword(name) => {
                    HandleKind::Array(Self::new(name))
                }
                _ => HandleKind::Unclassified(self.0.clone()),
            },
            (Some(letter), "") => PrimitiveType::try_from(letter).map_or_else(
                |_| HandleKind::Unclassified(self.0.clone()),
                |it| HandleKind::Array(Self::new(it.keyword())),
            ),
            _ => HandleKind::Unclassified(self.0.clone()),
        }
    }
}

impl From<&str> for ClassName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl TypeHandle for ClassName {
    fn kind(&self) -> HandleKind<Self> {
        let name = self.as_str();
        if let Some(component) = name.strip_prefix('[') {
            return self.component_kind(component);
        }
        if name == "void" {
            HandleKind::Void
        } else if let Some(primitive) = PrimitiveType::from_keyword(name) {
            HandleKind::Primitive(primitive)
        } else if Self::is_binary_name(name) {
            HandleKind::Reference(name.to_owned())
        } else {
            HandleKind::Unclassified(name.to_owned())
        }
    }
}
