//! The type of a single JVM value.

use std::{
    fmt::Display,
    str::{Chars, FromStr},
};

use itertools::Itertools;

use crate::macros::see_jvm_spec;

use super::{Descriptor, DescriptorError, InvalidDescriptor};

/// A primitive type in Java.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum PrimitiveType {
    /// The `boolean` type.
    Boolean,
    /// The `byte` type.
    Byte,
    /// The `char` type.
    Char,
    /// The `short` type.
    Short,
    /// The `int` type.
    Int,
    /// The `long` type.
    Long,
    /// The `float` type.
    Float,
    /// The `double` type.
    Double,
}

impl PrimitiveType {
    /// All the primitive types.
    pub const ALL: [Self; 8] = [
        Self::Boolean,
        Self::Byte,
        Self::Char,
        Self::Short,
        Self::Int,
        Self::Long,
        Self::Float,
        Self::Double,
    ];

    /// Returns the single-letter descriptor of the type.
    #[must_use]
    pub const fn descriptor_char(self) -> char {
        match self {
            Self::Boolean => 'Z',
            Self::Byte => 'B',
            Self::Char => 'C',
            Self::Short => 'S',
            Self::Int => 'I',
            Self::Long => 'J',
            Self::Float => 'F',
            Self::Double => 'D',
        }
    }

    /// Returns the Java keyword naming the type, e.g. `int`.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Char => "char",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
        }
    }

    /// Returns the binary name of the wrapper class, e.g. `java.lang.Integer` for `int`.
    #[must_use]
    pub const fn wrapper_class(self) -> &'static str {
        match self {
            Self::Boolean => "java.lang.Boolean",
            Self::Byte => "java.lang.Byte",
            Self::Char => "java.lang.Character",
            Self::Short => "java.lang.Short",
            Self::Int => "java.lang.Integer",
            Self::Long => "java.lang.Long",
            Self::Float => "java.lang.Float",
            Self::Double => "java.lang.Double",
        }
    }

    /// Looks up a primitive type by its Java keyword.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|it| it.keyword() == keyword)
    }
}

impl TryFrom<char> for PrimitiveType {
    type Error = InvalidDescriptor;

    fn try_from(descriptor: char) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|it| it.descriptor_char() == descriptor)
            .ok_or_else(|| InvalidDescriptor(descriptor.to_string()))
    }
}

impl Display for PrimitiveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

impl Descriptor for PrimitiveType {
    fn descriptor(&self) -> String {
        self.descriptor_char().to_string()
    }
}

/// A reference to a named class or interface.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, derive_more::Display)]
#[display("{qualified_name}")]
pub struct ClassRef {
    /// The `.`-separated binary name of the class, e.g. `java.lang.String`.
    pub qualified_name: String,
}

impl ClassRef {
    /// Creates a new [`ClassRef`] from a `.`-separated binary name.
    #[must_use]
    pub fn new<S: Into<String>>(qualified_name: S) -> Self {
        Self {
            qualified_name: qualified_name.into(),
        }
    }

    /// Returns the internal name of the class, i.e. the binary name with every `.` replaced by
    /// `/`.
    #[must_use]
    pub fn internal_name(&self) -> String {
        self.qualified_name.replace('.', "/")
    }

    /// Creates a [`ClassRef`] from an internal (`/`-separated) name.
    /// Returns [`None`] if the name is empty or contains characters not allowed in internal names.
    #[must_use]
    pub fn from_internal_name(internal_name: &str) -> Option<Self> {
        let is_valid = internal_name
            .split('/')
            .all(|segment| !segment.is_empty() && !segment.contains(['.', ';', '[']));
        is_valid.then(|| Self::new(internal_name.replace('/', ".")))
    }
}

/// An array type with one or more dimensions.
///
/// The element type is never an array itself, nested arrays are flattened into a single
/// [`ArrayType`] with an accumulated dimension count.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct ArrayType {
    element: Box<TypeDescriptor>,
    dimensions: u32,
}

impl ArrayType {
    /// The innermost, non-array element type.
    #[must_use]
    pub fn element(&self) -> &TypeDescriptor {
        &self.element
    }

    /// The number of dimensions of the array, at least one.
    #[must_use]
    pub const fn dimensions(&self) -> u32 {
        self.dimensions
    }
}

/// The type of a JVM value, or `void` in return position.
#[doc = see_jvm_spec!(4, 3, 2)]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Default)]
pub enum TypeDescriptor {
    /// No value. Only meaningful as the return type of a method.
    #[default]
    Void,
    /// A primitive type.
    Primitive(PrimitiveType),
    /// A class or interface type.
    Reference(ClassRef),
    /// An array type.
    Array(ArrayType),
}

impl TypeDescriptor {
    /// The maximum number of dimensions of an array type.
    pub const MAX_ARRAY_DIMENSIONS: u32 = 255;

    /// Creates a reference type from a `.`-separated binary name.
    #[must_use]
    pub fn reference<S: Into<String>>(qualified_name: S) -> Self {
        Self::Reference(ClassRef::new(qualified_name))
    }

    /// Creates an array type of `element` with the given number of `dimensions`.
    /// If `element` is already an array, the dimensions are added to it instead of nesting.
    ///
    /// # Errors
    /// - [`DescriptorError::InvalidDimension`] if `dimensions` is zero.
    /// - [`DescriptorError::VoidArrayElement`] if `element` is `void`.
    /// - [`DescriptorError::TooManyDimensions`] if the resulting array has more than
    ///   [`MAX_ARRAY_DIMENSIONS`](Self::MAX_ARRAY_DIMENSIONS) dimensions.
    pub fn array_of(element: Self, dimensions: u32) -> Result<Self, DescriptorError> {
        if dimensions == 0 {
            return Err(DescriptorError::InvalidDimension);
        }
        let (element, dimensions) = match element {
            Self::Void => return Err(DescriptorError::VoidArrayElement),
            Self::Array(ArrayType {
                element,
                dimensions: existing,
            }) => (element, existing.saturating_add(dimensions)),
            scalar => (Box::new(scalar), dimensions),
        };
        if dimensions > Self::MAX_ARRAY_DIMENSIONS {
            return Err(DescriptorError::TooManyDimensions(dimensions));
        }
        Ok(Self::Array(ArrayType {
            element,
            dimensions,
        }))
    }

    /// Creates an array type with this type as the component type.
    ///
    /// # Errors
    /// See [`TypeDescriptor::array_of`].
    pub fn make_array_type(&self) -> Result<Self, DescriptorError> {
        Self::array_of(self.clone(), 1)
    }

    /// Replaces a primitive type by a reference to its wrapper class.
    /// Any other type is returned unchanged.
    #[must_use]
    pub fn boxed(&self) -> Self {
        match self {
            Self::Primitive(it) => Self::reference(it.wrapper_class()),
            other => other.clone(),
        }
    }

    /// Checks if the type is `void`.
    #[must_use]
    pub const fn is_void(&self) -> bool {
        matches!(self, Self::Void)
    }

    /// Checks if the type is an array type.
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Returns the number of array dimensions, `0` for non-array types.
    #[must_use]
    pub const fn dimensions(&self) -> u32 {
        match self {
            Self::Array(array) => array.dimensions,
            _ => 0,
        }
    }

    /// Returns the type with all array dimensions removed.
    #[must_use]
    pub fn element_type(&self) -> &Self {
        match self {
            Self::Array(array) => &array.element,
            other => other,
        }
    }

    /// Parses a non-`void` type whose first character `prefix` was already consumed, and
    /// advances `remaining` past the type.
    pub(crate) fn parse_prefixed(prefix: char, remaining: &mut Chars<'_>) -> Option<Self> {
        if let Ok(it) = PrimitiveType::try_from(prefix) {
            return Some(Self::Primitive(it));
        }
        match prefix {
            'L' => {
                let internal_name: String = remaining.take_while_ref(|c| *c != ';').collect();
                match remaining.next() {
                    Some(';') => ClassRef::from_internal_name(&internal_name).map(Self::Reference),
                    _ => None,
                }
            }
            '[' => {
                let mut dimensions: u32 = 1;
                let element = loop {
                    match remaining.next()? {
                        '[' => dimensions = dimensions.saturating_add(1),
                        c => break Self::parse_prefixed(c, remaining)?,
                    }
                };
                Self::array_of(element, dimensions).ok()
            }
            _ => None,
        }
    }
}

impl From<PrimitiveType> for TypeDescriptor {
    fn from(value: PrimitiveType) -> Self {
        Self::Primitive(value)
    }
}

impl From<ClassRef> for TypeDescriptor {
    fn from(value: ClassRef) -> Self {
        Self::Reference(value)
    }
}

impl Descriptor for TypeDescriptor {
    fn descriptor(&self) -> String {
        match self {
            Self::Void => "V".to_owned(),
            Self::Primitive(it) => it.descriptor(),
            Self::Reference(class) => format!("L{};", class.internal_name()),
            Self::Array(ArrayType {
                element,
                dimensions,
            }) => {
                let mut descriptor = String::new();
                for _ in 0..*dimensions {
                    descriptor.push('[');
                }
                descriptor.push_str(&element.descriptor());
                descriptor
            }
        }
    }
}

/// Formats the type the way it is written in Java source, e.g. `java.lang.String[][]`.
impl Display for TypeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Void => write!(f, "void"),
            Self::Primitive(it) => it.fmt(f),
            Self::Reference(class) => class.fmt(f),
            Self::Array(ArrayType {
                element,
                dimensions,
            }) => {
                element.fmt(f)?;
                for _ in 0..*dimensions {
                    f.write_str("[]")?;
                }
                Ok(())
            }
        }
    }
}

impl FromStr for TypeDescriptor {
    type Err = InvalidDescriptor;

    fn from_str(descriptor: &str) -> Result<Self, Self::Err> {
        if descriptor == "V" {
            return Ok(Self::Void);
        }
        let mut chars = descriptor.chars();
        let parsed = chars
            .next()
            .and_then(|prefix| Self::parse_prefixed(prefix, &mut chars));
        match (parsed, chars.next()) {
            (Some(it), None) => Ok(it),
            _ => Err(InvalidDescriptor(descriptor.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use crate::tests::{arb_class_name, arb_field_type, arb_non_array_type};

    #[test]
    fn primitive_descriptors() {
        let descriptors = PrimitiveType::ALL
            .iter()
            .map(Descriptor::descriptor)
            .join("");
        assert_eq!(descriptors, "ZBCSIJFD");
    }

    #[test]
    fn primitive_display_is_keyword() {
        let keywords = PrimitiveType::ALL.iter().join(" ");
        assert_eq!(keywords, "boolean byte char short int long float double");
    }

    #[test]
    fn parse_invalid_primitive_type() {
        assert!(PrimitiveType::try_from('A').is_err());
        assert!(PrimitiveType::try_from('V').is_err());
    }

    #[test]
    fn array_flattening() {
        let matrix = TypeDescriptor::array_of(PrimitiveType::Double.into(), 2).unwrap();
        let cube = TypeDescriptor::array_of(matrix, 1).unwrap();
        let expected = TypeDescriptor::array_of(PrimitiveType::Double.into(), 3).unwrap();
        assert_eq!(cube, expected);
        assert_eq!(cube.dimensions(), 3);
        assert_eq!(
            cube.element_type(),
            &TypeDescriptor::Primitive(PrimitiveType::Double)
        );
        assert_eq!(cube.descriptor(), "[[[D");
    }

    #[test]
    fn array_of_zero_dimensions() {
        let result = TypeDescriptor::array_of(PrimitiveType::Int.into(), 0);
        assert_eq!(result, Err(DescriptorError::InvalidDimension));
    }

    #[test]
    fn array_of_void() {
        let result = TypeDescriptor::array_of(TypeDescriptor::Void, 1);
        assert_eq!(result, Err(DescriptorError::VoidArrayElement));
    }

    #[test]
    fn array_dimension_limit() {
        let max = TypeDescriptor::array_of(PrimitiveType::Int.into(), 255).unwrap();
        assert_eq!(
            max.make_array_type(),
            Err(DescriptorError::TooManyDimensions(256))
        );
    }

    #[test]
    fn boxed_primitive() {
        let boxed = TypeDescriptor::from(PrimitiveType::Int).boxed();
        assert_eq!(boxed.descriptor(), "Ljava/lang/Integer;");
        let string = TypeDescriptor::reference("java.lang.String");
        assert_eq!(string.boxed(), string);
    }

    #[test]
    fn source_form() {
        let strings = TypeDescriptor::array_of(TypeDescriptor::reference("java.lang.String"), 2)
            .unwrap();
        assert_eq!(strings.to_string(), "java.lang.String[][]");
        assert_eq!(TypeDescriptor::Void.to_string(), "void");
    }

    #[test]
    fn missing_semicolon() {
        assert!(TypeDescriptor::from_str("Ljava/lang/String").is_err());
    }

    #[test]
    fn tailing_chars() {
        assert!(TypeDescriptor::from_str("Ljava/lang/String;A").is_err());
    }

    #[test]
    fn dotted_internal_name() {
        assert!(TypeDescriptor::from_str("Ljava.lang.String;").is_err());
        assert!(TypeDescriptor::from_str("L;").is_err());
    }

    #[test]
    fn array_of_void_descriptor() {
        assert!(TypeDescriptor::from_str("[V").is_err());
        assert!(TypeDescriptor::from_str("[").is_err());
    }

    proptest! {
        #[test]
        fn primitive_round_trip(primitive in any::<PrimitiveType>()) {
            let letter = primitive.descriptor_char();
            prop_assert_eq!(PrimitiveType::try_from(letter), Ok(primitive));
            prop_assert_eq!(PrimitiveType::from_keyword(primitive.keyword()), Some(primitive));
        }

        #[test]
        fn reference_encoding(name in arb_class_name()) {
            let descriptor = TypeDescriptor::reference(name.clone()).descriptor();
            prop_assert_eq!(descriptor, format!("L{};", name.replace('.', "/")));
        }

        #[test]
        fn array_encoding(element in arb_non_array_type(), dimensions in 1..=255u32) {
            let array = TypeDescriptor::array_of(element.clone(), dimensions).unwrap();
            let prefix = "[".repeat(usize::try_from(dimensions).unwrap());
            prop_assert_eq!(array.descriptor(), format!("{prefix}{}", element.descriptor()));
        }

        #[test]
        fn descriptor_round_trip(field_type in arb_field_type()) {
            let parsed = TypeDescriptor::from_str(&field_type.descriptor());
            prop_assert_eq!(parsed, Ok(field_type));
        }
    }
}
