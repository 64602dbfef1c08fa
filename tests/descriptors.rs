use castle_toolkit::types::{
    ClassName, Descriptor, DescriptorError, FieldDescriptor, FieldDescriptorBuilder,
    MethodDescriptor, MethodDescriptorBuilder, PrimitiveType, TypeDescriptor, encode,
};

#[test]
fn primitive_field() {
    let field = FieldDescriptorBuilder::new(PrimitiveType::Int.into())
        .build()
        .unwrap();
    assert_eq!(encode(&field), "I");
}

#[test]
fn reference_field() {
    let field = FieldDescriptorBuilder::new(TypeDescriptor::reference("java.lang.Integer"))
        .build()
        .unwrap();
    assert_eq!(encode(&field), "Ljava/lang/Integer;");
}

#[test]
fn multi_dimensional_array_field() {
    let field = FieldDescriptorBuilder::new(PrimitiveType::Double.into())
        .increase_array_dimension(3)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(encode(&field), "[[[D");
    assert_eq!(field.field_type().dimensions(), 3);
}

#[test]
fn empty_method() {
    let method = MethodDescriptorBuilder::new().build();
    assert_eq!(encode(&method), "()V");
}

#[test]
fn method_with_mixed_parameters() {
    let method = MethodDescriptorBuilder::new()
        .add_parameters([
            PrimitiveType::Int.into(),
            PrimitiveType::Double.into(),
            TypeDescriptor::reference("java.lang.Thread"),
        ])
        .unwrap()
        .set_return_type(TypeDescriptor::reference("java.lang.Object"))
        .build();
    assert_eq!(
        encode(&method),
        "(IDLjava/lang/Thread;)Ljava/lang/Object;"
    );
}

#[test]
fn method_with_array_parameter() {
    let strings = TypeDescriptor::reference("java.lang.String")
        .make_array_type()
        .unwrap();
    let method = MethodDescriptorBuilder::new()
        .add_parameter(strings)
        .unwrap()
        .build();
    assert_eq!(encode(&method), "([Ljava/lang/String;)V");
}

#[test]
fn void_is_rejected_where_invalid() {
    assert_eq!(
        FieldDescriptorBuilder::new(TypeDescriptor::Void).build(),
        Err(DescriptorError::VoidFieldType)
    );
    assert_eq!(
        MethodDescriptorBuilder::new()
            .add_parameter(TypeDescriptor::Void)
            .map(|_| ()),
        Err(DescriptorError::VoidParameterType)
    );
}

#[test]
fn builder_is_reusable() {
    let mut builder = MethodDescriptorBuilder::new();
    builder.add_parameter(PrimitiveType::Long.into()).unwrap();
    let first = builder.build();
    builder.set_return_type(PrimitiveType::Boolean.into());
    let second = builder.build();
    assert_eq!(first.descriptor(), "(J)V");
    assert_eq!(second.descriptor(), "(J)Z");
}

#[test]
fn reflected_method() {
    let parameters = ["int", "[[Ljava.lang.String;", "java.util.Map$Entry"]
        .into_iter()
        .map(|it| TypeDescriptor::from_native(&ClassName::from(it)))
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    let method = MethodDescriptorBuilder::new()
        .add_parameters(parameters)
        .unwrap()
        .set_return_type(TypeDescriptor::from_native(&ClassName::from("void")).unwrap())
        .build();
    assert_eq!(
        method.descriptor(),
        "(I[[Ljava/lang/String;Ljava/util/Map$Entry;)V"
    );
}

#[test]
fn decoded_descriptors_re_encode() {
    for descriptor in ["Z", "[[J", "Ljava/lang/Object;", "[Ljava/util/List;"] {
        let field: FieldDescriptor = descriptor.parse().unwrap();
        assert_eq!(field.to_string(), descriptor);
    }
    for descriptor in ["()V", "(I[BLjava/lang/String;)[[D", "(Ljava/lang/Object;)Z"] {
        let method: MethodDescriptor = descriptor.parse().unwrap();
        assert_eq!(method.to_string(), descriptor);
    }
}

#[test]
fn source_form_display() {
    let matrix = TypeDescriptor::array_of(TypeDescriptor::reference("java.lang.String"), 2)
        .unwrap();
    assert_eq!(matrix.to_string(), "java.lang.String[][]");
    assert_eq!(matrix.descriptor(), "[[Ljava/lang/String;");
}
