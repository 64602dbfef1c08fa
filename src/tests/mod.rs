use proptest::prelude::*;

use crate::types::{ClassRef, PrimitiveType, TypeDescriptor};

pub(crate) fn arb_class_name() -> impl Strategy<Value = String> {
    let arb_ident =
        prop::string::string_regex(r"[a-zA-Z_$][a-zA-Z0-9_$]{0,15}").expect("The regex is invalid");
    prop::collection::vec(arb_ident, 1..6).prop_map(|v| v.join("."))
}

pub(crate) fn arb_non_array_type() -> impl Strategy<Value = TypeDescriptor> {
    prop_oneof![
        any::<PrimitiveType>().prop_map(TypeDescriptor::Primitive),
        arb_class_name()
            .prop_map(ClassRef::new)
            .prop_map(TypeDescriptor::Reference),
    ]
}

prop_compose! {
    fn arb_array_type()(
        t in arb_non_array_type(),
        dim in 1..=TypeDescriptor::MAX_ARRAY_DIMENSIONS
    ) -> TypeDescriptor {
        TypeDescriptor::array_of(t, dim).expect("The dimension is in range")
    }
}

pub(crate) fn arb_field_type() -> impl Strategy<Value = TypeDescriptor> {
    prop_oneof![arb_non_array_type(), arb_array_type()]
}

pub(crate) fn arb_return_type() -> impl Strategy<Value = TypeDescriptor> {
    prop_oneof![Just(TypeDescriptor::Void), arb_field_type()]
}
