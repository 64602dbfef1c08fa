/// Expands to a markdown link pointing at a section of the JVM specification.
macro_rules! see_jvm_spec {
    ($chapter:literal, $section:literal, $subsection:literal) => {
        concat!(
            "See the [JVM Specification §",
            $chapter,
            ".",
            $section,
            ".",
            $subsection,
            "](https://docs.oracle.com/javase/specs/jvms/se21/html/jvms-",
            $chapter,
            ".html#jvms-",
            $chapter,
            ".",
            $section,
            ".",
            $subsection,
            ") for more information."
        )
    };
}

/// Panics with an [`UnreachableStatementError`](crate::assertions::UnreachableStatementError).
///
/// Without arguments the default context message is used. With arguments, they are formatted
/// like [`format!`] into the context of the error.
#[macro_export]
macro_rules! unreachable_statement {
    () => {
        $crate::assertions::unreachable_statement(
            $crate::assertions::UnreachableStatementError::DEFAULT_CONTEXT,
        )
    };
    ($($arg:tt)+) => {
        $crate::assertions::unreachable_statement(::std::format!($($arg)+))
    };
}

pub(crate) use see_jvm_spec;
