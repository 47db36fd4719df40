//! Names and spellings of the C target.
//!
//! Everything the generator knows about the runtime's C interface lives
//! here: the opaque value type, the constructor functions, and the sigil
//! used to keep source identifiers clear of C reserved words.

/// Prefix applied to every source identifier in generated code.
pub const SIGIL: char = '_';

/// The runtime's opaque value type.
pub const VALUE_TYPE: &str = "Value*";

/// Integer value constructor.
pub const INT_CTOR: &str = "int_value";

/// Float value constructor.
pub const FLOAT_CTOR: &str = "float_value";

/// String value constructor.
pub const STRING_CTOR: &str = "string_value";

/// Array value constructor; takes a `NULL`-terminated compound literal.
pub const ARRAY_CTOR: &str = "array_value";

/// Terminator of array constructor arguments.
pub const ARRAY_TERMINATOR: &str = "NULL";

/// Boolean coercion used by conditionals.
pub const TRUTHINESS: &str = "evaluateToBoolean";

/// Statement returning the "none" value.
pub const RETURN_NONE: &str = "return none_value();";

/// Renames a source identifier for use in C.
#[must_use]
pub fn mangle(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 1);
    out.push(SIGIL);
    out.push_str(name);
    out
}

/// Escapes string literal content so it can sit between C double quotes.
///
/// Quotes, backslashes and control characters are written as C escapes;
/// everything else is copied unchanged.
#[must_use]
pub fn escape_c_string(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    for ch in content.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            // Octal keeps the escape from swallowing following hex digits.
            c if c.is_ascii_control() => out.push_str(&format!("\\{:03o}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Renders `count` parameter types for a prototype.
#[must_use]
pub fn parameter_types(count: usize) -> String {
    vec![VALUE_TYPE; count].join(", ")
}
