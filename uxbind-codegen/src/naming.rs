//! Identifier derivation and validation for generated C# code.

/// Prefix applied to every derived private member name.
pub const MEMBER_PREFIX: char = '_';

/// Characters that `XID_Start`/`XID_Continue` admit only for compatibility
/// (`Other_ID_Start`, `Other_ID_Continue`). Their general categories are not
/// in the C# identifier grammar.
const COMPATIBILITY_ID_CHARS: &[char] = &[
    '\u{00B7}', '\u{0387}', '\u{1369}', '\u{136A}', '\u{136B}', '\u{136C}', '\u{136D}',
    '\u{136E}', '\u{136F}', '\u{1370}', '\u{1371}', '\u{19DA}', '\u{2118}', '\u{212E}',
    '\u{309B}', '\u{309C}', '\u{30FB}', '\u{FF65}',
];

/// C# reserved keywords. Contextual keywords are valid identifiers and are
/// not listed.
const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Derives the private member name for an element identifier.
///
/// The identifier is split on every non-alphanumeric character. The first
/// segment starts lowercase, every later segment starts uppercase, the rest
/// of each segment is kept, and the result is prefixed with `_`:
///
/// - `submitBtn` -> `_submitBtn`
/// - `submit-btn` -> `_submitBtn`
/// - `Status` -> `_status`
/// - `enable_x` -> `_enableX`
///
/// The result may still be unusable (`"--"` yields `"_"`); callers validate
/// it with [`is_valid_member_name`].
#[must_use]
pub fn private_member_name(identifier: &str) -> String {
    let mut result = String::with_capacity(identifier.len() + 1);
    result.push(MEMBER_PREFIX);

    let mut first_segment = true;
    for segment in identifier.split(|c: char| !c.is_alphanumeric()) {
        let mut chars = segment.chars();
        let Some(head) = chars.next() else {
            continue;
        };
        if first_segment {
            result.extend(head.to_lowercase());
            first_segment = false;
        } else {
            result.extend(head.to_uppercase());
        }
        result.push_str(chars.as_str());
    }

    result
}

/// Converts an asset name to PascalCase for use as a class name.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if !c.is_alphanumeric() {
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Returns true if `s` is a C# keyword.
#[must_use]
pub fn is_keyword(s: &str) -> bool {
    CSHARP_KEYWORDS.contains(&s)
}

/// Returns true if `c` may start a C# identifier: `_` or a letter.
#[must_use]
pub fn is_identifier_start(c: char) -> bool {
    c == '_'
        || (unicode_ident::is_xid_start(c)
            && !COMPATIBILITY_ID_CHARS.contains(&c)
            // Mongolian combining marks listed as start characters
            && !matches!(c, '\u{1885}' | '\u{1886}'))
}

/// Returns true if `c` may continue a C# identifier: a start character, a
/// decimal digit, a connector or a combining mark.
#[must_use]
pub fn is_identifier_part(c: char) -> bool {
    c == '_' || (unicode_ident::is_xid_continue(c) && !COMPATIBILITY_ID_CHARS.contains(&c))
}

/// Returns true if `s` is a valid, non-keyword C# identifier.
///
/// Superscripts, fractions and other non-decimal numbers are rejected even
/// though Rust counts them as alphanumeric.
#[must_use]
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(head) = chars.next() else {
        return false;
    };
    is_identifier_start(head) && chars.all(is_identifier_part) && !is_keyword(s)
}

/// Returns true if `s` is a usable derived member name: a valid identifier
/// with at least one character after the prefix.
#[must_use]
pub fn is_valid_member_name(s: &str) -> bool {
    s.len() > MEMBER_PREFIX.len_utf8() && s.starts_with(MEMBER_PREFIX) && is_valid_identifier(s)
}

/// Returns true if `s` is a plain or dot-qualified type name.
///
/// Generic arguments, arrays and aliases such as `global::` are rejected.
#[must_use]
pub fn is_valid_type_name(s: &str) -> bool {
    !s.is_empty() && s.split('.').all(is_valid_identifier)
}
