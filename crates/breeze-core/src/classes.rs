//! Deterministic class-list derivation.

/// Derive an ordered, deduplicated class list.
///
/// Base classes come first in declared order, then every conditional class
/// whose condition holds, in declared order. Conditionals are an ordered
/// slice of `(name, condition)` pairs rather than a map: identical inputs
/// must produce byte-identical output, so iteration order cannot be left to
/// a hash table.
pub fn derive_class_names(base: &[&str], conditional: &[(&str, bool)]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(base.len() + conditional.len());
    let mut push = |class: &str, out: &mut Vec<String>| {
        if !class.is_empty() && !out.iter().any(|c| c == class) {
            out.push(class.to_string());
        }
    };
    for class in base {
        push(class, &mut out);
    }
    for (class, condition) in conditional {
        if *condition {
            push(class, &mut out);
        }
    }
    out
}
