//! Parallelization templates
//!
//! Fixed template snippets keyed by strategy name. Templates are static and
//! never mutated at runtime.

/// The OpenMP suggestion: a parallel-for pragma with a stub loop body
pub const OPENMP_TEMPLATE: &str = "\n#pragma omp parallel for\nfor (int i = 0; i < n; ++i) {\n    // Parallelized code here\n}";

/// Look up the template for a strategy key
///
/// Returns an empty string for an unrecognized key. That is a deliberate
/// "no suggestion available" signal, not an error.
pub fn get_template(key: &str) -> &'static str {
    match key {
        "OpenMP" => OPENMP_TEMPLATE,
        _ => "",
    }
}

/// Strategy keys with a registered template
pub fn template_keys() -> &'static [&'static str] {
    &["OpenMP"]
}
