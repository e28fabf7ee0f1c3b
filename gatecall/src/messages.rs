//! The standard messages for built-in denials.
//!
//! Shipped in the languages the framework localizes out of the box; the
//! normalizer resolves them against the caller's language with the usual
//! fallback rules.

use gatecall_core::MessageSpec;

/// Denial message for the `allow_non_authed = false` gate.
pub fn auth_required() -> MessageSpec {
    MessageSpec::per_language([
        ("en", "You must be signed in to do this."),
        ("pt", "Você precisa estar conectado para fazer isso."),
    ])
}

/// Denial message for the `allow_anonymous = false` gate.
pub fn cant_be_anon() -> MessageSpec {
    MessageSpec::per_language([
        ("en", "Anonymous users can't do this."),
        ("pt", "Usuários anônimos não podem fazer isso."),
    ])
}

/// Denial message for payloads that fail schema validation.
pub fn invalid_args() -> MessageSpec {
    MessageSpec::per_language([
        ("en", "Invalid arguments."),
        ("pt", "Argumentos inválidos."),
    ])
}

/// Generic message for unexpected faults.
pub fn unknown() -> MessageSpec {
    MessageSpec::per_language([("en", "Unknown error."), ("pt", "Erro desconhecido.")])
}
