//! Per-resource API surfaces.
//!
//! Each surface is a thin declarative wrapper over a shared
//! [`Communicator`](crate::Communicator): every method fixes a verb, a URI
//! template, the credential header, and the response type, then delegates.
//! Failures propagate untranslated — callers only ever see
//! [`PayLaterError`](crate::PayLaterError).

mod legal_documents;
mod purchase_authorization;
mod purchase_lifecycle;

pub use legal_documents::LegalDocumentsApi;
pub use purchase_authorization::PurchaseAuthorizationApi;
pub use purchase_lifecycle::PurchaseLifecycleApi;

/// Substitutes named `{placeholder}`s in a URI template.
///
/// # Panics
///
/// Panics if a parameter does not occur in the template or a placeholder is
/// left unresolved; both are programming errors.
pub(crate) fn populate_uri(template: &str, params: &[(&str, &str)]) -> String {
    let mut uri = template.to_owned();
    for (name, value) in params {
        let placeholder = format!("{{{name}}}");
        assert!(
            uri.contains(&placeholder),
            "URI template `{template}` has no placeholder `{name}`"
        );
        uri = uri.replace(&placeholder, value);
    }
    assert!(
        !uri.contains(['{', '}']),
        "URI template `{template}` has unresolved placeholders"
    );
    uri
}
