//! Edit-view link construction.

use crate::SourceKind;

/// Builds navigation links to an entity's admin edit view.
///
/// Links have the shape `<root>/Admin/<segment>/Edit/<id>`. The content root
/// is empty by default, yielding site-relative links; set it to an absolute
/// base (or an application path prefix) when the admin panel is not mounted
/// at the site root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditLinks {
    content_root: String,
}

impl EditLinks {
    /// Creates a link builder with the given content root. A trailing slash
    /// on the root is ignored.
    pub fn new(content_root: impl Into<String>) -> Self {
        let mut content_root = content_root.into();
        while content_root.ends_with('/') {
            content_root.pop();
        }
        Self { content_root }
    }

    /// Returns the edit-view link for an entity of the given kind.
    pub fn edit_link(&self, kind: SourceKind, id: &str) -> String {
        format!(
            "{}/Admin/{}/Edit/{}",
            self.content_root,
            kind.edit_segment(),
            id
        )
    }
}
