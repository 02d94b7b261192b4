//! Package manifest metadata.
//!
//! Pure reshaping of read-only `{id, name}` module metadata into a package
//! listing. This surface has no access to validator internals.

use crate::model::DocumentModel;
use serde::{Deserialize, Serialize};

///
/// ModuleMeta
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ModuleMeta {
    pub id: String,
    pub name: String,
}

///
/// Author
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Author {
    pub name: String,
    pub url: String,
}

///
/// PackageMeta
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PackageMeta {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub author: Author,
}

///
/// PackageManifest
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    #[serde(flatten)]
    pub meta: PackageMeta,
    pub document_model_modules: Vec<ModuleMeta>,
    pub editor_modules: Vec<ModuleMeta>,
}

/// Assemble a manifest from package metadata plus the registered modules.
#[must_use]
pub fn manifest_for(
    meta: PackageMeta,
    document_models: &[&DocumentModel],
    editors: Vec<ModuleMeta>,
) -> PackageManifest {
    PackageManifest {
        meta,
        document_model_modules: document_models.iter().map(|m| m.meta()).collect(),
        editor_modules: editors,
    }
}
