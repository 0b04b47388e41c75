use super::{conventional_dir, file_name};
use crate::domain::{FileRole, GenerationPlan, Identifier, Kind};

/// A single empty `index` under `src/services/<identifier>/`.
pub(super) fn plan(identifier: &Identifier) -> GenerationPlan {
    let base_dir = conventional_dir(Kind::Service, identifier);

    GenerationPlan::new(Kind::Service, identifier.clone(), base_dir)
        .with_file(FileRole::Index, file_name("index"), String::new())
}
