//! Generate Service - turns a kind and identifier into files on disk.
//!
//! 1. Build the plan with the matching template generator
//! 2. Ensure the plan's base directory exists
//! 3. For each planned file: create it if absent, then write its content
//!
//! Files that already exist are skipped and reported, never overwritten.
//! There is no rollback: files written before a failure stay on disk.

use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        paths::{ensure_directory, ensure_file},
        ports::Filesystem,
    },
    domain::{
        Destination, GenerationPlan, GenerationResult, GeneratorOptions, Identifier, Kind,
        ProjectContext, templates,
    },
    error::StampResult,
};

/// Runs template generators against a filesystem.
pub struct GenerateService {
    filesystem: Box<dyn Filesystem>,
    options: GeneratorOptions,
}

impl GenerateService {
    pub fn new(filesystem: Box<dyn Filesystem>, options: GeneratorOptions) -> Self {
        Self {
            filesystem,
            options,
        }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Build the plan for `kind` without touching the filesystem.
    pub fn plan(
        &self,
        kind: Kind,
        identifier: &Identifier,
        destination: Option<&Destination>,
        project: &ProjectContext,
    ) -> StampResult<GenerationPlan> {
        let plan = templates::plan(kind, identifier, destination, project, &self.options)?;
        debug!(
            kind = %kind,
            files = plan.file_count(),
            base_dir = %plan.base_dir.display(),
            "Plan built"
        );
        Ok(plan)
    }

    /// Plan and write `kind` named `identifier`.
    #[instrument(skip_all, fields(kind = %kind, name = %identifier))]
    pub fn generate(
        &self,
        kind: Kind,
        identifier: &Identifier,
        destination: Option<&Destination>,
        project: &ProjectContext,
    ) -> StampResult<GenerationResult> {
        let plan = self.plan(kind, identifier, destination, project)?;
        self.execute(&plan, project)
    }

    /// Dispatch on a kind tag as supplied by the user.
    ///
    /// An unrecognised tag is a soft no-op: empty result, no error. The name
    /// is validated against the kind's rules before anything is written.
    pub fn generate_tagged(
        &self,
        tag: &str,
        name: &str,
        destination: Option<&Destination>,
        project: &ProjectContext,
    ) -> StampResult<GenerationResult> {
        let Ok(kind) = tag.parse::<Kind>() else {
            debug!(tag, "Unknown kind, nothing to generate");
            return Ok(GenerationResult::empty());
        };
        let identifier = Identifier::parse(kind, name)?;
        self.generate(kind, &identifier, destination, project)
    }

    /// Write a plan under `project`'s root.
    pub fn execute(
        &self,
        plan: &GenerationPlan,
        project: &ProjectContext,
    ) -> StampResult<GenerationResult> {
        if plan.has_duplicate_paths() {
            let path = first_duplicate(plan).unwrap_or_else(|| plan.base_dir.clone());
            return Err(ApplicationError::DuplicatePath { path }.into());
        }

        let fs = self.filesystem.as_ref();
        ensure_directory(fs, &project.resolve(&plan.base_dir))?;

        let mut result = GenerationResult {
            advisory_message: plan.advisory.clone(),
            ..GenerationResult::default()
        };

        for file in &plan.files {
            let path = project.resolve(&file.path);
            if !ensure_file(fs, &path)? {
                warn!(path = %path.display(), "File exists, leaving it untouched");
                result.skipped_files.push(path);
                continue;
            }
            if !file.content.is_empty() {
                fs.write_file(&path, &file.content)?;
            }
            debug!(role = %file.role, path = %path.display(), "File written");
            result.produced_files.push(path);
        }

        info!(
            produced = result.produced_files.len(),
            skipped = result.skipped_files.len(),
            "Generation completed"
        );
        Ok(result)
    }

    pub fn exists(&self, path: &Path) -> bool {
        self.filesystem.exists(path)
    }
}

fn first_duplicate(plan: &GenerationPlan) -> Option<std::path::PathBuf> {
    let mut seen = std::collections::HashSet::new();
    plan.files
        .iter()
        .find(|f| !seen.insert(&f.path))
        .map(|f| f.path.clone())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    use mockall::predicate::{always, eq};

    use super::*;
    use crate::application::ports::output::MockFilesystem;
    use crate::domain::FileRole;

    fn project() -> ProjectContext {
        ProjectContext::new("/p").unwrap()
    }

    /// A mock that remembers what was created, starting from `/` and `/p`.
    fn tracking_fs(created: Arc<Mutex<Vec<PathBuf>>>) -> MockFilesystem {
        let present = Arc::new(Mutex::new(HashSet::from([
            PathBuf::from("/"),
            PathBuf::from("/p"),
        ])));

        let mut fs = MockFilesystem::new();
        let seen = Arc::clone(&present);
        fs.expect_exists()
            .returning(move |p| seen.lock().unwrap().contains(p));
        let dirs = Arc::clone(&present);
        fs.expect_create_dir().returning(move |p| {
            dirs.lock().unwrap().insert(p.to_path_buf());
            created.lock().unwrap().push(p.to_path_buf());
            Ok(())
        });
        fs.expect_create_file().returning(move |p| {
            present.lock().unwrap().insert(p.to_path_buf());
            Ok(())
        });
        fs
    }

    #[test]
    fn writes_every_planned_file() {
        let created = Arc::new(Mutex::new(Vec::new()));
        let mut fs = tracking_fs(Arc::clone(&created));
        fs.expect_write_file().times(5).returning(|_, _| Ok(()));

        let service = GenerateService::new(Box::new(fs), GeneratorOptions::default());
        let id = Identifier::parse(Kind::Duck, "cart").unwrap();
        let result = service.generate(Kind::Duck, &id, None, &project()).unwrap();

        assert_eq!(result.produced_files.len(), 5);
        assert!(result.skipped_files.is_empty());
        assert_eq!(
            result.produced_files[0],
            PathBuf::from("/p/src/ducks/cart/actions.tsx")
        );
        assert!(result.advisory_message.is_some());
    }

    #[test]
    fn each_missing_directory_created_once() {
        let created = Arc::new(Mutex::new(Vec::new()));
        let mut fs = tracking_fs(Arc::clone(&created));
        fs.expect_write_file().returning(|_, _| Ok(()));

        let service = GenerateService::new(Box::new(fs), GeneratorOptions::default());
        let id = Identifier::parse(Kind::Duck, "cart").unwrap();
        service.generate(Kind::Duck, &id, None, &project()).unwrap();

        assert_eq!(
            *created.lock().unwrap(),
            vec![
                PathBuf::from("/p/src"),
                PathBuf::from("/p/src/ducks"),
                PathBuf::from("/p/src/ducks/cart"),
            ]
        );
    }

    #[test]
    fn empty_content_is_not_written() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|p| p == Path::new("/p") || p == Path::new("/"));
        fs.expect_create_dir().returning(|_| Ok(()));
        fs.expect_create_file()
            .with(eq(PathBuf::from("/p/src/services/billing/index.tsx")))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_write_file().never();

        let service = GenerateService::new(Box::new(fs), GeneratorOptions::default());
        let id = Identifier::parse(Kind::Service, "billing").unwrap();
        let result = service.generate(Kind::Service, &id, None, &project()).unwrap();
        assert_eq!(result.produced_files.len(), 1);
    }

    #[test]
    fn existing_files_are_skipped_not_written() {
        let existing = PathBuf::from("/p/src/ducks/cart/reducers.tsx");
        let mut fs = MockFilesystem::new();
        let probe = existing.clone();
        fs.expect_exists().returning(move |p| {
            p == Path::new("/p") || p == Path::new("/") || p.starts_with("/p/src/ducks/cart") && p.extension().is_none() || p == probe.as_path()
        });
        fs.expect_create_dir().returning(|_| Ok(()));
        fs.expect_create_file().times(4).returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(move |p, _| p != existing.as_path())
            .times(4)
            .returning(|_, _| Ok(()));

        let service = GenerateService::new(Box::new(fs), GeneratorOptions::default());
        let id = Identifier::parse(Kind::Duck, "cart").unwrap();
        let result = service.generate(Kind::Duck, &id, None, &project()).unwrap();

        assert_eq!(result.produced_files.len(), 4);
        assert_eq!(
            result.skipped_files,
            vec![PathBuf::from("/p/src/ducks/cart/reducers.tsx")]
        );
    }

    #[test]
    fn write_failure_stops_generation() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir().returning(|_| Ok(()));
        fs.expect_create_file().times(1).returning(|_| Ok(()));
        fs.expect_write_file().with(always(), always()).times(1).returning(|p, _| {
            Err(ApplicationError::FilesystemError {
                path: p.to_path_buf(),
                reason: "disk full".into(),
            }
            .into())
        });

        let service = GenerateService::new(Box::new(fs), GeneratorOptions::default());
        let id = Identifier::parse(Kind::View, "Dashboard").unwrap();
        let err = service.generate(Kind::View, &id, None, &project()).unwrap_err();
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn unknown_tag_is_soft_noop() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().never();
        fs.expect_create_dir().never();
        fs.expect_create_file().never();
        fs.expect_write_file().never();

        let service = GenerateService::new(Box::new(fs), GeneratorOptions::default());
        let result = service
            .generate_tagged("widget", "Anything", None, &project())
            .unwrap();
        assert!(result.is_empty());
        assert!(result.advisory_message.is_none());
    }

    #[test]
    fn tagged_generation_validates_name() {
        let fs = MockFilesystem::new();
        let service = GenerateService::new(Box::new(fs), GeneratorOptions::default());
        assert!(
            service
                .generate_tagged("duck", "Cart", None, &project())
                .is_err()
        );
    }

    #[test]
    fn plan_uses_service_options() {
        let options = GeneratorOptions {
            include_spec: true,
            ..GeneratorOptions::default()
        };
        let service = GenerateService::new(Box::new(MockFilesystem::new()), options);
        let id = Identifier::parse(Kind::Component, "Widget").unwrap();
        let plan = service
            .plan(Kind::Component, &id, None, &project())
            .unwrap();
        assert!(plan.file(FileRole::Spec).is_some());
    }
}
