// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Stamp.
//!
//! Pure logic only: naming rules, kinds, project/destination paths, and the
//! template generators that turn an identifier into a [`GenerationPlan`].
//! All filesystem and user-interaction concerns are handled via ports
//! defined in the application layer.
//!
//! - **No I/O**: generators return plans, they never write
//! - **No async**: everything is synchronous
//! - **Immutable values**: all domain objects are Clone + PartialEq

pub mod entities;
pub mod error;
pub mod naming;
pub mod templates;
pub mod value_objects;

pub use entities::{
    plan::{GenerationPlan, GenerationResult, PlannedFile},
    project::{Destination, ProjectContext},
};

pub use error::{DomainError, ErrorCategory};
pub use naming::{Identifier, NameRejection};
pub use templates::{GeneratorOptions, RenderContext};
pub use value_objects::{Casing, FileRole, Kind};

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Cross-module properties
    // ========================================================================

    #[test]
    fn every_kind_rejects_non_letters_before_casing() {
        for kind in Kind::ALL {
            let err = Identifier::parse(kind, "my_thing").unwrap_err();
            assert_eq!(
                err,
                DomainError::InvalidName {
                    name: "my_thing".into(),
                    reason: NameRejection::LettersOnly,
                }
            );
        }
    }

    #[test]
    fn example_names_satisfy_their_casing() {
        for kind in Kind::ALL {
            let example = kind.casing().example();
            assert!(naming::check(kind, example).is_ok(), "{kind}: {example}");
        }
    }

    #[test]
    fn widget_component_layout() {
        let project = ProjectContext::new("/work/shop").unwrap();
        let id = Identifier::parse(Kind::Component, "Widget").unwrap();
        let dest = Destination::new("/src/components/").unwrap();
        let plan = templates::plan(
            Kind::Component,
            &id,
            Some(&dest),
            &project,
            &GeneratorOptions::default(),
        )
        .unwrap();

        let base: std::path::PathBuf = ["src", "components", "Widget"].iter().collect();
        for stem in ["Widget.typ", "Widget.cnt", "Widget.cmp"] {
            let expected = base.join(format!("{stem}.{}", templates::EXTENSION));
            assert!(plan.paths().any(|p| p == expected), "missing {stem}");
        }
    }

    #[test]
    fn duck_action_type_is_namespaced() {
        let project = ProjectContext::new("/srv/apps/storefront").unwrap();
        let id = Identifier::parse(Kind::Duck, "userProfile").unwrap();
        let plan =
            templates::plan(Kind::Duck, &id, None, &project, &GeneratorOptions::default()).unwrap();

        let constants = plan.file(FileRole::Constants).unwrap();
        assert!(
            constants
                .content
                .contains("storefront/userProfile/ACTION_NAME")
        );
    }

    #[test]
    fn domain_error_categories() {
        assert_eq!(
            DomainError::UnknownKind("x".into()).category(),
            ErrorCategory::NotFound
        );
        assert_eq!(
            DomainError::InvalidProjectRoot("/".into()).category(),
            ErrorCategory::Configuration
        );
        let invalid = Identifier::parse(Kind::View, "x1").unwrap_err();
        assert_eq!(invalid.category(), ErrorCategory::Validation);
        assert!(!invalid.suggestions().is_empty());
    }
}
