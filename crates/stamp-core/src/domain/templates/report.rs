//! Grid report: column definitions plus layouts.
//!
//! The templates carry `<DEFAULT_LAYOUT>`, `<columnField>` and `<COLUMN_NAME>`
//! markers for the author to fill in by hand; they are not interpolated.

use super::{conventional_dir, file_name};
use crate::domain::{FileRole, GenerationPlan, Identifier, Kind};

const INDEX: &str = r#"import { getColumns } from './columns';
import { applyLayout } from './layouts';

export const getColumnDefs = (layout: string) => (
  layout ?
  applyLayout(
    layout,
    getColumns()
  ) :
  getColumns()
)
"#;

const COLUMNS: &str = r#"import {
  <COLUMN_NAME>,
} from 'services/agGrid/columns/columns';

const columns = [
  <COLUMN_NAME>,
];

export const getColumns = () => columns;
"#;

const LAYOUTS: &str = r#"import _orderBy from 'lodash/orderBy';

import { <DEFAULT_LAYOUT> } from 'constants/layouts';

const applyDefaultLayout = (columns) => {
  const layoutColumns = columns.map((column) => {
    const layoutColumn = { ...column };
    layoutColumn.orderBy = 0;

    switch (layoutColumn.field) {
      case '<columnField>':
        break;
      default:
        layoutColumn.hide = true;
        break;
    }

    return layoutColumn;
  })

  return _orderBy(layoutColumns, 'orderBy');
}

export const applyLayout = (layout, columns) => {
  switch (layout) {
    case <DEFAULT_LAYOUT>.id: {
      return applyDefaultLayout(columns);
    }
    default: {
      return columns;
    }
  }
};
"#;

/// Files go under `src/services/agGrid/reports/<identifier>/`.
pub(super) fn plan(identifier: &Identifier) -> GenerationPlan {
    let base_dir = conventional_dir(Kind::Report, identifier);

    GenerationPlan::new(Kind::Report, identifier.clone(), base_dir)
        .with_file(FileRole::Index, file_name("index"), INDEX)
        .with_file(FileRole::Columns, file_name("columns"), COLUMNS)
        .with_file(FileRole::Layouts, file_name("layouts"), LAYOUTS)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn sales() -> GenerationPlan {
        plan(&Identifier::parse(Kind::Report, "sales").unwrap())
    }

    #[test]
    fn three_files_under_reports_dir() {
        let plan = sales();
        let base: PathBuf = ["src", "services", "agGrid", "reports", "sales"].iter().collect();
        assert_eq!(plan.base_dir, base);
        let roles: Vec<_> = plan.files.iter().map(|f| f.role).collect();
        assert_eq!(roles, [FileRole::Index, FileRole::Columns, FileRole::Layouts]);
    }

    #[test]
    fn placeholder_tokens_are_verbatim() {
        let plan = sales();
        assert!(plan.file(FileRole::Columns).unwrap().content.contains("<COLUMN_NAME>,"));
        let layouts = &plan.file(FileRole::Layouts).unwrap().content;
        assert!(layouts.contains("import { <DEFAULT_LAYOUT> } from 'constants/layouts';"));
        assert!(layouts.contains("case '<columnField>':"));
    }

    #[test]
    fn content_does_not_depend_on_name() {
        let a = sales();
        let b = plan(&Identifier::parse(Kind::Report, "orders").unwrap());
        assert_eq!(
            a.file(FileRole::Index).unwrap().content,
            b.file(FileRole::Index).unwrap().content
        );
    }

    #[test]
    fn advisory_reminds_constants() {
        assert!(sales().advisory.unwrap().contains("layout constants"));
    }
}
