//! Container/presentational component.

use super::{GeneratorOptions, RenderContext, file_name};
use crate::domain::{Destination, FileRole, GenerationPlan, Identifier, Kind};

const TYPES: &str = r#"export interface OwnProps {
  className?: string;
}

export interface StateProps {
  className?: string;
}

export interface DispatchProps {}

export interface Props extends StateProps, DispatchProps {}
"#;

const CONTAINER: &str = r#"import { connect } from 'react-redux';

import {{NAME}} from './{{NAME}}.cmp';

import {
  StateProps,
  DispatchProps,
  OwnProps,
} from './{{NAME}}.typ';

const mapStateToProps = (state, ownProps: OwnProps): StateProps => ({
  className: ownProps.className
});

const mapDispatchToProps = (dispatch): DispatchProps  => ({});

export default connect(mapStateToProps, mapDispatchToProps)({{NAME}});
"#;

const PRESENTATIONAL: &str = r#"import React from 'react';

import { Props } from './{{NAME}}.typ';

const {{NAME}} = ({ className }: Props) => (
  <div className={className || ''} />
);

export default {{NAME}};
"#;

const SPEC: &str = r#"import React from 'react';
import { render } from '@testing-library/react';

import {{NAME}} from './{{NAME}}.cmp';

describe('{{NAME}}', () => {
  it('renders without crashing', () => {
    const { container } = render(<{{NAME}} />);
    expect(container.firstChild).toBeTruthy();
  });

  it('applies the given className', () => {
    const { container } = render(<{{NAME}} className="custom" />);
    expect(container.firstChild).toHaveClass('custom');
  });
});
"#;

const STORY: &str = r#"import React from 'react';
import { storiesOf } from '@storybook/react';

import {{NAME}} from './{{NAME}}.cmp';

storiesOf('{{NAME}}', module)
  .add('default', () => <{{NAME}} />);
"#;

const INDEX: &str = r#"import {{NAME}} from './{{NAME}}.cnt';

export default {{NAME}};
"#;

/// Files go under `<destination>/<Identifier>/`.
pub(super) fn plan(
    kind: Kind,
    identifier: &Identifier,
    destination: &Destination,
    ctx: &RenderContext,
    options: &GeneratorOptions,
) -> GenerationPlan {
    let name = identifier.as_str();
    let base_dir = destination.to_path_buf().join(name);

    let mut plan = GenerationPlan::new(kind, identifier.clone(), base_dir)
        .with_file(FileRole::Types, file_name(&format!("{name}.typ")), ctx.render(TYPES))
        .with_file(FileRole::Container, file_name(&format!("{name}.cnt")), ctx.render(CONTAINER))
        .with_file(
            FileRole::Presentational,
            file_name(&format!("{name}.cmp")),
            ctx.render(PRESENTATIONAL),
        );

    if options.include_spec {
        plan = plan.with_file(FileRole::Spec, file_name(&format!("{name}.spec")), ctx.render(SPEC));
    }
    if options.include_story {
        plan = plan.with_file(
            FileRole::Story,
            file_name(&format!("{name}.stories")),
            ctx.render(STORY),
        );
    }
    if options.include_index {
        plan = plan.with_file(FileRole::Index, file_name("index"), ctx.render(INDEX));
    }

    plan
}
