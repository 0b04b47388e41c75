//! Redux duck: actions, constants, epics, reducer, selectors.

use super::{GeneratorOptions, RenderContext, conventional_dir, file_name};
use crate::domain::{FileRole, GenerationPlan, Identifier, Kind};

const ACTIONS: &str = r#"import { ACTION_NAME } from './constants';

export const actionName  = () => ({
  type: ACTION_NAME,
});

export type Action = ReturnType<typeof actionName>
"#;

const CONSTANTS: &str = r#"export const ACTION_NAME = '{{PROJECT_NAME}}/{{NAME}}/ACTION_NAME';
"#;

const EPICS: &str = r#"import { /* ofType, */ combineEpics } from 'redux-observable';
import { ignoreElements } from 'rxjs/operators/ignoreElements';

const initial = action$ =>
  action$.pipe(
    ignoreElements()
  );

export default combineEpics(initial);
"#;

const REDUCERS: &str = r#"import { Action } from './actions';
import { ACTION_NAME } from './constants';

export type State = Readonly<{

}>

const initialState: State = {};

const {{NAME}} = (state = initialState, action: Action): State => {
  switch (action.type) {
    case ACTION_NAME:
      return { ...state };
    default:
      return state;
  }
};

export default {{NAME}};
"#;

const SELECTORS: &str = r#"import { createSelector } from 'reselect';

import { State } from './reducers';

const selectState = (state): State => state.{{NAME}};

export const select{{NAME_PASCAL}}State = createSelector([selectState], state => state);
"#;

const SPEC: &str = r#"import {{NAME}} from './reducers';
import { actionName } from './actions';
import { ACTION_NAME } from './constants';

describe('{{NAME}} duck', () => {
  it('creates ACTION_NAME actions', () => {
    expect(actionName()).toEqual({ type: ACTION_NAME });
  });

  it('returns the initial state', () => {
    expect({{NAME}}(undefined, { type: '@@INIT' } as any)).toEqual({});
  });

  it('handles ACTION_NAME', () => {
    expect({{NAME}}({}, actionName())).toEqual({});
  });
});
"#;

/// Files go under `src/ducks/<identifier>/`.
pub(super) fn plan(
    identifier: &Identifier,
    ctx: &RenderContext,
    options: &GeneratorOptions,
) -> GenerationPlan {
    let base_dir = conventional_dir(Kind::Duck, identifier);

    let mut plan = GenerationPlan::new(Kind::Duck, identifier.clone(), base_dir)
        .with_file(FileRole::Actions, file_name("actions"), ctx.render(ACTIONS))
        .with_file(FileRole::Constants, file_name("constants"), ctx.render(CONSTANTS))
        .with_file(FileRole::Epics, file_name("epics"), ctx.render(EPICS))
        .with_file(FileRole::Reducers, file_name("reducers"), ctx.render(REDUCERS))
        .with_file(FileRole::Selectors, file_name("selectors"), ctx.render(SELECTORS));

    if options.include_spec {
        plan = plan.with_file(FileRole::Spec, file_name("reducers.spec"), ctx.render(SPEC));
    }

    plan
}
