//! Binds the feature files to the resolution fixture.

use crate::fixtures::{ResolutionContext, resolution_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/resolution.feature",
    fixtures = [resolution_context: ResolutionContext]
);
scenarios!(
    "tests/features/errors.feature",
    fixtures = [resolution_context: ResolutionContext]
);
scenarios!(
    "tests/features/help.feature",
    fixtures = [resolution_context: ResolutionContext]
);
