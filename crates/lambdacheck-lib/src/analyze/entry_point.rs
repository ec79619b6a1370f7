//! Entry points whose argument must be a Lambda handler.

use lambdacheck_core::Object;
use lambdacheck_core::ast::CallExpr;

use crate::oracle::TypeOracle;

/// Package declaring the Lambda entry points.
pub const LAMBDA_PACKAGE: &str = "github.com/aws/aws-lambda-go/lambda";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryPoint {
    pub package: &'static str,
    pub name: &'static str,
    /// Position of the handler among the call's arguments.
    pub handler_index: usize,
}

impl EntryPoint {
    pub const START: Self = Self {
        package: LAMBDA_PACKAGE,
        name: "Start",
        handler_index: 0,
    };

    pub const START_WITH_CONTEXT: Self = Self {
        package: LAMBDA_PACKAGE,
        name: "StartWithContext",
        handler_index: 1,
    };

    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.package, self.name)
    }

    /// Whether `object` is this entry point, ignoring vendoring.
    pub fn matches(&self, object: &Object) -> bool {
        object.name == self.name
            && object
                .package
                .as_deref()
                .is_some_and(|pkg| remove_vendor(pkg) == self.package)
    }
}

pub const ENTRY_POINTS: [EntryPoint; 2] = [EntryPoint::START, EntryPoint::START_WITH_CONTEXT];

/// Classifies a call as an entry point invocation.
///
/// The callee must be a statically known package-level function; methods
/// never qualify, whatever their name.
pub fn classify<O: TypeOracle + ?Sized>(oracle: &O, call: &CallExpr) -> Option<EntryPoint> {
    let callee = oracle.static_callee(call)?;
    let signature = oracle.signature(callee.ty?)?;
    if signature.is_method() {
        return None;
    }
    ENTRY_POINTS.into_iter().find(|ep| ep.matches(callee))
}

/// Strips everything up to and including the last `vendor/` path segment.
pub fn remove_vendor(path: &str) -> &str {
    if let Some(rest) = path.strip_prefix("vendor/") {
        return remove_vendor(rest);
    }
    match path.rfind("/vendor/") {
        Some(i) => &path[i + "/vendor/".len()..],
        None => path,
    }
}
