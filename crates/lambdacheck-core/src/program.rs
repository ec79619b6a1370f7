//! Objects and the program container.

use serde::{Deserialize, Serialize};

use crate::ast::{Expr, ExprKind, File, Ident};
use crate::types::{Type, TypeId};
use crate::visitor::{Visitor, walk_expr};
use crate::{Error, Result};

/// Index into [`Program::objects`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub u32);

impl ObjectId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    Func,
    Var,
    Const,
    TypeName,
    /// An imported package name; `package` holds the imported path.
    PackageName,
}

/// A declared entity an identifier can resolve to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Object {
    pub kind: ObjectKind,
    pub name: String,
    /// Declaring package path; `None` for universe objects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    /// Absent for package names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<TypeId>,
}

/// A fully resolved program: syntax plus type and object tables.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    #[serde(default)]
    pub types: Vec<Type>,
    #[serde(default)]
    pub objects: Vec<Object>,
    #[serde(default)]
    pub files: Vec<File>,
}

impl Program {
    /// Parse and validate a JSON program description.
    pub fn from_json(json: &str) -> Result<Self> {
        let program: Program = serde_json::from_str(json)?;
        program.validate()?;
        Ok(program)
    }

    /// Read, parse and validate a program description file.
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn ty(&self, id: TypeId) -> Option<&Type> {
        self.types.get(id.index())
    }

    pub fn object(&self, id: ObjectId) -> Option<&Object> {
        self.objects.get(id.index())
    }

    /// Finds a type name object by declaring package and name.
    ///
    /// `package = None` searches the universe.
    pub fn lookup_type(&self, package: Option<&str>, name: &str) -> Option<TypeId> {
        self.objects
            .iter()
            .find(|obj| {
                obj.kind == ObjectKind::TypeName
                    && obj.name == name
                    && obj.package.as_deref() == package
            })
            .and_then(|obj| obj.ty)
    }

    /// Checks that every type and object reference resolves.
    ///
    /// Analysis passes rely on this: a validated program never yields a
    /// dangling id.
    pub fn validate(&self) -> Result<()> {
        for (i, ty) in self.types.iter().enumerate() {
            let context = format!("type #{i}");
            for referenced in type_refs(ty) {
                self.check_type(referenced, &context)?;
            }
        }

        for (i, obj) in self.objects.iter().enumerate() {
            if let Some(ty) = obj.ty {
                self.check_type(ty, &format!("object #{i} `{}`", obj.name))?;
            }
        }

        let mut checker = ReferenceChecker {
            program: self,
            path: "",
            error: None,
        };
        for file in &self.files {
            checker.path = &file.path;
            checker.visit_file(file);
            if let Some(err) = checker.error.take() {
                return Err(err);
            }
        }
        Ok(())
    }

    fn check_type(&self, id: TypeId, context: &str) -> Result<()> {
        if self.ty(id).is_none() {
            return Err(Error::DanglingType {
                id: id.0,
                context: context.to_owned(),
            });
        }
        Ok(())
    }
}

/// Type ids directly referenced by `ty`.
fn type_refs(ty: &Type) -> Vec<TypeId> {
    match ty {
        Type::Basic(_) => Vec::new(),
        Type::Named(named) => std::iter::once(named.underlying)
            .chain(named.methods.iter().map(|m| m.signature))
            .collect(),
        Type::Pointer { elem }
        | Type::Slice { elem }
        | Type::Array { elem, .. }
        | Type::Chan { elem, .. } => vec![*elem],
        Type::Map { key, value } => vec![*key, *value],
        Type::Struct(st) => st.fields.iter().map(|f| f.ty).collect(),
        Type::Interface(iface) => iface
            .methods
            .iter()
            .map(|m| m.signature)
            .chain(iface.embeds.iter().copied())
            .collect(),
        Type::Signature(sig) => sig
            .recv
            .iter()
            .chain(&sig.params)
            .chain(&sig.results)
            .copied()
            .collect(),
    }
}

struct ReferenceChecker<'p> {
    program: &'p Program,
    path: &'p str,
    error: Option<Error>,
}

impl ReferenceChecker<'_> {
    fn check_type(&mut self, id: TypeId, what: impl FnOnce() -> String) {
        if self.error.is_none() && self.program.ty(id).is_none() {
            self.error = Some(Error::DanglingType {
                id: id.0,
                context: format!("{} in {}", what(), self.path),
            });
        }
    }

    fn check_object(&mut self, id: ObjectId, what: impl FnOnce() -> String) {
        if self.error.is_none() && self.program.object(id).is_none() {
            self.error = Some(Error::DanglingObject {
                id: id.0,
                context: format!("{} in {}", what(), self.path),
            });
        }
    }
}

impl Visitor for ReferenceChecker<'_> {
    fn visit_expr(&mut self, expr: &Expr) {
        if let Some(ty) = expr.ty {
            self.check_type(ty, || format!("expression at offset {}", expr.span.start));
        }
        if let ExprKind::Ident { name, obj: Some(obj) } = &expr.kind {
            self.check_object(*obj, || format!("identifier `{name}`"));
        }
        walk_expr(self, expr);
    }

    fn visit_ident(&mut self, ident: &Ident) {
        if let Some(obj) = ident.obj {
            self.check_object(obj, || format!("identifier `{}`", ident.name));
        }
    }
}
