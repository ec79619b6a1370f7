//! Incremental construction of a [`Program`].
//!
//! Seeds the universe scope (`error`, `any`, basic types) so callers only add
//! what their program declares.

use indexmap::IndexMap;

use crate::ast::File;
use crate::program::{Object, ObjectId, ObjectKind, Program};
use crate::types::{
    BasicKind, ChanDir, Field, InterfaceType, Method, NamedType, Signature, StructType, Type,
    TypeId,
};
use crate::{CONTEXT_PACKAGE, CONTEXT_TYPE, ERROR_TYPE};

#[derive(Debug, Clone)]
pub struct ProgramBuilder {
    program: Program,
    basics: IndexMap<BasicKind, TypeId>,
    packages: IndexMap<String, ObjectId>,
    error: TypeId,
    any: TypeId,
    context: Option<TypeId>,
}

impl Default for ProgramBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgramBuilder {
    pub fn new() -> Self {
        let mut builder = Self {
            program: Program::default(),
            basics: IndexMap::new(),
            packages: IndexMap::new(),
            error: TypeId(0),
            any: TypeId(0),
            context: None,
        };

        let string = builder.basic(BasicKind::String);
        let error_method = builder.signature(&[], &[string]);
        let error_iface = builder.add_type(Type::Interface(InterfaceType {
            methods: vec![Method {
                name: "Error".to_owned(),
                signature: error_method,
                pointer_receiver: false,
            }],
            embeds: Vec::new(),
        }));
        builder.error = builder.named(None, ERROR_TYPE);
        builder.set_underlying(builder.error, error_iface);

        builder.any = builder.add_type(Type::Interface(InterfaceType::default()));
        builder.add_object(Object {
            kind: ObjectKind::TypeName,
            name: "any".to_owned(),
            package: None,
            ty: Some(builder.any),
        });

        builder
    }

    pub fn add_type(&mut self, ty: Type) -> TypeId {
        let id = TypeId(self.program.types.len() as u32);
        self.program.types.push(ty);
        id
    }

    pub fn add_object(&mut self, object: Object) -> ObjectId {
        let id = ObjectId(self.program.objects.len() as u32);
        self.program.objects.push(object);
        id
    }

    pub fn add_file(&mut self, file: File) {
        self.program.files.push(file);
    }

    /// Universe `error` type.
    pub fn error_type(&self) -> TypeId {
        self.error
    }

    /// Universe empty interface.
    pub fn any_type(&self) -> TypeId {
        self.any
    }

    pub fn basic(&mut self, kind: BasicKind) -> TypeId {
        if let Some(&id) = self.basics.get(&kind) {
            return id;
        }
        let id = self.add_type(Type::Basic(kind));
        self.basics.insert(kind, id);
        id
    }

    pub fn signature(&mut self, params: &[TypeId], results: &[TypeId]) -> TypeId {
        self.add_type(Type::Signature(Signature::new(params, results)))
    }

    pub fn variadic_signature(&mut self, params: &[TypeId], results: &[TypeId]) -> TypeId {
        let mut sig = Signature::new(params, results);
        sig.variadic = true;
        self.add_type(Type::Signature(sig))
    }

    pub fn method_signature(
        &mut self,
        recv: TypeId,
        params: &[TypeId],
        results: &[TypeId],
    ) -> TypeId {
        let mut sig = Signature::new(params, results);
        sig.recv = Some(recv);
        self.add_type(Type::Signature(sig))
    }

    pub fn pointer(&mut self, elem: TypeId) -> TypeId {
        self.add_type(Type::Pointer { elem })
    }

    pub fn slice(&mut self, elem: TypeId) -> TypeId {
        self.add_type(Type::Slice { elem })
    }

    pub fn chan(&mut self, dir: ChanDir, elem: TypeId) -> TypeId {
        self.add_type(Type::Chan { dir, elem })
    }

    pub fn struct_type(&mut self, fields: Vec<Field>) -> TypeId {
        self.add_type(Type::Struct(StructType { fields }))
    }

    pub fn interface(&mut self, methods: Vec<Method>, embeds: Vec<TypeId>) -> TypeId {
        self.add_type(Type::Interface(InterfaceType { methods, embeds }))
    }

    /// Declares a named type with an invalid underlying type and registers its
    /// type name. Call [`Self::set_underlying`] once the underlying type exists.
    pub fn named(&mut self, package: Option<&str>, name: &str) -> TypeId {
        let invalid = self.basic(BasicKind::Invalid);
        let id = self.add_type(Type::Named(NamedType {
            package: package.map(str::to_owned),
            name: name.to_owned(),
            underlying: invalid,
            methods: Vec::new(),
        }));
        self.add_object(Object {
            kind: ObjectKind::TypeName,
            name: name.to_owned(),
            package: package.map(str::to_owned),
            ty: Some(id),
        });
        id
    }

    /// Has no effect unless `named` is a named type.
    pub fn set_underlying(&mut self, named: TypeId, underlying: TypeId) {
        if let Some(Type::Named(n)) = self.program.types.get_mut(named.index()) {
            n.underlying = underlying;
        }
    }

    /// Declares a method on `named`; `params` and `results` exclude the receiver.
    pub fn add_method(
        &mut self,
        named: TypeId,
        name: &str,
        params: &[TypeId],
        results: &[TypeId],
        pointer_receiver: bool,
    ) -> TypeId {
        let recv = if pointer_receiver {
            self.pointer(named)
        } else {
            named
        };
        let signature = self.method_signature(recv, params, results);
        if let Some(Type::Named(n)) = self.program.types.get_mut(named.index()) {
            n.methods.push(Method {
                name: name.to_owned(),
                signature,
                pointer_receiver,
            });
        }
        signature
    }

    /// Package-level function object.
    pub fn func(&mut self, package: &str, name: &str, signature: TypeId) -> ObjectId {
        self.add_object(Object {
            kind: ObjectKind::Func,
            name: name.to_owned(),
            package: Some(package.to_owned()),
            ty: Some(signature),
        })
    }

    pub fn var(&mut self, package: &str, name: &str, ty: TypeId) -> ObjectId {
        self.add_object(Object {
            kind: ObjectKind::Var,
            name: name.to_owned(),
            package: Some(package.to_owned()),
            ty: Some(ty),
        })
    }

    /// Package name object for an import of `path`, shared across files.
    pub fn package_name(&mut self, name: &str, path: &str) -> ObjectId {
        if let Some(&id) = self.packages.get(path) {
            return id;
        }
        let id = self.add_object(Object {
            kind: ObjectKind::PackageName,
            name: name.to_owned(),
            package: Some(path.to_owned()),
            ty: None,
        });
        self.packages.insert(path.to_owned(), id);
        id
    }

    /// Declares the standard `context.Context` interface, once.
    pub fn context_type(&mut self) -> TypeId {
        if let Some(id) = self.context {
            return id;
        }

        let error = self.error;
        let any = self.any;
        let boolean = self.basic(BasicKind::Bool);
        let int64 = self.basic(BasicKind::Int64);

        let time = self.named(Some("time"), "Time");
        let wall = self.basic(BasicKind::Uint64);
        let time_struct = self.struct_type(vec![
            Field {
                name: "wall".to_owned(),
                ty: wall,
                embedded: false,
            },
            Field {
                name: "ext".to_owned(),
                ty: int64,
                embedded: false,
            },
        ]);
        self.set_underlying(time, time_struct);

        let empty = self.struct_type(Vec::new());
        let done = self.chan(ChanDir::Recv, empty);

        let deadline_sig = self.signature(&[], &[time, boolean]);
        let done_sig = self.signature(&[], &[done]);
        let err_sig = self.signature(&[], &[error]);
        let value_sig = self.signature(&[any], &[any]);

        let method = |name: &str, signature| Method {
            name: name.to_owned(),
            signature,
            pointer_receiver: false,
        };
        let iface = self.interface(
            vec![
                method("Deadline", deadline_sig),
                method("Done", done_sig),
                method("Err", err_sig),
                method("Value", value_sig),
            ],
            Vec::new(),
        );

        let context = self.named(Some(CONTEXT_PACKAGE), CONTEXT_TYPE);
        self.set_underlying(context, iface);
        self.context = Some(context);
        context
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn finish(self) -> Program {
        self.program
    }
}
