//! Language-neutral code model of the generated class.
//!
//! The model describes members, statements and expressions structurally. It
//! carries no surface syntax; the renderer decides how each variant is
//! spelled.

use crate::binding::BindableElement;
use crate::config::GeneratorConfig;
use crate::error::ModelError;
use crate::naming::{is_valid_identifier, is_valid_member_name, is_valid_type_name};
use std::collections::HashMap;

/// Name of the document handle field.
pub const DOCUMENT_FIELD: &str = "_document";
/// Name of the root element accessor.
pub const ROOT_PROPERTY: &str = "Root";
/// Name of the initialization method.
pub const INITIALIZE_METHOD: &str = "InitializeDocument";

/// Member names no element may bind to.
pub const RESERVED_MEMBERS: [&str; 3] = [DOCUMENT_FIELD, ROOT_PROPERTY, INITIALIZE_METHOD];

/// Member visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Visible to all code.
    Public,
    /// Visible inside the class only.
    Private,
}

/// Expression tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Reference to a member of the generated class.
    Ident(String),
    /// Member access that yields null when the target is null.
    NullSafeMember {
        /// Object being dereferenced.
        target: Box<Expr>,
        /// Member read from the target.
        member: String,
    },
    /// Runtime lookup of a child element by name.
    Query {
        /// Element searched.
        target: Box<Expr>,
        /// Lookup method.
        method: String,
        /// Identifier searched for.
        key: String,
    },
    /// Explicit conversion to a type.
    Cast {
        /// Target type.
        ty: String,
        /// Converted expression.
        expr: Box<Expr>,
    },
}

/// Statement inside a method body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Assignment to a field of the generated class.
    Assign {
        /// Assigned field.
        target: String,
        /// Assigned value.
        value: Expr,
    },
}

/// Field declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Declared type.
    pub ty: String,
    /// Visibility.
    pub visibility: Visibility,
    /// Whether the field is assigned from outside, e.g. an editor inspector.
    pub serialized: bool,
}

/// Read-only property with a computed getter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Property name.
    pub name: String,
    /// Property type.
    pub ty: String,
    /// Visibility.
    pub visibility: Visibility,
    /// Getter expression.
    pub getter: Expr,
}

/// Parameterless method without a return value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    /// Method name.
    pub name: String,
    /// Visibility.
    pub visibility: Visibility,
    /// Body statements.
    pub body: Vec<Statement>,
}

/// Class member, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Member<'a> {
    /// Field.
    Field(&'a Field),
    /// Property.
    Property(&'a Property),
    /// Method.
    Method(&'a Method),
}

/// Structural description of the generated class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeModel {
    /// Enclosing namespace, if any.
    pub namespace: Option<String>,
    /// Class name.
    pub class_name: String,
    /// Base type the class derives from.
    pub base_type: String,
    /// Externally assigned document handle.
    pub document_handle: Field,
    /// One field per bindable element, in document order.
    pub element_fields: Vec<Field>,
    /// Root element accessor.
    pub root_accessor: Property,
    /// Initialization method; its body pairs 1:1 with `element_fields`.
    pub initialize: Method,
}

impl CodeModel {
    /// Returns the initialization statements.
    #[must_use]
    pub fn initialization_statements(&self) -> &[Statement] {
        &self.initialize.body
    }

    /// Returns every member in emission order: document handle, element
    /// fields, root accessor, initialize method.
    #[must_use]
    pub fn members(&self) -> Vec<Member<'_>> {
        let mut members = Vec::with_capacity(self.element_fields.len() + 3);
        members.push(Member::Field(&self.document_handle));
        members.extend(self.element_fields.iter().map(Member::Field));
        members.push(Member::Property(&self.root_accessor));
        members.push(Member::Method(&self.initialize));
        members
    }
}

/// Builds a [`CodeModel`] from the binding table.
pub struct ModelBuilder<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> ModelBuilder<'a> {
    /// Creates a new model builder.
    #[must_use]
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Builds the code model for `class_name`.
    ///
    /// # Errors
    /// Returns `ModelError` if the class name or a declared type is not a
    /// valid name, or if an element identifier derives an unusable, reserved
    /// or already bound member name.
    pub fn build(
        &self,
        class_name: &str,
        bindings: &[BindableElement],
    ) -> Result<CodeModel, ModelError> {
        // C# forbids members named like their enclosing class.
        if !is_valid_identifier(class_name)
            || RESERVED_MEMBERS.contains(&class_name)
            || bindings.iter().any(|b| b.private_member_name == class_name)
        {
            return Err(ModelError::InvalidClassName {
                name: class_name.to_string(),
            });
        }
        if let Some(namespace) = &self.config.namespace {
            if !is_valid_type_name(namespace) {
                return Err(ModelError::InvalidNamespace {
                    name: namespace.clone(),
                });
            }
        }
        self.validate_fixed_types()?;
        self.validate(bindings)?;

        let element_fields = bindings
            .iter()
            .map(|binding| Field {
                name: binding.private_member_name.clone(),
                ty: binding.declared_type.clone(),
                visibility: Visibility::Private,
                serialized: false,
            })
            .collect();

        let body = bindings
            .iter()
            .map(|binding| self.initialization_statement(binding))
            .collect();

        tracing::debug!(
            class = class_name,
            fields = bindings.len(),
            "built code model"
        );

        Ok(CodeModel {
            namespace: self.config.namespace.clone(),
            class_name: class_name.to_string(),
            base_type: self.config.base_type.clone(),
            document_handle: self.document_handle(),
            element_fields,
            root_accessor: self.root_accessor(),
            initialize: Method {
                name: INITIALIZE_METHOD.to_string(),
                visibility: Visibility::Public,
                body,
            },
        })
    }

    fn document_handle(&self) -> Field {
        Field {
            name: DOCUMENT_FIELD.to_string(),
            ty: self.config.document_type.clone(),
            visibility: Visibility::Private,
            serialized: true,
        }
    }

    fn root_accessor(&self) -> Property {
        Property {
            name: ROOT_PROPERTY.to_string(),
            ty: self.config.root_type.clone(),
            visibility: Visibility::Public,
            getter: Expr::NullSafeMember {
                target: Box::new(Expr::Ident(DOCUMENT_FIELD.to_string())),
                member: self.config.root_member.clone(),
            },
        }
    }

    fn initialization_statement(&self, binding: &BindableElement) -> Statement {
        Statement::Assign {
            target: binding.private_member_name.clone(),
            value: Expr::Cast {
                ty: binding.declared_type.clone(),
                expr: Box::new(Expr::Query {
                    target: Box::new(Expr::Ident(ROOT_PROPERTY.to_string())),
                    method: self.config.query_method.clone(),
                    key: binding.public_identifier.clone(),
                }),
            },
        }
    }

    /// Checks the configured names the fixed members and imports refer to.
    fn validate_fixed_types(&self) -> Result<(), ModelError> {
        let fixed = [
            (&self.config.base_type, "base type"),
            (&self.config.document_type, DOCUMENT_FIELD),
            (&self.config.root_type, ROOT_PROPERTY),
        ];
        for (ty, member) in fixed {
            if !is_valid_type_name(ty) {
                return Err(ModelError::invalid_type(ty, member));
            }
        }

        let references = [
            (&self.config.root_member, "root member"),
            (&self.config.query_method, "query method"),
        ];
        for (name, role) in references {
            if !is_valid_identifier(name) {
                return Err(ModelError::InvalidMemberReference {
                    name: name.clone(),
                    role,
                });
            }
        }

        if let Some(import) = self.config.imports.iter().find(|i| !is_valid_type_name(i)) {
            return Err(ModelError::InvalidNamespace {
                name: import.clone(),
            });
        }
        Ok(())
    }

    /// Checks every binding before anything is built.
    fn validate(&self, bindings: &[BindableElement]) -> Result<(), ModelError> {
        // member name -> identifier that claimed it
        let mut bound: HashMap<&str, &str> = HashMap::with_capacity(bindings.len());

        for binding in bindings {
            let identifier = binding.public_identifier.as_str();
            let member = binding.private_member_name.as_str();

            if !is_valid_type_name(&binding.declared_type) {
                return Err(ModelError::invalid_type(&binding.declared_type, identifier));
            }
            if RESERVED_MEMBERS.contains(&member) {
                return Err(ModelError::reserved(identifier, member));
            }
            if !is_valid_member_name(member) {
                return Err(ModelError::InvalidIdentifier {
                    identifier: identifier.to_string(),
                    member: member.to_string(),
                });
            }
            if bound.insert(member, identifier).is_some() {
                return Err(ModelError::duplicate(identifier, member));
            }
        }

        Ok(())
    }
}
