//! Compilation unit API.
//!
//! A [`Unit`] collects the declarations of one model, then [`build`](Unit::build)
//! runs the declaration and resolution passes over them and reports every
//! diagnostic together.
//!
//! # Example
//!
//! ```
//! use biprog::{Node, Span, Ty, Unit};
//! use bumpalo::Bump;
//!
//! let arena = Bump::new();
//! let mut unit = Unit::new(&arena);
//! let b = unit.builder();
//! let s = Span::default();
//!
//! // function half(x:Real) {x}
//! let x = b.param("x", b.type_ref(Ty::Real, s), s);
//! let params = b.list(&[Node::from(x)], s);
//! let body = b.block(&[b.name_ref("x", s)], s);
//! unit.add_function("half", Some(params.into()), Some(body.into()), s)?;
//!
//! let output = unit.build()?;
//! assert!(output.diagnostics.is_empty());
//! # Ok::<(), biprog::BiprogError>(())
//! ```

use bumpalo::Bump;
use log::{debug, warn};

use biprog_ast::{AstBuilder, Dim, FunctionOverload, Item, MethodOverload, Node};
use biprog_core::{BiprogError, Diagnostics, Span, StructureError, UnitOptions};
use biprog_resolve::{DeclarationPass, ResolutionPass, Scope, TypeDump};

/// The declarations of one model, ready to build.
///
/// Nodes live in the borrowed arena; the unit itself only records the
/// top-level items in the order they were added.
pub struct Unit<'ast> {
    builder: AstBuilder<'ast>,
    options: UnitOptions,
    items: Vec<Item<'ast>>,
    /// First construction failure; it fails the build.
    fatal: Option<StructureError>,
}

/// Result of a build that got past construction.
#[derive(Debug)]
pub struct BuildOutput<'ast> {
    /// The populated global scope.
    pub scope: Scope<'ast>,
    /// The items with every use site resolved, in the order they were added.
    pub items: Vec<Item<'ast>>,
    /// Declaration and resolution errors, in the order they were found.
    pub diagnostics: Diagnostics,
    /// Type dump of the resolved items, when [`UnitProperty::DumpTypes`] is set.
    ///
    /// [`UnitProperty::DumpTypes`]: biprog_core::UnitProperty::DumpTypes
    pub dump: Option<String>,
}

impl BuildOutput<'_> {
    /// Whether the build found no problems.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// The output if it is clean, otherwise its diagnostics.
    pub fn check(self) -> Result<Self, Diagnostics> {
        if self.is_clean() {
            Ok(self)
        } else {
            Err(self.diagnostics)
        }
    }
}

impl<'ast> Unit<'ast> {
    /// Create a unit with default options.
    pub fn new(arena: &'ast Bump) -> Self {
        Self::with_options(arena, UnitOptions::default())
    }

    pub fn with_options(arena: &'ast Bump, options: UnitOptions) -> Self {
        Self {
            builder: AstBuilder::new(arena),
            options,
            items: Vec::new(),
            fatal: None,
        }
    }

    /// Constructors for the unit's arena.
    pub fn builder(&self) -> AstBuilder<'ast> {
        self.builder
    }

    pub fn options(&self) -> &UnitOptions {
        &self.options
    }

    pub fn items(&self) -> &[Item<'ast>] {
        &self.items
    }

    /// Add an already-built item.
    pub fn add(&mut self, item: Item<'ast>) {
        debug!("unit: added {item}");
        self.items.push(item);
    }

    /// Build and add `dim name[extent]`.
    pub fn add_dim(
        &mut self,
        name: &str,
        extent: Option<Node<'ast>>,
        span: Span,
    ) -> Result<&'ast Dim<'ast>, StructureError> {
        let dim = self.builder.dim(name, extent, span);
        let dim = self.record(dim)?;
        self.add(Item::Dim(dim));
        Ok(dim)
    }

    /// Build and add a function overload.
    pub fn add_function(
        &mut self,
        name: &str,
        params: Option<Node<'ast>>,
        body: Option<Node<'ast>>,
        span: Span,
    ) -> Result<&'ast FunctionOverload<'ast>, StructureError> {
        let overload = self.builder.function_overload(name, params, body, span);
        let overload = self.record(overload)?;
        self.add(Item::Function(overload));
        Ok(overload)
    }

    /// Build and add a method overload declared inside `receiver`.
    pub fn add_method(
        &mut self,
        receiver: &str,
        name: &str,
        params: Option<Node<'ast>>,
        body: Option<Node<'ast>>,
        span: Span,
    ) -> Result<&'ast MethodOverload<'ast>, StructureError> {
        let overload = self.builder.method_overload(name, params, body, span);
        let overload = self.record(overload)?;
        self.add(Item::Method {
            receiver: self.builder.ident(receiver),
            overload,
        });
        Ok(overload)
    }

    /// Remember the first construction failure.
    fn record<T>(&mut self, built: Result<T, StructureError>) -> Result<T, StructureError> {
        built.inspect_err(|err| {
            warn!("unit: {err}");
            self.fatal.get_or_insert_with(|| err.clone());
        })
    }

    /// Run both passes.
    ///
    /// # Errors
    ///
    /// Fails with the first [`StructureError`] if any construction failed;
    /// no pass runs in that case. Declaration and resolution errors do not
    /// fail the build; they are returned in [`BuildOutput::diagnostics`].
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn build(self) -> Result<BuildOutput<'ast>, BiprogError> {
        if let Some(fatal) = self.fatal {
            return Err(fatal.into());
        }

        let mut scope = Scope::new();
        let declared = DeclarationPass::new(&mut scope, &self.options).run(&self.items);
        let resolved = ResolutionPass::new(self.builder.arena(), &scope).run(&self.items);

        let mut diagnostics = Diagnostics::with_limit(self.options.max_diagnostics());
        diagnostics.extend(declared.errors);
        diagnostics.extend(resolved.errors);
        if diagnostics.dropped() > 0 {
            warn!(
                "unit: {} diagnostics dropped over the limit of {}",
                diagnostics.dropped(),
                self.options.max_diagnostics()
            );
        }

        let dump = self
            .options
            .dump_types()
            .then(|| TypeDump::items(&resolved.items));
        debug!(
            "unit: built {} items with {} diagnostics",
            resolved.items.len(),
            diagnostics.len()
        );

        Ok(BuildOutput {
            scope,
            items: resolved.items,
            diagnostics,
            dump,
        })
    }
}
