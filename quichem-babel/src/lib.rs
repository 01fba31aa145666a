//! Output notations for quichem formulas
//!
//!     This crate renders a parsed formula ([`quichem_core::Ast`]) into the notations chemistry
//!     is written in: HTML, plain Unicode text, LaTeX math, the mhchem package and
//!     reStructuredText. It also carries the tree views used for inspecting a parse, and the
//!     shorthand itself as a format.
//!
//!     This is a pure lib, that is, it powers quichem-cli but is shell agnostic: no code here
//!     should suppose a shell environment, be it std printing, env vars etc.
//!
//! Architecture
//!
//!     The display backends differ only in spelling. The traversal of the AST is written once,
//!     in ./compiler.rs, and every backend is a static table of fragments (./fragment.rs) saying
//!     how each kind of node is spelled and wrapped. A backend is then just data: see
//!     ./formats/html/mod.rs for the fullest one.
//!
//!     Rendering a formula is:
//!
//!         compile     walk the AST, render every node through the backend's fragments
//!         merge       join adjacent sub/superscript spans (./common/merge.rs)
//!         tidy        backend specific textual clean-up, if any
//!         enclose     wrap the whole (`\(`…`\)`, `\ce{`…`}`)
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── fragment.rs             # Backend tables: Template, Fragment, Backend
//!     ├── compiler.rs             # AST traversal and the Renderer
//!     ├── common
//!     │   └── merge.rs            # Span merging
//!     ├── formats
//!     │   ├── <backend>.rs        # One static Backend table each
//!     │   ├── quichem.rs          # The shorthand, parsing and writing
//!     │   ├── repr.rs             # Bracketed tree notation
//!     │   └── treeviz             # Unicode tree view
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── backends            # Byte-exact output of every backend
//!     ├── formats             # The code formats and the registry
//!     └── properties          # proptest invariants over random formulas
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Formats
//!
//!     Format specific capabilities are implemented with the Format trait. See the trait def
//!     [./format.rs]
//!     - Format trait: Uniform interface for all formats (parsing and/or serialization)
//!     - FormatRegistry: Centralized discovery and selection of formats
//!     - Format implementations: Concrete implementations for each supported format
//!
//!     Only the shorthand parses. Everything else serializes.
//!
pub mod common;
pub mod compiler;
pub mod error;
pub mod format;
pub mod formats;
pub mod fragment;
pub mod registry;

pub use compiler::{compile, Renderer};
pub use error::FormatError;
pub use format::{parse_bool, Format};
pub use formats::{BackendFormat, QuichemFormat, ReprFormat, TreevizFormat, TreevizOptions};
pub use fragment::{Backend, Fragment, MergeRule, Template};
pub use registry::FormatRegistry;

/// Parses `source` and renders it with the named format, the common case in one call.
pub fn convert(source: &str, format: &str) -> Result<String, FormatError> {
    let registry = FormatRegistry::default();
    let ast = quichem_core::parse(source)?;
    registry.serialize(&ast, format)
}
