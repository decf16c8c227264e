//! Declaration collection and cross-page link resolution.
//!
//! A planner definition runs in two passes. The declare pass executes the
//! definition against a [`Collector`], recording pages, groups, and outline
//! entries without rendering anything. Once the full declaration list is
//! known, a [`LinkRegistry`] is built from it and frozen; every page is then
//! rendered with a [`LinkResolver`] scoped to its own type and parameters,
//! so pages can reference destinations that were declared after them.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("Group '{0}' cannot be declared inside group '{1}'.")]
    NestedGroup(String, String),
    #[error("Generic composition error: {0}")]
    Generic(String),
}

pub mod collector;
pub mod declare;
pub mod registry;
pub mod resolver;

pub use self::collector::{Collector, GroupOptions, PageTitleSource, SectionDest};
pub use self::declare::{
    Declarations, GroupDeclaration, OutlineNode, OutlineRequest, PageDeclaration, PageSpec,
};
pub use self::registry::{DestinationInfo, LinkRegistry};
pub use self::resolver::LinkResolver;
