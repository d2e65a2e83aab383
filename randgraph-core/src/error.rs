//! Error types for the randgraph core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced when an externally supplied edge list violates the
/// [`crate::GraphModel`] invariants.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphModelError {
    /// An edge joined a node to itself.
    #[error("edge {index} is a self-loop on node {node}")]
    SelfLoop {
        /// Position of the offending edge in the input.
        index: usize,
        /// The node the edge loops on.
        node: usize,
    },
    /// An edge referenced a node outside `0..node_count`.
    #[error("edge {index} references node {node} but the graph has {node_count} nodes")]
    NodeOutOfRange {
        /// Position of the offending edge in the input.
        index: usize,
        /// The out-of-range endpoint.
        node: usize,
        /// Number of nodes in the graph under construction.
        node_count: usize,
    },
    /// The same unordered pair appeared more than once.
    #[error("edge {index} duplicates the pair ({source_node}, {target_node})")]
    DuplicateEdge {
        /// Position of the repeated edge in the input.
        index: usize,
        /// Smaller endpoint of the repeated pair.
        source_node: usize,
        /// Larger endpoint of the repeated pair.
        target_node: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphModelError`] variants.
    enum GraphModelErrorCode for GraphModelError {
        /// An edge joined a node to itself.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// An edge referenced a node outside the graph.
        NodeOutOfRange => NodeOutOfRange { .. } => "GRAPH_NODE_OUT_OF_RANGE",
        /// The same unordered pair appeared more than once.
        DuplicateEdge => DuplicateEdge { .. } => "GRAPH_DUPLICATE_EDGE",
    }
}

/// Error type produced when generating graphs or configuring generation.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum RandGraphError {
    /// A parameter was out of range or inconsistent with another parameter.
    #[error("invalid parameter `{parameter}`: {reason}")]
    InvalidParameter {
        /// Name of the rejected parameter as the user knows it.
        parameter: &'static str,
        /// Human-readable explanation of the constraint that failed.
        reason: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`RandGraphError`] variants.
    enum RandGraphErrorCode for RandGraphError {
        /// A parameter was out of range or inconsistent.
        InvalidParameter => InvalidParameter { .. } => "RANDGRAPH_INVALID_PARAMETER",
    }
}

impl RandGraphError {
    /// Shorthand for building [`RandGraphError::InvalidParameter`].
    pub(crate) fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            reason: reason.into(),
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, RandGraphError>;
