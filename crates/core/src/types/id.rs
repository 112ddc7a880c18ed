//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. IDs are opaque
//! strings; [`IdGenerator`] hands out fresh ones per entity kind.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>` and `Into<String>` implementations
///
/// # Example
///
/// ```rust
/// # use ratannam_core::define_id;
/// define_id!(BannerId);
/// define_id!(ReviewId);
///
/// let banner_id = BannerId::new("banner-1");
/// let review_id = ReviewId::new("review-1");
///
/// // These are different types, so this won't compile:
/// // let _: BannerId = review_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(::std::string::String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<::std::string::String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return the underlying string.
            #[must_use]
            pub fn into_inner(self) -> ::std::string::String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<::std::string::String> for $name {
            fn from(id: ::std::string::String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for ::std::string::String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl ::core::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(ProductId);
define_id!(BannerId);
define_id!(CategoryId);
define_id!(ReviewId);
define_id!(AboutId);
define_id!(ContactId);

/// Hands out unique IDs for one entity kind.
///
/// IDs are `{prefix}-{n}` (or just `{n}` with an empty prefix) where `n`
/// increases monotonically for the lifetime of the generator. Because
/// records may also arrive with IDs the generator never issued (seed data,
/// a catalog loaded from disk), [`IdGenerator::next_id`] takes a collision
/// check and skips any candidate that is already in use.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    prefix: &'static str,
    last: u64,
}

impl IdGenerator {
    /// Create a generator whose first candidate is `{prefix}-1`.
    #[must_use]
    pub const fn new(prefix: &'static str) -> Self {
        Self { prefix, last: 0 }
    }

    /// Create a generator for bare numeric IDs (`1`, `2`, ...).
    #[must_use]
    pub const fn numeric() -> Self {
        Self::new("")
    }

    /// Produce the next ID for which `taken` returns `false`.
    pub fn next_id(&mut self, taken: impl Fn(&str) -> bool) -> String {
        loop {
            self.last = self.last.saturating_add(1);
            let candidate = self.format(self.last);
            if !taken(&candidate) {
                return candidate;
            }
        }
    }

    fn format(&self, n: u64) -> String {
        if self.prefix.is_empty() {
            n.to_string()
        } else {
            format!("{}-{n}", self.prefix)
        }
    }
}
