//! Identifier management using string interning.
//!
//! Every node in a Cumulus graph is identified by an [`Id`]: the display
//! label of the node qualified by the labels of its enclosing clusters,
//! joined with `::`. Interning keeps the ids cheap to copy, hash, and
//! compare while the graph is assembled and laid out.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner backing all identifiers.
///
/// Guarded by a `Mutex`; identifiers themselves are `Copy` symbols.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> &'static Mutex<DefaultStringInterner> {
    INTERNER.get_or_init(|| Mutex::new(DefaultStringInterner::new()))
}

/// An interned identifier for a node or cluster.
///
/// # Examples
///
/// ```
/// use cumulus_core::identifier::Id;
///
/// let db = Id::new("Primary DB");
///
/// // Qualify an identity by its enclosing cluster path.
/// let scoped = Id::new("Data Layer").qualify(db);
/// assert_eq!(scoped, "Data Layer::Primary DB");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Interns `name` and returns its identifier.
    pub fn new(name: &str) -> Self {
        let mut interner = interner().lock().expect("failed to acquire interner lock");
        Self(interner.get_or_intern(name))
    }

    /// Returns the qualified identifier `self::child`.
    ///
    /// Used to derive node identities from their cluster path, so that two
    /// nodes with the same label in different clusters stay distinct.
    pub fn qualify(&self, child: Id) -> Self {
        let mut interner = interner().lock().expect("failed to acquire interner lock");
        let parent = interner
            .resolve(self.0)
            .expect("parent id should exist in interner");
        let child = interner
            .resolve(child.0)
            .expect("child id should exist in interner");
        let qualified = format!("{parent}::{child}");
        let symbol = interner.get_or_intern(&qualified);
        Self(symbol)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = interner().lock().expect("failed to acquire interner lock");
        let value = interner
            .resolve(self.0)
            .expect("symbol should exist in interner");
        write!(f, "{value}")
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "string"`.
    fn eq(&self, other: &str) -> bool {
        let interner = interner().lock().expect("failed to acquire interner lock");
        let value = interner
            .resolve(self.0)
            .expect("symbol should exist in interner");
        value == other
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
